// src/core/commands/points/bounds.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_int, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::Shape;
use crate::core::state::ExecutionContext;

/// `mm|<min>|<max>`: vertical bounds of a polygon or cylinder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl ParseCommand for Bounds {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(Bounds {
            min: parse_int(&args[0])?,
            max: parse_int(&args[1])?,
        })
    }
}

impl ExecutableCommand for Bounds {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        let shape = target.region_type().name();
        match target.shape_mut() {
            Shape::Polygon(polygon) => polygon.set_min_max(self.min, self.max),
            Shape::Cylinder(cylinder) => cylinder.set_min_max(self.min, self.max),
            _ => {
                return Err(CuiError::ShapeMismatch {
                    command: Self::NAME,
                    shape,
                });
            }
        }
        Ok(None)
    }
}

impl CommandSpec for Bounds {
    const NAME: &'static str = "mm";
    const ARITY: Arity = Arity::exactly(2);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
