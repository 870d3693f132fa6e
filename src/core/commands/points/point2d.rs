// src/core/commands/points/point2d.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_int, parse_long, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{Shape, Vector2};
use crate::core::state::ExecutionContext;

/// `p2|<idx>|<x>|<z>|<area>[|<legacy>]`: a vertex of a polygon region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point2D {
    pub index: i32,
    pub point: Vector2,
    pub area: i64,
}

impl ParseCommand for Point2D {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(Point2D {
            index: parse_int(&args[0])?,
            point: Vector2::new(parse_int(&args[1])?, parse_int(&args[2])?),
            area: parse_long(&args[3])?,
        })
    }
}

impl ExecutableCommand for Point2D {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        let shape = target.region_type().name();
        let Shape::Polygon(polygon) = target.shape_mut() else {
            return Err(CuiError::ShapeMismatch {
                command: Self::NAME,
                shape,
            });
        };
        polygon.set_point(self.index, self.point)?;
        target.set_volume(self.area);
        Ok(None)
    }
}

impl CommandSpec for Point2D {
    const NAME: &'static str = "p2";
    const ARITY: Arity = Arity::new(4, 5);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
