// src/core/commands/points/cylinder.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_block_pos, parse_double, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{BlockPos, Shape};
use crate::core::state::ExecutionContext;

/// `cyl|x|y|z|rx|rz`: centre and horizontal radii of a cylinder.
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderPoint {
    pub centre: BlockPos,
    pub radius_x: f64,
    pub radius_z: f64,
}

impl ParseCommand for CylinderPoint {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(CylinderPoint {
            centre: parse_block_pos(&args[0..3])?,
            radius_x: parse_double(&args[3])?,
            radius_z: parse_double(&args[4])?,
        })
    }
}

impl ExecutableCommand for CylinderPoint {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        let shape = target.region_type().name();
        let Shape::Cylinder(cylinder) = target.shape_mut() else {
            return Err(CuiError::ShapeMismatch {
                command: Self::NAME,
                shape,
            });
        };
        // Radii are validated first so a rejected message leaves the centre alone.
        cylinder.set_radii(self.radius_x, self.radius_z)?;
        cylinder.set_centre(self.centre);
        Ok(None)
    }
}

impl CommandSpec for CylinderPoint {
    const NAME: &'static str = "cyl";
    const ARITY: Arity = Arity::exactly(5);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
