// src/core/commands/points/ellipsoid.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_block_pos, parse_double, parse_int, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{BlockPos, Shape, Vector3};
use crate::core::state::ExecutionContext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EllipsoidValue {
    Centre(BlockPos),
    Radii(Vector3),
}

/// `e|0|x|y|z` sets the centre, `e|1|rx|ry|rz` the radii of an ellipsoid.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipsoidPoint {
    pub value: EllipsoidValue,
}

impl ParseCommand for EllipsoidPoint {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        let value = match parse_int(&args[0])? {
            0 => EllipsoidValue::Centre(parse_block_pos(&args[1..])?),
            1 => EllipsoidValue::Radii(Vector3::new(
                parse_double(&args[1])?,
                parse_double(&args[2])?,
                parse_double(&args[3])?,
            )),
            index => {
                return Err(CuiError::InvalidPointIndex {
                    shape: "ellipsoid",
                    index,
                });
            }
        };
        Ok(EllipsoidPoint { value })
    }
}

impl ExecutableCommand for EllipsoidPoint {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        let shape = target.region_type().name();
        let Shape::Ellipsoid(ellipsoid) = target.shape_mut() else {
            return Err(CuiError::ShapeMismatch {
                command: Self::NAME,
                shape,
            });
        };
        match self.value {
            EllipsoidValue::Centre(centre) => ellipsoid.set_centre(centre),
            EllipsoidValue::Radii(radii) => ellipsoid.set_radii(radii)?,
        }
        Ok(None)
    }
}

impl CommandSpec for EllipsoidPoint {
    const NAME: &'static str = "e";
    const ARITY: Arity = Arity::exactly(4);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
