// src/core/commands/selection/cuboid.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_block_pos, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{BlockPos, RegionType, Shape};
use crate::core::state::ExecutionContext;

/// `cuboid|p1|x|y|z` / `cuboid|p2|x|y|z`: shorthand that turns the target into a
/// cuboid if it is not one already, then sets a corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuboidCorner {
    pub index: i32,
    pub pos: BlockPos,
}

impl ParseCommand for CuboidCorner {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        let index = match args[0].as_str() {
            "p1" => 0,
            "p2" => 1,
            other => return Err(CuiError::InvalidCorner(other.to_string())),
        };
        Ok(CuboidCorner {
            index,
            pos: parse_block_pos(&args[1..])?,
        })
    }
}

impl ExecutableCommand for CuboidCorner {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        if target.region_type() != RegionType::Cuboid {
            *target.shape_mut() = Shape::empty(RegionType::Cuboid);
        }
        if let Shape::Cuboid(cuboid) = target.shape_mut() {
            cuboid.set_point(self.index, self.pos)?;
        }
        Ok(None)
    }
}

impl CommandSpec for CuboidCorner {
    const NAME: &'static str = "cuboid";
    const ARITY: Arity = Arity::exactly(4);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
