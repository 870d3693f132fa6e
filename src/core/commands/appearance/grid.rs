// src/core/commands/appearance/grid.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_double, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::state::ExecutionContext;

/// The optional second field enabling grid culling.
pub const CULL: &str = "cull";

/// `grid|<spacing>[|cull]`: grid spacing of the target region.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub spacing: f64,
    pub cull: bool,
}

impl ParseCommand for Grid {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(Grid {
            spacing: parse_double(&args[0])?,
            cull: args.get(1).is_some_and(|arg| arg == CULL),
        })
    }
}

impl ExecutableCommand for Grid {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        ctx.target_mut()?.set_grid(self.spacing, self.cull)?;
        Ok(None)
    }
}

impl CommandSpec for Grid {
    const NAME: &'static str = "grid";
    const ARITY: Arity = Arity::new(1, 2);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::STYLE);
}
