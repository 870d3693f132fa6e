// src/core/commands/selection/update.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_long, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::state::ExecutionContext;

/// `u|<volume>`: the server's reported volume for the target region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub volume: i64,
}

impl ParseCommand for Update {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(Update {
            volume: parse_long(&args[0])?,
        })
    }
}

impl ExecutableCommand for Update {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        ctx.target_mut()?.set_volume(self.volume);
        Ok(None)
    }
}

impl CommandSpec for Update {
    const NAME: &'static str = "u";
    const ARITY: Arity = Arity::exactly(1);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET;
}
