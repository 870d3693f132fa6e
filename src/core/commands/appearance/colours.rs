// src/core/commands/appearance/colours.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::validate_arg_count;
use crate::core::errors::Arity;
use crate::core::region::{CustomColours, StyleRole};
use crate::core::state::ExecutionContext;
use crate::core::style::Colour;
use tracing::debug;

/// `col|<edge>|<grid>|<first>|<second>`: per-region colours sent by the server.
///
/// A value that is not a valid hex colour keeps whatever the region currently
/// draws that role with.
#[derive(Debug, Clone, PartialEq)]
pub struct Colours {
    pub edge: Option<Colour>,
    pub grid: Option<Colour>,
    pub first_point: Option<Colour>,
    pub second_point: Option<Colour>,
}

impl ParseCommand for Colours {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        let colour = |arg: &String| {
            Colour::new(arg)
                .inspect_err(|e| debug!("Ignoring region colour: {e}"))
                .ok()
        };
        Ok(Colours {
            edge: colour(&args[0]),
            grid: colour(&args[1]),
            first_point: colour(&args[2]),
            second_point: colour(&args[3]),
        })
    }
}

impl ExecutableCommand for Colours {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let options = ctx.options;
        let target = ctx.target_mut()?;
        let resolve = |value: &Option<Colour>, role: StyleRole| {
            value.clone().unwrap_or_else(|| target.colour(role, options))
        };
        let colours = CustomColours {
            edge: resolve(&self.edge, StyleRole::Edge),
            grid: resolve(&self.grid, StyleRole::Grid),
            first_point: resolve(&self.first_point, StyleRole::FirstPoint),
            second_point: resolve(&self.second_point, StyleRole::SecondPoint),
        };
        target.set_custom_colours(colours);
        Ok(None)
    }
}

impl CommandSpec for Colours {
    const NAME: &'static str = "col";
    const ARITY: Arity = Arity::exactly(4);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::STYLE);
}
