// src/core/commands/selection/select.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_uuid, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{Region, RegionType};
use crate::core::state::ExecutionContext;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// The pseudo region type that clears instead of creating.
pub const CLEAR: &str = "clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    Create(RegionType),
    Clear,
}

/// `s|<type>[|<uuid>]`: starts a new empty region, or clears one.
///
/// Without an id the primary selection is targeted. With an id the keyed region is
/// created (and made active) or, for `clear`, removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub action: SelectionAction,
    pub id: Option<Uuid>,
}

impl ParseCommand for Selection {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        let action = if args[0] == CLEAR {
            SelectionAction::Clear
        } else {
            RegionType::from_str(&args[0])
                .map(SelectionAction::Create)
                .map_err(|_| CuiError::InvalidRegionType(args[0].clone()))?
        };
        let id = args.get(1).map(|arg| parse_uuid(arg)).transpose()?;
        Ok(Selection { action, id })
    }
}

impl ExecutableCommand for Selection {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        match (self.action, self.id) {
            (SelectionAction::Clear, None) => {
                debug!("Clearing primary selection");
                ctx.store.clear_selection();
            }
            (SelectionAction::Clear, Some(id)) => {
                debug!("Removing region {id}");
                ctx.store.set_selection(Some(id), None);
            }
            (SelectionAction::Create(region_type), id) => {
                debug!("New {region_type} selection (id: {id:?})");
                ctx.store.set_selection(id, Some(Region::new(region_type)));
            }
        }
        Ok(None)
    }
}

impl CommandSpec for Selection {
    const NAME: &'static str = "s";
    const ARITY: Arity = Arity::new(1, 2);
    const FLAGS: CommandFlags = CommandFlags::CREATES_REGION;
}
