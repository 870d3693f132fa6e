// src/core/handler/dispatcher.rs

//! The central component for turning inbound payloads into state changes.
//!
//! The `EventDispatcher` resolves a tokenized message against the command table,
//! parses its arguments into a typed command, checks that the command has a target,
//! and only then executes it. Every step before execution is side-effect free, so a
//! rejected message leaves the store exactly as it was.

use crate::core::CuiError;
use crate::core::commands::command_trait::CommandFlags;
use crate::core::commands::{Command, CommandType};
use crate::core::options::OptionTable;
use crate::core::protocol::CuiMessage;
use crate::core::state::{ExecutionContext, SelectionStore};
use tracing::{debug, info_span};

/// Routes protocol messages to their command handlers.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventDispatcher;

impl EventDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Resolves and parses a message without touching any state.
    pub fn resolve(&self, message: &CuiMessage) -> Result<Command, CuiError> {
        let command_type = CommandType::lookup(&message.name)
            .ok_or_else(|| CuiError::UnknownCommand(message.name.clone()))?;
        command_type.parse(&message.args)
    }

    /// Applies one message to the store. Returns the handler's reply, if any.
    pub fn raise(
        &self,
        message: &CuiMessage,
        store: &mut SelectionStore,
        options: &OptionTable,
    ) -> Result<Option<String>, CuiError> {
        let span = info_span!("cui_command", name = %message.name, multi = message.multi);
        let _guard = span.enter();

        // --- MESSAGE PROCESSING PIPELINE ---
        // 1. Resolution and parsing: unknown tags, wrong arity, and malformed
        //    arguments are all rejected here.
        let command = self.resolve(message)?;

        // 2. Target check: a multi-region message needs an active region.
        check_target(&command, store, message.multi)?;
        // --- END OF PIPELINE ---

        debug!(args = ?message.args, "Executing");
        let mut ctx = ExecutionContext::new(store, options, message.multi);
        command.execute(&mut ctx)
    }
}

fn check_target(command: &Command, store: &SelectionStore, multi: bool) -> Result<(), CuiError> {
    if multi
        && command.flags().contains(CommandFlags::REQUIRES_TARGET)
        && store.active_id().is_none()
    {
        return Err(CuiError::NoActiveRegion);
    }
    Ok(())
}
