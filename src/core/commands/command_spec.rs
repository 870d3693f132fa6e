// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which provides static metadata about a command.
//! The dispatcher and the generated `CommandType` table read it before any argument
//! is parsed.

use crate::core::commands::command_trait::CommandFlags;
use crate::core::errors::Arity;

/// Describes a command's wire name, accepted parameter count, and flags.
pub trait CommandSpec {
    /// The wire tag, matched case-sensitively.
    const NAME: &'static str;

    /// The accepted number of parameters, not counting the tag itself.
    const ARITY: Arity;

    /// A bitmask of flags describing the command's behavior.
    const FLAGS: CommandFlags;
}
