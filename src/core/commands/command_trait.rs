// src/core/commands/command_trait.rs

//! Defines the core traits for all executable commands.

use crate::core::CuiError;
use crate::core::state::ExecutionContext;
use bitflags::bitflags;

bitflags! {
    /// Flags that describe the properties and behavior of a command.
    /// The dispatcher uses them to reject commands before they run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CommandFlags: u32 {
        /// The command creates, replaces, or removes a region.
        const CREATES_REGION = 1 << 0;
        /// The command mutates an existing target region.
        const REQUIRES_TARGET = 1 << 1;
        /// The command changes geometry (points, radii, bounds, faces).
        const GEOMETRY       = 1 << 2;
        /// The command only changes presentation (colours, grid).
        const STYLE          = 1 << 3;
    }
}

/// A trait for the actual execution logic of a command.
/// Implemented by each command's struct (e.g., `Point`, `Grid`).
pub trait ExecutableCommand {
    /// Applies the command to the store. Returns a reply payload for the server,
    /// which none of the current vocabulary produces.
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError>;
}

/// A trait for parsing a command's positional arguments.
pub trait ParseCommand: Sized {
    /// Parses the arguments and returns an instance of the command struct.
    /// Must not touch any state; a failure here leaves the store untouched.
    fn parse(args: &[String]) -> Result<Self, CuiError>;
}
