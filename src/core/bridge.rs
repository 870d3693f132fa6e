// src/core/bridge.rs

//! The seam between the core and its host: everything the core sends leaves
//! through an `Outbound` implementation.

use crate::core::CuiError;

/// A sink for traffic the core originates.
pub trait Outbound {
    /// Sends a CUI payload to the server on the plugin channel.
    fn send_cui(&mut self, payload: &str) -> Result<(), CuiError>;

    /// Sends a chat line (a command such as `/we cui`) as the player.
    fn send_chat(&mut self, line: &str) -> Result<(), CuiError>;
}

/// Keeps outbound traffic in memory, in send order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingOutbound {
    pub cui: Vec<String>,
    pub chat: Vec<String>,
}

impl RecordingOutbound {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Outbound for RecordingOutbound {
    fn send_cui(&mut self, payload: &str) -> Result<(), CuiError> {
        self.cui.push(payload.to_string());
        Ok(())
    }

    fn send_chat(&mut self, line: &str) -> Result<(), CuiError> {
        self.chat.push(line.to_string());
        Ok(())
    }
}
