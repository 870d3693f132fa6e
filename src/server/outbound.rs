// src/server/outbound.rs

use crate::core::CuiError;
use crate::core::bridge::Outbound;
use std::collections::VecDeque;
use std::fmt;

/// One line the bridge writes to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundLine {
    /// A CUI payload for the server, written as `cui> <payload>`.
    Cui(String),
    /// A chat line sent as the player, written as `chat> <line>`.
    Chat(String),
    /// Diagnostic output of `@dump`, written as `state> <line>`.
    State(String),
}

impl fmt::Display for OutboundLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutboundLine::Cui(payload) => write!(f, "cui> {payload}"),
            OutboundLine::Chat(line) => write!(f, "chat> {line}"),
            OutboundLine::State(line) => write!(f, "state> {line}"),
        }
    }
}

/// Buffers outbound lines until the event loop flushes them to the writer.
#[derive(Debug, Default)]
pub struct QueuedOutbound {
    lines: VecDeque<OutboundLine>,
}

impl QueuedOutbound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: OutboundLine) {
        self.lines.push_back(line);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = OutboundLine> + '_ {
        self.lines.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Outbound for QueuedOutbound {
    fn send_cui(&mut self, payload: &str) -> Result<(), CuiError> {
        self.push(OutboundLine::Cui(payload.to_string()));
        Ok(())
    }

    fn send_chat(&mut self, line: &str) -> Result<(), CuiError> {
        self.push(OutboundLine::Chat(line.to_string()));
        Ok(())
    }
}
