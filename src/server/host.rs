// src/server/host.rs

//! Host events: the lines on stdin that start with `@` and stand in for what a game
//! client would report (joining, world changes, pauses, key presses).

use crate::core::handshake::Identity;
use std::str::FromStr;
use thiserror::Error;

/// Marks a stdin line as a host event rather than a CUI payload.
pub const HOST_EVENT_PREFIX: u8 = b'@';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBinding {
    /// Toggle overlay visibility.
    Toggle,
    /// Clear the selection.
    Clear,
    /// Toggle the chunk border overlay.
    Chunk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Join,
    Leave,
    World(Identity),
    Player(Identity),
    Pause,
    Resume,
    Key(KeyBinding),
    Save,
    Dump,
    /// Replaces the active log filter.
    Log(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostEventError {
    #[error("host events must start with '@'")]
    MissingPrefix,
    #[error("unknown host event '@{0}'")]
    Unknown(String),
    #[error("host event '@{0}' requires an argument")]
    MissingArgument(&'static str),
    #[error("unknown key binding '{0}'")]
    UnknownKey(String),
}

impl FromStr for HostEvent {
    type Err = HostEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let body = line
            .strip_prefix(char::from(HOST_EVENT_PREFIX))
            .ok_or(HostEventError::MissingPrefix)?;
        let (name, arg) = match body.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
            None => (body, None),
        };

        let required = |event: &'static str| arg.ok_or(HostEventError::MissingArgument(event));

        Ok(match name {
            "join" => HostEvent::Join,
            "leave" => HostEvent::Leave,
            "world" => HostEvent::World(Identity::new(required("world")?)),
            "player" => HostEvent::Player(Identity::new(required("player")?)),
            "pause" => HostEvent::Pause,
            "resume" => HostEvent::Resume,
            "key" => HostEvent::Key(match required("key")? {
                "toggle" => KeyBinding::Toggle,
                "clear" => KeyBinding::Clear,
                "chunk" => KeyBinding::Chunk,
                other => return Err(HostEventError::UnknownKey(other.to_string())),
            }),
            "save" => HostEvent::Save,
            "dump" => HostEvent::Dump,
            "log" => HostEvent::Log(required("log")?.to_string()),
            other => return Err(HostEventError::Unknown(other.to_string())),
        })
    }
}
