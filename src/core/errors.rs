// src/core/errors.rs

//! Defines the primary error type for the CUI core.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// The failure taxonomy every `CuiError` belongs to. Callers use this to decide
/// how loudly to report a failure; none of them are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unknown command, wrong arity, or a command with no valid target.
    Decode,
    /// A positional argument failed numeric or shape parsing.
    Parse,
    /// The persisted settings could not be read or parsed.
    ConfigLoad,
    /// A colour string failed validation.
    ColourValidation,
    /// An I/O failure on a host-provided channel.
    Io,
}

/// The accepted parameter count of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub min: usize,
    pub max: usize,
}

impl Arity {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub const fn exactly(count: usize) -> Self {
        Self {
            min: count,
            max: count,
        }
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} parameters", self.max)
        } else {
            write!(f, "between {} and {} parameters", self.min, self.max)
        }
    }
}

/// The main error enum for decoding, state mutation, and configuration.
#[derive(Error, Debug)]
pub enum CuiError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error(
        "Invalid number of parameters. {command} event requires {expected}. Received {} parameters instead. {}",
        .received.len(),
        .received.join(" ")
    )]
    WrongArgumentCount {
        command: String,
        expected: Arity,
        received: Vec<String>,
    },

    #[error("Empty payload")]
    EmptyPayload,

    #[error("Payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("Payload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Value '{0}' is not a number")]
    NotANumber(String),

    #[error("Value '{0}' is not a valid region id")]
    InvalidRegionId(String),

    #[error("Unknown region type '{0}'")]
    InvalidRegionType(String),

    #[error("Point index {index} is not valid for a {shape} region")]
    InvalidPointIndex { shape: &'static str, index: i32 },

    #[error("Unknown cuboid corner '{0}', expected p1 or p2")]
    InvalidCorner(String),

    #[error("Radius must not be negative, got {0}")]
    NegativeRadius(f64),

    #[error("Grid spacing must not be negative, got {0}")]
    NegativeGridSpacing(f64),

    #[error("'{command}' cannot be applied to a {shape} region")]
    ShapeMismatch {
        command: &'static str,
        shape: &'static str,
    },

    #[error("No active region for multi-region command")]
    NoActiveRegion,

    #[error("Invalid colour '{0}'")]
    InvalidColour(String),

    #[error("Configuration error: {0}")]
    ConfigLoad(String),
}

impl CuiError {
    /// Classifies the error into the failure taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CuiError::Io(_) => ErrorKind::Io,
            CuiError::UnknownCommand(_)
            | CuiError::WrongArgumentCount { .. }
            | CuiError::EmptyPayload
            | CuiError::InvalidUtf8
            | CuiError::PayloadTooLarge(_)
            | CuiError::ShapeMismatch { .. }
            | CuiError::NoActiveRegion => ErrorKind::Decode,
            CuiError::NotANumber(_)
            | CuiError::InvalidRegionId(_)
            | CuiError::InvalidRegionType(_)
            | CuiError::InvalidPointIndex { .. }
            | CuiError::InvalidCorner(_)
            | CuiError::NegativeRadius(_)
            | CuiError::NegativeGridSpacing(_) => ErrorKind::Parse,
            CuiError::InvalidColour(_) => ErrorKind::ColourValidation,
            CuiError::ConfigLoad(_) => ErrorKind::ConfigLoad,
        }
    }
}

// `std::io::Error` is not cloneable, so it is shared behind an Arc.
impl Clone for CuiError {
    fn clone(&self) -> Self {
        match self {
            CuiError::Io(e) => CuiError::Io(Arc::clone(e)),
            CuiError::UnknownCommand(s) => CuiError::UnknownCommand(s.clone()),
            CuiError::WrongArgumentCount {
                command,
                expected,
                received,
            } => CuiError::WrongArgumentCount {
                command: command.clone(),
                expected: *expected,
                received: received.clone(),
            },
            CuiError::EmptyPayload => CuiError::EmptyPayload,
            CuiError::InvalidUtf8 => CuiError::InvalidUtf8,
            CuiError::PayloadTooLarge(n) => CuiError::PayloadTooLarge(*n),
            CuiError::NotANumber(s) => CuiError::NotANumber(s.clone()),
            CuiError::InvalidRegionId(s) => CuiError::InvalidRegionId(s.clone()),
            CuiError::InvalidRegionType(s) => CuiError::InvalidRegionType(s.clone()),
            CuiError::InvalidPointIndex { shape, index } => CuiError::InvalidPointIndex {
                shape: *shape,
                index: *index,
            },
            CuiError::InvalidCorner(s) => CuiError::InvalidCorner(s.clone()),
            CuiError::NegativeRadius(r) => CuiError::NegativeRadius(*r),
            CuiError::NegativeGridSpacing(s) => CuiError::NegativeGridSpacing(*s),
            CuiError::ShapeMismatch { command, shape } => CuiError::ShapeMismatch {
                command: *command,
                shape: *shape,
            },
            CuiError::NoActiveRegion => CuiError::NoActiveRegion,
            CuiError::InvalidColour(s) => CuiError::InvalidColour(s.clone()),
            CuiError::ConfigLoad(s) => CuiError::ConfigLoad(s.clone()),
        }
    }
}

impl PartialEq for CuiError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CuiError::Io(e1), CuiError::Io(e2)) => e1.to_string() == e2.to_string(),
            (CuiError::UnknownCommand(s1), CuiError::UnknownCommand(s2)) => s1 == s2,
            (
                CuiError::WrongArgumentCount {
                    command: c1,
                    expected: e1,
                    received: r1,
                },
                CuiError::WrongArgumentCount {
                    command: c2,
                    expected: e2,
                    received: r2,
                },
            ) => c1 == c2 && e1 == e2 && r1 == r2,
            (CuiError::PayloadTooLarge(n1), CuiError::PayloadTooLarge(n2)) => n1 == n2,
            (CuiError::NotANumber(s1), CuiError::NotANumber(s2)) => s1 == s2,
            (CuiError::InvalidRegionId(s1), CuiError::InvalidRegionId(s2)) => s1 == s2,
            (CuiError::InvalidRegionType(s1), CuiError::InvalidRegionType(s2)) => s1 == s2,
            (
                CuiError::InvalidPointIndex {
                    shape: s1,
                    index: i1,
                },
                CuiError::InvalidPointIndex {
                    shape: s2,
                    index: i2,
                },
            ) => s1 == s2 && i1 == i2,
            (CuiError::InvalidCorner(s1), CuiError::InvalidCorner(s2)) => s1 == s2,
            (CuiError::NegativeRadius(r1), CuiError::NegativeRadius(r2)) => {
                r1.to_bits() == r2.to_bits()
            }
            (CuiError::NegativeGridSpacing(s1), CuiError::NegativeGridSpacing(s2)) => {
                s1.to_bits() == s2.to_bits()
            }
            (
                CuiError::ShapeMismatch {
                    command: c1,
                    shape: s1,
                },
                CuiError::ShapeMismatch {
                    command: c2,
                    shape: s2,
                },
            ) => c1 == c2 && s1 == s2,
            (CuiError::InvalidColour(s1), CuiError::InvalidColour(s2)) => s1 == s2,
            (CuiError::ConfigLoad(s1), CuiError::ConfigLoad(s2)) => s1 == s2,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for CuiError {
    fn from(e: std::io::Error) -> Self {
        CuiError::Io(Arc::new(e))
    }
}

impl From<std::str::Utf8Error> for CuiError {
    fn from(_: std::str::Utf8Error) -> Self {
        CuiError::InvalidUtf8
    }
}

impl From<uuid::Error> for CuiError {
    fn from(e: uuid::Error) -> Self {
        CuiError::InvalidRegionId(e.to_string())
    }
}

impl From<toml::de::Error> for CuiError {
    fn from(e: toml::de::Error) -> Self {
        CuiError::ConfigLoad(format!("TOML parse error: {e}"))
    }
}

impl From<serde_json::Error> for CuiError {
    fn from(e: serde_json::Error) -> Self {
        CuiError::ConfigLoad(format!("JSON serialization/deserialization error: {e}"))
    }
}
