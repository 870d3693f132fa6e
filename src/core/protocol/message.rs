// src/core/protocol/message.rs

//! Tokenizes a single CUI payload into a command name and positional arguments.

use crate::core::CuiError;
use std::fmt;

/// Separates the fields of a payload.
pub const FIELD_SEPARATOR: char = '|';
/// Marks a message addressed to the active keyed region instead of the primary selection.
pub const MULTI_PREFIX: char = '+';

/// One tokenized payload, e.g. `p|0|10|64|-3|1` or `+s|cuboid|<uuid>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuiMessage {
    pub multi: bool,
    pub name: String,
    pub args: Vec<String>,
}

impl CuiMessage {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            multi: false,
            name: name.into(),
            args,
        }
    }

    /// Splits a payload on `|`. Empty fields are kept verbatim.
    pub fn parse(payload: &str) -> Result<Self, CuiError> {
        if payload.is_empty() {
            return Err(CuiError::EmptyPayload);
        }

        let mut fields = payload.split(FIELD_SEPARATOR);
        // `split` always yields at least one field.
        let head = fields.next().unwrap_or_default();
        let (multi, name) = match head.strip_prefix(MULTI_PREFIX) {
            Some(name) => (true, name),
            None => (false, head),
        };

        Ok(Self {
            multi,
            name: name.to_string(),
            args: fields.map(str::to_string).collect(),
        })
    }
}

impl fmt::Display for CuiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.multi {
            write!(f, "{MULTI_PREFIX}")?;
        }
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, "{FIELD_SEPARATOR}{arg}")?;
        }
        Ok(())
    }
}
