// src/core/style/colour.rs

//! The persisted hex colour value and its decomposed channels.
//!
//! Colours are stored as `#RRGGBBAA`. A value given as `#RRGGBB` is completed with the
//! default alpha `CC` when it is constructed, and the channel cache is recomputed
//! eagerly on every mutation, so the accessors are always consistent with the hex.

use crate::core::CuiError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Alpha appended to colours persisted without an alpha component (about 80%).
pub const DEFAULT_ALPHA: &str = "CC";

static HEX_COLOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^#[0-9a-f]{6,8}$").expect("hex colour pattern is valid"));

/// The decomposed channels of a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Channels {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
    argb: u32,
}

impl Channels {
    /// Decodes a normalized `#RRGGBBAA` string.
    fn decode(hex: &str) -> Option<Self> {
        let byte = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        let red = byte(1..3)?;
        let green = byte(3..5)?;
        let blue = byte(5..7)?;
        let alpha = byte(7..9)?;
        let argb = u32::from_be_bytes([alpha, red, green, blue]);
        Some(Self {
            red,
            green,
            blue,
            alpha,
            argb,
        })
    }
}

/// A validated colour with a remembered default.
#[derive(Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Colour {
    hex: String,
    default_hex: String,
    channels: Channels,
}

impl Colour {
    /// Builds a colour from a `#RRGGBB` or `#RRGGBBAA` string, which also becomes the
    /// remembered default.
    pub fn new(hex: &str) -> Result<Self, CuiError> {
        let sanitised =
            Self::sanitise(Some(hex)).ok_or_else(|| CuiError::InvalidColour(hex.to_string()))?;
        let hex = Self::complete_alpha(sanitised);
        let channels =
            Channels::decode(&hex).ok_or_else(|| CuiError::InvalidColour(hex.clone()))?;
        Ok(Self {
            default_hex: hex.clone(),
            hex,
            channels,
        })
    }

    /// Builds a colour from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let [alpha, red, green, blue] = argb.to_be_bytes();
        let hex = format!("#{red:02X}{green:02X}{blue:02X}{alpha:02X}");
        Self {
            default_hex: hex.clone(),
            hex,
            channels: Channels {
                red,
                green,
                blue,
                alpha,
                argb,
            },
        }
    }

    /// Builds a colour from a packed `0xRRGGBBAA` value.
    pub fn from_rgba(rgba: u32) -> Self {
        Self::from_argb(rgba.rotate_right(8))
    }

    /// Returns a new colour for `text` when it is a valid colour string, otherwise `default`.
    pub fn parse(text: Option<&str>, default: &Colour) -> Colour {
        match text.and_then(|t| Colour::new(t).ok()) {
            Some(colour) => colour,
            None => default.clone(),
        }
    }

    /// Resolves an optional, possibly invalid colour against a default hex string.
    ///
    /// A missing colour is replaced by the default. A present colour keeps its value
    /// and adopts `default_hex` as its remembered default.
    pub fn first_or_default(colour: Option<Colour>, default_hex: &str) -> Result<Colour, CuiError> {
        let fallback = Colour::new(default_hex)?;
        Ok(match colour {
            None => fallback,
            Some(mut colour) => {
                colour.default_hex = fallback.hex;
                colour
            }
        })
    }

    /// Validates a colour string: must start with `#`, be 7 or 9 characters long, and
    /// contain only hex digits.
    fn sanitise(colour: Option<&str>) -> Option<&str> {
        let colour = colour?;
        if !colour.starts_with('#') {
            return None;
        }
        if colour.len() != 7 && colour.len() != 9 {
            return None;
        }
        HEX_COLOUR.is_match(colour).then_some(colour)
    }

    fn complete_alpha(hex: &str) -> String {
        if hex.len() == 7 {
            format!("{hex}{DEFAULT_ALPHA}")
        } else {
            hex.to_string()
        }
    }

    /// Returns `true` if `text` would be accepted by [`Colour::parse`].
    pub fn is_valid(text: &str) -> bool {
        Self::sanitise(Some(text)).is_some()
    }

    /// The normalized `#RRGGBBAA` form.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// The remembered default, normalized.
    pub fn default_hex(&self) -> &str {
        &self.default_hex
    }

    pub fn red(&self) -> u8 {
        self.channels.red
    }

    pub fn green(&self) -> u8 {
        self.channels.green
    }

    pub fn blue(&self) -> u8 {
        self.channels.blue
    }

    pub fn alpha(&self) -> u8 {
        self.channels.alpha
    }

    /// The packed `0xAARRGGBB` value.
    pub fn argb(&self) -> u32 {
        self.channels.argb
    }

    /// Takes over another colour's value; the remembered default is kept.
    pub fn copy_from(&mut self, other: &Colour) -> &mut Self {
        self.hex = other.hex.clone();
        self.channels = other.channels;
        self
    }

    /// Restores the remembered default.
    pub fn reset(&mut self) {
        if let Some(channels) = Channels::decode(&self.default_hex) {
            self.hex = self.default_hex.clone();
            self.channels = channels;
        }
    }
}

impl PartialEq for Colour {
    fn eq(&self, other: &Self) -> bool {
        self.channels.argb == other.channels.argb
    }
}

impl Eq for Colour {}

impl Hash for Colour {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels.argb.hash(state);
    }
}

impl fmt::Debug for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Colour").field(&self.hex).finish()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.hex
    }
}

impl TryFrom<String> for Colour {
    type Error = CuiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::new(&value)
    }
}
