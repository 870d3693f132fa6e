// src/core/options/mod.rs

//! The closed set of persisted settings.
//!
//! Every option is one variant of [`CuiOption`] and exposes the same capability set:
//! a stable key, a value type, a compiled-in default, and a translatable label.

pub mod colour_option;
pub mod flag;
pub mod table;

pub use colour_option::ColourOption;
pub use flag::FlagOption;
pub use table::{CONFIG_FILE_NAME, OptionTable};

use crate::core::style::Colour;
use strum::IntoEnumIterator;

/// Namespace prepended to every translation key.
pub const TRANSLATION_NAMESPACE: &str = "worldeditcui";

/// A translation key plus its format arguments, resolved by the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub key: String,
    pub args: Vec<String>,
}

impl Label {
    fn new(key: String) -> Self {
        Self {
            key: format!("{TRANSLATION_NAMESPACE}.{key}"),
            args: Vec::new(),
        }
    }

    fn with_arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }
}

/// The value type an option stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Flag,
    Colour,
}

/// A stored option value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Flag(bool),
    Colour(Colour),
}

impl OptionValue {
    pub fn kind(&self) -> OptionKind {
        match self {
            OptionValue::Flag(_) => OptionKind::Flag,
            OptionValue::Colour(_) => OptionKind::Colour,
        }
    }
}

/// Any persisted option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuiOption {
    Flag(FlagOption),
    Colour(ColourOption),
}

impl CuiOption {
    /// Every option in registration order: flags first, then colours.
    pub fn all() -> impl Iterator<Item = CuiOption> {
        FlagOption::iter()
            .map(CuiOption::Flag)
            .chain(ColourOption::iter().map(CuiOption::Colour))
    }

    pub fn key(self) -> &'static str {
        match self {
            CuiOption::Flag(flag) => flag.key(),
            CuiOption::Colour(colour) => colour.key(),
        }
    }

    pub fn kind(self) -> OptionKind {
        match self {
            CuiOption::Flag(_) => OptionKind::Flag,
            CuiOption::Colour(_) => OptionKind::Colour,
        }
    }

    pub fn default_value(self) -> OptionValue {
        match self {
            CuiOption::Flag(flag) => OptionValue::Flag(flag.default_value()),
            CuiOption::Colour(colour) => OptionValue::Colour(colour.default_value()),
        }
    }

    pub fn label(self) -> Label {
        match self {
            CuiOption::Flag(flag) => flag.label(),
            CuiOption::Colour(colour) => colour.label(),
        }
    }
}

impl From<FlagOption> for CuiOption {
    fn from(flag: FlagOption) -> Self {
        CuiOption::Flag(flag)
    }
}

impl From<ColourOption> for CuiOption {
    fn from(colour: ColourOption) -> Self {
        CuiOption::Colour(colour)
    }
}
