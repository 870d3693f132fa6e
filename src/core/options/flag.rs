// src/core/options/flag.rs

use super::Label;
use strum_macros::EnumIter;

/// Key binding shown in the `clearAllOnKey` label.
pub const TOGGLE_KEY_BINDING: &str = "key.worldeditcui.toggle";

/// The boolean settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum FlagOption {
    /// Logs every inbound payload at info level.
    DebugMode,
    /// Drops inbound selection messages instead of applying them.
    IgnoreUpdates,
    /// Asks the server to resend the selection on every world change.
    Promiscuous,
    /// Draws selections through world geometry.
    AlwaysOnTop,
    /// The clear key also clears every keyed region.
    ClearAllOnKey,
}

impl FlagOption {
    /// The persisted key.
    pub fn key(self) -> &'static str {
        match self {
            FlagOption::DebugMode => "debugMode",
            FlagOption::IgnoreUpdates => "ignoreUpdates",
            FlagOption::Promiscuous => "promiscuous",
            FlagOption::AlwaysOnTop => "alwaysOnTop",
            FlagOption::ClearAllOnKey => "clearAllOnKey",
        }
    }

    fn translation_key(self) -> &'static str {
        match self {
            FlagOption::Promiscuous => "compat.spammy",
            FlagOption::AlwaysOnTop => "compat.ontop",
            FlagOption::ClearAllOnKey => "extra.clearall",
            other => other.key(),
        }
    }

    pub fn default_value(self) -> bool {
        false
    }

    pub fn label(self) -> Label {
        let label = Label::new(format!("options.{}", self.translation_key()));
        match self {
            FlagOption::ClearAllOnKey => label.with_arg(TOGGLE_KEY_BINDING),
            _ => label,
        }
    }
}
