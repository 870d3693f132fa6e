// src/core/options/table.rs

//! The option table: current values for every registered option, plus the flat
//! JSON persistence contract.

use super::{ColourOption, CuiOption, FlagOption, OptionKind, OptionValue};
use crate::core::CuiError;
use crate::core::style::{Colour, LineStyles, RenderStyle, derive_styles};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

/// Default file name of the persisted options.
pub const CONFIG_FILE_NAME: &str = "worldeditcui.config.json";

#[derive(Debug, Clone, PartialEq)]
struct ColourEntry {
    value: Colour,
    lines: LineStyles,
}

impl ColourEntry {
    fn new(value: Colour) -> Self {
        let lines = derive_styles(&value);
        Self { value, lines }
    }
}

/// Holds the current value of every option, keyed in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionTable {
    known: IndexMap<&'static str, CuiOption>,
    flags: IndexMap<FlagOption, bool>,
    colours: IndexMap<ColourOption, ColourEntry>,
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionTable {
    /// Registers every option with its compiled-in default.
    pub fn new() -> Self {
        let mut table = Self {
            known: IndexMap::new(),
            flags: IndexMap::new(),
            colours: IndexMap::new(),
        };
        for flag in FlagOption::iter() {
            table.known.insert(flag.key(), CuiOption::Flag(flag));
            table.flags.insert(flag, flag.default_value());
        }
        for colour in ColourOption::iter() {
            table.known.insert(colour.key(), CuiOption::Colour(colour));
            table
                .colours
                .insert(colour, ColourEntry::new(colour.default_value()));
        }
        table
    }

    /// Resolves a persisted key.
    pub fn lookup(&self, key: &str) -> Option<CuiOption> {
        self.known.get(key).copied()
    }

    /// Every registered option in registration order.
    pub fn options(&self) -> impl Iterator<Item = CuiOption> + '_ {
        self.known.values().copied()
    }

    pub fn flag(&self, flag: FlagOption) -> bool {
        self.flags
            .get(&flag)
            .copied()
            .unwrap_or_else(|| flag.default_value())
    }

    pub fn set_flag(&mut self, flag: FlagOption, value: bool) {
        self.flags.insert(flag, value);
    }

    /// Flips a flag and returns the new value.
    pub fn toggle_flag(&mut self, flag: FlagOption) -> bool {
        let value = !self.flag(flag);
        self.set_flag(flag, value);
        value
    }

    pub fn colour(&self, option: ColourOption) -> Colour {
        self.colours
            .get(&option)
            .map(|entry| entry.value.clone())
            .unwrap_or_else(|| option.default_value())
    }

    /// Replaces a colour and re-derives its lines.
    pub fn set_colour(&mut self, option: ColourOption, colour: Colour) {
        self.colours.insert(option, ColourEntry::new(colour));
    }

    /// Restores a colour to its compiled-in default.
    pub fn reset_colour(&mut self, option: ColourOption) {
        let mut colour = self.colour(option);
        colour.copy_from(&option.default_value());
        self.set_colour(option, colour);
    }

    /// Sets a colour from a packed `0xAARRGGBB` value, as produced by a colour picker.
    pub fn set_colour_argb(&mut self, option: ColourOption, argb: u32) {
        let mut colour = self.colour(option);
        colour.copy_from(&Colour::from_argb(argb));
        self.set_colour(option, colour);
    }

    pub fn colour_argb(&self, option: ColourOption) -> u32 {
        self.colour(option).argb()
    }

    /// The hidden and visible lines for a colour option.
    pub fn lines(&self, option: ColourOption) -> LineStyles {
        self.colours
            .get(&option)
            .map(|entry| entry.lines)
            .unwrap_or_else(|| derive_styles(&option.default_value()))
    }

    /// A style bound to the option's current colour.
    pub fn style(&self, option: ColourOption) -> RenderStyle {
        RenderStyle::new(self.colour(option))
    }

    pub fn value(&self, option: CuiOption) -> OptionValue {
        match option {
            CuiOption::Flag(flag) => OptionValue::Flag(self.flag(flag)),
            CuiOption::Colour(colour) => OptionValue::Colour(self.colour(colour)),
        }
    }

    /// Sets an option from a value of the matching kind.
    pub fn set_value(&mut self, option: CuiOption, value: OptionValue) -> Result<(), CuiError> {
        match (option, value) {
            (CuiOption::Flag(flag), OptionValue::Flag(v)) => self.set_flag(flag, v),
            (CuiOption::Colour(colour), OptionValue::Colour(v)) => self.set_colour(colour, v),
            (option, value) => {
                return Err(CuiError::ConfigLoad(format!(
                    "option '{}' expects a {:?} value, got {:?}",
                    option.key(),
                    option.kind(),
                    value.kind()
                )));
            }
        }
        Ok(())
    }

    /// Renders every option as one flat JSON object in registration order.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (key, option) in &self.known {
            let value = match self.value(*option) {
                OptionValue::Flag(v) => Value::Bool(v),
                OptionValue::Colour(c) => Value::String(c.hex().to_string()),
            };
            map.insert((*key).to_string(), value);
        }
        Value::Object(map)
    }

    /// Applies a persisted JSON document on top of the current values.
    ///
    /// Unknown keys and values of the wrong shape are logged and skipped; missing keys
    /// keep their current values. Returns the number of options applied. A document
    /// that is not a JSON object leaves the table untouched.
    pub fn apply_json(&mut self, json: &str) -> Result<usize, CuiError> {
        let document: Value = serde_json::from_str(json)?;
        let Value::Object(entries) = document else {
            return Err(CuiError::ConfigLoad(
                "options document must be a JSON object".to_string(),
            ));
        };

        let mut applied = 0;
        for (key, raw) in entries {
            let Some(option) = self.lookup(&key) else {
                warn!("Unknown configuration field: {}", key);
                continue;
            };
            match decode_value(option, &raw) {
                Some(value) => {
                    self.set_value(option, value)?;
                    applied += 1;
                }
                None => warn!(
                    "Invalid value for configuration field '{}': {}. Keeping {:?}.",
                    key,
                    raw,
                    self.value(option)
                ),
            }
        }
        Ok(applied)
    }

    /// Loads the options file, falling back to defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let mut table = Self::new();
        if !path.exists() {
            debug!("No options file at {}, using defaults", path.display());
            return table;
        }

        let result = fs::read_to_string(path)
            .map_err(CuiError::from)
            .and_then(|contents| {
                let mut loaded = Self::new();
                let applied = loaded.apply_json(&contents)?;
                Ok((loaded, applied))
            });
        match result {
            Ok((loaded, applied)) => {
                info!("Loaded {} options from {}", applied, path.display());
                table = loaded;
            }
            Err(e) => {
                warn!(
                    "Failed to load options from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
            }
        }
        table
    }

    /// Writes every option to `path` as pretty-printed JSON.
    pub fn save_to(&self, path: &Path) -> Result<(), CuiError> {
        let contents = serde_json::to_string_pretty(&self.to_json())?;
        fs::write(path, contents)?;
        debug!("Saved options to {}", path.display());
        Ok(())
    }
}

/// Decodes one persisted value. Colours are accepted as hex strings, or as the
/// legacy `{"hex": "..."}` object form.
fn decode_value(option: CuiOption, raw: &Value) -> Option<OptionValue> {
    match option.kind() {
        OptionKind::Flag => raw.as_bool().map(OptionValue::Flag),
        OptionKind::Colour => {
            let hex = match raw {
                Value::String(s) => s.as_str(),
                Value::Object(fields) => fields.get("hex")?.as_str()?,
                _ => return None,
            };
            Colour::new(hex).ok().map(OptionValue::Colour)
        }
    }
}
