// src/core/commands/appearance/mod.rs

//! Commands that change how a region is drawn without touching its geometry.

pub mod colours;
pub mod grid;

pub use colours::Colours;
pub use grid::Grid;
