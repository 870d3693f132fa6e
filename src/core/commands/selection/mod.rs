// src/core/commands/selection/mod.rs

pub mod cuboid;
pub mod select;
pub mod update;

pub use cuboid::CuboidCorner;
pub use select::{Selection, SelectionAction};
pub use update::Update;
