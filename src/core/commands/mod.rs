// src/core/commands/mod.rs

//! This module defines the CUI protocol vocabulary, organizes it into categories,
//! and provides the central `Command` enum that encapsulates each parsed message.
//! The `define_commands!` macro generates the enum, the `CommandType` table, and
//! their dispatch glue, so adding a command is one line here plus its own file.

use crate::core::CuiError;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::errors::Arity;
use crate::core::state::ExecutionContext;

// Re-export the CommandSpec trait for easy access by other modules.
pub use command_spec::CommandSpec;

// The macro definition that generates the Command enum and its implementations.
#[macro_use]
mod command_def;

pub mod appearance;
pub mod command_spec;
pub mod command_trait;
pub mod helpers;
pub mod points;
pub mod selection;

define_commands! {
    // --- Selection Commands ---
    (Selection, Selection, selection),
    (Update, Update, selection),
    (Cuboid, CuboidCorner, selection),

    // --- Point Commands ---
    (Point, Point, points),
    (Point2D, Point2D, points),
    (Ellipsoid, EllipsoidPoint, points),
    (Cylinder, CylinderPoint, points),
    (Bounds, Bounds, points),
    (Polygon, PolygonFace, points),

    // --- Appearance Commands ---
    (Colour, Colours, appearance),
    (Grid, Grid, appearance),
}
