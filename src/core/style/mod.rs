// src/core/style/mod.rs

pub mod colour;
pub mod line_style;
pub mod render_style;

pub use colour::Colour;
pub use line_style::{DepthTest, LineStyle, LineStyles, RenderType, derive_styles};
pub use render_style::RenderStyle;
