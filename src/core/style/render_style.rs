// src/core/style/render_style.rs

//! A render style adapter: either one of the built-in colour options or a custom
//! colour sent for a single region.

use super::colour::Colour;
use super::line_style::{LineStyle, LineStyles, RenderType, derive_styles};

/// A snapshot of a colour, its derived lines, and the pass it is restricted to.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    render_type: RenderType,
    colour: Colour,
    lines: LineStyles,
}

impl RenderStyle {
    pub fn new(colour: Colour) -> Self {
        let lines = derive_styles(&colour);
        Self {
            render_type: RenderType::Any,
            colour,
            lines,
        }
    }

    /// Restricts the style to a single pass.
    pub fn with_render_type(mut self, render_type: RenderType) -> Self {
        self.render_type = render_type;
        self
    }

    pub fn render_type(&self) -> RenderType {
        self.render_type
    }

    pub fn set_render_type(&mut self, render_type: RenderType) {
        self.render_type = render_type;
    }

    pub fn colour(&self) -> &Colour {
        &self.colour
    }

    pub fn set_colour(&mut self, colour: Colour) {
        self.lines = derive_styles(&colour);
        self.colour = colour;
    }

    pub fn lines(&self) -> &LineStyles {
        &self.lines
    }

    /// The lines to draw in `pass`, hidden line first.
    pub fn lines_for(&self, pass: RenderType) -> impl Iterator<Item = LineStyle> + '_ {
        self.lines
            .as_array()
            .into_iter()
            .filter(move |line| self.render_type.matches(pass) && line.prepare(pass))
    }
}
