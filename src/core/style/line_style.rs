// src/core/style/line_style.rs

//! Line descriptors handed to the renderer, and the visible/hidden pair derived
//! from every colour.

use super::colour::Colour;

/// Thickness shared by every derived line.
pub const LINE_THICKNESS: f32 = 3.0;
/// RGB scale applied to occluded lines.
pub const HIDDEN_RGB_SCALE: f32 = 0.75;
/// Alpha scale applied to occluded lines.
pub const HIDDEN_ALPHA_SCALE: f32 = 0.25;

/// The depth comparison a renderer should apply for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthTest {
    /// Draw regardless of depth.
    Always,
    /// Draw where the line is behind or level with world geometry.
    GreaterOrEqual,
    /// Draw where the line is in front of world geometry.
    Less,
}

/// Which depth pass a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderType {
    /// Lines drawn regardless of depth, e.g. chunk boundary overlays.
    #[default]
    Any,
    /// Lines hidden under world geometry.
    Hidden,
    /// Lines visible over world geometry.
    Visible,
}

impl RenderType {
    pub fn depth_test(self) -> DepthTest {
        match self {
            RenderType::Any => DepthTest::Always,
            RenderType::Hidden => DepthTest::GreaterOrEqual,
            RenderType::Visible => DepthTest::Less,
        }
    }

    /// `Any` on either side matches everything; otherwise the types must be equal.
    pub fn matches(self, other: RenderType) -> bool {
        self == RenderType::Any || other == RenderType::Any || self == other
    }
}

/// An immutable line descriptor. Channels are kept in the 0..=255 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub render_type: RenderType,
    pub thickness: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl LineStyle {
    pub fn new(
        render_type: RenderType,
        thickness: f32,
        red: f32,
        green: f32,
        blue: f32,
        alpha: f32,
    ) -> Self {
        Self {
            render_type,
            thickness,
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns `true` if this line should be drawn in the requested pass.
    pub fn prepare(&self, requested: RenderType) -> bool {
        self.render_type.matches(requested)
    }

    /// The channels scaled to 0.0..=1.0 for submission to a GPU.
    pub fn rgba_normalized(&self) -> [f32; 4] {
        [
            self.red / 255.0,
            self.green / 255.0,
            self.blue / 255.0,
            self.alpha / 255.0,
        ]
    }
}

/// The pair of lines derived from one colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyles {
    pub hidden: LineStyle,
    pub visible: LineStyle,
}

impl LineStyles {
    /// The lines in draw order, hidden first.
    pub fn as_array(&self) -> [LineStyle; 2] {
        [self.hidden, self.visible]
    }
}

/// Derives the visible and hidden lines for a colour. Pure and deterministic.
pub fn derive_styles(colour: &Colour) -> LineStyles {
    let red = f32::from(colour.red());
    let green = f32::from(colour.green());
    let blue = f32::from(colour.blue());
    let alpha = f32::from(colour.alpha());

    LineStyles {
        visible: LineStyle::new(RenderType::Visible, LINE_THICKNESS, red, green, blue, alpha),
        hidden: LineStyle::new(
            RenderType::Hidden,
            LINE_THICKNESS,
            red * HIDDEN_RGB_SCALE,
            green * HIDDEN_RGB_SCALE,
            blue * HIDDEN_RGB_SCALE,
            alpha * HIDDEN_ALPHA_SCALE,
        ),
    }
}
