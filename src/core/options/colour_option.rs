// src/core/options/colour_option.rs

use super::Label;
use crate::core::style::Colour;
use strum_macros::EnumIter;

/// The configurable line colours. Each one yields a visible and a hidden line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ColourOption {
    CuboidBox,
    CuboidGrid,
    CuboidPoint1,
    CuboidPoint2,
    PolyGrid,
    PolyBox,
    PolyPoint,
    EllipsoidGrid,
    EllipsoidCentre,
    CylinderGrid,
    CylinderBox,
    CylinderCentre,
    ChunkBoundary,
    ChunkGrid,
}

impl ColourOption {
    /// The persisted key.
    pub fn key(self) -> &'static str {
        match self {
            ColourOption::CuboidBox => "cuboidEdgeColor",
            ColourOption::CuboidGrid => "cuboidGridColor",
            ColourOption::CuboidPoint1 => "cuboidFirstPointColor",
            ColourOption::CuboidPoint2 => "cuboidSecondPointColor",
            ColourOption::PolyGrid => "polyGridColor",
            ColourOption::PolyBox => "polyEdgeColor",
            ColourOption::PolyPoint => "polyPointColor",
            ColourOption::EllipsoidGrid => "ellipsoidGridColor",
            ColourOption::EllipsoidCentre => "ellipsoidPointColor",
            ColourOption::CylinderGrid => "cylinderGridColor",
            ColourOption::CylinderBox => "cylinderEdgeColor",
            ColourOption::CylinderCentre => "cylinderPointColor",
            ColourOption::ChunkBoundary => "chunkBoundaryColor",
            ColourOption::ChunkGrid => "chunkGridColor",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            ColourOption::CuboidBox => "cuboidedge",
            ColourOption::CuboidGrid => "cuboidgrid",
            ColourOption::CuboidPoint1 => "cuboidpoint1",
            ColourOption::CuboidPoint2 => "cuboidpoint2",
            ColourOption::PolyGrid => "polygrid",
            ColourOption::PolyBox => "polyedge",
            ColourOption::PolyPoint => "polypoint",
            ColourOption::EllipsoidGrid => "ellipsoidgrid",
            ColourOption::EllipsoidCentre => "ellipsoidpoint",
            ColourOption::CylinderGrid => "cylindergrid",
            ColourOption::CylinderBox => "cylinderedge",
            ColourOption::CylinderCentre => "cylinderpoint",
            ColourOption::ChunkBoundary => "chunkboundary",
            ColourOption::ChunkGrid => "chunkgrid",
        }
    }

    /// The compiled-in default as packed `0xAARRGGBB`.
    pub fn default_argb(self) -> u32 {
        match self {
            ColourOption::CuboidBox => 0xCCCC3333,
            ColourOption::CuboidGrid => 0xCCCC4C4C,
            ColourOption::CuboidPoint1 => 0xCC33CC33,
            ColourOption::CuboidPoint2 => 0xCC3333CC,
            ColourOption::PolyGrid => 0xCCCC3333,
            ColourOption::PolyBox => 0xCCCC4C4C,
            ColourOption::PolyPoint => 0xCC33CCCC,
            ColourOption::EllipsoidGrid => 0xCCCC4C4C,
            ColourOption::EllipsoidCentre => 0xCCCCCC33,
            ColourOption::CylinderGrid => 0xCCCC3333,
            ColourOption::CylinderBox => 0xCCCC4C4C,
            ColourOption::CylinderCentre => 0xCCCC33CC,
            ColourOption::ChunkBoundary => 0xCC33CC33,
            ColourOption::ChunkGrid => 0x994CCCAA,
        }
    }

    pub fn default_value(self) -> Colour {
        Colour::from_argb(self.default_argb())
    }

    pub fn label(self) -> Label {
        Label::new(format!("color.{}", self.display_name()))
    }
}
