// src/core/region/mod.rs

//! Selection regions: one shape plus the per-region presentation data the server
//! can send (custom colours, grid settings, reported volume).

pub mod shapes;
pub mod vector;

pub use shapes::{CuboidRegion, CylinderRegion, EllipsoidRegion, PolygonRegion, PolyhedronRegion};
pub use vector::{BlockPos, Vector2, Vector3};

use crate::core::CuiError;
use crate::core::options::{ColourOption, OptionTable};
use crate::core::style::{Colour, RenderStyle};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Default grid spacing in blocks.
pub const DEFAULT_GRID_SPACING: f64 = 1.0;

/// Region type names as they appear on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum RegionType {
    #[strum(serialize = "cuboid")]
    Cuboid,
    #[strum(serialize = "polygon2d")]
    Polygon,
    #[strum(serialize = "ellipsoid")]
    Ellipsoid,
    #[strum(serialize = "cylinder")]
    Cylinder,
    #[strum(serialize = "polyhedron")]
    Polyhedron,
}

impl RegionType {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The geometry of a region.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Cuboid(CuboidRegion),
    Polygon(PolygonRegion),
    Ellipsoid(EllipsoidRegion),
    Cylinder(CylinderRegion),
    Polyhedron(PolyhedronRegion),
}

impl Shape {
    pub fn empty(region_type: RegionType) -> Self {
        match region_type {
            RegionType::Cuboid => Shape::Cuboid(CuboidRegion::default()),
            RegionType::Polygon => Shape::Polygon(PolygonRegion::default()),
            RegionType::Ellipsoid => Shape::Ellipsoid(EllipsoidRegion::default()),
            RegionType::Cylinder => Shape::Cylinder(CylinderRegion::default()),
            RegionType::Polyhedron => Shape::Polyhedron(PolyhedronRegion::default()),
        }
    }

    pub fn region_type(&self) -> RegionType {
        match self {
            Shape::Cuboid(_) => RegionType::Cuboid,
            Shape::Polygon(_) => RegionType::Polygon,
            Shape::Ellipsoid(_) => RegionType::Ellipsoid,
            Shape::Cylinder(_) => RegionType::Cylinder,
            Shape::Polyhedron(_) => RegionType::Polyhedron,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Shape::Cuboid(s) => s.is_empty(),
            Shape::Polygon(s) => s.is_empty(),
            Shape::Ellipsoid(s) => s.is_empty(),
            Shape::Cylinder(s) => s.is_empty(),
            Shape::Polyhedron(s) => s.is_empty(),
        }
    }

    /// The built-in colour options used for each style role of this shape.
    pub fn default_colours(&self) -> [ColourOption; 4] {
        match self {
            Shape::Cuboid(_) => [
                ColourOption::CuboidBox,
                ColourOption::CuboidGrid,
                ColourOption::CuboidPoint1,
                ColourOption::CuboidPoint2,
            ],
            Shape::Polygon(_) | Shape::Polyhedron(_) => [
                ColourOption::PolyBox,
                ColourOption::PolyGrid,
                ColourOption::PolyPoint,
                ColourOption::PolyPoint,
            ],
            Shape::Ellipsoid(_) => [
                ColourOption::EllipsoidGrid,
                ColourOption::EllipsoidGrid,
                ColourOption::EllipsoidCentre,
                ColourOption::EllipsoidCentre,
            ],
            Shape::Cylinder(_) => [
                ColourOption::CylinderBox,
                ColourOption::CylinderGrid,
                ColourOption::CylinderCentre,
                ColourOption::CylinderCentre,
            ],
        }
    }
}

/// The four colour slots a region draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleRole {
    Edge = 0,
    Grid = 1,
    FirstPoint = 2,
    SecondPoint = 3,
}

/// Colours sent by the server for one region, overriding the configured options.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomColours {
    pub edge: Colour,
    pub grid: Colour,
    pub first_point: Colour,
    pub second_point: Colour,
}

impl CustomColours {
    pub fn get(&self, role: StyleRole) -> &Colour {
        match role {
            StyleRole::Edge => &self.edge,
            StyleRole::Grid => &self.grid,
            StyleRole::FirstPoint => &self.first_point,
            StyleRole::SecondPoint => &self.second_point,
        }
    }
}

/// One selection shape with its presentation data.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    shape: Shape,
    colours: Option<CustomColours>,
    grid_spacing: f64,
    grid_cull: bool,
    volume: Option<i64>,
}

impl Default for Region {
    /// An empty cuboid.
    fn default() -> Self {
        Self::new(RegionType::Cuboid)
    }
}

impl Region {
    pub fn new(region_type: RegionType) -> Self {
        Self {
            shape: Shape::empty(region_type),
            colours: None,
            grid_spacing: DEFAULT_GRID_SPACING,
            grid_cull: false,
            volume: None,
        }
    }

    pub fn region_type(&self) -> RegionType {
        self.shape.region_type()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut Shape {
        &mut self.shape
    }

    /// Returns `true` if no point of the shape has been defined yet.
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    pub fn volume(&self) -> Option<i64> {
        self.volume
    }

    pub fn set_volume(&mut self, volume: i64) {
        self.volume = Some(volume);
    }

    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    pub fn grid_cull(&self) -> bool {
        self.grid_cull
    }

    pub fn set_grid(&mut self, spacing: f64, cull: bool) -> Result<(), CuiError> {
        if spacing.is_nan() || spacing < 0.0 {
            return Err(CuiError::NegativeGridSpacing(spacing));
        }
        self.grid_spacing = spacing;
        self.grid_cull = cull;
        Ok(())
    }

    pub fn custom_colours(&self) -> Option<&CustomColours> {
        self.colours.as_ref()
    }

    pub fn set_custom_colours(&mut self, colours: CustomColours) {
        self.colours = Some(colours);
    }

    /// The colour this region draws `role` with: the server-sent colour if any,
    /// otherwise the configured option.
    pub fn colour(&self, role: StyleRole, options: &OptionTable) -> Colour {
        match &self.colours {
            Some(custom) => custom.get(role).clone(),
            None => options.colour(self.shape.default_colours()[role as usize]),
        }
    }

    pub fn style(&self, role: StyleRole, options: &OptionTable) -> RenderStyle {
        RenderStyle::new(self.colour(role, options))
    }
}
