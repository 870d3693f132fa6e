// src/core/commands/points/mod.rs

//! Commands that shape the geometry of the target region.

pub mod bounds;
pub mod cylinder;
pub mod ellipsoid;
pub mod point;
pub mod point2d;
pub mod polygon;

pub use bounds::Bounds;
pub use cylinder::CylinderPoint;
pub use ellipsoid::{EllipsoidPoint, EllipsoidValue};
pub use point::Point;
pub use point2d::Point2D;
pub use polygon::PolygonFace;
