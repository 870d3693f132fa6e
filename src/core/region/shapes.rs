// src/core/region/shapes.rs

//! The concrete selection shapes. Every point slot is optional so that a shape can be
//! built up one protocol message at a time.

use super::vector::{BlockPos, Vector2, Vector3};
use crate::core::CuiError;

/// Upper bound on indexed vertex slots, so a hostile index cannot force a huge allocation.
pub const MAX_INDEXED_POINTS: usize = 1 << 16;

/// Converts a wire index into a vertex slot, growing `slots` as needed.
fn slot<'a, T>(
    slots: &'a mut Vec<Option<T>>,
    index: i32,
    shape: &'static str,
) -> Result<&'a mut Option<T>, CuiError> {
    let idx = usize::try_from(index)
        .ok()
        .filter(|i| *i < MAX_INDEXED_POINTS)
        .ok_or(CuiError::InvalidPointIndex { shape, index })?;
    if slots.len() <= idx {
        slots.resize_with(idx + 1, || None);
    }
    Ok(&mut slots[idx])
}

fn check_radius(radius: f64) -> Result<f64, CuiError> {
    // NaN fails the comparison as well.
    if radius >= 0.0 {
        Ok(radius)
    } else {
        Err(CuiError::NegativeRadius(radius))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CuboidRegion {
    first: Option<BlockPos>,
    second: Option<BlockPos>,
}

impl CuboidRegion {
    /// Sets corner 0 or 1.
    pub fn set_point(&mut self, index: i32, pos: BlockPos) -> Result<(), CuiError> {
        match index {
            0 => self.first = Some(pos),
            1 => self.second = Some(pos),
            _ => {
                return Err(CuiError::InvalidPointIndex {
                    shape: "cuboid",
                    index,
                });
            }
        }
        Ok(())
    }

    pub fn first(&self) -> Option<BlockPos> {
        self.first
    }

    pub fn second(&self) -> Option<BlockPos> {
        self.second
    }

    /// The inclusive min/max corners, once both are known.
    pub fn bounds(&self) -> Option<(BlockPos, BlockPos)> {
        let (a, b) = (self.first?, self.second?);
        Some((
            BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        ))
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonRegion {
    points: Vec<Option<Vector2>>,
    min_y: Option<i32>,
    max_y: Option<i32>,
}

impl PolygonRegion {
    pub fn set_point(&mut self, index: i32, point: Vector2) -> Result<(), CuiError> {
        *slot(&mut self.points, index, "polygon2d")? = Some(point);
        Ok(())
    }

    pub fn set_min_max(&mut self, min: i32, max: i32) {
        self.min_y = Some(min);
        self.max_y = Some(max);
    }

    pub fn point(&self, index: usize) -> Option<Vector2> {
        self.points.get(index).copied().flatten()
    }

    /// The defined vertices in index order.
    pub fn points(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.points.iter().flatten().copied()
    }

    pub fn min_y(&self) -> Option<i32> {
        self.min_y
    }

    pub fn max_y(&self) -> Option<i32> {
        self.max_y
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EllipsoidRegion {
    centre: Option<BlockPos>,
    radii: Option<Vector3>,
}

impl EllipsoidRegion {
    pub fn set_centre(&mut self, centre: BlockPos) {
        self.centre = Some(centre);
    }

    pub fn set_radii(&mut self, radii: Vector3) -> Result<(), CuiError> {
        check_radius(radii.x)?;
        check_radius(radii.y)?;
        check_radius(radii.z)?;
        self.radii = Some(radii);
        Ok(())
    }

    pub fn centre(&self) -> Option<BlockPos> {
        self.centre
    }

    pub fn radii(&self) -> Option<Vector3> {
        self.radii
    }

    pub fn is_empty(&self) -> bool {
        self.centre.is_none() && self.radii.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CylinderRegion {
    centre: Option<BlockPos>,
    radius_x: Option<f64>,
    radius_z: Option<f64>,
    min_y: Option<i32>,
    max_y: Option<i32>,
}

impl CylinderRegion {
    pub fn set_centre(&mut self, centre: BlockPos) {
        self.centre = Some(centre);
    }

    pub fn set_radii(&mut self, radius_x: f64, radius_z: f64) -> Result<(), CuiError> {
        let radius_x = check_radius(radius_x)?;
        let radius_z = check_radius(radius_z)?;
        self.radius_x = Some(radius_x);
        self.radius_z = Some(radius_z);
        Ok(())
    }

    pub fn set_min_max(&mut self, min: i32, max: i32) {
        self.min_y = Some(min);
        self.max_y = Some(max);
    }

    pub fn centre(&self) -> Option<BlockPos> {
        self.centre
    }

    pub fn radii(&self) -> Option<(f64, f64)> {
        Some((self.radius_x?, self.radius_z?))
    }

    pub fn min_y(&self) -> Option<i32> {
        self.min_y
    }

    pub fn max_y(&self) -> Option<i32> {
        self.max_y
    }

    /// The vertical extent, once the bounds are known.
    pub fn height(&self) -> Option<i32> {
        Some(self.max_y?.saturating_sub(self.min_y?).saturating_add(1))
    }

    pub fn is_empty(&self) -> bool {
        self.centre.is_none() && self.radius_x.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolyhedronRegion {
    vertices: Vec<Option<BlockPos>>,
    faces: Vec<Vec<usize>>,
}

impl PolyhedronRegion {
    pub fn set_vertex(&mut self, index: i32, pos: BlockPos) -> Result<(), CuiError> {
        *slot(&mut self.vertices, index, "polyhedron")? = Some(pos);
        Ok(())
    }

    /// Adds a face given as vertex indices.
    pub fn add_face(&mut self, indices: &[i32]) -> Result<(), CuiError> {
        let face = indices
            .iter()
            .map(|&index| {
                usize::try_from(index)
                    .ok()
                    .filter(|i| *i < MAX_INDEXED_POINTS)
                    .ok_or(CuiError::InvalidPointIndex {
                        shape: "polyhedron",
                        index,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.faces.push(face);
        Ok(())
    }

    pub fn vertex(&self, index: usize) -> Option<BlockPos> {
        self.vertices.get(index).copied().flatten()
    }

    pub fn vertices(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.vertices.iter().flatten().copied()
    }

    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.iter().all(Option::is_none) && self.faces.is_empty()
    }
}
