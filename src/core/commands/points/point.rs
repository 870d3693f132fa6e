// src/core/commands/points/point.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_block_pos, parse_int, parse_long, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::{BlockPos, Shape};
use crate::core::state::ExecutionContext;

/// `p|<idx>|<x>|<y>|<z>|<volume>[|<legacy>]`: a 3D point of the target region.
///
/// Cuboids take corners 0 and 1, polyhedra take any vertex index, and ellipsoids
/// and cylinders take their centre at index 0. The trailing legacy field is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub index: i32,
    pub pos: BlockPos,
    pub volume: i64,
}

impl ParseCommand for Point {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        Ok(Point {
            index: parse_int(&args[0])?,
            pos: parse_block_pos(&args[1..4])?,
            volume: parse_long(&args[4])?,
        })
    }
}

impl ExecutableCommand for Point {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        match target.shape_mut() {
            Shape::Cuboid(cuboid) => cuboid.set_point(self.index, self.pos)?,
            Shape::Polyhedron(polyhedron) => polyhedron.set_vertex(self.index, self.pos)?,
            Shape::Ellipsoid(ellipsoid) => {
                check_centre_index(self.index, "ellipsoid")?;
                ellipsoid.set_centre(self.pos);
            }
            Shape::Cylinder(cylinder) => {
                check_centre_index(self.index, "cylinder")?;
                cylinder.set_centre(self.pos);
            }
            Shape::Polygon(_) => {
                return Err(CuiError::ShapeMismatch {
                    command: Self::NAME,
                    shape: "polygon2d",
                });
            }
        }
        target.set_volume(self.volume);
        Ok(None)
    }
}

fn check_centre_index(index: i32, shape: &'static str) -> Result<(), CuiError> {
    if index == 0 {
        Ok(())
    } else {
        Err(CuiError::InvalidPointIndex { shape, index })
    }
}

impl CommandSpec for Point {
    const NAME: &'static str = "p";
    const ARITY: Arity = Arity::new(5, 6);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
