// src/core/commands/points/polygon.rs

use crate::core::CuiError;
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::command_trait::{CommandFlags, ExecutableCommand, ParseCommand};
use crate::core::commands::helpers::{parse_int, validate_arg_count};
use crate::core::errors::Arity;
use crate::core::region::Shape;
use crate::core::state::ExecutionContext;

/// `poly|<i0>|<i1>|<i2>[|...]`: one face of a polyhedron, as vertex indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolygonFace {
    pub vertices: Vec<i32>,
}

impl ParseCommand for PolygonFace {
    fn parse(args: &[String]) -> Result<Self, CuiError> {
        validate_arg_count(args, Self::ARITY, Self::NAME)?;
        let vertices = args
            .iter()
            .map(|arg| parse_int(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PolygonFace { vertices })
    }
}

impl ExecutableCommand for PolygonFace {
    fn execute(&self, ctx: &mut ExecutionContext<'_>) -> Result<Option<String>, CuiError> {
        let target = ctx.target_mut()?;
        let shape = target.region_type().name();
        let Shape::Polyhedron(polyhedron) = target.shape_mut() else {
            return Err(CuiError::ShapeMismatch {
                command: Self::NAME,
                shape,
            });
        };
        polyhedron.add_face(&self.vertices)?;
        Ok(None)
    }
}

impl CommandSpec for PolygonFace {
    const NAME: &'static str = "poly";
    const ARITY: Arity = Arity::new(3, 99);
    const FLAGS: CommandFlags = CommandFlags::REQUIRES_TARGET.union(CommandFlags::GEOMETRY);
}
