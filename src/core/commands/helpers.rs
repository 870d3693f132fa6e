// src/core/commands/helpers.rs

//! Provides helper functions for parsing positional command arguments.
//! These helpers keep numeric coercion and error reporting consistent across commands.

use crate::core::CuiError;
use crate::core::errors::Arity;
use crate::core::region::BlockPos;
use uuid::Uuid;

/// Validates that the number of arguments is within the command's arity.
pub fn validate_arg_count(args: &[String], arity: Arity, cmd: &str) -> Result<(), CuiError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(CuiError::WrongArgumentCount {
            command: cmd.to_string(),
            expected: arity,
            received: args.to_vec(),
        })
    }
}

/// Parses a floating-point argument. Surrounding whitespace is ignored; `nan` and
/// the infinities are rejected.
pub fn parse_double(arg: &str) -> Result<f64, CuiError> {
    arg.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| CuiError::NotANumber(arg.to_string()))
}

/// Parses an integer argument. Servers may send fractional values, so the text is
/// read as a float and truncated toward zero, saturating at the `i32` range.
pub fn parse_int(arg: &str) -> Result<i32, CuiError> {
    parse_double(arg).map(|value| value as i32)
}

/// Like `parse_int`, for volumes and areas which can exceed the `i32` range.
pub fn parse_long(arg: &str) -> Result<i64, CuiError> {
    parse_double(arg).map(|value| value as i64)
}

pub fn parse_uuid(arg: &str) -> Result<Uuid, CuiError> {
    Uuid::parse_str(arg).map_err(|_| CuiError::InvalidRegionId(arg.to_string()))
}

/// Parses three consecutive integer arguments as a block position.
pub fn parse_block_pos(args: &[String]) -> Result<BlockPos, CuiError> {
    match args {
        [x, y, z, ..] => Ok(BlockPos::new(parse_int(x)?, parse_int(y)?, parse_int(z)?)),
        _ => Err(CuiError::NotANumber(args.join(" "))),
    }
}
