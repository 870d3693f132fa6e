// src/core/mod.rs

//! The central module containing the core logic and data structures of the CUI client.

pub mod bridge;
pub mod commands;
pub mod context;
pub mod errors;
pub mod handler;
pub mod handshake;
pub mod options;
pub mod protocol;
pub mod region;
pub mod state;
pub mod style;

pub use commands::Command;
pub use context::CuiContext;
pub use errors::CuiError;
