// src/core/protocol/mod.rs

pub mod cui_frame;
pub mod message;

pub use cui_frame::{CuiFrameCodec, MAX_PAYLOAD_LEN};
pub use message::{CuiMessage, FIELD_SEPARATOR, MULTI_PREFIX};
