// src/core/state/mod.rs

pub mod execution;
pub mod store;

pub use execution::ExecutionContext;
pub use store::SelectionStore;
