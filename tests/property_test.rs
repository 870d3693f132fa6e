// tests/property_test.rs

//! Property-based tests for the CUI core
//!
//! These tests use property-based testing to verify invariants and properties
//! that should always hold, regardless of input values.

// Import TestContext from integration tests
#[path = "integration/test_helpers.rs"]
#[allow(dead_code)]
mod test_helpers;

mod property {
    pub mod consistency_test;
    pub mod style_test;
}
