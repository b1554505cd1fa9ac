//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `apply.rs` - Copy-on-write move application
//! - `scenarios.rs` - Fixed positions exercising the rule set
//! - `proptest.rs` - Property-based tests
