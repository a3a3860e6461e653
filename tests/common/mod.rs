// tests/common/mod.rs
//! Shared helpers for the CLI integration tests; the dataset fixture is the
//! one the engine tests use.

#[path = "../../crates/engine/tests/common/mod.rs"]
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;
