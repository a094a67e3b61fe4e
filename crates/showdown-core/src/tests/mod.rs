//! Cross-module tests.
//!
//! - `determinism.rs`: same seed, same battle; parallel equals sequential
//! - `integration.rs`: end-to-end battles through the public API
//! - `helpers.rs`: roster builders and tracing setup

mod helpers;
mod integration;

pub use helpers::*;
