//! Common test utilities and fixtures for integration tests

#![allow(dead_code, unreachable_pub, clippy::unwrap_used)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
