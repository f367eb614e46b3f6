//! Common test utilities for tsinit CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus a runner for the
//!   built binary
//! - Fixtures: a minimal React Native project layout

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod windows;

pub use env::*;
pub use fixtures::*;
