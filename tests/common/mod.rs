//! Common test utilities for Sasskit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project + home directories and CLI helpers
//! - `WatchProcess`: a running `sasskit --watch` with captured output
//! - Fixtures: a small multi-app static tree

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
