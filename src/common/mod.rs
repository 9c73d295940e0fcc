//! Common types shared throughout the crate.
//!
//! This module provides the error types used by the counting core and by the
//! harness that drives it, along with the crate-wide `Result` alias.

/// Error types for counting, unit behavior, and report output.
pub mod error;

pub use error::{CountError, Error, Result};
