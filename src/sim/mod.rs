//! Simulation harness.
//!
//! Owns the instrumented design, drives the example units, and persists the
//! resulting reports.

/// Root container and report entry points.
pub mod design;

/// Report serialization and output directory handling.
pub mod output;

/// Builds the example design from configuration and runs its jobs.
pub mod runner;

pub use design::Design;
pub use output::ReportWriter;
pub use runner::Runner;
