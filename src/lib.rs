//! Hierarchical Action-Count Instrumentation Library.
//!
//! This crate instruments a hierarchical hardware model. Leaf components
//! record occurrences of named, parameterized actions while a simulation
//! runs; afterwards the hierarchy is exported as an architecture description
//! and a matching action-count report.
//!
//! # Architecture
//!
//! * **Model**: component tree of containers and leaves, each leaf owning an
//!   action schema and flat mixed-radix counter tables.
//! * **Reports**: recursive builders producing two documents shaped like the
//!   tree.
//! * **Harness**: design root, output writer and example units.
//!
//! # Modules
//!
//! * `common`: Error types.
//! * `config`: Configuration loading and parsing.
//! * `model`: Component tree and counting engine.
//! * `report`: Architecture description and action-count builders.
//! * `sim`: Design harness, report output and example runner.
//! * `stats`: Action count summary.
//! * `units`: Example MAC, memory and PE behaviors.

/// Error types shared by every module.
///
/// Separates contract violations of the counting core from the I/O and
/// configuration failures of the harness.
pub mod common;

/// Configuration system for the example design and report output.
///
/// Loads TOML files describing the design name, output directory and format,
/// unit parameters and the list of jobs to run.
pub mod config;

/// Component tree, action schemas and counter tables.
///
/// Implements tree construction, the mixed-radix counting engine and its
/// validation rules.
pub mod model;

/// Report builders over the component tree.
pub mod report;

/// Simulation harness, report writer and example runner.
///
/// Owns the design root, drives the example units and persists both reports.
pub mod sim;

/// Action count summary printed at the end of a run.
pub mod stats;

/// Example leaf behaviors that record actions.
pub mod units;
