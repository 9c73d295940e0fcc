//! Test module organization.
//!
//! This module organizes all integration tests for the instrumentation library.

/// Mixed-radix flattening and decoding tests.
mod counter_tests;




/// Example MAC, memory and PE unit tests.
mod units_tests;
