//! # Builders
//!
//! Fluent configuration for file operations.
//!
//! - [`options_builder`] - chunk size and other per-run knobs

pub mod options_builder;
