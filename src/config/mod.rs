//! Configuration module for PerfProbe
//!
//! Provides CLI arguments and the runtime benchmark configuration.

mod settings;

pub use settings::*;
