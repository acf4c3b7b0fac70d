//! System resource detection
//!
//! Provides the CPU and memory snapshot shown before a run and the
//! memory capacity used to guard probe allocations.

mod resources;

pub use resources::*;
