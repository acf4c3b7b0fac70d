//! Progress reporting module
//!
//! Shows a spinner while the caller is blocked on a running benchmark.

mod reporter;

pub use reporter::*;
