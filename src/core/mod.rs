//! Core benchmark module
//!
//! Provides classification, parallel batch dispatch, the memory probe,
//! ramp-up drivers and orchestration of a full run.

mod classify;
mod dispatcher;
mod memory;
mod ramp;
mod runner;

pub use classify::*;
pub use dispatcher::*;
pub use memory::*;
pub use ramp::*;
pub use runner::*;
