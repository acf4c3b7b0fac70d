//! Result aggregation and the final summary

mod summary;

pub use summary::*;
