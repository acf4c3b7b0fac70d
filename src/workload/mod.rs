//! Synthetic CPU workloads
//!
//! Each workload is a pure numeric loop whose instruction mix loosely
//! mimics a real application. Results are accumulators with no meaning
//! beyond keeping the loop alive.

mod kernels;

pub use kernels::*;
