//! # PerfProbe - CPU and Memory Workload Ratings
//!
//! PerfProbe runs a fixed set of synthetic workloads and rates how long each
//! takes against hardcoded thresholds.
//!
//! ## Features
//!
//! - **Parallel CPU Workloads**: One task per logical core on a per-call worker pool
//! - **Memory Probes**: Large `f64` buffers allocated, scaled and summed
//! - **Tiered Ratings**: Excellent / Good / Moderate with fixed cut-points
//! - **Ramp-up Stress Tests**: Ascending loop scales and buffer sizes
//! - **Final Summary**: Tier counts with per-category hints
//!
//! ## Quick Start
//!
//! ```no_run
//! use perfprobe::config::BenchConfig;
//! use perfprobe::core::Benchmark;
//!
//! let report = Benchmark::new(BenchConfig::default()).run().unwrap();
//! println!("{} Moderate ratings", report.summary.moderate);
//! ```
//!
//! ## Single Measurements
//!
//! ```no_run
//! use perfprobe::core::{BufferProbe, CpuDispatcher, MemoryProbe, Thresholds};
//! use perfprobe::workload::CpuWorkload;
//!
//! let dispatcher = CpuDispatcher::new();
//! let timing = dispatcher
//!     .run_batch("compile", || CpuWorkload::XcodeCompilation.run(1_000_000))
//!     .unwrap();
//! println!("{:?}", Thresholds::CPU.classify(timing.duration));
//!
//! let measurement = MemoryProbe::new().probe(1 << 30).unwrap();
//! println!("sum = {:.2e}", measurement.sum);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod progress;
pub mod report;
pub mod system;
pub mod workload;

// Re-export commonly used types
pub use crate::config::BenchConfig;
pub use crate::core::{Benchmark, RunReport, Tier, WorkloadResult};
pub use crate::error::{BenchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use perfprobe::prelude::*;
    //! ```

    pub use crate::config::{BenchConfig, CliArgs, MemoryWorkload};
    pub use crate::core::{
        Benchmark, BufferProbe, Category, CpuDispatcher, MemoryProbe, RunReport, Thresholds, Tier,
        WorkloadResult,
    };
    pub use crate::error::{BenchError, Result};
    pub use crate::progress::ProgressReporter;
    pub use crate::report::{ResultSet, Summary};
    pub use crate::system::SystemInfo;
    pub use crate::workload::CpuWorkload;
}
