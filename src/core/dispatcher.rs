//! Parallel task dispatch
//!
//! Runs one copy of a CPU-bound task on every worker of a freshly built
//! pool and times the whole batch. The pool lives only for the duration
//! of a single call.

use super::classify::{Category, WorkloadResult};
use crate::error::{BenchError, Result};
use crate::progress::ProgressReporter;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, info};

/// Timing of one dispatched batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchTiming {
    /// Number of workers that each ran the task once
    pub workers: usize,
    /// Wall-clock time from pool creation to last completion
    pub duration: Duration,
}

/// Dispatcher for CPU benchmark batches
#[derive(Debug, Clone)]
pub struct CpuDispatcher {
    /// Worker count (one task per worker)
    workers: usize,
    /// Spinner shown while the batch runs
    progress: ProgressReporter,
}

impl CpuDispatcher {
    /// Create a dispatcher with one worker per logical core
    pub fn new() -> Self {
        Self {
            workers: num_cpus::get().max(1),
            progress: ProgressReporter::disabled(),
        }
    }

    /// Attach a progress reporter
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Number of workers per batch
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task` once on each worker and block until all finish.
    ///
    /// A panicking task propagates to the caller.
    pub fn run_batch<F>(&self, label: &str, task: F) -> Result<BatchTiming>
    where
        F: Fn() -> f64 + Sync,
    {
        debug!(workers = self.workers, label, "Dispatching batch");

        let (outcome, duration) = self.progress.track(format!("Running {}...", label), || {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .thread_name(|i| format!("perfprobe-worker-{}", i))
                .build()?;

            let results = pool.broadcast(|_| task());
            black_box(results);
            Ok::<_, BenchError>(())
        });
        outcome?;

        debug!(label, elapsed = ?duration, "Batch finished");

        Ok(BatchTiming {
            workers: self.workers,
            duration,
        })
    }

    /// Run a classified CPU benchmark, printing markers and interpretation
    pub fn run_task<F>(&self, label: &str, task: F) -> Result<WorkloadResult>
    where
        F: Fn() -> f64 + Sync,
    {
        println!("\n=== CPU BENCHMARK START: {} ===", label);
        println!("Using {} logical cores...", self.workers);

        let timing = self.run_batch(label, task)?;
        let secs = timing.duration.as_secs_f64();

        println!("{} CPU Workload Completed in {:.2} seconds.", label, secs);
        println!("=== CPU BENCHMARK END: {} ===", label);

        let result = WorkloadResult::classify(label, Category::Cpu, timing.duration);
        info!(label, secs, tier = %result.tier, "CPU benchmark classified");

        println!("📝 Interpretation for {}: {}\n", label, result.styled_message());

        Ok(result)
    }
}

impl Default for CpuDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
