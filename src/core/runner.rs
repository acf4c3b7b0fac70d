//! Benchmark orchestration
//!
//! Runs the fixed sequence: CPU benchmarks, memory benchmarks, summary,
//! CPU ramp, memory ramp. Classified results are threaded through a
//! `ResultSet` owned by the run.

use super::dispatcher::CpuDispatcher;
use super::memory::MemoryProbe;
use super::ramp::{run_cpu_ramp, run_memory_ramp, CpuRampStep, MemoryRampReport};
use crate::config::BenchConfig;
use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::report::{ResultSet, Summary};
use crate::system::SystemInfo;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Everything a run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Classified CPU and memory results
    pub results: ResultSet,
    /// Tier counts over `results`
    pub summary: Summary,
    /// CPU ramp steps
    pub cpu_ramp: Vec<CpuRampStep>,
    /// Memory ramp outcome
    pub memory_ramp: MemoryRampReport,
    /// Wall-clock time of the whole run
    pub elapsed: Duration,
}

/// Full benchmark run
pub struct Benchmark {
    /// Configuration
    config: BenchConfig,
    /// CPU batch dispatcher
    dispatcher: CpuDispatcher,
    /// Memory probe
    probe: MemoryProbe,
    /// Machine snapshot
    system: SystemInfo,
}

impl Benchmark {
    /// Create a benchmark, detecting system resources
    pub fn new(config: BenchConfig) -> Self {
        let system = SystemInfo::collect();
        let progress = if config.progress {
            ProgressReporter::new()
        } else {
            ProgressReporter::disabled()
        };

        let capacity_limit = if config.enforce_memory_limit {
            system.memory.allocation_limit()
        } else {
            None
        };

        let dispatcher = CpuDispatcher::new().with_progress(progress.clone());
        let probe = MemoryProbe::new()
            .with_capacity_limit(capacity_limit)
            .with_progress(progress);

        Self {
            config,
            dispatcher,
            probe,
            system,
        }
    }

    /// Replace the memory probe
    pub fn with_probe(mut self, probe: MemoryProbe) -> Self {
        self.probe = probe;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run every configured CPU workload
    pub fn run_cpu_benchmarks(&self, results: &mut ResultSet) -> Result<()> {
        let iterations = self.config.iterations;
        for workload in &self.config.cpu_workloads {
            let result = self
                .dispatcher
                .run_task(workload.label(), || workload.run(iterations))?;
            results.push(result);
        }
        Ok(())
    }

    /// Run every configured memory workload, skipping failed allocations
    pub fn run_memory_benchmarks(&self, results: &mut ResultSet) -> Result<()> {
        for workload in &self.config.memory_workloads {
            match self.probe.run_workload(&workload.label, workload.size_gb) {
                Ok(result) => results.push(result),
                Err(e) if e.is_recoverable() => {
                    warn!(label = %workload.label, size_gb = workload.size_gb, "Skipping memory workload: {}", e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Execute the full sequence in order
    pub fn run(&self) -> Result<RunReport> {
        let started = Instant::now();
        info!(workers = self.dispatcher.workers(), "Benchmark starting");

        println!("System Benchmark Starting...");
        println!("Started at {}\n", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
        self.system.print_summary();

        let mut results = ResultSet::new();
        self.run_cpu_benchmarks(&mut results)?;

        println!("Starting Automatic Memory Workload Benchmarks...\n");
        self.run_memory_benchmarks(&mut results)?;

        let summary = Summary::from_results(&results);
        summary.print()?;

        let cpu_ramp = run_cpu_ramp(&self.dispatcher, &self.config.cpu_ramp_scales)?;
        let memory_ramp = run_memory_ramp(&self.probe, &self.config.memory_ramp_sizes_gb)?;

        let elapsed = started.elapsed();
        println!("\nAll benchmarks completed.");
        println!(
            "Total time: {}",
            humantime::format_duration(Duration::from_secs(elapsed.as_secs()))
        );

        Ok(RunReport {
            results,
            summary,
            cpu_ramp,
            memory_ramp,
            elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryWorkload;
    use crate::workload::CpuWorkload;

    fn small_config() -> BenchConfig {
        BenchConfig {
            iterations: 1_000,
            memory_workloads: vec![
                MemoryWorkload {
                    label: "empty".to_string(),
                    size_gb: 0,
                },
                MemoryWorkload {
                    label: "too big".to_string(),
                    size_gb: 1,
                },
            ],
            cpu_ramp_scales: vec![100, 200],
            memory_ramp_sizes_gb: vec![0, 1, 2],
            enforce_memory_limit: false,
            progress: false,
            ..Default::default()
        }
    }

    fn limited_probe() -> MemoryProbe {
        MemoryProbe::new().with_capacity_limit(Some(1024))
    }

    #[test]
    fn test_full_run_with_small_sizes() {
        let bench = Benchmark::new(small_config()).with_probe(limited_probe());
        let report = bench.run().unwrap();

        assert_eq!(report.results.cpu.len(), CpuWorkload::ALL.len());
        // The 1 GB workload is over the limit and omitted
        assert_eq!(report.results.memory.len(), 1);
        assert_eq!(report.results.memory[0].label, "empty");

        assert_eq!(report.summary.excellent, 6);
        assert_eq!(report.summary.moderate, 0);

        assert_eq!(report.cpu_ramp.len(), 2);
        assert_eq!(report.memory_ramp.stopped_at_gb, Some(1));
        assert_eq!(report.memory_ramp.steps.len(), 2);
    }

    #[test]
    fn test_cpu_results_keep_workload_order() {
        let bench = Benchmark::new(small_config());
        let mut results = ResultSet::new();
        bench.run_cpu_benchmarks(&mut results).unwrap();

        let labels: Vec<_> = results.cpu.iter().map(|r| r.label.as_str()).collect();
        let expected: Vec<_> = CpuWorkload::ALL.iter().map(|w| w.label()).collect();
        assert_eq!(labels, expected);
        assert!(results.memory.is_empty());
    }

    #[test]
    fn test_dispatcher_uses_every_logical_core() {
        let bench = Benchmark::new(small_config());
        assert_eq!(bench.dispatcher.workers(), num_cpus::get());
    }

    #[test]
    fn test_summary_counts_memory_only_results() {
        let config = BenchConfig {
            cpu_workloads: Vec::new(),
            ..small_config()
        };
        let report = Benchmark::new(config).with_probe(limited_probe()).run().unwrap();

        assert!(report.results.cpu.is_empty());
        assert_eq!(report.results.memory.len(), 1);
        assert_eq!(report.summary.excellent, 1);
        assert_eq!(report.cpu_ramp.len(), 2);
    }
}
