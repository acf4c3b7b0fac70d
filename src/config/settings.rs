//! Configuration settings for PerfProbe
//!
//! Defines CLI arguments and the runtime configuration. Every run executes
//! the full fixed sequence on one worker per logical core; flags only
//! change presentation and the allocation guard.

use crate::core::{CPU_RAMP_SCALES, MEMORY_RAMP_SIZES_GB};
use crate::workload::{CpuWorkload, DEFAULT_ITERATIONS};
use clap::Parser;

/// PerfProbe - CPU throughput and memory bandwidth probe
#[derive(Parser, Debug, Clone)]
#[command(name = "perfprobe")]
#[command(author = "PerfProbe Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rate CPU throughput and memory bandwidth against fixed tiers")]
#[command(long_about = r#"
PerfProbe runs a fixed set of synthetic workloads and rates each one as
Excellent, Good or Moderate.

Sequence:
  1. CPU benchmarks (one task per logical core, five workloads)
  2. Memory benchmarks (4GB to 24GB buffers)
  3. Summary of all ratings
  4. CPU ramp-up (loop scale 100,000 to 1,000,000)
  5. Memory ramp-up (4GB to 28GB, stops at the first allocation failure)

Examples:
  perfprobe                    # Full run
  perfprobe -q --no-color      # No spinner, plain text
  perfprobe -v                 # Debug logging on stderr
"#)]
pub struct CliArgs {
    /// Attempt allocations larger than RAM + swap
    #[arg(long)]
    pub no_memory_limit: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose logging (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (no progress spinner)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

/// A memory benchmark scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryWorkload {
    /// Application the buffer size stands in for
    pub label: String,
    /// Buffer size in GB
    pub size_gb: u64,
}

impl MemoryWorkload {
    fn new(label: &str, size_gb: u64) -> Self {
        Self {
            label: label.to_string(),
            size_gb,
        }
    }
}

/// Runtime configuration derived from CLI args
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Iterations per CPU workload
    pub iterations: u64,
    /// CPU workloads in run order
    pub cpu_workloads: Vec<CpuWorkload>,
    /// Memory workloads in run order
    pub memory_workloads: Vec<MemoryWorkload>,
    /// CPU ramp loop scales, ascending
    pub cpu_ramp_scales: Vec<u64>,
    /// Memory ramp sizes in GB, ascending
    pub memory_ramp_sizes_gb: Vec<u64>,
    /// Fail probes larger than RAM + swap without allocating
    pub enforce_memory_limit: bool,
    /// Show progress spinner
    pub progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            cpu_workloads: CpuWorkload::ALL.to_vec(),
            memory_workloads: vec![
                MemoryWorkload::new("Google Chrome (30+ tabs)", 4),
                MemoryWorkload::new("Logic Pro X (large music project)", 8),
                MemoryWorkload::new("Final Cut Pro (4K proxy editing)", 12),
                MemoryWorkload::new("Adobe After Effects (VFX-heavy)", 16),
                MemoryWorkload::new("Blender 3D Rendering (scene export)", 20),
                MemoryWorkload::new("DaVinci Resolve (High-End 4K+ Edit)", 24),
            ],
            cpu_ramp_scales: CPU_RAMP_SCALES.to_vec(),
            memory_ramp_sizes_gb: MEMORY_RAMP_SIZES_GB.to_vec(),
            enforce_memory_limit: true,
            progress: true,
        }
    }
}

impl BenchConfig {
    /// Create config from CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self, String> {
        let mut config = Self::default();

        config.enforce_memory_limit = !args.no_memory_limit;
        config.progress = !args.quiet;

        config.validate()?;
        Ok(config)
    }

    /// Check ramp sizes are ascending
    pub fn validate(&self) -> Result<(), String> {
        if !is_ascending(&self.cpu_ramp_scales) {
            return Err("CPU ramp scales must be ascending".to_string());
        }
        if !is_ascending(&self.memory_ramp_sizes_gb) {
            return Err("Memory ramp sizes must be ascending".to_string());
        }
        Ok(())
    }
}

fn is_ascending(values: &[u64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}
