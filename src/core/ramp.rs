//! Ramp-up stress drivers
//!
//! Repeat the CPU dispatcher and the memory probe over ascending scales.
//! Ramp results are printed and returned to the caller, never classified.

use super::dispatcher::CpuDispatcher;
use super::memory::{gb_to_bytes, BufferProbe, MemoryMeasurement};
use crate::error::{BenchError, Result};
use crate::workload::ramp_kernel;
use std::time::Duration;
use tracing::{info, warn};

/// Default CPU ramp loop scales
pub const CPU_RAMP_SCALES: [u64; 5] = [100_000, 200_000, 400_000, 800_000, 1_000_000];

/// Default memory ramp sizes in GB
pub const MEMORY_RAMP_SIZES_GB: [u64; 7] = [4, 8, 12, 16, 20, 24, 28];

/// One completed CPU ramp iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuRampStep {
    /// Loop scale used by every worker
    pub scale: u64,
    /// Batch wall-clock time
    pub duration: Duration,
}

/// One attempted memory ramp size
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRampStep {
    /// Requested size in GB
    pub size_gb: u64,
    /// Measurement, or `None` if the allocation failed
    pub measurement: Option<MemoryMeasurement>,
}

/// Outcome of a memory ramp
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRampReport {
    /// Sizes attempted, in order
    pub steps: Vec<MemoryRampStep>,
    /// Size at which allocation failed and the ramp stopped
    pub stopped_at_gb: Option<u64>,
}

impl MemoryRampReport {
    /// Largest size that completed
    pub fn largest_completed_gb(&self) -> Option<u64> {
        self.steps
            .iter()
            .filter(|s| s.measurement.is_some())
            .map(|s| s.size_gb)
            .max()
    }
}

/// Run the ramp kernel through the dispatcher for each scale
pub fn run_cpu_ramp(dispatcher: &CpuDispatcher, scales: &[u64]) -> Result<Vec<CpuRampStep>> {
    println!("\n=== CPU RAMP-UP STRESS TEST ===");

    let mut steps = Vec::with_capacity(scales.len());
    for &scale in scales {
        let scale_text = group_thousands(scale);
        println!("\nRunning ramp-up CPU test with loop scale: {}", scale_text);

        let label = format!("ramp scale {}", scale_text);
        let timing = dispatcher.run_batch(&label, move || ramp_kernel(scale))?;

        println!(
            "Ramp scale {} completed in {:.2} seconds.",
            scale_text,
            timing.duration.as_secs_f64()
        );
        info!(scale, elapsed = ?timing.duration, "CPU ramp step finished");

        steps.push(CpuRampStep {
            scale,
            duration: timing.duration,
        });
    }

    Ok(steps)
}

/// Probe each size in turn, stopping at the first allocation failure
pub fn run_memory_ramp<P: BufferProbe>(probe: &P, sizes_gb: &[u64]) -> Result<MemoryRampReport> {
    println!("\n=== MEMORY RAMP-UP STRESS TEST ===");

    let mut report = MemoryRampReport::default();
    for &size_gb in sizes_gb {
        println!("\nAllocating ~{}GB of memory...", size_gb);

        match probe.probe(gb_to_bytes(size_gb)) {
            Ok(measurement) => {
                println!(
                    "Ramp memory test {}GB completed in {:.2} seconds. Sum: {:.2e}",
                    size_gb,
                    measurement.duration.as_secs_f64(),
                    measurement.sum
                );
                report.steps.push(MemoryRampStep {
                    size_gb,
                    measurement: Some(measurement),
                });
            }
            Err(BenchError::AllocationFailed { .. }) => {
                println!(
                    "MemoryError: Allocation failed at {}GB. System limit reached.",
                    size_gb
                );
                warn!(size_gb, "Memory ramp stopped");
                report.steps.push(MemoryRampStep {
                    size_gb,
                    measurement: None,
                });
                report.stopped_at_gb = Some(size_gb);
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Format an integer with comma thousands separators, e.g. `1000000` as `1,000,000`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Fails every request at or above `fail_at_gb` and records attempts
    struct FakeProbe {
        fail_at_gb: u64,
        attempted: RefCell<Vec<u64>>,
    }

    impl FakeProbe {
        fn new(fail_at_gb: u64) -> Self {
            Self {
                fail_at_gb,
                attempted: RefCell::new(Vec::new()),
            }
        }
    }

    impl BufferProbe for FakeProbe {
        fn probe(&self, size_bytes: u64) -> Result<MemoryMeasurement> {
            let size_gb = size_bytes / gb_to_bytes(1);
            self.attempted.borrow_mut().push(size_gb);
            if size_gb >= self.fail_at_gb {
                return Err(BenchError::allocation(size_bytes));
            }
            Ok(MemoryMeasurement {
                size_bytes,
                elements: size_bytes / 8,
                duration: Duration::from_millis(1),
                sum: 2.5 * (size_bytes / 8) as f64,
            })
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_memory_ramp_stops_at_first_failure() {
        let probe = FakeProbe::new(12);
        let report = run_memory_ramp(&probe, &MEMORY_RAMP_SIZES_GB).unwrap();

        assert_eq!(*probe.attempted.borrow(), vec![4, 8, 12]);
        assert_eq!(report.stopped_at_gb, Some(12));
        assert_eq!(report.largest_completed_gb(), Some(8));
        assert_eq!(report.steps.len(), 3);
        assert!(report.steps[2].measurement.is_none());
    }

    #[test]
    fn test_memory_ramp_completes_without_failure() {
        let probe = FakeProbe::new(u64::MAX);
        let report = run_memory_ramp(&probe, &MEMORY_RAMP_SIZES_GB).unwrap();

        assert_eq!(*probe.attempted.borrow(), MEMORY_RAMP_SIZES_GB.to_vec());
        assert_eq!(report.stopped_at_gb, None);
        assert_eq!(report.largest_completed_gb(), Some(28));
    }

    #[test]
    fn test_memory_ramp_first_size_fails() {
        let probe = FakeProbe::new(0);
        let report = run_memory_ramp(&probe, &MEMORY_RAMP_SIZES_GB).unwrap();

        assert_eq!(*probe.attempted.borrow(), vec![4]);
        assert_eq!(report.largest_completed_gb(), None);
    }

    #[test]
    fn test_cpu_ramp_runs_every_scale_in_order() {
        let dispatcher = CpuDispatcher::new();
        let steps = run_cpu_ramp(&dispatcher, &[1_000, 2_000, 4_000]).unwrap();
        let scales: Vec<_> = steps.iter().map(|s| s.scale).collect();
        assert_eq!(scales, vec![1_000, 2_000, 4_000]);
    }
}
