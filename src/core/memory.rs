//! Memory allocation and bandwidth probe
//!
//! Allocates a large `f64` buffer, scales every element and sums the
//! result on the calling thread. The whole sequence is timed.

use super::classify::{Category, WorkloadResult};
use crate::error::{BenchError, Result};
use crate::progress::ProgressReporter;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Bytes per gigabyte as used for probe sizes
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// Factor every buffer element is multiplied by
pub const SCALE_FACTOR: f64 = 2.5;

const ELEMENT_SIZE: u64 = std::mem::size_of::<f64>() as u64;

/// Convert a size in GB to bytes
pub fn gb_to_bytes(size_gb: u64) -> u64 {
    size_gb.saturating_mul(BYTES_PER_GB)
}

/// Number of `f64` elements that fit in `size_bytes`
pub fn element_count(size_bytes: u64) -> u64 {
    size_bytes / ELEMENT_SIZE
}

/// Result of a successful probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryMeasurement {
    /// Requested size in bytes
    pub size_bytes: u64,
    /// Elements allocated
    pub elements: u64,
    /// Allocation, scale and sum time
    pub duration: Duration,
    /// Sum of the scaled buffer
    pub sum: f64,
}

impl MemoryMeasurement {
    /// Sum the probe should produce for its element count
    pub fn expected_sum(&self) -> f64 {
        SCALE_FACTOR * self.elements as f64
    }
}

/// Anything that can run a memory probe of a given byte size
pub trait BufferProbe {
    /// Allocate, scale and sum a buffer of `size_bytes`
    fn probe(&self, size_bytes: u64) -> Result<MemoryMeasurement>;
}

/// Single-threaded memory probe
#[derive(Debug, Clone)]
pub struct MemoryProbe {
    /// Requests above this many bytes fail without allocating
    capacity_limit: Option<u64>,
    /// Spinner shown while the probe runs
    progress: ProgressReporter,
}

impl MemoryProbe {
    /// Create a probe with no capacity limit
    pub fn new() -> Self {
        Self {
            capacity_limit: None,
            progress: ProgressReporter::disabled(),
        }
    }

    /// Fail requests larger than `limit` bytes before allocating
    pub fn with_capacity_limit(mut self, limit: Option<u64>) -> Self {
        self.capacity_limit = limit;
        self
    }

    /// Attach a progress reporter
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = progress;
        self
    }

    /// Current capacity limit
    pub fn capacity_limit(&self) -> Option<u64> {
        self.capacity_limit
    }

    /// Run a classified memory benchmark for `size_gb`, printing markers.
    ///
    /// Allocation failure is printed and returned as an error; the caller
    /// decides whether to continue.
    pub fn run_workload(&self, label: &str, size_gb: u64) -> Result<WorkloadResult> {
        println!("=== MEMORY BENCHMARK START ===");
        println!("Running Memory Benchmark simulating: **{}**", label);
        println!("Allocating ~{}GB of memory...\n", size_gb);

        let outcome = self.probe(gb_to_bytes(size_gb));
        match &outcome {
            Ok(measurement) => {
                println!(
                    "Memory Test Completed in {:.2} seconds.",
                    measurement.duration.as_secs_f64()
                );
                println!("Sum of array: {:.2e}", measurement.sum);
            }
            Err(BenchError::AllocationFailed { .. }) => {
                println!("MemoryError: Allocation failed. Try using a smaller size.");
            }
            Err(_) => {}
        }
        println!("=== MEMORY BENCHMARK END ===\n");

        let measurement = outcome?;
        let result = WorkloadResult::classify(label, Category::Memory, measurement.duration);
        info!(
            label,
            secs = measurement.duration.as_secs_f64(),
            tier = %result.tier,
            "Memory benchmark classified"
        );

        println!("📝 Interpretation for {}: {}\n", label, result.styled_message());
        Ok(result)
    }

    fn fill_scale_sum(&self, size_bytes: u64) -> Result<(u64, f64)> {
        if let Some(limit) = self.capacity_limit {
            if size_bytes > limit {
                warn!(size_bytes, limit, "Probe exceeds memory capacity");
                return Err(BenchError::allocation(size_bytes));
            }
        }

        let elements = element_count(size_bytes);
        let len = usize::try_from(elements).map_err(|_| BenchError::allocation(size_bytes))?;

        let mut buffer: Vec<f64> = Vec::new();
        buffer.try_reserve_exact(len).map_err(|e| {
            warn!(size_bytes, error = %e, "Buffer allocation failed");
            BenchError::allocation(size_bytes)
        })?;
        buffer.resize(len, 1.0);

        for value in buffer.iter_mut() {
            *value *= SCALE_FACTOR;
        }
        let sum: f64 = black_box(&buffer).iter().sum();

        Ok((elements, sum))
    }
}

impl BufferProbe for MemoryProbe {
    fn probe(&self, size_bytes: u64) -> Result<MemoryMeasurement> {
        debug!(size_bytes, "Starting memory probe");

        let msg = format!(
            "Probing {}...",
            humansize::format_size(size_bytes, humansize::BINARY)
        );
        let (outcome, duration) = self.progress.track(msg, || self.fill_scale_sum(size_bytes));
        let (elements, sum) = outcome?;

        Ok(MemoryMeasurement {
            size_bytes,
            elements,
            duration,
            sum,
        })
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count_for_4gb() {
        let elements = element_count(gb_to_bytes(4));
        assert_eq!(elements, 536_870_912);
        assert_eq!(SCALE_FACTOR * elements as f64, 1.342_177_28e9);
    }

    #[test]
    fn test_probe_sum_matches_expected() {
        let probe = MemoryProbe::new();
        let measurement = probe.probe(8 * 1024 * 1024).unwrap();

        assert_eq!(measurement.elements, 1024 * 1024);
        assert_eq!(measurement.sum, measurement.expected_sum());
        assert_eq!(measurement.sum, 2_621_440.0);
    }

    #[test]
    fn test_partial_element_is_dropped() {
        let measurement = MemoryProbe::new().probe(8 * 10 + 7).unwrap();
        assert_eq!(measurement.elements, 10);
        assert_eq!(measurement.sum, 25.0);
    }

    #[test]
    fn test_zero_size_probe() {
        let measurement = MemoryProbe::new().probe(0).unwrap();
        assert_eq!(measurement.elements, 0);
        assert_eq!(measurement.sum, 0.0);
    }

    #[test]
    fn test_capacity_limit_rejects_large_request() {
        let probe = MemoryProbe::new().with_capacity_limit(Some(1024));
        match probe.probe(2048) {
            Err(BenchError::AllocationFailed { size_bytes }) => assert_eq!(size_bytes, 2048),
            other => panic!("expected allocation failure, got {:?}", other),
        }
        assert!(probe.probe(1024).is_ok());
    }

    #[test]
    fn test_impossible_allocation_is_reported() {
        // u64::MAX / 8 elements cannot be reserved on any real machine
        let result = MemoryProbe::new().probe(u64::MAX);
        assert!(matches!(result, Err(BenchError::AllocationFailed { .. })));
    }

    #[test]
    fn test_run_workload_failure_is_recoverable() {
        let probe = MemoryProbe::new().with_capacity_limit(Some(0));
        let err = probe.run_workload("Google Chrome (30+ tabs)", 4).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_run_workload_classifies_success() {
        // 0 GB still runs through the full path
        let result = MemoryProbe::new().run_workload("empty", 0).unwrap();
        assert_eq!(result.category, Category::Memory);
        assert_eq!(result.label, "empty");
    }
}
