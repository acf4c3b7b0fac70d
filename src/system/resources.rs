//! Machine snapshot
//!
//! Captures the processor and memory figures shown in the run banner and
//! the RAM + swap ceiling used to guard memory probes.

use humansize::{format_size, BINARY};
use sysinfo::System;

/// Processor and memory snapshot taken once per run
#[derive(Debug, Clone)]
pub struct SystemInfo {
    /// Processor brand string, "Unknown" if not reported
    pub model: String,
    /// Target architecture
    pub arch: &'static str,
    /// Clock of the first core in MHz, if reported
    pub frequency_mhz: Option<u64>,
    /// Logical cores (dispatcher worker count)
    pub logical_cores: usize,
    /// Physical cores
    pub physical_cores: usize,
    /// Memory figures
    pub memory: MemoryCapacity,
}

/// Installed memory in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCapacity {
    /// Physical RAM
    pub total: u64,
    /// RAM free for new allocations
    pub available: u64,
    /// Configured swap
    pub swap_total: u64,
}

impl SystemInfo {
    /// Query the running machine
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        let first = sys.cpus().first();
        let model = first
            .map(|c| c.brand().trim())
            .filter(|m| !m.is_empty())
            .unwrap_or("Unknown")
            .to_string();
        let frequency_mhz = first.map(|c| c.frequency()).filter(|f| *f > 0);

        Self {
            model,
            arch: std::env::consts::ARCH,
            frequency_mhz,
            logical_cores: num_cpus::get(),
            physical_cores: num_cpus::get_physical(),
            memory: MemoryCapacity {
                total: sys.total_memory(),
                available: sys.available_memory(),
                swap_total: sys.total_swap(),
            },
        }
    }

    /// Print the banner shown before the first benchmark
    pub fn print_summary(&self) {
        println!("=== System Information ===");
        println!("CPU:    {} ({})", self.model, self.arch);
        println!(
            "Cores:  {} logical, {} physical",
            self.logical_cores, self.physical_cores
        );
        if let Some(freq) = self.frequency_mhz {
            println!("Clock:  {} MHz", freq);
        }
        println!(
            "Memory: {} total, {} available",
            format_size(self.memory.total, BINARY),
            format_size(self.memory.available, BINARY)
        );
        if self.memory.swap_total > 0 {
            println!("Swap:   {} total", format_size(self.memory.swap_total, BINARY));
        }
        println!();
    }
}

impl MemoryCapacity {
    /// Largest buffer the machine could back: RAM plus swap.
    ///
    /// `None` when detection reported no memory at all.
    pub fn allocation_limit(&self) -> Option<u64> {
        Some(self.total.saturating_add(self.swap_total)).filter(|&limit| limit > 0)
    }
}
