//! Duration classification
//!
//! Maps a measured wall-clock duration onto one of three ordinal tiers
//! using a fixed pair of cut-points per benchmark category.

use console::style;
use std::time::Duration;

/// Performance tier, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Below the lower cut-point
    Excellent,
    /// Between the cut-points
    Good,
    /// At or above the upper cut-point
    Moderate,
}

impl Tier {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Benchmark category, selects thresholds and wording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Parallel CPU workload
    Cpu,
    /// Single-threaded memory probe
    Memory,
}

impl Category {
    /// Fixed thresholds for this category
    pub fn thresholds(&self) -> Thresholds {
        match self {
            Self::Cpu => Thresholds::CPU,
            Self::Memory => Thresholds::MEMORY,
        }
    }

    /// Plain interpretation text for a tier
    pub fn comment(&self, tier: Tier) -> &'static str {
        match (self, tier) {
            (Self::Cpu, Tier::Excellent) => {
                "Excellent – ideal for professional and creative workloads."
            }
            (Self::Cpu, Tier::Good) => {
                "Good – great for most content creation and development tasks."
            }
            (Self::Cpu, Tier::Moderate) => {
                "Moderate – sufficient for general productivity but not optimal for heavy workflows."
            }
            (Self::Memory, Tier::Excellent) => {
                "Excellent memory speed – great for large media projects, 3D rendering, and multitasking."
            }
            (Self::Memory, Tier::Good) => {
                "Good memory speed – suitable for video editing and dev workflows."
            }
            (Self::Memory, Tier::Moderate) => {
                "Moderate memory performance – fine for general tasks and light creative work."
            }
        }
    }
}

/// Two cut-points in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Durations strictly below this are Excellent
    pub lower_secs: f64,
    /// Durations at or above this are Moderate
    pub upper_secs: f64,
}

impl Thresholds {
    /// CPU workload thresholds
    pub const CPU: Thresholds = Thresholds {
        lower_secs: 15.0,
        upper_secs: 25.0,
    };

    /// Memory probe thresholds
    pub const MEMORY: Thresholds = Thresholds {
        lower_secs: 10.0,
        upper_secs: 20.0,
    };

    /// Classify a duration in seconds. Ties go to the worse tier.
    pub fn classify_secs(&self, secs: f64) -> Tier {
        if secs < self.lower_secs {
            Tier::Excellent
        } else if secs < self.upper_secs {
            Tier::Good
        } else {
            Tier::Moderate
        }
    }

    /// Classify a measured duration
    pub fn classify(&self, duration: Duration) -> Tier {
        self.classify_secs(duration.as_secs_f64())
    }
}

/// A single classified measurement
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadResult {
    /// Workload label
    pub label: String,
    /// Benchmark category
    pub category: Category,
    /// Wall-clock duration of the whole batch or probe
    pub duration: Duration,
    /// Assigned tier
    pub tier: Tier,
    /// Interpretation text (uncoloured)
    pub message: &'static str,
}

impl WorkloadResult {
    /// Classify `duration` with the category's thresholds
    pub fn classify(label: impl Into<String>, category: Category, duration: Duration) -> Self {
        let tier = category.thresholds().classify(duration);
        Self {
            label: label.into(),
            category,
            duration,
            tier,
            message: category.comment(tier),
        }
    }

    /// Interpretation text coloured by tier
    pub fn styled_message(&self) -> String {
        paint(self.tier, self.message)
    }
}

/// Colour text green, yellow or red by tier
pub fn paint(tier: Tier, text: &str) -> String {
    match tier {
        Tier::Excellent => style(text).green().to_string(),
        Tier::Good => style(text).yellow().to_string(),
        Tier::Moderate => style(text).red().to_string(),
    }
}
