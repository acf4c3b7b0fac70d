//! Final system performance summary
//!
//! Counts tiers over every classified result and picks a recommendation.

use crate::core::{paint, Category, Tier, WorkloadResult};
use console::style;
use std::io::{self, Write};

const CPU_HINT: &str =
    "- CPU performance may limit you in high-end rendering, compiling, or export tasks.";
const MEMORY_HINT: &str =
    "- Memory speed or capacity may bottleneck heavy media editing or multitasking workflows.";
const NO_LIMITS: &str = "✅ Your system shows no major limitations. It's highly optimized for professional workloads, creative tasks, and multitasking.";
const RECOMMENDATION: &str = "🎯 Recommendation: Monitor actual resource usage during work. If you notice slowness, consider a memory upgrade or faster CPU cores in future systems.";

/// Accumulated results of the classified phases
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// CPU benchmark results in run order
    pub cpu: Vec<WorkloadResult>,
    /// Memory benchmark results in run order
    pub memory: Vec<WorkloadResult>,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a result to the list for its category
    pub fn push(&mut self, result: WorkloadResult) {
        match result.category {
            Category::Cpu => self.cpu.push(result),
            Category::Memory => self.memory.push(result),
        }
    }

    /// All results, CPU first
    pub fn iter(&self) -> impl Iterator<Item = &WorkloadResult> {
        self.cpu.iter().chain(self.memory.iter())
    }

    /// Total number of results
    pub fn len(&self) -> usize {
        self.cpu.len() + self.memory.len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tier counts and limiting categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Excellent results
    pub excellent: usize,
    /// Good results
    pub good: usize,
    /// Moderate results
    pub moderate: usize,
    /// Some CPU result is Moderate
    pub cpu_limited: bool,
    /// Some memory result is Moderate
    pub memory_limited: bool,
}

impl Summary {
    /// Aggregate a result set
    pub fn from_results(results: &ResultSet) -> Self {
        let mut summary = Summary::default();
        for result in results.iter() {
            match result.tier {
                Tier::Excellent => summary.excellent += 1,
                Tier::Good => summary.good += 1,
                Tier::Moderate => summary.moderate += 1,
            }
        }
        summary.cpu_limited = results.cpu.iter().any(|r| r.tier == Tier::Moderate);
        summary.memory_limited = results.memory.iter().any(|r| r.tier == Tier::Moderate);
        summary
    }

    /// Hint lines for the limiting categories, CPU first
    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if self.cpu_limited {
            hints.push(CPU_HINT);
        }
        if self.memory_limited {
            hints.push(MEMORY_HINT);
        }
        hints
    }

    /// Write the summary block to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let rule = "=".repeat(50);
        writeln!(out, "\n{}", rule)?;
        writeln!(out, "📊 FINAL SYSTEM PERFORMANCE SUMMARY")?;
        writeln!(out, "{}", rule)?;

        writeln!(
            out,
            "\n🧠 {}",
            paint(Tier::Excellent, &format!("Excellent Ratings: {}", self.excellent))
        )?;
        writeln!(out, "💡 {}", paint(Tier::Good, &format!("Good Ratings: {}", self.good)))?;
        writeln!(
            out,
            "⚠️  {}\n",
            paint(Tier::Moderate, &format!("Moderate Ratings: {}", self.moderate))
        )?;

        if self.moderate == 0 {
            writeln!(out, "{}\n", style(NO_LIMITS).green())?;
        } else {
            writeln!(out, "{}", style("⚠️ Summary Insights:").yellow())?;
            for hint in self.hints() {
                writeln!(out, "{}", hint)?;
            }
            writeln!(out, "\n{}", style(RECOMMENDATION).yellow())?;
        }

        Ok(())
    }

    /// Print the summary block to stdout
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(category: Category, secs: u64) -> WorkloadResult {
        WorkloadResult::classify("w", category, Duration::from_secs(secs))
    }

    fn render(summary: &Summary) -> String {
        let mut buf = Vec::new();
        summary.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_result_set_routes_by_category() {
        let mut results = ResultSet::new();
        results.push(result(Category::Cpu, 1));
        results.push(result(Category::Memory, 1));
        results.push(result(Category::Memory, 1));
        assert_eq!(results.cpu.len(), 1);
        assert_eq!(results.memory.len(), 2);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_counts_span_both_lists() {
        let mut results = ResultSet::new();
        results.push(result(Category::Cpu, 12)); // Excellent
        results.push(result(Category::Cpu, 18)); // Good
        results.push(result(Category::Memory, 12)); // Good
        results.push(result(Category::Memory, 25)); // Moderate

        let summary = Summary::from_results(&results);
        assert_eq!((summary.excellent, summary.good, summary.moderate), (1, 2, 1));
        assert!(!summary.cpu_limited);
        assert!(summary.memory_limited);
    }

    #[test]
    fn test_no_moderate_prints_no_hints() {
        let mut results = ResultSet::new();
        results.push(result(Category::Cpu, 1));
        results.push(result(Category::Memory, 15));

        let text = render(&Summary::from_results(&results));
        assert!(text.contains("no major limitations"));
        assert!(!text.contains(CPU_HINT));
        assert!(!text.contains(MEMORY_HINT));
        assert!(!text.contains("Recommendation"));
    }

    #[test]
    fn test_only_cpu_hint_when_cpu_is_moderate() {
        let mut results = ResultSet::new();
        results.push(result(Category::Cpu, 30));
        results.push(result(Category::Memory, 1));

        let text = render(&Summary::from_results(&results));
        assert!(text.contains(CPU_HINT));
        assert!(!text.contains(MEMORY_HINT));
        assert!(text.contains("Recommendation"));
        assert!(!text.contains("no major limitations"));
    }

    #[test]
    fn test_only_memory_hint_when_memory_is_moderate() {
        let mut results = ResultSet::new();
        results.push(result(Category::Cpu, 1));
        results.push(result(Category::Memory, 21));

        let summary = Summary::from_results(&results);
        assert!(!summary.cpu_limited);
        assert!(summary.memory_limited);

        let text = render(&summary);
        assert!(text.contains(MEMORY_HINT));
        assert!(!text.contains(CPU_HINT));
        assert!(text.contains("Recommendation"));
        assert!(!text.contains("no major limitations"));
    }

    #[test]
    fn test_both_hints_in_order() {
        let mut results = ResultSet::new();
        results.push(result(Category::Memory, 20));
        results.push(result(Category::Cpu, 25));

        let summary = Summary::from_results(&results);
        assert_eq!(summary.hints(), vec![CPU_HINT, MEMORY_HINT]);

        let text = render(&summary);
        let cpu_at = text.find(CPU_HINT).unwrap();
        let mem_at = text.find(MEMORY_HINT).unwrap();
        assert!(cpu_at < mem_at);
    }

    #[test]
    fn test_empty_results() {
        let summary = Summary::from_results(&ResultSet::new());
        assert_eq!(summary, Summary::default());
        assert!(render(&summary).contains("no major limitations"));
    }
}
