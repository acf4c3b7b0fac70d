//! Numeric kernels for the CPU benchmarks

use std::hint::black_box;

/// Default iteration count for the fixed CPU workloads
pub const DEFAULT_ITERATIONS: u64 = 1_000_000;

/// Fixed CPU workload variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuWorkload {
    /// Mixed fractional powers and integer division
    XcodeCompilation,
    /// Trigonometry over wrapped angles
    LogicProAudioMix,
    /// Logarithms scaled by a byte-sized modulus
    FinalCutRendering,
    /// Powers, cosine and square roots
    BlenderRendering,
    /// Pure integer multiply-accumulate
    DavinciExport,
}

impl CpuWorkload {
    /// All workloads in benchmark order
    pub const ALL: [CpuWorkload; 5] = [
        CpuWorkload::XcodeCompilation,
        CpuWorkload::LogicProAudioMix,
        CpuWorkload::FinalCutRendering,
        CpuWorkload::BlenderRendering,
        CpuWorkload::DavinciExport,
    ];

    /// Application the workload stands in for
    pub fn label(&self) -> &'static str {
        match self {
            Self::XcodeCompilation => "Xcode Compilation",
            Self::LogicProAudioMix => "Logic Pro X Audio Mixing",
            Self::FinalCutRendering => "Final Cut Pro Rendering",
            Self::BlenderRendering => "Blender CPU Rendering",
            Self::DavinciExport => "DaVinci Resolve Export",
        }
    }

    /// Run the kernel over `1..iterations`
    pub fn run(&self, iterations: u64) -> f64 {
        match self {
            Self::XcodeCompilation => compilation_kernel(iterations),
            Self::LogicProAudioMix => audio_mix_kernel(iterations),
            Self::FinalCutRendering => video_render_kernel(iterations),
            Self::BlenderRendering => scene_render_kernel(iterations),
            Self::DavinciExport => export_kernel(iterations),
        }
    }
}

impl std::fmt::Display for CpuWorkload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

fn compilation_kernel(iterations: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 1..iterations {
        let x = black_box(i) as f64;
        result += x.powf(0.5) * x.powf(0.33) / ((i % 100 + 1) as f64);
    }
    black_box(result)
}

fn audio_mix_kernel(iterations: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 1..iterations {
        let i = black_box(i);
        result += ((i % 360) as f64).sin() * ((i % 180 + 1) as f64).tan();
    }
    black_box(result)
}

fn video_render_kernel(iterations: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 1..iterations {
        let i = black_box(i);
        result += (i % 255) as f64 * ((i + 1) as f64).ln();
    }
    black_box(result)
}

fn scene_render_kernel(iterations: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 1..iterations {
        let x = black_box(i) as f64;
        result += x.powf(0.8) * ((i % 100) as f64).cos() * x.sqrt();
    }
    black_box(result)
}

fn export_kernel(iterations: u64) -> f64 {
    let mut result = 0u64;
    for i in 1..iterations {
        let i = black_box(i);
        result = result.wrapping_add(i.wrapping_mul(i % 256));
    }
    black_box(result) as f64
}

/// Ramp kernel; cost grows linearly with `scale`
pub fn ramp_kernel(scale: u64) -> f64 {
    let mut result = 0.0f64;
    for i in 1..scale {
        let x = black_box(i) as f64;
        result += x.sqrt() * (x + 1.0).ln();
    }
    black_box(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        let mut labels: Vec<_> = CpuWorkload::ALL.iter().map(|w| w.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), CpuWorkload::ALL.len());
    }

    #[test]
    fn test_export_kernel_matches_closed_loop() {
        // 1*1 + 2*2 + 3*3 + 4*4
        assert_eq!(CpuWorkload::DavinciExport.run(5), 30.0);
    }

    #[test]
    fn test_video_render_kernel_small() {
        let expected = 1.0 * 2f64.ln() + 2.0 * 3f64.ln();
        let got = CpuWorkload::FinalCutRendering.run(3);
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_range_yields_zero() {
        for workload in CpuWorkload::ALL {
            assert_eq!(workload.run(1), 0.0);
        }
        assert_eq!(ramp_kernel(0), 0.0);
        assert_eq!(ramp_kernel(1), 0.0);
    }

    #[test]
    fn test_kernels_are_deterministic() {
        for workload in CpuWorkload::ALL {
            let a = workload.run(10_000);
            let b = workload.run(10_000);
            assert_eq!(a.to_bits(), b.to_bits(), "{} not deterministic", workload);
            assert!(a.is_finite());
        }
    }

    #[test]
    fn test_ramp_kernel_grows_with_scale() {
        assert!(ramp_kernel(2_000) > ramp_kernel(1_000));
    }
}
