//! Tuning and sampling configuration

/// Default number of samples per axis used by [`crate::PolynomialMD::sup_norm_with`]
pub const DEFAULT_SUP_NORM_SAMPLES: usize = 1024;

/// Scheduling configuration for the CPU transform backend
///
/// An N-dimensional transform is computed as a sequence of 1D transforms, one
/// axis at a time. Each axis pass transforms `numel / shape[axis]` independent
/// lines; below `min_parallel_lines` the pass stays on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FftConfig {
    /// Minimum number of lines in one axis pass before rayon is used
    pub min_parallel_lines: usize,
}

impl FftConfig {
    /// CPU configuration: small grids are cheaper to transform serially than
    /// to schedule across the thread pool.
    pub const CPU: Self = Self {
        min_parallel_lines: 64,
    };
}

impl Default for FftConfig {
    fn default() -> Self {
        Self::CPU
    }
}

/// Sampling configuration for grid-based estimates on the unit polytorus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Requested number of samples per axis, rounded up to a power of two
    pub samples_per_axis: usize,
}

impl SamplingConfig {
    /// Create a configuration with the given number of samples per axis
    pub const fn new(samples_per_axis: usize) -> Self {
        Self { samples_per_axis }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SUP_NORM_SAMPLES)
    }
}
