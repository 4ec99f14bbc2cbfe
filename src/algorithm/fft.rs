//! FFT configuration shared by all transform backends
//!
//! # Algorithm: Stockham Autosort FFT
//!
//! The CPU backend uses the Stockham radix-2 algorithm along every axis:
//!
//! ```text
//! For each stage s = 0..log2(N):
//!     half_m = 2^s
//!     m = 2^(s+1)
//!     For each group g = 0..(N/m):
//!         For each butterfly b = 0..half_m:
//!             twiddle = exp(sign * 2πi * b / m)
//!             even = src[g * half_m + b]
//!             odd = src[N/2 + g * half_m + b] * twiddle
//!             dst[g * m + b] = even + odd
//!             dst[g * m + b + half_m] = even - odd
//!     swap(src, dst)
//! ```
//!
//! An N-dimensional transform applies this to every line of every axis; the
//! per-axis normalisation factors multiply.
//!
//! # Sign convention
//!
//! The forward transform uses `exp(-2πi jk/N)`, the inverse `exp(+2πi jk/N)`.
//! With [`FftNormalization::None`] the inverse transform of a coefficient
//! array is therefore the array of polynomial values at `ω^k`, where `ω` is
//! the principal N-th root of unity.

use crate::error::{Error, Result};

// ============================================================================
// FFT Configuration
// ============================================================================

/// Direction of FFT computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftDirection {
    /// Forward FFT: coefficients → frequency domain
    /// Uses twiddle factor: e^(-2πi * k / N)
    Forward,
    /// Inverse FFT: frequency domain → coefficients
    /// Uses twiddle factor: e^(+2πi * k / N)
    Inverse,
}

/// Normalization mode for FFT
///
/// | Mode     | Forward Factor | Inverse Factor | Roundtrip          |
/// |----------|----------------|----------------|--------------------|
/// | None     | 1              | 1              | ifft(fft(x)) = N*x |
/// | Backward | 1              | 1/N            | ifft(fft(x)) = x   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftNormalization {
    /// No normalization (forward: 1, inverse: 1)
    ///
    /// The inverse transform then evaluates a coefficient array at the roots
    /// of unity.
    None,
    /// Normalize inverse by 1/N (forward: 1, inverse: 1/N)
    #[default]
    Backward,
}

impl FftNormalization {
    /// Get the normalization factor for a given direction and axis length
    #[inline]
    pub fn factor(self, direction: FftDirection, n: usize) -> f64 {
        match (self, direction) {
            (Self::Backward, FftDirection::Inverse) => 1.0 / n as f64,
            _ => 1.0,
        }
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Check if a number is a power of 2
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Validate FFT size is power of 2
pub fn validate_fft_size(n: usize, op: &'static str) -> Result<()> {
    if !is_power_of_two(n) {
        let next = n.next_power_of_two();
        let prev = next / 2;
        let suggestion = if prev >= 2 && prev < n {
            format!(
                "{} requires power-of-2 size, got {}. \
                 Consider truncating to {} or padding to {}.",
                op, n, prev, next
            )
        } else {
            format!(
                "{} requires power-of-2 size, got {}. \
                 Consider padding to {}.",
                op, n, next
            )
        };
        return Err(Error::InvalidArgument {
            arg: "n",
            reason: suggestion,
        });
    }
    Ok(())
}

/// Validate every axis of a transform shape
pub fn validate_fft_shape(shape: &[usize], op: &'static str) -> Result<()> {
    if shape.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "input",
            reason: format!("{op} requires at least 1D input"),
        });
    }
    shape.iter().try_for_each(|&n| validate_fft_size(n, op))
}
