//! FFT-based polynomial multiplication
//!
//! # Algorithm
//!
//! ```text
//! len_c[k] = len_a[k] + len_b[k] - 1          linear convolution length
//! n[k]     = next_power_of_two(len_c[k])      transform length
//! A = fft(a over [start_a, start_a + n))      zero-padded windows
//! B = fft(b over [start_b, start_b + n))
//! c = ifft(A * B)[..len_c]                    pointwise product, truncate
//! start_c = start_a + start_b
//! ```
//!
//! Padding every axis to at least `len_c` makes the cyclic convolution of
//! the transform equal to the linear one.

use super::PolynomialMD;
use crate::algorithm::support::range_len;
use crate::error::{Error, Result};
use crate::runtime::Backend;
use std::ops::Range;
use tracing::debug;

impl<B: Backend> PolynomialMD<B> {
    /// Polynomial product via the backend's multidimensional FFT
    ///
    /// Multiplying by a polynomial with no stored coefficients gives the
    /// empty polynomial.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.dim() != other.dim() {
            return Err(Error::dimension_mismatch(self.dim(), other.dim()));
        }
        if self.is_empty() || other.is_empty() {
            return Self::new(self.dim());
        }

        let sup_a = self.support();
        let sup_b = other.support();
        let len_a: Vec<usize> = sup_a.iter().map(range_len).collect();
        let len_b: Vec<usize> = sup_b.iter().map(range_len).collect();
        let len_c: Vec<usize> = len_a.iter().zip(&len_b).map(|(a, b)| a + b - 1).collect();
        let padded: Vec<usize> = len_c.iter().map(|n| n.next_power_of_two()).collect();
        debug!(lhs = ?len_a, rhs = ?len_b, padded = ?padded, "fft polynomial product");

        let window = |starts: &[Range<i64>]| -> Vec<Range<i64>> {
            starts
                .iter()
                .zip(&padded)
                .map(|(r, &n)| r.start..r.start + n as i64)
                .collect()
        };
        let mut spectrum = B::fft_md(&self.coefficients_in(&window(&sup_a))?)?;
        let other_spectrum = B::fft_md(&other.coefficients_in(&window(&sup_b))?)?;
        spectrum.zip_map_inplace(&other_spectrum, |x, y| x * y)?;

        let product = B::ifft_md(&spectrum, true)?.truncated(&len_c)?;
        let starts: Vec<i64> = sup_a.iter().zip(&sup_b).map(|(a, b)| a.start + b.start).collect();
        Ok(Self::from_dense(&product, &starts))
    }
}
