//! Polynomial evaluation: Horner, roots of unity, sup-norm estimate

use super::PolynomialMD;
use crate::algorithm::support::range_len;
use crate::config::SamplingConfig;
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use crate::runtime::Backend;
use crate::tensor::Tensor;
use num_traits::Zero;
use tracing::debug;

type Real<B> = <<B as Backend>::Complex as ComplexElement>::Real;

impl<B: Backend> PolynomialMD<B> {
    /// Value at the point `z = (z_1, ..., z_d)`
    ///
    /// Nested Horner evaluation over the support box, times `z^start` for the
    /// Laurent offset. A component `z_k = 0` with a negative start on axis `k`
    /// divides by zero, following the element type.
    pub fn eval(&self, z: &[B::Complex]) -> Result<B::Complex> {
        if z.len() != self.dim() {
            return Err(Error::dimension_mismatch(self.dim(), z.len()));
        }
        if self.is_empty() {
            return Ok(B::Complex::ZERO);
        }
        let value = self.coefficients().horner_eval(z)?;
        let offset = z
            .iter()
            .zip(self.support_start())
            .fold(B::Complex::ONE, |acc, (&zk, nk)| acc * zk.powi(nk));
        Ok(value * offset)
    }

    /// Values on the grid of roots of unity
    ///
    /// Each `n[k]` is rounded up to a power of two. Element `[j_1, ..., j_d]`
    /// of the result is `p(w_1^j_1, ..., w_d^j_d)` with `w_k = exp(2πi / n[k])`.
    ///
    /// The polynomial is materialised over a power-of-two window `M[k]` that
    /// covers both `n[k]` and the support, rolled by the support start so that
    /// negative exponents wrap around, transformed with the un-normalised
    /// inverse FFT, then decimated by `M[k] / n[k]`.
    pub fn eval_at_roots_of_unity(&self, n: &[usize]) -> Result<Tensor<B::Complex>> {
        if n.len() != self.dim() {
            return Err(Error::dimension_mismatch(self.dim(), n.len()));
        }
        let support = self.support();
        let grid: Vec<usize> = n.iter().map(|&k| k.next_power_of_two()).collect();
        let window: Vec<usize> = grid
            .iter()
            .zip(&support)
            .map(|(&k, r)| k.max(range_len(r)).next_power_of_two())
            .collect();
        debug!(requested = ?n, grid = ?grid, window = ?window, "roots of unity evaluation");

        let ranges: Vec<_> = support
            .iter()
            .zip(&window)
            .map(|(r, &m)| r.start..r.start + m as i64)
            .collect();
        let starts: Vec<i64> = support.iter().map(|r| r.start).collect();
        let coeffs = self.coefficients_in(&ranges)?.rolled(&starts)?;

        let values = B::ifft_md(&coeffs, false)?;
        let steps: Vec<usize> = window.iter().zip(&grid).map(|(&m, &k)| m / k).collect();
        values.decimated(&steps)
    }

    /// [`Self::eval_at_roots_of_unity`] with the same grid size on every axis
    pub fn eval_at_roots_of_unity_uniform(&self, n: usize) -> Result<Tensor<B::Complex>> {
        self.eval_at_roots_of_unity(&vec![n; self.dim()])
    }

    /// Estimate of `max |p|` over the unit polytorus from an `n`-point grid
    /// per axis (`n` rounded up to a power of two)
    ///
    /// The estimate is a lower bound that tightens as `n` grows; no error
    /// bound is reported.
    pub fn sup_norm(&self, n: usize) -> Result<Real<B>> {
        let values = self.eval_at_roots_of_unity_uniform(n)?;
        Ok(values
            .as_slice()
            .iter()
            .map(|c| c.magnitude())
            .fold(<Real<B> as Zero>::zero(), |acc, m| if m > acc { m } else { acc }))
    }

    /// [`Self::sup_norm`] with the sample count taken from `config`
    pub fn sup_norm_with(&self, config: &SamplingConfig) -> Result<Real<B>> {
        self.sup_norm(config.samples_per_axis)
    }
}
