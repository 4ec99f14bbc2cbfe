//! Multivariate Laurent polynomials
//!
//! A [`PolynomialMD`] is a bounded-support sequence read as a formal Laurent
//! polynomial: the coefficient at multi-index `k = (k_1, ..., k_d)` multiplies
//! `z_1^k_1 * ... * z_d^k_d`, and every `k_j` may be negative.
//!
//! All read-only sequence queries (`get`, `support`, `coefficients`, norms)
//! are available through `Deref`. Operations that build a new polynomial are
//! defined here and in the submodules:
//!
//! - structural: [`PolynomialMD::shift`], [`PolynomialMD::conjugate`],
//!   [`PolynomialMD::schwarz_transform`], [`PolynomialMD::truncate`]
//! - products: FFT convolution ([`PolynomialMD::try_mul`]) and scalars
//! - evaluation: Horner, roots of unity and the sup-norm estimate

mod adapter;
mod display;
mod eval;
mod mul;
mod ops;

pub use adapter::UnivariateLaurent;

use crate::algorithm::support::{half_open, range_len};
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use crate::runtime::{Backend, CpuBackend};
use crate::sequence::ComplexL0SequenceMD;
use crate::tensor::{Nested, Tensor};
use std::ops::{Deref, RangeInclusive};

/// Fourier multiplier of the Schwarz transform at multi-index `k`
///
/// `1` at the origin, `2` when every component is `<= 0` (and `k` is not the
/// origin), `0` as soon as any component is positive.
pub fn schwarz_multiplier(k: &[i64]) -> u8 {
    if k.iter().any(|&x| x > 0) {
        0
    } else if k.iter().all(|&x| x == 0) {
        1
    } else {
        2
    }
}

/// Multivariate Laurent polynomial with complex coefficients
///
/// Equality is the semantic equality of the coefficient sequences.
#[derive(Clone, Debug)]
pub struct PolynomialMD<B: Backend = CpuBackend> {
    seq: ComplexL0SequenceMD<B>,
}

impl<B: Backend> PartialEq for PolynomialMD<B> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<B: Backend> Deref for PolynomialMD<B> {
    type Target = ComplexL0SequenceMD<B>;

    fn deref(&self) -> &Self::Target {
        &self.seq
    }
}

impl<B: Backend> From<ComplexL0SequenceMD<B>> for PolynomialMD<B> {
    fn from(seq: ComplexL0SequenceMD<B>) -> Self {
        Self { seq }
    }
}

impl<B: Backend> PolynomialMD<B> {
    /// The zero polynomial in `dim` variables
    pub fn new(dim: usize) -> Result<Self> {
        ComplexL0SequenceMD::new(dim).map(Self::from)
    }

    /// Univariate polynomial from a coefficient list starting at exponent `start`
    pub fn from_coefficients(coeffs: Vec<B::Complex>, start: i64) -> Self {
        ComplexL0SequenceMD::from_coefficients(coeffs, start).into()
    }

    /// Polynomial from a dense coefficient tensor whose element `[0, ..., 0]`
    /// is the coefficient of `z^starts`
    pub fn from_tensor(coeffs: &Tensor<B::Complex>, starts: &[i64]) -> Result<Self> {
        ComplexL0SequenceMD::from_tensor(coeffs, starts).map(Self::from)
    }

    /// Polynomial from a (possibly ragged) nested coefficient list
    pub fn from_nested(coeffs: &Nested<B::Complex>, starts: &[i64]) -> Result<Self> {
        ComplexL0SequenceMD::from_nested(coeffs, starts).map(Self::from)
    }

    /// Single term `coeff * z^exponents`
    pub fn monomial(coeff: B::Complex, exponents: &[i64]) -> Result<Self> {
        let shape = vec![1; exponents.len()];
        let dense = Tensor::from_vec(vec![coeff], &shape);
        Self::from_tensor(&dense, exponents)
    }

    /// Constant polynomial in `dim` variables
    pub fn constant(c: B::Complex, dim: usize) -> Result<Self> {
        Self::monomial(c, &vec![0; dim])
    }

    fn from_dense(dense: &Tensor<B::Complex>, starts: &[i64]) -> Self {
        ComplexL0SequenceMD::from_dense(dense.as_slice(), dense.shape(), starts).into()
    }

    /// Underlying coefficient sequence
    pub fn as_sequence(&self) -> &ComplexL0SequenceMD<B> {
        &self.seq
    }

    /// Consume the polynomial, returning its coefficient sequence
    pub fn into_sequence(self) -> ComplexL0SequenceMD<B> {
        self.seq
    }

    /// Write a coefficient, growing storage as needed
    pub fn set(&mut self, index: &[i64], value: B::Complex) -> Result<()> {
        self.seq.set(index, value)
    }

    /// Multiply by `z_axis^k`
    ///
    /// Only the support start of `axis` moves. The result owns a deep copy of
    /// the coefficient storage, so later writes to either polynomial do not
    /// affect the other.
    pub fn shift(&self, k: i64, axis: usize) -> Result<Self> {
        if axis >= self.dim() {
            return Err(Error::InvalidAxis {
                axis,
                ndim: self.dim(),
            });
        }
        let mut seq = self.seq.clone();
        seq.shift_axis(axis, k);
        Ok(seq.into())
    }

    /// Per-axis support length minus one (`-1` on an empty axis)
    ///
    /// This is the size of the bounding box, so it overcounts when boundary
    /// coefficients happen to be zero.
    pub fn effective_degree(&self) -> Vec<i64> {
        self.support().iter().map(|r| range_len(r) as i64 - 1).collect()
    }

    /// The polynomial `p*` with `p*_k = conj(p_{-k})`
    ///
    /// On the unit polytorus `p*(z) = conj(p(z))`.
    pub fn conjugate(&self) -> Self {
        let support = self.support();
        let mut dense = self.coefficients().reversed();
        dense.map_inplace(|x| x.conj());
        let starts: Vec<i64> = support.iter().map(|r| 1 - r.end).collect();
        Self::from_dense(&dense, &starts)
    }

    /// Weight every coefficient by [`schwarz_multiplier`] of its multi-index
    ///
    /// The result only has exponents with no positive component. For a
    /// univariate `p` that is real on the unit circle, `Re s = p` there.
    pub fn schwarz_transform(&self) -> Self {
        let starts = self.support_start();
        let mut dense = self.coefficients();
        let shape = dense.shape().clone();
        let mut k = vec![0i64; starts.len()];
        for (flat, c) in dense.as_mut_slice().iter_mut().enumerate() {
            for (axis, (&j, &s)) in shape.unravel(flat).iter().zip(&starts).enumerate() {
                k[axis] = s + j as i64;
            }
            *c = match schwarz_multiplier(&k) {
                0 => B::Complex::ZERO,
                1 => *c,
                _ => *c + *c,
            };
        }
        Self::from_dense(&dense, &starts)
    }

    /// Restrict to the box `ranges[0] x ... x ranges[d-1]`, bounds inclusive
    ///
    /// The box may extend past the current support; the extra coefficients
    /// are zero.
    pub fn truncate(&self, ranges: &[RangeInclusive<i64>]) -> Result<Self> {
        let ranges: Vec<_> = ranges.iter().map(half_open).collect();
        let dense = self.coefficients_in(&ranges)?;
        let starts: Vec<i64> = ranges.iter().map(|r| r.start).collect();
        Ok(Self::from_dense(&dense, &starts))
    }

    /// Multiply every coefficient by a scalar
    pub fn scale(&self, c: B::Complex) -> Self {
        self.seq.map_coefficients(|x| x * c).into()
    }

    /// Divide every coefficient by a scalar
    ///
    /// Division by zero follows the element type (NaN coefficients).
    pub fn div_scalar(&self, c: B::Complex) -> Self {
        self.seq.map_coefficients(|x| x / c).into()
    }

    /// Apply a zero-preserving function to every coefficient
    pub fn map_coefficients(&self, f: impl Fn(B::Complex) -> B::Complex) -> Self {
        self.seq.map_coefficients(f).into()
    }

    /// Coefficient-wise sum
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.seq.try_add(&other.seq).map(Self::from)
    }

    /// Coefficient-wise difference
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.seq.try_sub(&other.seq).map(Self::from)
    }

    /// Add a constant term
    pub fn add_scalar(&self, c: B::Complex) -> Self {
        self.seq.add_scalar(c).into()
    }

    /// Subtract a constant term
    pub fn sub_scalar(&self, c: B::Complex) -> Self {
        self.seq.sub_scalar(c).into()
    }

    /// `c - self`
    pub fn rsub_scalar(&self, c: B::Complex) -> Self {
        self.seq.rsub_scalar(c).into()
    }

    /// Coefficient-wise closeness, see [`ComplexL0SequenceMD::approx_eq`]
    pub fn approx_eq(&self, other: &Self, tol: <B::Complex as ComplexElement>::Real) -> bool {
        self.seq.approx_eq(&other.seq, tol)
    }
}
