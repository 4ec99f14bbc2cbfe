//! Coefficient-wise combination, scalar arithmetic and comparison
//!
//! Unary and binary combinators assume the combining function preserves zero
//! (`f(0) = 0`, `f(0, 0) = 0`). This is a documented precondition, not a
//! checked one: violating it does not fail, it just leaves extra zeros in the
//! result's support.

use super::ComplexL0SequenceMD;
use crate::algorithm::support::union_range;
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use crate::runtime::Backend;
use num_traits::Zero;
use std::ops::Range;

impl<B: Backend> ComplexL0SequenceMD<B> {
    /// Apply `f` to every coefficient over the support box
    ///
    /// `f` must satisfy `f(0) = 0`.
    pub fn map_coefficients(&self, f: impl Fn(B::Complex) -> B::Complex) -> Self {
        let mut dense = self.coefficients();
        dense.map_inplace(f);
        Self::from_dense(dense.as_slice(), dense.shape(), &self.support_start())
    }

    /// Combine two sequences coefficient by coefficient over the union of
    /// their support boxes
    ///
    /// `f` must satisfy `f(0, 0) = 0`.
    pub fn zip_coefficients(
        &self,
        other: &Self,
        f: impl Fn(B::Complex, B::Complex) -> B::Complex,
    ) -> Result<Self> {
        let union = self.union_support(other)?;
        let mut dense = self.coefficients_in(&union)?;
        dense.zip_map_inplace(&other.coefficients_in(&union)?, f)?;
        let starts: Vec<i64> = union.iter().map(|r| r.start).collect();
        Ok(Self::from_dense(dense.as_slice(), dense.shape(), &starts))
    }

    /// Per-axis union of the occupied support boxes of two sequences
    pub(crate) fn union_support(&self, other: &Self) -> Result<Vec<Range<i64>>> {
        if self.dim != other.dim {
            return Err(Error::dimension_mismatch(self.dim, other.dim));
        }
        Ok(match (self.occupied_support(), other.occupied_support()) {
            (Some(a), Some(b)) => a.iter().zip(&b).map(|(x, y)| union_range(x, y)).collect(),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => vec![0..0; self.dim],
        })
    }

    /// Coefficient-wise sum
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_coefficients(other, |a, b| a + b)
    }

    /// Coefficient-wise difference
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_coefficients(other, |a, b| a - b)
    }

    /// Add a scalar at the zero multi-index
    pub fn add_scalar(&self, c: B::Complex) -> Self {
        self.update_origin(|x| x + c)
    }

    /// Subtract a scalar at the zero multi-index
    pub fn sub_scalar(&self, c: B::Complex) -> Self {
        self.update_origin(|x| x - c)
    }

    /// `c - self`
    pub fn rsub_scalar(&self, c: B::Complex) -> Self {
        self.map_coefficients(|x| -x).add_scalar(c)
    }

    fn update_origin(&self, f: impl Fn(B::Complex) -> B::Complex) -> Self {
        let mut out = self.duplicate();
        let origin = vec![0; self.dim];
        let value = f(out.get_unchecked(&origin));
        out.set_unchecked(&origin, value);
        out
    }

    /// Whether every coefficient on the union support differs by at most `tol`
    /// in magnitude. Sequences of different dimensions are never close.
    pub fn approx_eq(&self, other: &Self, tol: <B::Complex as ComplexElement>::Real) -> bool {
        self.max_abs_diff(other).is_some_and(|diff| diff <= tol)
    }

    fn max_abs_diff(&self, other: &Self) -> Option<<B::Complex as ComplexElement>::Real> {
        let union = self.union_support(other).ok()?;
        let a = self.materialize(&union);
        let b = other.materialize(&union);
        Some(
            a.as_slice()
                .iter()
                .zip(b.as_slice())
                .map(|(&x, &y)| (x - y).magnitude())
                .fold(Zero::zero(), |acc, d| if d > acc { d } else { acc }),
        )
    }
}

/// Sequences are equal when their coefficients agree everywhere on `Z^d`;
/// stored zeros at the boundary do not matter.
impl<B: Backend> PartialEq for ComplexL0SequenceMD<B> {
    fn eq(&self, other: &Self) -> bool {
        let Ok(union) = self.union_support(other) else {
            return false;
        };
        self.materialize(&union) == other.materialize(&union)
    }
}
