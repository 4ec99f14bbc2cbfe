//! Construction from coefficient data and dense materialisation

use super::{ComplexL0SequenceMD, Storage};
use crate::algorithm::support::range_len;
use crate::error::{Error, Result};
use crate::runtime::Backend;
use crate::tensor::{Nested, Tensor};
use std::ops::Range;

impl<B: Backend> ComplexL0SequenceMD<B> {
    /// Create a dimension-1 sequence from a coefficient list whose first
    /// entry sits at index `start`
    pub fn from_coefficients(coeffs: Vec<B::Complex>, start: i64) -> Self {
        Self {
            dim: 1,
            start,
            storage: Storage::Leaf(coeffs),
        }
    }

    /// Create a sequence from a dense tensor whose element `[0, ..., 0]`
    /// sits at multi-index `starts`
    pub fn from_tensor(coeffs: &Tensor<B::Complex>, starts: &[i64]) -> Result<Self> {
        check_starts(starts)?;
        if coeffs.ndim() != starts.len() {
            return Err(Error::dimension_mismatch(starts.len(), coeffs.ndim()));
        }
        Ok(Self::from_dense(coeffs.as_slice(), coeffs.shape(), starts))
    }

    /// Build from row-major data; `shape` and `starts` have one entry per axis.
    pub(crate) fn from_dense(data: &[B::Complex], shape: &[usize], starts: &[i64]) -> Self {
        debug_assert_eq!(shape.len(), starts.len());
        debug_assert_eq!(data.len(), shape.iter().product::<usize>());

        let storage = if starts.len() == 1 {
            Storage::Leaf(data.to_vec())
        } else {
            let stride: usize = shape[1..].iter().product();
            Storage::Nested(
                (0..shape[0])
                    .map(|row| {
                        let rows = &data[row * stride..(row + 1) * stride];
                        Self::from_dense(rows, &shape[1..], &starts[1..])
                    })
                    .collect(),
            )
        };
        Self {
            dim: starts.len(),
            start: starts[0],
            storage,
        }
    }

    /// Create a sequence from a nested list whose first entry at every level
    /// sits at the matching entry of `starts`
    ///
    /// Rows may have different lengths. The nesting depth must equal the
    /// number of starts, and a single level may not mix scalars and lists.
    pub fn from_nested(coeffs: &Nested<B::Complex>, starts: &[i64]) -> Result<Self> {
        check_starts(starts)?;
        if !coeffs.fits_depth(starts.len()) {
            let depth = coeffs.depth();
            if depth != starts.len() {
                return Err(Error::dimension_mismatch(starts.len(), depth));
            }
            return Err(Error::malformed(
                "every branch must nest to the same depth without mixing scalars and lists",
            ));
        }
        Self::from_nested_level(coeffs, starts)
    }

    fn from_nested_level(coeffs: &Nested<B::Complex>, starts: &[i64]) -> Result<Self> {
        let Nested::List(items) = coeffs else {
            return Err(Error::malformed("expected a list, found a scalar"));
        };
        let storage = if starts.len() == 1 {
            let values = items
                .iter()
                .map(|item| match item {
                    Nested::Scalar(c) => Ok(*c),
                    Nested::List(_) => Err(Error::malformed("expected a scalar, found a list")),
                })
                .collect::<Result<Vec<_>>>()?;
            Storage::Leaf(values)
        } else {
            let children = items
                .iter()
                .map(|item| Self::from_nested_level(item, &starts[1..]))
                .collect::<Result<Vec<_>>>()?;
            Storage::Nested(children)
        };
        Ok(Self {
            dim: starts.len(),
            start: starts[0],
            storage,
        })
    }

    /// Dense, zero-filled coefficient array over [`Self::support`]
    pub fn coefficients(&self) -> Tensor<B::Complex> {
        let ranges = self.support();
        self.materialize(&ranges)
    }

    /// Dense, zero-filled coefficient array over the half-open box `ranges`
    ///
    /// Element `[j_0, ..., j_{d-1}]` of the result is the coefficient at
    /// `(ranges[0].start + j_0, ..., ranges[d-1].start + j_{d-1})`.
    pub fn coefficients_in(&self, ranges: &[Range<i64>]) -> Result<Tensor<B::Complex>> {
        self.check_arity(ranges.len())?;
        Ok(self.materialize(ranges))
    }

    pub(super) fn materialize(&self, ranges: &[Range<i64>]) -> Tensor<B::Complex> {
        let shape: Vec<usize> = ranges.iter().map(range_len).collect();
        let mut dense = Tensor::zeros(&shape);
        self.fill_dense(ranges, dense.as_mut_slice());
        dense
    }

    fn fill_dense(&self, ranges: &[Range<i64>], out: &mut [B::Complex]) {
        if out.is_empty() {
            return;
        }
        let stride = out.len() / range_len(&ranges[0]);
        for (j, x) in ranges[0].clone().enumerate() {
            let Some(i) = self.offset(x) else {
                continue;
            };
            match &self.storage {
                Storage::Leaf(coeffs) => out[j] = coeffs[i],
                Storage::Nested(children) => {
                    children[i].fill_dense(&ranges[1..], &mut out[j * stride..(j + 1) * stride]);
                }
            }
        }
    }

    /// Deep copy rebuilt over the support box
    ///
    /// Unlike `clone`, stored slots outside the support box (vacant rows at
    /// the boundary of inner axes) are not carried over.
    pub fn duplicate(&self) -> Self {
        let dense = self.coefficients();
        Self::from_dense(dense.as_slice(), dense.shape(), &self.support_start())
    }
}

fn check_starts(starts: &[i64]) -> Result<()> {
    if starts.is_empty() {
        return Err(Error::InvalidArgument {
            arg: "starts",
            reason: "a sequence needs at least one axis".to_string(),
        });
    }
    Ok(())
}
