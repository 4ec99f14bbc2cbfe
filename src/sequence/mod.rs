//! Bounded-support sequences on the integer lattice `Z^d`
//!
//! A [`ComplexL0SequenceMD`] stores a finitely supported sequence of complex
//! numbers indexed by `d`-tuples of (possibly negative) integers. Storage is
//! recursive: a dimension-1 sequence owns a contiguous buffer of coefficients,
//! a dimension-`d` sequence owns a buffer of dimension-`(d-1)` children. Each
//! level carries a signed `start` so that index `i` lives at buffer position
//! `i - start`.
//!
//! ```text
//! d = 2, start = -1
//! ├── [-1] Leaf { start: 0, [a, b] }        a at (-1, 0), b at (-1, 1)
//! ├── [ 0] Leaf { start: 0, [] }            vacant
//! └── [ 1] Leaf { start: 2, [c] }           c at (1, 2)
//! ```
//!
//! Reads outside the stored box return zero. Writes outside it grow the
//! buffers at either end. Storage never shrinks on its own; rebuilding over a
//! smaller box (`truncate`, `duplicate`) is the only way to drop zeros.
//!
//! Every operation that returns a sequence builds fresh storage, so no two
//! sequences ever share a buffer.

mod coefficients;
mod combine;
mod norms;
mod ops;

use crate::algorithm::support::minimal_covering_range;
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use crate::runtime::{Backend, CpuBackend};
use std::ops::Range;
use tracing::trace;

/// Finitely supported complex sequence of dimension `d >= 1`
///
/// The backend `B` fixes the coefficient type and the transforms used by
/// polynomial operations built on top of the sequence.
#[derive(Clone, Debug)]
pub struct ComplexL0SequenceMD<B: Backend = CpuBackend> {
    dim: usize,
    start: i64,
    storage: Storage<B>,
}

#[derive(Clone, Debug)]
enum Storage<B: Backend> {
    /// Coefficients of a dimension-1 sequence
    Leaf(Vec<B::Complex>),
    /// Children of a dimension-`d` sequence, each of dimension `d - 1`
    Nested(Vec<ComplexL0SequenceMD<B>>),
}

impl<B: Backend> ComplexL0SequenceMD<B> {
    /// Create an empty sequence of the given dimension
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(Error::InvalidArgument {
                arg: "dim",
                reason: "sequence dimension must be at least 1".to_string(),
            });
        }
        Ok(Self::empty(dim))
    }

    pub(crate) fn empty(dim: usize) -> Self {
        debug_assert!(dim >= 1);
        let storage = if dim == 1 {
            Storage::Leaf(Vec::new())
        } else {
            Storage::Nested(Vec::new())
        };
        Self {
            dim,
            start: 0,
            storage,
        }
    }

    /// Number of lattice axes
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored slots along the outer axis
    #[inline]
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Leaf(coeffs) => coeffs.len(),
            Storage::Nested(children) => children.len(),
        }
    }

    /// Whether no coefficient is stored at all
    ///
    /// Equivalently, some axis of [`Self::support`] is empty.
    pub fn is_empty(&self) -> bool {
        match &self.storage {
            Storage::Leaf(coeffs) => coeffs.is_empty(),
            Storage::Nested(children) => children.iter().all(Self::is_empty),
        }
    }

    /// Buffer position of outer index `x`, if it is stored
    #[inline]
    fn offset(&self, x: i64) -> Option<usize> {
        let i = x.checked_sub(self.start)?;
        (i >= 0 && (i as usize) < self.len()).then_some(i as usize)
    }

    fn check_arity(&self, got: usize) -> Result<()> {
        if got != self.dim {
            return Err(Error::dimension_mismatch(self.dim, got));
        }
        Ok(())
    }

    /// Coefficient at multi-index `index`; zero outside the stored box
    pub fn get(&self, index: &[i64]) -> Result<B::Complex> {
        self.check_arity(index.len())?;
        Ok(self.get_unchecked(index))
    }

    fn get_unchecked(&self, index: &[i64]) -> B::Complex {
        let Some(i) = self.offset(index[0]) else {
            return B::Complex::ZERO;
        };
        match &self.storage {
            Storage::Leaf(coeffs) => coeffs[i],
            Storage::Nested(children) => children[i].get_unchecked(&index[1..]),
        }
    }

    /// Write `value` at multi-index `index`, growing storage as needed
    pub fn set(&mut self, index: &[i64], value: B::Complex) -> Result<()> {
        self.check_arity(index.len())?;
        self.set_unchecked(index, value);
        Ok(())
    }

    fn set_unchecked(&mut self, index: &[i64], value: B::Complex) {
        let i = self.grow_to(index[0]);
        let dim = self.dim;
        match &mut self.storage {
            Storage::Leaf(coeffs) => coeffs[i] = value,
            Storage::Nested(children) => {
                debug_assert_eq!(children[i].dim, dim - 1);
                children[i].set_unchecked(&index[1..], value);
            }
        }
    }

    /// Extend storage along the outer axis so that `x` is stored, returning
    /// its buffer position. New slots are zeros or fresh empty children.
    fn grow_to(&mut self, x: i64) -> usize {
        let len = self.len();
        if len == 0 {
            // An empty buffer is re-anchored at the first written index
            self.start = x;
            self.extend_back(1);
            return 0;
        }
        if x < self.start {
            let count = (self.start - x) as usize;
            trace!(dim = self.dim, count, from = self.start, to = x, "prepend slots");
            self.extend_front(count);
            self.start = x;
        } else if x >= self.start + len as i64 {
            let count = (x - self.start) as usize + 1 - len;
            trace!(dim = self.dim, count, "append slots");
            self.extend_back(count);
        }
        (x - self.start) as usize
    }

    fn extend_back(&mut self, count: usize) {
        let dim = self.dim;
        match &mut self.storage {
            Storage::Leaf(coeffs) => coeffs.resize(coeffs.len() + count, B::Complex::ZERO),
            Storage::Nested(children) => {
                children.extend(std::iter::repeat_with(|| Self::empty(dim - 1)).take(count));
            }
        }
    }

    fn extend_front(&mut self, count: usize) {
        let dim = self.dim;
        match &mut self.storage {
            Storage::Leaf(coeffs) => {
                coeffs.splice(0..0, std::iter::repeat_n(B::Complex::ZERO, count));
            }
            Storage::Nested(children) => {
                children.splice(0..0, std::iter::repeat_with(|| Self::empty(dim - 1)).take(count));
            }
        }
    }

    /// Per-axis half-open support box
    ///
    /// Axis 0 is exactly the stored range `[start, start + len)`. Inner axes
    /// are the minimal covering range of the children that store at least one
    /// coefficient; vacant children impose no constraint, and an inner axis
    /// with no contributors is `0..0`.
    pub fn support(&self) -> Vec<Range<i64>> {
        let mut support = Vec::with_capacity(self.dim);
        support.push(self.start..self.start + self.len() as i64);
        if let Storage::Nested(children) = &self.storage {
            let boxes: Vec<Vec<Range<i64>>> = children
                .iter()
                .filter(|child| !child.is_empty())
                .map(Self::support)
                .collect();
            if boxes.is_empty() {
                support.extend(std::iter::repeat_n(0..0, self.dim - 1));
            } else {
                support.extend(minimal_covering_range(&boxes));
            }
        }
        support
    }

    /// Lower corner of the support box
    pub fn support_start(&self) -> Vec<i64> {
        self.support().iter().map(|r| r.start).collect()
    }

    /// Support box, or `None` when nothing is stored
    pub(crate) fn occupied_support(&self) -> Option<Vec<Range<i64>>> {
        (!self.is_empty()).then(|| self.support())
    }

    /// Visit every stored coefficient with its multi-index, in lexicographic order
    pub(crate) fn for_each_stored(&self, mut f: impl FnMut(&[i64], B::Complex)) {
        let mut prefix = Vec::with_capacity(self.dim);
        self.visit_stored(&mut prefix, &mut f);
    }

    fn visit_stored(&self, prefix: &mut Vec<i64>, f: &mut impl FnMut(&[i64], B::Complex)) {
        match &self.storage {
            Storage::Leaf(coeffs) => {
                for (i, &c) in coeffs.iter().enumerate() {
                    prefix.push(self.start + i as i64);
                    f(prefix, c);
                    prefix.pop();
                }
            }
            Storage::Nested(children) => {
                for (i, child) in children.iter().enumerate() {
                    prefix.push(self.start + i as i64);
                    child.visit_stored(prefix, f);
                    prefix.pop();
                }
            }
        }
    }

    /// Add `k` to the start of `axis` at every level that stores it.
    pub(crate) fn shift_axis(&mut self, axis: usize, k: i64) {
        if axis == 0 {
            self.start += k;
            return;
        }
        if let Storage::Nested(children) = &mut self.storage {
            for child in children {
                child.shift_axis(axis - 1, k);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::Complex128;

    type Seq = ComplexL0SequenceMD<CpuBackend<Complex128>>;

    fn c(re: f64) -> Complex128 {
        Complex128::new(re, 0.0)
    }

    #[test]
    fn test_new_rejects_zero_dim() {
        assert!(Seq::new(0).is_err());
        let s = Seq::new(3).unwrap();
        assert_eq!(s.dim(), 3);
        assert!(s.is_empty());
        assert_eq!(s.support(), vec![0..0, 0..0, 0..0]);
    }

    #[test]
    fn test_get_outside_support_is_zero() {
        let mut s = Seq::new(2).unwrap();
        s.set(&[1, -2], c(5.0)).unwrap();
        assert_eq!(s.get(&[1, -2]).unwrap(), c(5.0));
        assert_eq!(s.get(&[0, -2]).unwrap(), Complex128::ZERO);
        assert_eq!(s.get(&[1, 7]).unwrap(), Complex128::ZERO);
        assert_eq!(s.get(&[i64::MIN, i64::MAX]).unwrap(), Complex128::ZERO);
    }

    #[test]
    fn test_arity_mismatch() {
        let mut s = Seq::new(2).unwrap();
        assert_eq!(s.get(&[0]), Err(Error::dimension_mismatch(2, 1)));
        assert!(s.set(&[0, 0, 0], c(1.0)).is_err());
    }

    #[test]
    fn test_set_grows_both_directions() {
        let mut s = Seq::new(1).unwrap();
        s.set(&[3], c(1.0)).unwrap();
        assert_eq!(s.support(), vec![3..4]);
        s.set(&[-2], c(2.0)).unwrap();
        assert_eq!(s.support(), vec![-2..4]);
        s.set(&[6], c(3.0)).unwrap();
        assert_eq!(s.support(), vec![-2..7]);
        assert_eq!(s.len(), 9);
        assert_eq!(s.get(&[0]).unwrap(), Complex128::ZERO);
        assert_eq!(s.get(&[-2]).unwrap(), c(2.0));
    }

    #[test]
    fn test_inner_support_ignores_vacant_children() {
        let mut s = Seq::new(2).unwrap();
        s.set(&[0, 5], c(1.0)).unwrap();
        s.set(&[3, 2], c(1.0)).unwrap();
        // rows 1 and 2 are vacant children created by growth
        assert_eq!(s.support(), vec![0..4, 2..6]);
    }

    #[test]
    fn test_new_slots_do_not_alias() {
        let mut s = Seq::new(2).unwrap();
        s.set(&[2, 0], c(1.0)).unwrap();
        s.set(&[0, 0], c(2.0)).unwrap();
        s.set(&[1, 1], c(3.0)).unwrap();
        assert_eq!(s.get(&[0, 1]).unwrap(), Complex128::ZERO);
        assert_eq!(s.get(&[2, 1]).unwrap(), Complex128::ZERO);
        assert_eq!(s.get(&[1, 1]).unwrap(), c(3.0));
    }

    #[test]
    fn test_for_each_stored_order() {
        let mut s = Seq::new(2).unwrap();
        s.set(&[1, 0], c(2.0)).unwrap();
        s.set(&[0, 1], c(1.0)).unwrap();
        let mut seen = Vec::new();
        s.for_each_stored(|k, v| seen.push((k.to_vec(), v.re)));
        assert_eq!(seen, vec![(vec![0, 1], 1.0), (vec![1, 0], 2.0)]);
    }

    #[test]
    fn test_shift_axis() {
        let mut s = Seq::new(2).unwrap();
        s.set(&[0, 0], c(1.0)).unwrap();
        s.shift_axis(1, -3);
        assert_eq!(s.get(&[0, -3]).unwrap(), c(1.0));
        s.shift_axis(0, 2);
        assert_eq!(s.support_start(), vec![2, -3]);
    }
}
