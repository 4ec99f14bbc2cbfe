//! Shape type: axis lengths of a dense tensor

use smallvec::SmallVec;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;

/// Stack allocation threshold for axes
/// Most polynomials have 4 or fewer variables, so we stack-allocate up to 4
pub(crate) const STACK_DIMS: usize = 4;

/// Multi-index into a dense tensor, one entry per axis
pub type Index = SmallVec<[usize; STACK_DIMS]>;

/// Shape type: axis lengths of a row-major dense tensor
#[derive(Clone, PartialEq, Eq, Default, Hash)]
pub struct Shape(SmallVec<[usize; STACK_DIMS]>);

impl Shape {
    /// View shape as a slice.
    pub fn as_slice(&self) -> &[usize] {
        self.0.as_slice()
    }

    /// Number of axes in this shape.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.0.len()
    }

    /// Total number of elements (1 for a zero-axis shape).
    #[inline]
    pub fn numel(&self) -> usize {
        self.0.iter().product()
    }

    /// Convert a flat row-major offset into a multi-index.
    pub fn unravel(&self, mut flat: usize) -> Index {
        let mut index: Index = SmallVec::from_elem(0, self.ndim());
        for axis in (0..self.ndim()).rev() {
            let len = self.0[axis];
            index[axis] = flat % len;
            flat /= len;
        }
        index
    }

    /// Convert a multi-index into a flat row-major offset.
    ///
    /// The index must be in bounds; callers validate it first.
    pub fn ravel(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(self.0.iter())
            .fold(0, |acc, (&i, &len)| acc * len + i)
    }
}

impl Deref for Shape {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        self.0.as_slice()
    }
}

impl From<Vec<usize>> for Shape {
    fn from(value: Vec<usize>) -> Self {
        Self(value.into_iter().collect())
    }
}

impl From<&[usize]> for Shape {
    fn from(value: &[usize]) -> Self {
        Self(value.iter().copied().collect())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(value: [usize; N]) -> Self {
        Self(value.into_iter().collect())
    }
}

impl FromIterator<usize> for Shape {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
