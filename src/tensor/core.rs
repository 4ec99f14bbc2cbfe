//! Core dense tensor type

use super::nested::Nested;
use super::shape::Shape;
use crate::error::{Error, Result};

/// Dense row-major n-dimensional array
///
/// This is the rectangular, hole-free form of coefficient data: the bridge
/// between the recursive sequence storage and fixed-size numeric routines
/// such as the multidimensional FFT.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Copy> Tensor<T> {
    /// Create a tensor from owned data in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` axes.
    /// For a fallible alternative, use [`Self::try_from_vec`].
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Self {
        Self::try_from_vec(data, shape).expect("Tensor::from_vec failed")
    }

    /// Create a tensor from owned data in row-major order (fallible version)
    pub fn try_from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        if data.len() != shape.numel() {
            return Err(Error::shape_mismatch(shape.as_slice(), &[data.len()]));
        }
        Ok(Self { shape, data })
    }

    /// Create a tensor with every element set to `value`
    pub fn full(shape: &[usize], value: T) -> Self {
        let shape = Shape::from(shape);
        let data = vec![value; shape.numel()];
        Self { shape, data }
    }

    /// Create a tensor from a rectangular nested list
    ///
    /// The shape is read off the first branch at every level; every other
    /// branch must agree with it.
    pub fn from_nested(nested: &Nested<T>) -> Result<Self> {
        let mut shape = Vec::new();
        let mut node = nested;
        while let Nested::List(items) = node {
            shape.push(items.len());
            match items.first() {
                Some(first) => node = first,
                None => break,
            }
        }

        let mut data = Vec::with_capacity(shape.iter().product());
        collect_rectangular(nested, &shape, &mut data)?;
        Self::try_from_vec(data, &shape)
    }

    /// Convert back into nested-list form
    pub fn to_nested(&self) -> Nested<T> {
        build_nested(&self.data, &self.shape)
    }

    /// Shape of the tensor
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of axes
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Elements in row-major order (the flattened nested list)
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in row-major order
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the tensor, returning its row-major data
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at a multi-index, or `None` when out of bounds or of the wrong arity
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.flat_index(index).map(|flat| &self.data[flat])
    }

    /// Mutable element at a multi-index
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        self.flat_index(index).map(|flat| &mut self.data[flat])
    }

    /// Flat row-major offset of a multi-index, if it is in bounds
    pub fn flat_index(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.ndim() || index.iter().zip(self.shape.iter()).any(|(&i, &n)| i >= n) {
            return None;
        }
        Some(self.shape.ravel(index))
    }
}

impl<T: Copy + Default> Tensor<T> {
    /// Create a tensor filled with the default value (zero for complex elements)
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::default())
    }
}

fn collect_rectangular<T: Copy>(node: &Nested<T>, shape: &[usize], out: &mut Vec<T>) -> Result<()> {
    match (node, shape.split_first()) {
        (Nested::Scalar(value), None) => {
            out.push(*value);
            Ok(())
        }
        (Nested::List(items), Some((&len, rest))) => {
            if items.len() != len {
                return Err(Error::malformed(format!(
                    "ragged nesting: expected a list of length {len}, found length {}",
                    items.len()
                )));
            }
            items.iter().try_for_each(|item| collect_rectangular(item, rest, out))
        }
        (Nested::Scalar(_), Some(_)) => Err(Error::malformed("scalar found where a list was expected")),
        (Nested::List(_), None) => Err(Error::malformed("list found where a scalar was expected")),
    }
}

fn build_nested<T: Copy>(data: &[T], shape: &[usize]) -> Nested<T> {
    match shape.split_first() {
        None => Nested::Scalar(data[0]),
        Some((&len, rest)) => {
            let stride: usize = rest.iter().product();
            Nested::List(
                (0..len)
                    .map(|k| build_nested(&data[k * stride..(k + 1) * stride], rest))
                    .collect(),
            )
        }
    }
}
