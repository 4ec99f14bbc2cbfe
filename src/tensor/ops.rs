//! Axis-wise ("deep") operations on dense tensors
//!
//! Each operation takes one parameter per axis and applies the matching
//! single-axis array operation along every axis at once: truncation, cyclic
//! rotation, strided decimation and reversal. The element-wise `map` / `zip`
//! helpers mutate in place and are only used on freshly materialised tensors.

use super::core::Tensor;
use super::shape::{Index, Shape};
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use smallvec::SmallVec;

impl<T: Copy> Tensor<T> {
    /// Build a tensor of `out_shape` whose element at multi-index `j` is
    /// `self[source(axis, j[axis]) for each axis]`.
    fn remap(&self, out_shape: Shape, source: impl Fn(usize, usize) -> usize) -> Self {
        let mut data = Vec::with_capacity(out_shape.numel());
        let mut src_index: Index = SmallVec::from_elem(0, out_shape.ndim());
        for flat in 0..out_shape.numel() {
            let out_index = out_shape.unravel(flat);
            for (axis, &j) in out_index.iter().enumerate() {
                src_index[axis] = source(axis, j);
            }
            data.push(self.as_slice()[self.shape().ravel(&src_index)]);
        }
        Self::from_vec(data, &out_shape)
    }

    fn check_axes(&self, got: usize, arg: &'static str) -> Result<()> {
        if got != self.ndim() {
            return Err(Error::InvalidArgument {
                arg,
                reason: format!("expected one entry per axis ({}), got {got}", self.ndim()),
            });
        }
        Ok(())
    }

    /// Keep the first `lens[k]` entries along each axis `k`.
    pub fn truncated(&self, lens: &[usize]) -> Result<Self> {
        self.check_axes(lens.len(), "lens")?;
        if lens.iter().zip(self.shape().iter()).any(|(&l, &n)| l > n) {
            return Err(Error::InvalidArgument {
                arg: "lens",
                reason: format!("cannot truncate shape {:?} to {lens:?}", self.shape()),
            });
        }
        Ok(self.remap(Shape::from(lens), |_, j| j))
    }

    /// Cyclically shift every axis: `out[(i + shifts[k]) mod n] = in[i]` along axis `k`.
    pub fn rolled(&self, shifts: &[i64]) -> Result<Self> {
        self.check_axes(shifts.len(), "shifts")?;
        let shape = self.shape().clone();
        Ok(self.remap(shape.clone(), |axis, j| {
            let n = shape[axis] as i64;
            (j as i64 - shifts[axis]).rem_euclid(n) as usize
        }))
    }

    /// Keep every `steps[k]`-th entry along each axis `k`, starting with the first.
    pub fn decimated(&self, steps: &[usize]) -> Result<Self> {
        self.check_axes(steps.len(), "steps")?;
        if steps.contains(&0) {
            return Err(Error::InvalidArgument {
                arg: "steps",
                reason: "decimation step must be at least 1".to_string(),
            });
        }
        let out_shape: Shape = self
            .shape()
            .iter()
            .zip(steps)
            .map(|(&n, &s)| n.div_ceil(s))
            .collect();
        Ok(self.remap(out_shape, |axis, j| j * steps[axis]))
    }

    /// Reverse the order of entries along every axis.
    pub fn reversed(&self) -> Self {
        let shape = self.shape().clone();
        self.remap(shape.clone(), |axis, j| shape[axis] - 1 - j)
    }

    /// Apply `f` to every element in place.
    pub fn map_inplace(&mut self, mut f: impl FnMut(T) -> T) {
        for x in self.as_mut_slice() {
            *x = f(*x);
        }
    }

    /// Replace every element `x` with `f(x, y)`, where `y` is the element of
    /// `other` at the same multi-index.
    pub fn zip_map_inplace(&mut self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        for (x, &y) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *x = f(*x, y);
        }
        Ok(())
    }
}

impl<C: ComplexElement> Tensor<C> {
    /// Evaluate the tensor as the coefficient array of an ordinary polynomial
    /// (exponents starting at zero on every axis) with nested Horner steps.
    ///
    /// `z[k]` is the value of the variable of axis `k`. A tensor with an empty
    /// axis evaluates to zero.
    pub fn horner_eval(&self, z: &[C]) -> Result<C> {
        if z.len() != self.ndim() {
            return Err(Error::dimension_mismatch(self.ndim(), z.len()));
        }
        Ok(horner(self.as_slice(), self.shape(), z))
    }

    /// View the elements as interleaved real parts `[re0, im0, re1, im1, ...]`.
    pub fn as_interleaved(&self) -> &[C::Real] {
        bytemuck::cast_slice(self.as_slice())
    }
}

fn horner<C: ComplexElement>(data: &[C], shape: &[usize], z: &[C]) -> C {
    let Some((&n, inner)) = shape.split_first() else {
        return data[0];
    };
    if n == 0 {
        return C::ZERO;
    }
    let stride: usize = inner.iter().product();
    let row = |k: usize| horner(&data[k * stride..(k + 1) * stride], inner, &z[1..]);

    let mut acc = row(n - 1);
    for k in (0..n - 1).rev() {
        acc = acc * z[0] + row(k);
    }
    acc
}
