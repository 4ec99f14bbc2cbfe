//! Dense tensors and nested-list coefficient data
//!
//! This module provides the `Tensor` type, a dense row-major n-dimensional
//! array. Sequences materialise into tensors whenever a fixed-size routine
//! (transforms, Horner evaluation, element-wise combination) needs
//! rectangular input, and are rebuilt from tensors afterwards.

mod core;
mod nested;
mod ops;
mod shape;

pub use core::Tensor;
pub use nested::Nested;
pub use shape::{Index, Shape};
