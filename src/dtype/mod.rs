//! Complex element types
//!
//! Coefficients of every sequence and polynomial are complex numbers of one
//! fixed precision, chosen through the [`crate::runtime::Backend`] type
//! parameter.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::ComplexElement;
