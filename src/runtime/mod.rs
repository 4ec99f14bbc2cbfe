//! Numeric backends for sequence and polynomial computation
//!
//! This module defines the `Backend` trait and the CPU implementation. A
//! backend bundles a complex element type with the multidimensional
//! transforms that operate on it.
//!
//! # Architecture
//!
//! ```text
//! Backend (static dispatch, no instances needed)
//! ├── Complex (element type: construction, arithmetic, conj, magnitude)
//! ├── fft_nd  (power-of-two multidimensional transform)
//! └── machine_threshold (tolerance for approximate checks)
//! ```
//!
//! Sequences and polynomials take the backend as a type parameter, so
//! precision and transform implementation are chosen at compile time without
//! any global state.

pub mod cpu;

pub use cpu::CpuBackend;

use crate::algorithm::fft::{FftDirection, FftNormalization};
use crate::dtype::ComplexElement;
use crate::error::Result;
use crate::tensor::Tensor;
use std::fmt::Debug;

/// Core trait for numeric backends
///
/// `Backend` abstracts over element precision and transform implementation.
/// It uses static dispatch via generics: all functions are associated, and
/// the implementing type is only ever used as a marker.
///
/// # Example
///
/// ```
/// use polymd::runtime::{Backend, CpuBackend};
/// use polymd::dtype::Complex128;
/// use polymd::tensor::Tensor;
///
/// let x = Tensor::from_vec(vec![Complex128::ONE; 4], &[4]);
/// let spectrum = CpuBackend::<Complex128>::fft_md(&x).unwrap();
/// assert_eq!(spectrum.as_slice()[0], Complex128::new(4.0, 0.0));
/// ```
pub trait Backend: Clone + Copy + Debug + Default + Send + Sync + 'static {
    /// Complex coefficient type
    type Complex: ComplexElement;

    /// Multidimensional FFT over every axis of `input`
    ///
    /// Every axis length must be a power of two.
    fn fft_nd(
        input: &Tensor<Self::Complex>,
        direction: FftDirection,
        norm: FftNormalization,
    ) -> Result<Tensor<Self::Complex>>;

    /// Forward transform, unnormalised
    fn fft_md(input: &Tensor<Self::Complex>) -> Result<Tensor<Self::Complex>> {
        Self::fft_nd(input, FftDirection::Forward, FftNormalization::Backward)
    }

    /// Inverse transform
    ///
    /// With `normalize = false` the result is scaled by the product of the
    /// axis lengths relative to the normalised inverse, i.e. it is the raw sum
    /// that evaluates a coefficient array at the roots of unity.
    fn ifft_md(input: &Tensor<Self::Complex>, normalize: bool) -> Result<Tensor<Self::Complex>> {
        let norm = if normalize {
            FftNormalization::Backward
        } else {
            FftNormalization::None
        };
        Self::fft_nd(input, FftDirection::Inverse, norm)
    }

    /// Threshold below which a real or imaginary part counts as zero
    fn machine_threshold() -> <Self::Complex as ComplexElement>::Real {
        Self::Complex::machine_threshold()
    }
}
