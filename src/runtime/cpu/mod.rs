//! CPU backend implementation
//!
//! The CPU backend is the reference implementation of [`Backend`]: a safe
//! radix-2 Stockham kernel applied line by line along every axis. With the
//! `rayon` feature, the lines of one axis pass are transformed in parallel
//! once there are enough of them to pay for the scheduling.

mod fft;
pub(crate) mod kernels;

use super::Backend;
use crate::algorithm::fft::{FftDirection, FftNormalization};
use crate::config::FftConfig;
use crate::dtype::{Complex128, ComplexElement};
use crate::error::Result;
use crate::tensor::Tensor;
use std::fmt;
use std::marker::PhantomData;

/// CPU backend over the element type `C`
///
/// `CpuBackend<Complex128>` is the default backend of every sequence and
/// polynomial; `CpuBackend<Complex64>` trades precision for memory.
pub struct CpuBackend<C = Complex128> {
    _element: PhantomData<C>,
}

impl<C> Clone for CpuBackend<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for CpuBackend<C> {}

impl<C> Default for CpuBackend<C> {
    fn default() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<C> fmt::Debug for CpuBackend<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CpuBackend<{}>", std::any::type_name::<C>())
    }
}

impl<C: ComplexElement> Backend for CpuBackend<C> {
    type Complex = C;

    fn fft_nd(
        input: &Tensor<C>,
        direction: FftDirection,
        norm: FftNormalization,
    ) -> Result<Tensor<C>> {
        fft::fft_nd(input, direction, norm, &FftConfig::CPU)
    }
}
