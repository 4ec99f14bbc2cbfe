//! CPU kernel implementations
//!
//! Low-level compute kernels for the CPU backend. Kernels are generic over
//! `C: ComplexElement` and operate on plain slices; axis bookkeeping lives in
//! the caller.

pub mod fft;

pub use fft::{stockham_fft, stockham_fft_batched};
