//! # polymd
//!
//! **Multivariate Laurent polynomials with complex coefficients.**
//!
//! polymd stores finitely supported sequences on `Z^d` (negative indices
//! included, growable in every direction) and treats them as Laurent
//! polynomials in `d` variables, with FFT-based multiplication and evaluation.
//!
//! ## Features
//!
//! - **Sequences**: recursive bounded-support storage with zero extension,
//!   support boxes, dense materialisation, norms and coefficient-wise maps
//! - **Polynomials**: monomial shifts, conjugation on the unit polytorus,
//!   Schwarz transform, truncation
//! - **FFT**: power-of-two multidimensional transforms for exact linear
//!   convolution and roots-of-unity evaluation
//! - **Backends**: element precision and transform chosen at compile time
//!   (`CpuBackend<Complex128>` by default, `CpuBackend<Complex64>` for f32)
//!
//! ## Quick Start
//!
//! ```rust
//! use polymd::prelude::*;
//!
//! // p = 1 + 2z + 3z^2, q = z^-1 + z
//! let p = PolynomialMD::<CpuBackend>::from_coefficients(
//!     vec![Complex128::new(1.0, 0.0), Complex128::new(2.0, 0.0), Complex128::new(3.0, 0.0)],
//!     0,
//! );
//! let q = PolynomialMD::<CpuBackend>::from_coefficients(
//!     vec![Complex128::ONE, Complex128::ZERO, Complex128::ONE],
//!     -1,
//! );
//!
//! let r = &p * &q;
//! assert_eq!(r.support(), vec![-1..4]);
//! assert!((r.get(&[1]).unwrap() - Complex128::new(4.0, 0.0)).magnitude() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel line transforms in the CPU FFT backend

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod config;
pub mod dtype;
pub mod error;
pub mod polynomial;
pub mod runtime;
pub mod sequence;
pub mod tensor;

pub use polynomial::PolynomialMD;
pub use sequence::ComplexL0SequenceMD;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{FftConfig, SamplingConfig};
    pub use crate::dtype::{Complex64, Complex128, ComplexElement};
    pub use crate::error::{Error, Result};
    pub use crate::polynomial::{PolynomialMD, UnivariateLaurent, schwarz_multiplier};
    pub use crate::runtime::{Backend, CpuBackend};
    pub use crate::sequence::ComplexL0SequenceMD;
    pub use crate::tensor::{Nested, Tensor};
}
