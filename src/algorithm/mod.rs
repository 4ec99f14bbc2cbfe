//! Algorithm contracts shared by the polynomial layer and its backends
//!
//! # Available Contracts
//!
//! - [`fft`] - transform direction, normalisation and size validation used by
//!   every [`crate::runtime::Backend`]
//! - [`support`] - per-axis range arithmetic for support boxes

pub mod fft;
pub mod support;

pub use fft::{
    FftDirection, FftNormalization, is_power_of_two, validate_fft_shape, validate_fft_size,
};
pub use support::{half_open, minimal_covering_range, range_len, union_range};
