//! FFT integration tests
//!
//! Tests for the backend transforms:
//! - Impulse and constant signals
//! - Forward/inverse round trip in 1D, 2D and 3D
//! - Unnormalised inverse scaled by the transform size
//! - Power-of-two validation
//! - Single precision backend

use polymd::algorithm::fft::{FftDirection, FftNormalization};
use polymd::prelude::*;

mod common;
use common::{assert_allclose_complex, c, rng};

type Cpu = CpuBackend<Complex128>;

fn random_tensor(seed: u64, shape: &[usize]) -> Tensor<Complex128> {
    let mut rng = rng(seed);
    let numel = shape.iter().product();
    let data = (0..numel).map(|_| common::random_complex(&mut rng)).collect();
    Tensor::from_vec(data, shape)
}

// ============================================================================
// Basic Transforms
// ============================================================================

#[test]
fn test_fft_impulse_response() {
    // FFT of [1, 0, 0, 0] = [1, 1, 1, 1]
    let x = Tensor::from_vec(vec![c(1.0), c(0.0), c(0.0), c(0.0)], &[4]);
    let y = Cpu::fft_md(&x).unwrap();
    assert_allclose_complex(y.as_slice(), &[c(1.0); 4], 1e-12, "impulse");
}

#[test]
fn test_fft_constant_signal() {
    // FFT of [1, 1, 1, 1] = [4, 0, 0, 0]
    let x = Tensor::from_vec(vec![c(1.0); 4], &[4]);
    let y = Cpu::fft_md(&x).unwrap();
    assert_allclose_complex(y.as_slice(), &[c(4.0), c(0.0), c(0.0), c(0.0)], 1e-12, "constant");
}

#[test]
fn test_fft_direction_sign() {
    // Forward FFT of e_1 is w^(-k), inverse is w^k, w = exp(2 pi i / 4)
    let x = Tensor::from_vec(vec![c(0.0), c(1.0), c(0.0), c(0.0)], &[4]);
    let forward = Cpu::fft_md(&x).unwrap();
    let inverse = Cpu::ifft_md(&x, false).unwrap();

    let i = Complex128::I;
    assert_allclose_complex(forward.as_slice(), &[c(1.0), -i, c(-1.0), i], 1e-12, "forward");
    assert_allclose_complex(inverse.as_slice(), &[c(1.0), i, c(-1.0), -i], 1e-12, "inverse");
}

// ============================================================================
// Round Trips
// ============================================================================

#[test]
fn test_fft_round_trip_multidimensional() {
    for (seed, shape) in [(1, vec![16]), (2, vec![4, 8]), (3, vec![2, 4, 8])] {
        let x = random_tensor(seed, &shape);
        let back = Cpu::ifft_md(&Cpu::fft_md(&x).unwrap(), true).unwrap();
        assert_eq!(back.shape().as_slice(), shape.as_slice());
        assert_allclose_complex(back.as_slice(), x.as_slice(), 1e-12, "round trip");
    }
}

#[test]
fn test_unnormalized_inverse_scales_by_size() {
    let x = random_tensor(4, &[4, 4]);
    let spectrum = Cpu::fft_md(&x).unwrap();
    let raw = Cpu::ifft_md(&spectrum, false).unwrap();

    let expected: Vec<Complex128> = x.as_slice().iter().map(|&v| v * c(16.0)).collect();
    assert_allclose_complex(raw.as_slice(), &expected, 1e-11, "unnormalised inverse");
}

#[test]
fn test_fft_nd_matches_provided_transforms() {
    let x = random_tensor(5, &[8, 2]);
    let forward = Cpu::fft_nd(&x, FftDirection::Forward, FftNormalization::Backward).unwrap();
    assert_eq!(forward, Cpu::fft_md(&x).unwrap());
    let raw = Cpu::fft_nd(&forward, FftDirection::Inverse, FftNormalization::None).unwrap();
    assert_eq!(raw, Cpu::ifft_md(&forward, false).unwrap());
}

#[test]
fn test_large_transform_round_trip() {
    // Enough lines to take the batched path
    let x = random_tensor(6, &[64, 64]);
    let back = Cpu::ifft_md(&Cpu::fft_md(&x).unwrap(), true).unwrap();
    assert_allclose_complex(back.as_slice(), x.as_slice(), 1e-11, "batched round trip");
}

// ============================================================================
// Validation and Precision
// ============================================================================

#[test]
fn test_non_power_of_two_rejected() {
    let x = Tensor::from_vec(vec![c(1.0); 12], &[4, 3]);
    let err = Cpu::fft_md(&x).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(err.to_string().contains("power-of-2"));
}

#[test]
fn test_single_precision_backend() {
    let x = Tensor::from_vec(
        vec![
            Complex64::new(1.0, 0.5),
            Complex64::new(-2.0, 0.0),
            Complex64::new(0.0, 3.0),
            Complex64::new(0.25, -1.0),
        ],
        &[4],
    );
    let back = CpuBackend::<Complex64>::ifft_md(&CpuBackend::<Complex64>::fft_md(&x).unwrap(), true).unwrap();
    for (a, b) in back.as_slice().iter().zip(x.as_slice()) {
        assert!((*a - *b).magnitude() < 1e-5);
    }
}
