//! Common test utilities
#![allow(dead_code)]

use polymd::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default CPU polynomial used across integration tests
pub type Poly = PolynomialMD<CpuBackend<Complex128>>;

/// Real complex number shorthand
pub fn c(re: f64) -> Complex128 {
    Complex128::new(re, 0.0)
}

/// Deterministic RNG so failures reproduce
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Assert two complex values are within `atol` of each other
pub fn assert_complex_close(a: Complex128, b: Complex128, atol: f64, msg: &str) {
    let diff = (a - b).magnitude();
    assert!(
        diff <= atol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        diff,
        atol
    );
}

/// Assert two complex slices are elementwise close
pub fn assert_allclose_complex(a: &[Complex128], b: &[Complex128], atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (&x, &y)) in a.iter().zip(b.iter()).enumerate() {
        assert_complex_close(x, y, atol, &format!("{msg}: element {i}"));
    }
}

/// Random complex number with parts in [-1, 1)
pub fn random_complex(rng: &mut StdRng) -> Complex128 {
    Complex128::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
}

/// Random polynomial in `dim` variables with at most `max_len` coefficients
/// per axis and support starts in [-3, 3]
pub fn random_poly(rng: &mut StdRng, dim: usize, max_len: usize) -> Poly {
    let shape: Vec<usize> = (0..dim).map(|_| rng.random_range(1..=max_len)).collect();
    let starts: Vec<i64> = (0..dim).map(|_| rng.random_range(-3..=3)).collect();
    let numel = shape.iter().product();
    let data = (0..numel).map(|_| random_complex(rng)).collect();
    Poly::from_tensor(&Tensor::from_vec(data, &shape), &starts).unwrap()
}

/// Direct O(n*m) convolution of two univariate coefficient lists
pub fn direct_convolution(a: &[Complex128], b: &[Complex128]) -> Vec<Complex128> {
    let mut out = vec![Complex128::ZERO; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            out[i + j] = out[i + j] + x * y;
        }
    }
    out
}
