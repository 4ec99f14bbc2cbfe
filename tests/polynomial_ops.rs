//! Integration tests for multivariate Laurent polynomials
//!
//! Tests verify:
//! - FFT multiplication: exact convolution length, support offset,
//!   distributivity, agreement with direct convolution
//! - conjugate: involution and the identity p*(z) = conj(p(1/conj z))
//! - eval_at_roots_of_unity: agreement with Horner and the DFT round trip
//! - schwarz_transform: multiplier and Re s = p on the circle
//! - truncate: inclusive bounds
//! - from_univariate: embedding as a function of the last variable

use polymd::prelude::*;
use std::f64::consts::PI;

mod common;
use common::{Poly, assert_allclose_complex, assert_complex_close, c, direct_convolution, rng};

/// Point on the unit polytorus at the given angles
fn torus_point(angles: &[f64]) -> Vec<Complex128> {
    angles.iter().map(|&t| Complex128::from_polar(1.0, t)).collect()
}

// ============================================================================
// Multiplication
// ============================================================================

#[test]
fn test_concrete_product_matches_direct_convolution() {
    // p = 1 + 2z + 3z^2, q = z^-1 + z
    let p_coeffs = vec![c(1.0), c(2.0), c(3.0)];
    let q_coeffs = vec![c(1.0), c(0.0), c(1.0)];
    let p = Poly::from_coefficients(p_coeffs.clone(), 0);
    let q = Poly::from_coefficients(q_coeffs.clone(), -1);

    let r = &p * &q;
    let expected = direct_convolution(&p_coeffs, &q_coeffs);

    assert_eq!(r.support(), vec![-1..4]);
    assert_allclose_complex(r.coefficients().as_slice(), &expected, 1e-12, "product");
    // r = z^-1 + 2 + 4z + 2z^2 + 3z^3
    assert_allclose_complex(
        &expected,
        &[c(1.0), c(2.0), c(4.0), c(2.0), c(3.0)],
        0.0,
        "direct convolution",
    );
}

#[test]
fn test_convolution_length_and_start() {
    let mut rng = rng(17);
    for _ in 0..10 {
        let p = common::random_poly(&mut rng, 1, 9);
        let q = common::random_poly(&mut rng, 1, 9);
        let r = &p * &q;

        let (m, n) = (p.effective_degree()[0], q.effective_degree()[0]);
        assert_eq!(r.effective_degree(), vec![m + n]);
        assert_eq!(r.support_start(), vec![p.support_start()[0] + q.support_start()[0]]);

        let expected = direct_convolution(p.coefficients().as_slice(), q.coefficients().as_slice());
        assert_allclose_complex(r.coefficients().as_slice(), &expected, 1e-10, "random product");
    }
}

#[test]
fn test_multiplication_distributes_over_addition() {
    let mut rng = rng(23);
    for dim in 1..=3 {
        let p = common::random_poly(&mut rng, dim, 3);
        let q = common::random_poly(&mut rng, dim, 3);
        let r = common::random_poly(&mut rng, dim, 3);

        let lhs = &p * &(&q + &r);
        let rhs = &(&p * &q) + &(&p * &r);
        assert!(lhs.approx_eq(&rhs, 1e-10), "dim {dim}");
    }
}

#[test]
fn test_product_evaluates_to_product_of_values() {
    let mut rng = rng(29);
    let p = common::random_poly(&mut rng, 2, 4);
    let q = common::random_poly(&mut rng, 2, 4);
    let z = [Complex128::new(0.7, -0.4), Complex128::new(-1.1, 0.3)];

    let pq = (&p * &q).eval(&z).unwrap();
    let expected = p.eval(&z).unwrap() * q.eval(&z).unwrap();
    assert_complex_close(pq, expected, 1e-10, "(pq)(z)");
}

// ============================================================================
// Conjugate
// ============================================================================

#[test]
fn test_conjugate_is_an_involution() {
    let mut rng = rng(31);
    for dim in 1..=3 {
        let p = common::random_poly(&mut rng, dim, 4);
        assert_eq!(p.conjugate().conjugate(), p, "dim {dim}");
    }
}

#[test]
fn test_conjugate_identity() {
    let mut rng = rng(37);
    let p = common::random_poly(&mut rng, 2, 4);
    let pc = p.conjugate();

    // On the torus, 1 / conj(z) = z
    for angles in [[0.3, -1.2], [2.0, 0.5], [PI, PI / 3.0]] {
        let z = torus_point(&angles);
        let expected = p.eval(&z).unwrap().conj();
        assert_complex_close(pc.eval(&z).unwrap(), expected, 1e-10, "p*(z) on torus");
    }

    // Off the torus, p*(z) = conj(p(1 / conj z))
    let z = [Complex128::new(0.5, 0.8), Complex128::new(1.3, -0.2)];
    let w: Vec<Complex128> = z.iter().map(|zk| Complex128::ONE / zk.conj()).collect();
    let expected = p.eval(&w).unwrap().conj();
    assert_complex_close(pc.eval(&z).unwrap(), expected, 1e-10, "p*(z) off torus");
}

// ============================================================================
// Roots of Unity
// ============================================================================

#[test]
fn test_roots_of_unity_round_trip() {
    let mut rng = rng(41);
    for _ in 0..5 {
        let p = common::random_poly(&mut rng, 1, 7);
        let d = p.effective_degree()[0] as usize;
        let n = (d + 1).next_power_of_two() * 2;
        let values = p.eval_at_roots_of_unity(&[n]).unwrap();
        assert_eq!(values.numel(), n);

        // Discrete Fourier synthesis: c_k = (1/N) sum_j v_j w^(-jk)
        let start = p.support_start()[0];
        for k in start..start + d as i64 + 1 {
            let coeff = values
                .as_slice()
                .iter()
                .enumerate()
                .fold(Complex128::ZERO, |acc, (j, &v)| {
                    let theta = -2.0 * PI * (j as f64) * (k as f64) / n as f64;
                    acc + v * Complex128::from_polar(1.0 / n as f64, theta)
                });
            assert_complex_close(coeff, p.get(&[k]).unwrap(), 1e-10, "recovered coefficient");
        }
    }
}

#[test]
fn test_roots_of_unity_3d_matches_horner() {
    let mut rng = rng(43);
    let p = common::random_poly(&mut rng, 3, 3);
    let n = [4, 2, 8];
    let values = p.eval_at_roots_of_unity(&n).unwrap();
    assert_eq!(values.shape().as_slice(), &n);

    for i in 0..n[0] {
        for j in 0..n[1] {
            for k in 0..n[2] {
                let z = torus_point(&[
                    2.0 * PI * i as f64 / n[0] as f64,
                    2.0 * PI * j as f64 / n[1] as f64,
                    2.0 * PI * k as f64 / n[2] as f64,
                ]);
                let got = *values.get(&[i, j, k]).unwrap();
                assert_complex_close(got, p.eval(&z).unwrap(), 1e-10, "grid value");
            }
        }
    }
}

#[test]
fn test_sup_norm_bounds_sampled_values() {
    let mut rng = rng(47);
    let p = common::random_poly(&mut rng, 2, 3);
    let sup = p.sup_norm(64).unwrap();
    assert!(sup <= p.l1_norm() + 1e-12);
    let z = torus_point(&[0.0, 0.0]);
    assert!(p.eval(&z).unwrap().magnitude() <= sup + 1e-10);
}

// ============================================================================
// Schwarz Transform
// ============================================================================

#[test]
fn test_schwarz_multiplier_edge_cases() {
    assert_eq!(schwarz_multiplier(&[0, 0]), 1);
    assert_eq!(schwarz_multiplier(&[-1, 0]), 2);
    assert_eq!(schwarz_multiplier(&[1, 0]), 0);
    assert_eq!(schwarz_multiplier(&[-1, 1]), 0);
}

#[test]
fn test_schwarz_real_part_reproduces_real_polynomial() {
    let mut rng = rng(53);
    let q = common::random_poly(&mut rng, 1, 5);
    // p = q + q* is real on the circle
    let p = &q + &q.conjugate();
    let s = p.schwarz_transform();

    for t in [0.0, 0.4, 1.7, 3.0, 5.5] {
        let z = torus_point(&[t]);
        let pz = p.eval(&z).unwrap();
        assert!(pz.im.abs() < 1e-10);
        assert!((s.eval(&z).unwrap().re - pz.re).abs() < 1e-10);
    }
    for k in 1..6 {
        assert_eq!(s.get(&[k]).unwrap(), Complex128::ZERO);
    }
}

// ============================================================================
// Truncate and Adapters
// ============================================================================

#[test]
fn test_truncate_inclusive_bounds() {
    let mut rng = rng(59);
    let data = (0..49).map(|_| common::random_complex(&mut rng)).collect();
    let p = Poly::from_tensor(&Tensor::from_vec(data, &[7, 7]), &[-2, -2]).unwrap();
    let t = p.truncate(&[0..=2, 0..=2]).unwrap();

    assert_eq!(t.support(), vec![0..3, 0..3]);
    for x in -5..8 {
        for y in -5..8 {
            let inside = (0..=2).contains(&x) && (0..=2).contains(&y);
            let expected = if inside { p.get(&[x, y]).unwrap() } else { Complex128::ZERO };
            assert_eq!(t.get(&[x, y]).unwrap(), expected);
        }
    }
}

#[test]
fn test_from_univariate_product_commutes_with_lifting() {
    let a = (vec![c(1.0), c(-1.0)], -1i64);
    let b = (vec![c(2.0), c(0.0), c(1.0)], 2i64);

    let lifted_product = &Poly::from_univariate(&a, 2).unwrap() * &Poly::from_univariate(&b, 2).unwrap();
    let product = &Poly::from_univariate(&a, 1).unwrap() * &Poly::from_univariate(&b, 1).unwrap();
    let expected = Poly::from_univariate(&(product.coefficients().into_vec(), product.support_start()[0]), 2)
        .unwrap();

    assert!(lifted_product.approx_eq(&expected, 1e-12));
}

#[test]
fn test_display_skips_zero_terms() {
    let p = Poly::from_coefficients(vec![c(1.0), c(0.0), Complex128::new(0.0, 2.0)], -1);
    assert_eq!(p.to_string(), "(1+0i)·z1^-1 + (0+2i)·z1");
}
