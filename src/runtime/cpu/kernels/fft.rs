//! FFT kernels using the Stockham autosort algorithm
//!
//! The Stockham algorithm is used for its:
//! - No bit-reversal permutation (Cooley-Tukey's main bottleneck)
//! - Sequential memory access patterns
//! - Natural double-buffering
//!
//! See [`crate::algorithm::fft`] for the stage recurrence.

use crate::dtype::ComplexElement;
use std::f64::consts::PI;

/// Stockham FFT of one contiguous line
///
/// # Arguments
///
/// * `input` - Input complex data slice of length N (must be power of 2)
/// * `output` - Output buffer of length N, filled with the transform
/// * `inverse` - If true, use the `exp(+2πi jk/N)` kernel
/// * `normalize_factor` - Scale factor applied to each output element
///
/// Twiddle factors are computed in f64 and rounded once to the element
/// precision.
pub fn stockham_fft<C: ComplexElement>(
    input: &[C],
    output: &mut [C],
    inverse: bool,
    normalize_factor: f64,
) {
    let n = input.len();
    debug_assert!(n > 0 && (n & (n - 1)) == 0, "N must be power of 2");
    debug_assert_eq!(input.len(), output.len());

    let scale = C::from_f64_parts(normalize_factor, 0.0).re();
    let log_n = n.trailing_zeros() as usize;
    let sign = if inverse { 1.0f64 } else { -1.0f64 };

    let mut buf_a: Vec<C> = input.to_vec();
    let mut buf_b: Vec<C> = vec![C::ZERO; n];
    let mut src = &mut buf_a;
    let mut dst = &mut buf_b;

    for stage in 0..log_n {
        let m = 1 << (stage + 1); // 2, 4, 8, ..., N
        let half_m = 1 << stage; // 1, 2, 4, ..., N/2
        let groups = n / m;

        for b in 0..half_m {
            // W_m^b = exp(sign * 2πi * b / m), shared by every group
            let theta = sign * 2.0 * PI * (b as f64) / (m as f64);
            let twiddle = C::from_f64_parts(theta.cos(), theta.sin());

            for g in 0..groups {
                let even = src[g * half_m + b];
                let odd = src[n / 2 + g * half_m + b] * twiddle;

                dst[g * m + b] = even + odd;
                dst[g * m + b + half_m] = even - odd;
            }
        }

        std::mem::swap(&mut src, &mut dst);
    }

    // Result is in src after the final swap
    if normalize_factor == 1.0 {
        output.copy_from_slice(&src[..]);
    } else {
        for (out, &x) in output.iter_mut().zip(src.iter()) {
            *out = x.scale(scale);
        }
    }
}

/// Batched Stockham FFT over contiguous lines of length `n`
///
/// Lines are independent and processed in parallel with rayon.
#[cfg(feature = "rayon")]
pub fn stockham_fft_batched<C: ComplexElement>(
    input: &[C],
    output: &mut [C],
    n: usize,
    inverse: bool,
    normalize_factor: f64,
) {
    use rayon::prelude::*;

    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(input.len() % n, 0);

    output
        .par_chunks_mut(n)
        .zip(input.par_chunks(n))
        .for_each(|(out_line, in_line)| stockham_fft(in_line, out_line, inverse, normalize_factor));
}

/// Batched Stockham FFT over contiguous lines of length `n`
#[cfg(not(feature = "rayon"))]
pub fn stockham_fft_batched<C: ComplexElement>(
    input: &[C],
    output: &mut [C],
    n: usize,
    inverse: bool,
    normalize_factor: f64,
) {
    debug_assert_eq!(input.len(), output.len());
    debug_assert_eq!(input.len() % n, 0);

    for (out_line, in_line) in output.chunks_mut(n).zip(input.chunks(n)) {
        stockham_fft(in_line, out_line, inverse, normalize_factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex64, Complex128};

    /// Direct O(N²) DFT used as the reference
    fn naive_dft(input: &[Complex128], inverse: bool) -> Vec<Complex128> {
        let n = input.len();
        let sign = if inverse { 1.0 } else { -1.0 };
        (0..n)
            .map(|k| {
                input.iter().enumerate().fold(Complex128::ZERO, |acc, (j, &x)| {
                    let theta = sign * 2.0 * PI * (j * k) as f64 / n as f64;
                    acc + x * Complex128::new(theta.cos(), theta.sin())
                })
            })
            .collect()
    }

    fn assert_close(a: &[Complex128], b: &[Complex128], tol: f64) {
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!(
                (*x - *y).magnitude() < tol,
                "Mismatch at {}: {} vs {}",
                i,
                x,
                y
            );
        }
    }

    #[test]
    fn test_fft_impulse() {
        let mut input = [Complex128::ZERO; 4];
        input[0] = Complex128::ONE;
        let mut output = [Complex128::ZERO; 4];

        stockham_fft(&input, &mut output, false, 1.0);

        for c in &output {
            assert!((c.re - 1.0).abs() < 1e-12);
            assert!(c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn test_fft_size_1() {
        let input = [Complex128::new(2.0, -1.0)];
        let mut output = [Complex128::ZERO; 1];
        stockham_fft(&input, &mut output, true, 0.5);
        assert_eq!(output[0], Complex128::new(1.0, -0.5));
    }

    #[test]
    fn test_fft_matches_naive_dft() {
        let input: Vec<Complex128> = (0..16)
            .map(|i| Complex128::new((i as f64 * 0.7).sin(), (i as f64 * 1.3).cos()))
            .collect();

        for inverse in [false, true] {
            let mut output = vec![Complex128::ZERO; 16];
            stockham_fft(&input, &mut output, inverse, 1.0);
            assert_close(&output, &naive_dft(&input, inverse), 1e-10);
        }
    }

    #[test]
    fn test_fft_roundtrip() {
        let input: Vec<Complex128> = (0..8).map(|i| Complex128::new(i as f64, -(i as f64))).collect();
        let mut spectrum = vec![Complex128::ZERO; 8];
        let mut recovered = vec![Complex128::ZERO; 8];

        stockham_fft(&input, &mut spectrum, false, 1.0);
        stockham_fft(&spectrum, &mut recovered, true, 1.0 / 8.0);

        assert_close(&recovered, &input, 1e-12);
    }

    #[test]
    fn test_fft_c64_size_2() {
        let input = [Complex64::new(1.0, 0.0), Complex64::new(2.0, 0.0)];
        let mut output = [Complex64::ZERO; 2];

        stockham_fft(&input, &mut output, false, 1.0);

        // X[0] = x[0] + x[1] = 3, X[1] = x[0] - x[1] = -1
        assert!((output[0].re - 3.0).abs() < 1e-5);
        assert!((output[1].re - (-1.0)).abs() < 1e-5);
        assert!(output[1].im.abs() < 1e-5);
    }

    #[test]
    fn test_fft_batched() {
        let input: Vec<Complex128> = (0..12).map(|i| Complex128::new(i as f64, 0.0)).collect();
        let mut output = vec![Complex128::ZERO; 12];

        stockham_fft_batched(&input, &mut output, 4, false, 1.0);

        for (line_in, line_out) in input.chunks(4).zip(output.chunks(4)) {
            assert_close(line_out, &naive_dft(line_in, false), 1e-10);
        }
    }
}
