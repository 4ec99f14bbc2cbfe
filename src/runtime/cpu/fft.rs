//! Multidimensional FFT for the CPU backend
//!
//! An N-dimensional transform is a 1D transform along every axis in turn.
//! Each axis pass gathers the strided lines of that axis into a contiguous
//! buffer, transforms them with the Stockham kernel and scatters them back.

use super::kernels;
use crate::algorithm::fft::{FftDirection, FftNormalization, validate_fft_shape};
use crate::config::FftConfig;
use crate::dtype::ComplexElement;
use crate::error::Result;
use crate::tensor::Tensor;
use tracing::debug;

pub(super) fn fft_nd<C: ComplexElement>(
    input: &Tensor<C>,
    direction: FftDirection,
    norm: FftNormalization,
    config: &FftConfig,
) -> Result<Tensor<C>> {
    let shape = input.shape().clone();
    validate_fft_shape(&shape, "fft_nd")?;
    debug!(shape = ?shape, ?direction, ?norm, "cpu fft_nd");

    let inverse = direction == FftDirection::Inverse;
    let mut data = input.as_slice().to_vec();
    let mut lines = vec![C::ZERO; data.len()];

    for axis in 0..shape.ndim() {
        let n = shape[axis];
        let factor = norm.factor(direction, n);
        if n == 1 && factor == 1.0 {
            continue;
        }

        let inner: usize = shape[axis + 1..].iter().product();
        gather_lines(&data, &mut lines, n, inner);
        if data.len() / n >= config.min_parallel_lines {
            kernels::stockham_fft_batched(&lines, &mut data, n, inverse, factor);
        } else {
            for (out_line, in_line) in data.chunks_mut(n).zip(lines.chunks(n)) {
                kernels::stockham_fft(in_line, out_line, inverse, factor);
            }
        }
        // `data` now holds the transformed lines contiguously; restore layout
        lines.copy_from_slice(&data);
        scatter_lines(&lines, &mut data, n, inner);
    }

    Tensor::try_from_vec(data, &shape)
}

/// Copy every line of an axis (length `n`, element stride `inner`) into
/// consecutive chunks of `lines`.
fn gather_lines<C: Copy>(data: &[C], lines: &mut [C], n: usize, inner: usize) {
    let block = n * inner;
    let mut line_start = 0;
    for outer in 0..data.len() / block {
        for i in 0..inner {
            let base = outer * block + i;
            for k in 0..n {
                lines[line_start + k] = data[base + k * inner];
            }
            line_start += n;
        }
    }
}

/// Inverse of [`gather_lines`].
fn scatter_lines<C: Copy>(lines: &[C], data: &mut [C], n: usize, inner: usize) {
    let block = n * inner;
    let mut line_start = 0;
    for outer in 0..data.len() / block {
        for i in 0..inner {
            let base = outer * block + i;
            for k in 0..n {
                data[base + k * inner] = lines[line_start + k];
            }
            line_start += n;
        }
    }
}
