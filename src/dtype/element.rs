//! Element trait for complex coefficient types

use bytemuck::{Pod, Zeroable};
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Trait for complex types that can be coefficients of a sequence
///
/// This is the scalar half of the numeric backend: construction, field
/// arithmetic, conjugation and magnitudes. The transform half lives in
/// [`crate::runtime::Backend`].
///
/// # Bounds
/// - `Copy + Clone + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Interleaved `[re, im]` layout, viewable as real slices
/// - `Add + Sub + Mul + Div + Neg` - Field operations (Output = Self)
pub trait ComplexElement:
    Copy
    + Clone
    + Debug
    + Default
    + Display
    + PartialEq
    + Send
    + Sync
    + Pod
    + Zeroable
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Real scalar type of the real and imaginary parts
    type Real: Float + Pod + Debug + Display + Sum + Send + Sync + 'static;

    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Create from real and imaginary parts
    fn from_parts(re: Self::Real, im: Self::Real) -> Self;

    /// Create from f64 parts, rounding to the element precision
    fn from_f64_parts(re: f64, im: f64) -> Self;

    /// Real part
    fn re(self) -> Self::Real;

    /// Imaginary part
    fn im(self) -> Self::Real;

    /// Complex conjugate
    fn conj(self) -> Self;

    /// Absolute value |z|
    fn magnitude(self) -> Self::Real;

    /// Squared absolute value |z|²
    fn magnitude_squared(self) -> Self::Real;

    /// Threshold below which a real or imaginary part counts as zero
    fn machine_threshold() -> Self::Real;

    /// Multiply both parts by a real factor
    #[inline]
    fn scale(self, factor: Self::Real) -> Self {
        Self::from_parts(self.re() * factor, self.im() * factor)
    }

    /// Whether both parts are exactly zero
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Integer power by repeated squaring; negative exponents invert the result.
    fn powi(self, exp: i64) -> Self {
        let mut base = self;
        let mut n = exp.unsigned_abs();
        let mut acc = Self::ONE;
        while n > 0 {
            if n & 1 == 1 {
                acc = acc * base;
            }
            base = base * base;
            n >>= 1;
        }
        if exp < 0 { Self::ONE / acc } else { acc }
    }
}
