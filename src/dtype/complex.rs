//! Concrete complex coefficient types
//!
//! `Complex64` (f32 parts) and `Complex128` (f64 parts) are `#[repr(C)]`
//! pairs `(re, im)`, so a coefficient buffer can be viewed as interleaved
//! reals through bytemuck. Division by zero yields NaN parts and is passed
//! through unchanged by the polynomial layer.
//!
//! ```
//! use polymd::dtype::Complex128;
//!
//! let z = Complex128::new(3.0, 4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z * Complex128::new(1.0, 2.0), Complex128::new(-5.0, 10.0));
//! ```

use super::ComplexElement;
use bytemuck::{Pod, Zeroable};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Part-wise `Add`/`Sub` for a complex type
macro_rules! componentwise_op {
    ($name:ident, $trait:ident, $method:ident, $op:tt) => {
        impl $trait for $name {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::new(self.re $op rhs.re, self.im $op rhs.im)
            }
        }
    };
}

macro_rules! complex_type {
    ($name:ident, $float:ty, $bits:literal) => {
        #[doc = concat!("Complex number with ", stringify!($float), " parts (", $bits, " bits)")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// `0 + 0i`
            pub const ZERO: Self = Self::new(0.0, 0.0);

            /// `1 + 0i`
            pub const ONE: Self = Self::new(1.0, 0.0);

            /// `0 + 1i`
            pub const I: Self = Self::new(0.0, 1.0);

            /// Build from real and imaginary parts
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// `r * e^(i theta)`; with `r = 1` a point on the unit circle
            #[inline]
            pub fn from_polar(r: $float, theta: $float) -> Self {
                let (sin, cos) = theta.sin_cos();
                Self::new(r * cos, r * sin)
            }

            /// `|z|`
            #[inline]
            pub fn magnitude(self) -> $float {
                self.re.hypot(self.im)
            }

            /// `|z|^2`
            #[inline]
            pub fn magnitude_squared(self) -> $float {
                self.re * self.re + self.im * self.im
            }

            /// `re - i im`
            #[inline]
            pub fn conj(self) -> Self {
                Self::new(self.re, -self.im)
            }
        }

        impl ComplexElement for $name {
            type Real = $float;

            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;

            #[inline]
            fn from_parts(re: $float, im: $float) -> Self {
                Self::new(re, im)
            }

            #[inline]
            fn from_f64_parts(re: f64, im: f64) -> Self {
                Self::new(re as $float, im as $float)
            }

            #[inline]
            fn re(self) -> $float {
                self.re
            }

            #[inline]
            fn im(self) -> $float {
                self.im
            }

            #[inline]
            fn conj(self) -> Self {
                $name::conj(self)
            }

            #[inline]
            fn magnitude(self) -> $float {
                $name::magnitude(self)
            }

            #[inline]
            fn magnitude_squared(self) -> $float {
                $name::magnitude_squared(self)
            }

            #[inline]
            fn machine_threshold() -> $float {
                <$float>::EPSILON * 1.0e3
            }
        }

        componentwise_op!($name, Add, add, +);
        componentwise_op!($name, Sub, sub, -);

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new(
                    self.re * rhs.re - self.im * rhs.im,
                    self.re * rhs.im + self.im * rhs.re,
                )
            }
        }

        impl Div for $name {
            type Output = Self;

            /// `z / w = z * conj(w) / |w|^2`; NaN parts when `w = 0`
            #[inline]
            fn div(self, rhs: Self) -> Self {
                let denom = rhs.magnitude_squared();
                if denom == 0.0 {
                    return Self::new(<$float>::NAN, <$float>::NAN);
                }
                let num = self * rhs.conj();
                Self::new(num.re / denom, num.im / denom)
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new(-self.re, -self.im)
            }
        }

        /// `a+bi` / `a-bi`
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let sign = if self.im >= 0.0 { "+" } else { "" };
                write!(f, "{}{}{}i", self.re, sign, self.im)
            }
        }
    };
}

complex_type!(Complex64, f32, "64");
complex_type!(Complex128, f64, "128");
