//! Operator overloads for polynomials
//!
//! # Panics
//!
//! `p + q`, `p - q` and `p * q` panic when the operands have different
//! dimensions. The `try_*` methods return the error instead.
//!
//! Scalars are supported on either side of `+`, `-` and `*`, and on the right
//! of `/`, for the concrete element types.

use super::PolynomialMD;
use crate::dtype::{Complex64, Complex128};
use crate::runtime::Backend;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_polynomial_binary_op {
    ($trait:ident, $method:ident, $try_method:ident) => {
        impl<B: Backend> $trait<&PolynomialMD<B>> for &PolynomialMD<B> {
            type Output = PolynomialMD<B>;

            fn $method(self, rhs: &PolynomialMD<B>) -> Self::Output {
                self.$try_method(rhs)
                    .unwrap_or_else(|e| panic!("polynomial {} failed: {e}", stringify!($method)))
            }
        }

        impl<B: Backend> $trait for PolynomialMD<B> {
            type Output = PolynomialMD<B>;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_polynomial_binary_op!(Add, add, try_add);
impl_polynomial_binary_op!(Sub, sub, try_sub);
impl_polynomial_binary_op!(Mul, mul, try_mul);

impl<B: Backend> Neg for &PolynomialMD<B> {
    type Output = PolynomialMD<B>;

    fn neg(self) -> Self::Output {
        self.map_coefficients(|x| -x)
    }
}

impl<B: Backend> Neg for PolynomialMD<B> {
    type Output = PolynomialMD<B>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_polynomial_scalar_op {
    ($scalar:ty, $trait:ident, $method:ident, $apply:ident) => {
        impl<B: Backend<Complex = $scalar>> $trait<$scalar> for &PolynomialMD<B> {
            type Output = PolynomialMD<B>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                self.$apply(rhs)
            }
        }

        impl<B: Backend<Complex = $scalar>> $trait<$scalar> for PolynomialMD<B> {
            type Output = PolynomialMD<B>;

            fn $method(self, rhs: $scalar) -> Self::Output {
                self.$apply(rhs)
            }
        }
    };
}

macro_rules! impl_polynomial_scalar_ops {
    ($scalar:ty) => {
        impl_polynomial_scalar_op!($scalar, Add, add, add_scalar);
        impl_polynomial_scalar_op!($scalar, Sub, sub, sub_scalar);
        impl_polynomial_scalar_op!($scalar, Mul, mul, scale);
        impl_polynomial_scalar_op!($scalar, Div, div, div_scalar);

        impl<B: Backend<Complex = $scalar>> Add<PolynomialMD<B>> for $scalar {
            type Output = PolynomialMD<B>;

            fn add(self, rhs: PolynomialMD<B>) -> Self::Output {
                rhs.add_scalar(self)
            }
        }

        impl<B: Backend<Complex = $scalar>> Sub<PolynomialMD<B>> for $scalar {
            type Output = PolynomialMD<B>;

            fn sub(self, rhs: PolynomialMD<B>) -> Self::Output {
                rhs.rsub_scalar(self)
            }
        }

        impl<B: Backend<Complex = $scalar>> Mul<PolynomialMD<B>> for $scalar {
            type Output = PolynomialMD<B>;

            fn mul(self, rhs: PolynomialMD<B>) -> Self::Output {
                rhs.scale(self)
            }
        }

        impl<B: Backend<Complex = $scalar>> Mul<&PolynomialMD<B>> for $scalar {
            type Output = PolynomialMD<B>;

            fn mul(self, rhs: &PolynomialMD<B>) -> Self::Output {
                rhs.scale(self)
            }
        }
    };
}

impl_polynomial_scalar_ops!(Complex64);
impl_polynomial_scalar_ops!(Complex128);
