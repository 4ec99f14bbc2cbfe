//! Operator overloads for sequences
//!
//! Binary operators between sequences are thin wrappers over the `try_*`
//! methods.
//!
//! # Panics
//!
//! `a + b` and `a - b` panic when the operands have different dimensions. Use
//! [`ComplexL0SequenceMD::try_add`] / [`ComplexL0SequenceMD::try_sub`] to
//! handle that case.
//!
//! Scalar operands are supported on either side for the concrete element
//! types, and only touch the coefficient at the zero multi-index.

use super::ComplexL0SequenceMD;
use crate::dtype::{Complex64, Complex128};
use crate::runtime::Backend;
use std::ops::{Add, Neg, Sub};

macro_rules! impl_sequence_binary_op {
    ($trait:ident, $method:ident, $try_method:ident) => {
        impl<B: Backend> $trait<&ComplexL0SequenceMD<B>> for &ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn $method(self, rhs: &ComplexL0SequenceMD<B>) -> Self::Output {
                self.$try_method(rhs)
                    .unwrap_or_else(|e| panic!("sequence {} failed: {e}", stringify!($method)))
            }
        }

        impl<B: Backend> $trait for ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_sequence_binary_op!(Add, add, try_add);
impl_sequence_binary_op!(Sub, sub, try_sub);

impl<B: Backend> Neg for &ComplexL0SequenceMD<B> {
    type Output = ComplexL0SequenceMD<B>;

    fn neg(self) -> Self::Output {
        self.map_coefficients(|x| -x)
    }
}

impl<B: Backend> Neg for ComplexL0SequenceMD<B> {
    type Output = ComplexL0SequenceMD<B>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! impl_sequence_scalar_ops {
    ($scalar:ty) => {
        impl<B: Backend<Complex = $scalar>> Add<$scalar> for &ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn add(self, rhs: $scalar) -> Self::Output {
                self.add_scalar(rhs)
            }
        }

        impl<B: Backend<Complex = $scalar>> Add<$scalar> for ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn add(self, rhs: $scalar) -> Self::Output {
                self.add_scalar(rhs)
            }
        }

        impl<B: Backend<Complex = $scalar>> Sub<$scalar> for &ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn sub(self, rhs: $scalar) -> Self::Output {
                self.sub_scalar(rhs)
            }
        }

        impl<B: Backend<Complex = $scalar>> Sub<$scalar> for ComplexL0SequenceMD<B> {
            type Output = ComplexL0SequenceMD<B>;

            fn sub(self, rhs: $scalar) -> Self::Output {
                self.sub_scalar(rhs)
            }
        }

        impl<B: Backend<Complex = $scalar>> Add<ComplexL0SequenceMD<B>> for $scalar {
            type Output = ComplexL0SequenceMD<B>;

            fn add(self, rhs: ComplexL0SequenceMD<B>) -> Self::Output {
                rhs.add_scalar(self)
            }
        }

        impl<B: Backend<Complex = $scalar>> Sub<ComplexL0SequenceMD<B>> for $scalar {
            type Output = ComplexL0SequenceMD<B>;

            fn sub(self, rhs: ComplexL0SequenceMD<B>) -> Self::Output {
                rhs.rsub_scalar(self)
            }
        }
    };
}

impl_sequence_scalar_ops!(Complex64);
impl_sequence_scalar_ops!(Complex128);
