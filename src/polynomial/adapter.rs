//! Lifting univariate Laurent polynomials into `m` variables

use super::PolynomialMD;
use crate::dtype::ComplexElement;
use crate::error::{Error, Result};
use crate::runtime::Backend;
use crate::tensor::Tensor;

/// A univariate Laurent polynomial seen through its coefficient list
///
/// `coefficients()[i]` is the coefficient of `z^(support_start() + i)`.
pub trait UnivariateLaurent<C: ComplexElement> {
    /// Coefficients in increasing exponent order
    fn coefficients(&self) -> Vec<C>;

    /// Exponent of the first coefficient
    fn support_start(&self) -> i64;
}

/// `(coefficients, support start)`
impl<C: ComplexElement> UnivariateLaurent<C> for (Vec<C>, i64) {
    fn coefficients(&self) -> Vec<C> {
        self.0.clone()
    }

    fn support_start(&self) -> i64 {
        self.1
    }
}

/// An ordinary polynomial `c[0] + c[1] z + ...`
impl<C: ComplexElement> UnivariateLaurent<C> for [C] {
    fn coefficients(&self) -> Vec<C> {
        self.to_vec()
    }

    fn support_start(&self) -> i64 {
        0
    }
}

/// An ordinary polynomial `c[0] + c[1] z + ...`
impl<C: ComplexElement> UnivariateLaurent<C> for Vec<C> {
    fn coefficients(&self) -> Vec<C> {
        self.clone()
    }

    fn support_start(&self) -> i64 {
        0
    }
}

impl<B: Backend> PolynomialMD<B> {
    /// Embed `p(z)` as the `m`-variate polynomial `P(z_1, ..., z_m) = p(z_m)`
    ///
    /// The coefficient list becomes the innermost axis; every outer axis has
    /// length one and starts at zero.
    pub fn from_univariate<P>(p: &P, m: usize) -> Result<Self>
    where
        P: UnivariateLaurent<B::Complex> + ?Sized,
    {
        if m == 0 {
            return Err(Error::InvalidArgument {
                arg: "m",
                reason: "a polynomial needs at least one variable".to_string(),
            });
        }
        let coeffs = p.coefficients();
        let mut shape = vec![1; m - 1];
        shape.push(coeffs.len());
        let mut starts = vec![0; m - 1];
        starts.push(p.support_start());

        let dense = Tensor::try_from_vec(coeffs, &shape)?;
        Ok(Self::from_dense(&dense, &starts))
    }
}
