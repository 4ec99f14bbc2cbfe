//! Norms and approximate reality checks

use super::ComplexL0SequenceMD;
use crate::dtype::ComplexElement;
use crate::runtime::Backend;
use num_traits::{Float, Zero};

type Real<B> = <<B as Backend>::Complex as ComplexElement>::Real;

impl<B: Backend> ComplexL0SequenceMD<B> {
    /// Sum of the magnitudes of all stored coefficients
    pub fn l1_norm(&self) -> Real<B> {
        let mut acc = <Real<B> as Zero>::zero();
        self.for_each_stored(|_, c| acc = acc + c.magnitude());
        acc
    }

    /// Sum of the squared magnitudes of all stored coefficients
    pub fn l2_squared_norm(&self) -> Real<B> {
        let mut acc = <Real<B> as Zero>::zero();
        self.for_each_stored(|_, c| acc = acc + c.magnitude_squared());
        acc
    }

    /// Euclidean norm of the coefficient sequence
    pub fn l2_norm(&self) -> Real<B> {
        self.l2_squared_norm().sqrt()
    }

    /// Whether every stored coefficient has a negligible imaginary part
    ///
    /// This is a tolerance check against [`Backend::machine_threshold`], not an
    /// exact test: rounding noise from transforms counts as real.
    pub fn is_real(&self) -> bool {
        let threshold = B::machine_threshold();
        self.all_stored(|c| c.im().abs() <= threshold)
    }

    /// Whether every stored coefficient has a negligible real part
    ///
    /// Tolerance check, like [`Self::is_real`].
    pub fn is_imaginary(&self) -> bool {
        let threshold = B::machine_threshold();
        self.all_stored(|c| c.re().abs() <= threshold)
    }

    fn all_stored(&self, pred: impl Fn(B::Complex) -> bool) -> bool {
        let mut all = true;
        self.for_each_stored(|_, c| all &= pred(c));
        all
    }
}
