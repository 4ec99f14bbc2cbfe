//! Human-readable rendering of polynomials as sums of monomials

use super::PolynomialMD;
use crate::dtype::ComplexElement;
use crate::runtime::Backend;
use std::fmt;

/// Nonzero terms in lexicographic exponent order, e.g.
/// `(1+2i)·z1^-1·z2^3 + (0.5+0i)`. The zero polynomial prints as `0`.
impl<B: Backend> fmt::Display for PolynomialMD<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms = Vec::new();
        self.for_each_stored(|k, c| {
            if !c.is_zero() {
                terms.push((k.to_vec(), c));
            }
        });
        if terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (k, c)) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "({c})")?;
            for (axis, &e) in k.iter().enumerate() {
                match e {
                    0 => {}
                    1 => write!(f, "·z{}", axis + 1)?,
                    _ => write!(f, "·z{}^{e}", axis + 1)?,
                }
            }
        }
        Ok(())
    }
}
