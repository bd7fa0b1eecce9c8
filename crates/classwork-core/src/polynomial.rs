//! Polynomials as callable objects

use crate::function::ScalarFunction;
use std::fmt;

/// A polynomial in one variable
///
/// Coefficients are supplied highest degree first, the way the polynomial is
/// written, and stored in ascending order so that `coefficients()[i]` multiplies
/// `x^i`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Build `c[0]·x^(n-1) + … + c[n-1]`
    ///
    /// # Example
    /// ```
    /// use classwork_core::{Polynomial, ScalarFunction};
    /// let p = Polynomial::new([1.0, 3.0, -2.0]); // x² + 3x - 2
    /// assert_eq!(p.evaluate(2.0), 8.0);
    /// ```
    pub fn new<I>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut coefficients: Vec<f64> = coefficients.into_iter().collect();
        coefficients.reverse();
        Self { coefficients }
    }

    /// Coefficients in ascending degree order
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Number of stored coefficients minus one; `None` for the empty polynomial
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }
}

impl ScalarFunction for Polynomial {
    fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficients.is_empty() {
            return write!(f, "0");
        }
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .map(|(i, c)| match i {
                0 => format!("{}", c),
                1 => format!("{}x", c),
                _ => format!("{}x^{}", c, i),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_storage_is_ascending() {
        let p = Polynomial::new([1.0, 3.0, -2.0]);
        assert_eq!(p.coefficients(), &[-2.0, 3.0, 1.0]);
        assert_eq!(p.degree(), Some(2));
    }

    #[test]
    fn test_quadratic() {
        assert_eq!(Polynomial::new([1.0, 3.0, -2.0]).evaluate(2.0), 8.0);
    }

    #[test]
    fn test_constant() {
        let p = Polynomial::new([-2.0]);
        assert_eq!(p.degree(), Some(0));
        for x in [-5.0, 0.0, 3.5] {
            assert_eq!(p.evaluate(x), -2.0);
        }
    }

    #[test]
    fn test_empty_is_zero() {
        let p = Polynomial::new(Vec::new());
        assert_eq!(p.degree(), None);
        assert_eq!(p.evaluate(10.0), 0.0);
        assert_eq!(p.to_string(), "0");
    }

    #[test]
    fn test_cubic() {
        // -0.5x³ + 2x² + x + 3 at x = 2
        let p = Polynomial::new([-0.5, 2.0, 1.0, 3.0]);
        assert_relative_eq!(p.evaluate(2.0), 9.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Polynomial::new([3.0, -2.0]).to_string(), "3x + -2");
        assert_eq!(Polynomial::new([1.0, 3.0, -2.0]).to_string(), "1x^2 + 3x + -2");
    }
}
