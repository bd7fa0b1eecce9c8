//! Callable scalar functions
//!
//! Lines and polynomials are "callable objects": each one can be evaluated at a
//! single point, and the same scalar evaluation is mapped elementwise to sample the
//! function across a sequence of x-values for plotting.

/// A pure function of one real variable
pub trait ScalarFunction {
    /// Evaluate the function at a single point
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluate the function at every point of `xs`, preserving order
    ///
    /// # Example
    /// ```
    /// use classwork_core::{ScalarFunction, StraightLine};
    /// let line = StraightLine::new(2.0, 1.0);
    /// assert_eq!(line.sample(&[0.0, 1.0, 2.0]), vec![1.0, 3.0, 5.0]);
    /// ```
    fn sample(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Pair every x with its image, the shape a plotting surface consumes
    fn sample_points(&self, xs: &[f64]) -> Vec<[f64; 2]> {
        xs.iter().map(|&x| [x, self.evaluate(x)]).collect()
    }
}

impl<T: ScalarFunction + ?Sized> ScalarFunction for &T {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }
}

impl<T: ScalarFunction + ?Sized> ScalarFunction for Box<T> {
    fn evaluate(&self, x: f64) -> f64 {
        (**self).evaluate(x)
    }
}
