//! Straight lines as callable objects

use crate::function::ScalarFunction;
use std::fmt;
use std::ops::Add;

/// Slope/intercept access plus a "construct the same variant" hook
///
/// Affine functions are closed under addition; [`Affine::combined_with`] builds the
/// sum through [`Affine::from_parts`] so the result keeps the invoking type.
pub trait Affine: ScalarFunction {
    fn slope(&self) -> f64;
    fn intercept(&self) -> f64;

    fn from_parts(slope: f64, intercept: f64) -> Self
    where
        Self: Sized;

    fn combined_with(&self, other: &dyn Affine) -> Self
    where
        Self: Sized,
    {
        Self::from_parts(
            self.slope() + other.slope(),
            self.intercept() + other.intercept(),
        )
    }
}

/// `y = m·x + c`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLine {
    slope: f64,
    intercept: f64,
}

impl StraightLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn set_slope(&mut self, slope: f64) {
        self.slope = slope;
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn set_intercept(&mut self, intercept: f64) {
        self.intercept = intercept;
    }
}

impl ScalarFunction for StraightLine {
    fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl Affine for StraightLine {
    fn slope(&self) -> f64 {
        self.slope
    }

    fn intercept(&self) -> f64 {
        self.intercept
    }

    fn from_parts(slope: f64, intercept: f64) -> Self {
        Self::new(slope, intercept)
    }
}

impl Add for StraightLine {
    type Output = StraightLine;

    fn add(self, rhs: StraightLine) -> StraightLine {
        self.combined_with(&rhs)
    }
}

impl Add for &StraightLine {
    type Output = StraightLine;

    fn add(self, rhs: &StraightLine) -> StraightLine {
        self.combined_with(rhs)
    }
}

impl fmt::Display for StraightLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x + {}", self.slope, self.intercept)
    }
}
