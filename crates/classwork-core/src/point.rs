//! # Point
//!
//! Three takes on a point in the plane:
//!
//! - [`Point`]: private coordinates behind getter/setter pairs.
//! - [`PlainPoint`]: public fields, no encapsulation at all.
//! - [`HalfPlanePoint`]: restricted to the upper half-plane. Its y-setter silently
//!   clamps negative values to zero instead of rejecting them.

use std::fmt;
use std::ops::Add;
use tracing::trace;

/// Read access to planar coordinates plus a "construct the same variant" hook
///
/// Composition operators build their result through [`Planar::from_coords`], so a
/// type implementing this trait gets back its own type from [`Planar::translated_by`]
/// rather than some fixed base type.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Build a value of the implementing variant from raw coordinates
    fn from_coords(x: f64, y: f64) -> Self
    where
        Self: Sized;

    /// Coordinate-wise sum, returned as the invoking variant
    fn translated_by(&self, other: &dyn Planar) -> Self
    where
        Self: Sized,
    {
        Self::from_coords(self.x() + other.x(), self.y() + other.y())
    }
}

/// A point whose coordinates are only reachable through accessors
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

impl Planar for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_coords(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}

/// A bare data holder, fields read and written directly
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPoint {
    pub x: f64,
    pub y: f64,
}

impl PlainPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point confined to the upper half-plane (`y >= 0`)
#[derive(Debug, Clone, Copy)]
pub struct HalfPlanePoint {
    x: f64,
    y: f64,
}

impl HalfPlanePoint {
    /// Create a point; a negative `y` is clamped to zero
    ///
    /// # Example
    /// ```
    /// use classwork_core::HalfPlanePoint;
    /// let p = HalfPlanePoint::new(2.0, -6.0);
    /// assert_eq!(p.y(), 0.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        let mut point = Self { x, y: 0.0 };
        point.set_y(y);
        point
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        if y < 0.0 {
            trace!(requested = y, "clamping y to the half-plane");
            self.y = 0.0;
        } else {
            self.y = y;
        }
    }

    /// Euclidean distance to any other planar point
    pub fn distance(&self, other: &dyn Planar) -> f64 {
        let dx = self.x - other.x();
        let dy = self.y - other.y();
        (dx * dx + dy * dy).sqrt()
    }
}

impl Planar for HalfPlanePoint {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_coords(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}

impl Add for HalfPlanePoint {
    type Output = HalfPlanePoint;

    fn add(self, rhs: HalfPlanePoint) -> HalfPlanePoint {
        self.translated_by(&rhs)
    }
}

impl Add for &HalfPlanePoint {
    type Output = HalfPlanePoint;

    fn add(self, rhs: &HalfPlanePoint) -> HalfPlanePoint {
        self.translated_by(rhs)
    }
}

impl fmt::Display for HalfPlanePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.x, self.y)
    }
}
