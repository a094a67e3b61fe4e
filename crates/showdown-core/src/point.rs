//! 2D coordinates on the battlefield.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A location on the battlefield.
///
/// Thin wrapper over [`DVec2`] exposing only what combat needs: distance and
/// bounded movement toward another point.
///
/// # Example
///
/// ```
/// use showdown_core::Point;
///
/// let a = Point::new(5.0, 5.0);
/// let b = Point::new(10.0, 10.0);
/// assert!((a.distance(b) - 7.07107).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point(DVec2);

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self(DVec2::ZERO);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// X coordinate.
    #[must_use]
    pub const fn x(self) -> f64 {
        self.0.x
    }

    /// Y coordinate.
    #[must_use]
    pub const fn y(self) -> f64 {
        self.0.y
    }

    /// Euclidean distance to `other`.
    ///
    /// The difference is scaled by its largest component before squaring, so
    /// coordinates near `f64::MAX` do not overflow.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let (unit, scale) = scaled_delta(self.0, other.0);
        unit.length() * scale
    }

    /// Returns the point reached by walking from `self` toward `target` by at
    /// most `max_step`.
    ///
    /// When `target` is within `max_step` the result is `target` itself, so
    /// callers can compare for equality after arrival. A negative step is
    /// treated as zero, and a non-finite `target` leaves the point unchanged.
    ///
    /// ```
    /// use showdown_core::Point;
    ///
    /// let from = Point::new(0.0, 0.0);
    /// assert_eq!(from.move_towards(Point::new(10.0, 0.0), 4.0), Point::new(4.0, 0.0));
    /// assert_eq!(from.move_towards(Point::new(3.0, 4.0), 6.0), Point::new(3.0, 4.0));
    /// ```
    #[must_use]
    pub fn move_towards(self, target: Self, max_step: f64) -> Self {
        if !target.is_finite() {
            return self;
        }
        let step = max_step.max(0.0);
        let (unit, scale) = scaled_delta(self.0, target.0);
        let norm = unit.length();
        if norm * scale <= step {
            return target;
        }
        Self(self.0 + unit * (step / norm))
    }

    /// Returns `true` if neither coordinate is negative.
    #[must_use]
    pub fn is_in_first_quadrant(self) -> bool {
        self.0.x >= 0.0 && self.0.y >= 0.0
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

/// Splits `to - from` into a vector with components in `[-1, 1]` and the
/// factor that scales it back.
fn scaled_delta(from: DVec2, to: DVec2) -> (DVec2, f64) {
    let delta = to - from;
    let scale = delta.abs().max_element();
    if scale <= 0.0 || !scale.is_finite() {
        return (delta, 1.0);
    }
    (delta / scale, scale)
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}
