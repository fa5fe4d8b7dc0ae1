//! Grid coordinates and the bounded plane the robot lives on.
//!
//! The plane never changes once created. Validity of a coordinate is
//! always relative to a plane; coordinates themselves carry no bounds.

use super::direction::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbouring coordinate one unit along `direction`.
    ///
    /// Returns `None` if the step overflows `i32`. A plane never contains
    /// `None`, so an overflowing step is rejected like any other off-grid move.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Inclusive rectangular range `[0, width] x [0, height]`.
///
/// # Example
///
/// ```rust
/// use gridbot::core::{Coordinate, Plane};
///
/// let plane = Plane::default();
/// assert!(plane.contains(Coordinate::new(5, 5)));
/// assert!(!plane.contains(Coordinate::new(6, 0)));
/// assert!(!plane.contains(None::<Coordinate>));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Plane {
    width: u32,
    height: u32,
}

impl Plane {
    pub const DEFAULT_BOUND: u32 = 5;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether `coordinate` lies on the plane. Absent coordinates never do.
    pub fn contains(&self, coordinate: impl Into<Option<Coordinate>>) -> bool {
        let Some(Coordinate { x, y }) = coordinate.into() else {
            return false;
        };

        x >= 0 && y >= 0 && x as u32 <= self.width && y as u32 <= self.height
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BOUND, Self::DEFAULT_BOUND)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[x={}, y={}]", self.width, self.height)
    }
}
