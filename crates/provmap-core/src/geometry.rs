//! Points and bounding boxes

use std::fmt;

/// A 2D pixel position.
///
/// Coordinates are unsigned; `(0, 0)` is the top-left corner of the
/// image and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    /// Create a point from its coordinates.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle of inclusive extreme coordinates.
///
/// A bounding box always contains at least one point: it is created
/// from the first point of a region and grown with [`include`]. There
/// is deliberately no empty state: starting from a sentinel such as
/// `(0, 0)` would silently corrupt `min` for regions that do not touch
/// the origin.
///
/// [`include`]: BoundingBox::include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// The degenerate box covering a single point.
    pub const fn at(point: Point) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grow the box to cover `point`.
    pub fn include(&mut self, point: Point) {
        if point.x < self.min.x {
            self.min.x = point.x;
        } else if point.x > self.max.x {
            self.max.x = point.x;
        }

        if point.y < self.min.y {
            self.min.y = point.y;
        } else if point.y > self.max.y {
            self.max.y = point.y;
        }
    }

    /// Width in pixels (inclusive extent).
    #[inline]
    pub const fn width(&self) -> u32 {
        self.max.x - self.min.x + 1
    }

    /// Height in pixels (inclusive extent).
    #[inline]
    pub const fn height(&self) -> u32 {
        self.max.y - self.min.y + 1
    }

    /// `(width, height)` in one call.
    pub const fn dims(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Whether `point` lies inside the box.
    pub const fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x && point.x <= self.max.x && self.min.y <= point.y && point.y <= self.max.y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.min, self.max)
    }
}
