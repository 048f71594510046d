//! Basic geometric types shared by the layout engines.

use serde::{Deserialize, Serialize};

/// A 2D position in canvas space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns a new point with both coordinates clamped into the bounds.
    pub fn clamp_to(self, bounds: Bounds) -> Self {
        Self {
            x: self.x.clamp(bounds.min_x, bounds.max_x),
            y: self.y.clamp(bounds.min_y, bounds.max_y),
        }
    }

    /// Checks that both coordinates are finite (not NaN, not infinite).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Represents the dimensions of a canvas with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the area covered by this size
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns the smaller of width and height
    pub fn min_dimension(self) -> f32 {
        self.width.min(self.height)
    }

    /// Returns the center point of a canvas with this size
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts the size into the bounds of a canvas anchored at the origin
    pub fn to_bounds(self) -> Bounds {
        Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: self.width,
            max_y: self.height,
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit corner coordinates.
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Shrinks the bounds by the given margin on every side.
    ///
    /// A margin larger than half the extent collapses the bounds onto the
    /// center line rather than inverting min/max.
    pub fn inset(self, margin: f32) -> Self {
        let mid_x = (self.min_x + self.max_x) / 2.0;
        let mid_y = (self.min_y + self.max_y) / 2.0;
        Self {
            min_x: (self.min_x + margin).min(mid_x),
            min_y: (self.min_y + margin).min(mid_y),
            max_x: (self.max_x - margin).max(mid_x),
            max_y: (self.max_y - margin).max(mid_y),
        }
    }

    /// Checks whether a point lies inside the bounds (edges inclusive).
    pub fn contains(self, point: Point) -> bool {
        point.x() >= self.min_x
            && point.x() <= self.max_x
            && point.y() >= self.min_y
            && point.y() <= self.max_y
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn size_strategy() -> impl Strategy<Value = Size> {
        (1.0f32..2000.0, 1.0f32..2000.0).prop_map(|(w, h)| Size::new(w, h))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Point addition should be commutative: p1 + p2 == p2 + p1.
    fn check_point_add_is_commutative(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result1 = p1.add_point(p2);
        let result2 = p2.add_point(p1);

        prop_assert!(approx_eq!(f32, result1.x(), result2.x()));
        prop_assert!(approx_eq!(f32, result1.y(), result2.y()));
        Ok(())
    }

    /// Adding then subtracting a point should return the original.
    fn check_add_sub_inverse(p1: Point, p2: Point) -> Result<(), TestCaseError> {
        let result = p1.add_point(p2).sub_point(p2);

        prop_assert!(approx_eq!(f32, result.x(), p1.x(), epsilon = 0.001));
        prop_assert!(approx_eq!(f32, result.y(), p1.y(), epsilon = 0.001));
        Ok(())
    }

    /// A clamped point always lies inside the bounds it was clamped to.
    fn check_clamp_lands_inside(p: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = size.to_bounds();
        let clamped = p.clamp_to(bounds);

        prop_assert!(bounds.contains(clamped));
        Ok(())
    }

    /// Clamping a point already inside the bounds is the identity.
    fn check_clamp_is_identity_inside(p: Point, size: Size) -> Result<(), TestCaseError> {
        let bounds = size.to_bounds();
        prop_assume!(bounds.contains(p));

        let clamped = p.clamp_to(bounds);
        prop_assert!(approx_eq!(f32, clamped.x(), p.x()));
        prop_assert!(approx_eq!(f32, clamped.y(), p.y()));
        Ok(())
    }

    /// Inset bounds never invert: width and height stay non-negative.
    fn check_inset_never_inverts(size: Size, margin: f32) -> Result<(), TestCaseError> {
        let inset = size.to_bounds().inset(margin);

        prop_assert!(inset.width() >= 0.0);
        prop_assert!(inset.height() >= 0.0);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #![proptest_config(ProptestConfig { max_global_rejects: 100_000, ..ProptestConfig::default() })]

        #[test]
        fn point_add_is_commutative(p1 in point_strategy(), p2 in point_strategy()) {
            check_point_add_is_commutative(p1, p2)?;
        }

        #[test]
        fn add_sub_inverse(p1 in point_strategy(), p2 in point_strategy()) {
            check_add_sub_inverse(p1, p2)?;
        }

        #[test]
        fn clamp_lands_inside(p in point_strategy(), size in size_strategy()) {
            check_clamp_lands_inside(p, size)?;
        }

        #[test]
        fn clamp_is_identity_inside(p in point_strategy(), size in size_strategy()) {
            check_clamp_is_identity_inside(p, size)?;
        }

        #[test]
        fn inset_never_inverts(size in size_strategy(), margin in 0.0f32..500.0) {
            check_inset_never_inverts(size, margin)?;
        }
    }
}
