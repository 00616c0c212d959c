//! Geometric primitives of the canvas coordinate space.
//!
//! # Overview
//!
//! - [`Point`] - An integer coordinate on the canvas
//! - [`Rect`] - An axis-aligned rectangle anchored at its top-left origin
//!
//! # Coordinate System
//!
//! Canvas coordinates follow the screen convention:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Coordinates may be negative; a canvas has no fixed origin corner.

/// An integer point in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i64,
    y: i64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i64 {
        self.y
    }
}

/// An axis-aligned rectangle covering `[x, x + width] × [y, y + height]`.
///
/// Both bounds are inclusive, so a rectangle with zero width or height is a
/// degenerate segment (or point) that still contains its own edge.
///
/// # Examples
///
/// ```
/// # use canvasmark_core::geometry::{Point, Rect};
/// let rect = Rect::new(0, 0, 100, 50);
///
/// assert!(rect.contains(Point::new(100, 50)));
/// assert!(!rect.contains(Point::new(101, 50)));
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    origin: Point,
    width: i64,
    height: i64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        self.origin
    }

    pub fn x(self) -> i64 {
        self.origin.x
    }

    pub fn y(self) -> i64 {
        self.origin.y
    }

    pub fn width(self) -> i64 {
        self.width
    }

    pub fn height(self) -> i64 {
        self.height
    }

    /// Returns the x-coordinate of the right edge, saturating on overflow
    pub fn right(self) -> i64 {
        self.origin.x.saturating_add(self.width)
    }

    /// Returns the y-coordinate of the bottom edge, saturating on overflow
    pub fn bottom(self) -> i64 {
        self.origin.y.saturating_add(self.height)
    }

    /// Returns `width * height`.
    ///
    /// Computed in `i128` so that no pair of `i64` sizes can overflow. A
    /// rectangle with a negative side has a non-positive area.
    pub fn area(self) -> i128 {
        i128::from(self.width) * i128::from(self.height)
    }

    /// Checks whether `point` lies inside this rectangle, boundary included.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.right()
            && point.y >= self.origin.y
            && point.y <= self.bottom()
    }

    /// Checks whether the origin of `other` lies inside this rectangle.
    ///
    /// Only the top-left corner of `other` is tested, not its full extent.
    pub fn contains_origin_of(self, other: Rect) -> bool {
        self.contains(other.origin)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_contains_interior_point() {
        let rect = Rect::new(10, 20, 30, 40);
        assert!(rect.contains(Point::new(25, 35)));
    }

    #[test]
    fn test_contains_all_four_boundaries() {
        let rect = Rect::new(10, 20, 30, 40);

        assert!(rect.contains(Point::new(10, 30)), "left edge");
        assert!(rect.contains(Point::new(40, 30)), "right edge");
        assert!(rect.contains(Point::new(20, 20)), "top edge");
        assert!(rect.contains(Point::new(20, 60)), "bottom edge");
        assert!(rect.contains(Point::new(40, 60)), "bottom-right corner");
    }

    #[test]
    fn test_contains_rejects_outside() {
        let rect = Rect::new(10, 20, 30, 40);

        assert!(!rect.contains(Point::new(9, 30)));
        assert!(!rect.contains(Point::new(41, 30)));
        assert!(!rect.contains(Point::new(20, 19)));
        assert!(!rect.contains(Point::new(20, 61)));
    }

    #[test]
    fn test_zero_area_rect_contains_its_segment() {
        let line = Rect::new(0, 0, 10, 0);

        assert_eq!(line.area(), 0);
        assert!(line.contains(Point::new(5, 0)));
        assert!(!line.contains(Point::new(5, 1)));
    }

    #[test]
    fn test_negative_size_contains_nothing() {
        let rect = Rect::new(0, 0, -10, 10);

        assert!(!rect.contains(Point::new(0, 0)));
        assert!(!rect.contains(Point::new(-5, 5)));
    }

    #[test]
    fn test_right_and_bottom_saturate() {
        let rect = Rect::new(i64::MAX - 1, i64::MAX, 10, 10);

        assert_eq!(rect.right(), i64::MAX);
        assert_eq!(rect.bottom(), i64::MAX);
    }

    #[test]
    fn test_contains_origin_of_ignores_extent() {
        let group = Rect::new(0, 0, 100, 100);
        let overhanging = Rect::new(90, 90, 500, 500);

        assert!(group.contains_origin_of(overhanging));
    }

    proptest! {
        #[test]
        fn prop_contains_matches_interval_test(
            x in -1000i64..1000,
            y in -1000i64..1000,
            width in 0i64..500,
            height in 0i64..500,
            px in -1500i64..1500,
            py in -1500i64..1500,
        ) {
            let rect = Rect::new(x, y, width, height);
            let expected = (x..=x + width).contains(&px) && (y..=y + height).contains(&py);
            prop_assert_eq!(rect.contains(Point::new(px, py)), expected);
        }

        #[test]
        fn prop_corners_are_contained(
            x in -1000i64..1000,
            y in -1000i64..1000,
            width in 0i64..500,
            height in 0i64..500,
        ) {
            let rect = Rect::new(x, y, width, height);
            prop_assert!(rect.contains(Point::new(x, y)));
            prop_assert!(rect.contains(Point::new(x + width, y)));
            prop_assert!(rect.contains(Point::new(x, y + height)));
            prop_assert!(rect.contains(Point::new(x + width, y + height)));
        }
    }
}
