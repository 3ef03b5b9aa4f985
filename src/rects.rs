//! `rects` submodule implements an axis-aligned rectangle with containment and
//! intersection queries, which can be used for sprite bounds and hit testing.
//!

use crate::{points::Point2, vectors::Vector2};
use num_traits::{Num, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Returns the smaller of two partially ordered values.
///
fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}
/// Returns the larger of two partially ordered values.
///
fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// [`Rect`] struct represents a 2d axis-aligned rectangle given by its top-left
/// vertex and its dimensions, with positive orientation rightward/downward.
///
/// Width and height may be negative (caller responsibility); intersection queries
/// normalize each rectangle's extents via min/max first, so negative dimensions
/// are handled correctly there.
///
/// # Examples
/// ```rust
/// # use gamemath::rects::Rect;
/// let rect: Rect<i32> = Rect::new(0, 0, 10, 10);
/// assert!(rect.contains(5, 5));
/// assert_eq!(
///     rect.intersection(&Rect::new(5, 5, 10, 10)),
///     Some(Rect::new(5, 5, 5, 5))
/// );
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect<T> {
    /// Left coordinate of the top-left vertex.
    ///
    pub left: T,

    /// Top coordinate of the top-left vertex.
    ///
    pub top: T,

    /// Width of the rectangle.
    ///
    pub width: T,

    /// Height of the rectangle.
    ///
    pub height: T,
}
impl<T> Rect<T> {
    /// Initializes rectangle from its coordinates and dimensions.
    ///
    pub fn new(left: T, top: T, width: T, height: T) -> Self {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    /// Initializes rectangle from the position of its top-left vertex and dimensions.
    ///
    pub fn from_position(position: Point2<T>, width: T, height: T) -> Self {
        Rect::new(position.x, position.y, width, height)
    }

    /// Initializes rectangle from the position of its top-left vertex and a dimensions vector.
    ///
    pub fn from_dimensions(position: Point2<T>, dimensions: Vector2<T>) -> Self {
        Rect::new(position.x, position.y, dimensions.x, dimensions.y)
    }
}
impl<T: ToPrimitive + Copy> Rect<T> {
    /// Converts rectangle to another numeric coordinate type.
    ///
    /// Returns `None` when a field has no finite image in `U`.
    ///
    pub fn cast<U: NumCast>(self) -> Option<Rect<U>> {
        Some(Rect::new(
            U::from(self.left)?,
            U::from(self.top)?,
            U::from(self.width)?,
            U::from(self.height)?,
        ))
    }
}
impl<T: Num + PartialOrd + Copy> Rect<T> {
    /// Returns the top-left vertex of the rectangle.
    ///
    pub fn top_left(&self) -> Point2<T> {
        Point2::new(self.left, self.top)
    }
    /// Returns the top-right vertex of the rectangle.
    ///
    pub fn top_right(&self) -> Point2<T> {
        Point2::new(self.left + self.width, self.top)
    }
    /// Returns the bottom-left vertex of the rectangle.
    ///
    pub fn bottom_left(&self) -> Point2<T> {
        Point2::new(self.left, self.top + self.height)
    }
    /// Returns the bottom-right vertex of the rectangle.
    ///
    pub fn bottom_right(&self) -> Point2<T> {
        Point2::new(self.left + self.width, self.top + self.height)
    }

    /// Checks if the point given by `(x, y)` is inside the rectangle's area.
    ///
    /// This check is strictly exclusive: a point that lies on the edge of the
    /// rectangle is not contained.
    ///
    pub fn contains(&self, x: T, y: T) -> bool {
        (x > self.left)
            && (x < self.left + self.width)
            && (y > self.top)
            && (y < self.top + self.height)
    }
    /// Checks if the given point is inside the rectangle's area.
    ///
    /// This check is strictly exclusive: a point that lies on the edge of the
    /// rectangle is not contained.
    ///
    pub fn contains_point(&self, point: Point2<T>) -> bool {
        self.contains(point.x, point.y)
    }

    /// Checks if the point given by `(x, y)` is inside or on the edge of the
    /// rectangle's area.
    ///
    /// This check is inclusive: a point that lies on the edge of the rectangle
    /// is contained.
    ///
    pub fn contains_inclusive(&self, x: T, y: T) -> bool {
        (x >= self.left)
            && (x <= self.left + self.width)
            && (y >= self.top)
            && (y <= self.top + self.height)
    }
    /// Checks if the given point is inside or on the edge of the rectangle's area.
    ///
    /// This check is inclusive: a point that lies on the edge of the rectangle
    /// is contained.
    ///
    pub fn contains_point_inclusive(&self, point: Point2<T>) -> bool {
        self.contains_inclusive(point.x, point.y)
    }

    /// Checks the intersection between two rectangles.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::rects::Rect;
    /// let rect: Rect<i32> = Rect::new(0, 0, 10, 10);
    /// assert!(rect.intersects(&Rect::new(5, 5, 10, 10)));
    /// assert!(!rect.intersects(&Rect::new(20, 20, 5, 5)));
    /// ```
    ///
    pub fn intersects(&self, other: &Rect<T>) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns the overlap of two rectangles, or `None` if they do not overlap.
    ///
    /// Extents of both rectangles are normalized via min/max first, so negative
    /// dimensions are handled correctly. A valid intersection requires strictly
    /// positive overlap width and height: touching edges do not intersect.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::rects::Rect;
    /// let rect: Rect<i32> = Rect::new(0, 0, 10, 10);
    /// assert_eq!(
    ///     rect.intersection(&Rect::new(5, 5, 10, 10)),
    ///     Some(Rect::new(5, 5, 5, 5))
    /// );
    /// assert_eq!(rect.intersection(&Rect::new(10, 0, 5, 5)), None);
    /// ```
    ///
    pub fn intersection(&self, other: &Rect<T>) -> Option<Rect<T>> {
        let (r1_min_x, r1_max_x): (T, T) = (
            min_of(self.left, self.left + self.width),
            max_of(self.left, self.left + self.width),
        );
        let (r1_min_y, r1_max_y): (T, T) = (
            min_of(self.top, self.top + self.height),
            max_of(self.top, self.top + self.height),
        );
        let (r2_min_x, r2_max_x): (T, T) = (
            min_of(other.left, other.left + other.width),
            max_of(other.left, other.left + other.width),
        );
        let (r2_min_y, r2_max_y): (T, T) = (
            min_of(other.top, other.top + other.height),
            max_of(other.top, other.top + other.height),
        );

        let inter_left: T = max_of(r1_min_x, r2_min_x);
        let inter_top: T = max_of(r1_min_y, r2_min_y);
        let inter_right: T = min_of(r1_max_x, r2_max_x);
        let inter_bottom: T = min_of(r1_max_y, r2_max_y);

        if inter_left < inter_right && inter_top < inter_bottom {
            Some(Rect::new(
                inter_left,
                inter_top,
                inter_right - inter_left,
                inter_bottom - inter_top,
            ))
        } else {
            None
        }
    }

    /// Scales all four fields of the rectangle by a factor of `n` in place.
    ///
    pub fn scale(&mut self, n: T) {
        self.left = self.left * n;
        self.top = self.top * n;
        self.width = self.width * n;
        self.height = self.height * n;
    }

    /// Returns the area of the rectangle (`width * height`).
    ///
    pub fn area(&self) -> T {
        self.width * self.height
    }
    /// Returns the perimeter of the rectangle (`2 * (width + height)`).
    ///
    pub fn perimeter(&self) -> T {
        (T::one() + T::one()) * (self.width + self.height)
    }
}

/// Type alias for [`Rect`] with `i32` fields.
///
pub type IntRect = Rect<i32>;
/// Type alias for [`Rect`] with `u32` fields.
///
pub type UIntRect = Rect<u32>;
/// Type alias for [`Rect`] with `f32` fields.
///
pub type FloatRect = Rect<f32>;

#[cfg(test)]
mod tests {
    use super::Rect;
    use crate::{points::Point2, vectors::Vector2};

    #[test]
    fn rect() {
        let rect: Rect<i32> = Rect::new(0, 0, 10, 10);
        assert_eq!(
            Rect::from_position(Point2::new(0, 0), 10, 10),
            rect
        );
        assert_eq!(
            Rect::from_dimensions(Point2::new(0, 0), Vector2::new(10, 10)),
            rect
        );
        assert_eq!(Rect::<i32>::default(), Rect::new(0, 0, 0, 0));

        assert_eq!(rect.top_left(), Point2::new(0, 0));
        assert_eq!(rect.top_right(), Point2::new(10, 0));
        assert_eq!(rect.bottom_left(), Point2::new(0, 10));
        assert_eq!(rect.bottom_right(), Point2::new(10, 10));

        assert_eq!(rect.area(), 100);
        assert_eq!(rect.perimeter(), 40);

        let mut scaled: Rect<i32> = Rect::new(1, 2, 3, 4);
        scaled.scale(2);
        assert_eq!(scaled, Rect::new(2, 4, 6, 8));

        assert_eq!(
            Rect::new(0.5_f32, 0.5, 1.5, 1.5).cast::<i32>(),
            Some(Rect::new(0, 0, 1, 1))
        );
    }

    #[test]
    fn rect_containment() {
        let rect: Rect<i32> = Rect::new(0, 0, 10, 10);

        assert!(rect.contains(5, 5));
        assert!(!rect.contains(0, 5));
        assert!(!rect.contains(10, 10));
        assert!(rect.contains_point(Point2::new(1, 9)));
        assert!(!rect.contains_point(Point2::new(10, 5)));

        assert!(rect.contains_inclusive(0, 5));
        assert!(rect.contains_inclusive(10, 10));
        assert!(!rect.contains_inclusive(11, 5));
        assert!(rect.contains_point_inclusive(Point2::new(0, 0)));
        assert!(!rect.contains_point_inclusive(Point2::new(-1, 0)));
    }

    #[test]
    fn rect_intersection() {
        let rect: Rect<i32> = Rect::new(0, 0, 10, 10);

        assert!(rect.intersects(&Rect::new(5, 5, 10, 10)));
        assert_eq!(
            rect.intersection(&Rect::new(5, 5, 10, 10)),
            Some(Rect::new(5, 5, 5, 5))
        );

        assert!(!rect.intersects(&Rect::new(20, 20, 5, 5)));
        assert_eq!(rect.intersection(&Rect::new(20, 20, 5, 5)), None);

        // touching edges have zero overlap width and do not intersect
        assert!(!rect.intersects(&Rect::new(10, 0, 5, 5)));

        // negative dimensions are normalized before intersecting
        let flipped: Rect<i32> = Rect::new(10, 10, -10, -10);
        assert_eq!(
            flipped.intersection(&Rect::new(0, 0, 5, 5)),
            Some(Rect::new(0, 0, 5, 5))
        );
    }
}
