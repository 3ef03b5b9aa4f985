//! `points` submodule implements 2-dimensional and 3-dimensional coordinate points
//! which can be used to represent positions of game objects.
//!

use num_traits::{NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Converts coordinate to `f64`, falling back to NaN for values that have no `f64` image.
///
fn to_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// [`Point2`] struct represents 2-dimensional point with coordinates of numeric type `T`.
///
/// Points are pure data with value semantics: they are copied freely and carry no
/// derived state. Displacements between points are represented by
/// [`Vector2`](crate::vectors::Vector2).
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2<T> {
    /// X coordinate of point.
    ///
    pub x: T,

    /// Y coordinate of point.
    ///
    pub y: T,
}
impl<T> Point2<T> {
    /// Initializes point from given coordinates.
    ///
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}
impl<T: ToPrimitive + Copy> Point2<T> {
    /// Converts point to another numeric coordinate type.
    ///
    /// Returns `None` when a coordinate has no finite image in `U`.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::points::Point2;
    /// let point: Point2<f32> = Point2::new(1.9, 2.1);
    /// assert_eq!(point.cast::<i32>(), Some(Point2::new(1, 2)));
    /// ```
    ///
    pub fn cast<U: NumCast>(self) -> Option<Point2<U>> {
        Some(Point2::new(U::from(self.x)?, U::from(self.y)?))
    }

    /// Returns Euclidean distance to other point as `f64` regardless of `T`.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::points::Point2;
    /// assert_eq!(Point2::new(0, 0).distance_to(Point2::new(3, 4)), 5.0);
    /// ```
    ///
    pub fn distance_to<U: ToPrimitive + Copy>(self, other: Point2<U>) -> f64 {
        let (dx, dy): (f64, f64) = (
            to_f64(other.x) - to_f64(self.x),
            to_f64(other.y) - to_f64(self.y),
        );
        (dx * dx + dy * dy).sqrt()
    }
}
impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Type alias for [`Point2`] with `i32` coordinates.
///
pub type Point2i = Point2<i32>;
/// Type alias for [`Point2`] with `u32` coordinates.
///
pub type Point2u = Point2<u32>;
/// Type alias for [`Point2`] with `f32` coordinates.
///
pub type Point2f = Point2<f32>;

/// [`Point3`] struct represents 3-dimensional point with coordinates of numeric type `T`.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3<T> {
    /// X coordinate of point.
    ///
    pub x: T,

    /// Y coordinate of point.
    ///
    pub y: T,

    /// Z coordinate of point.
    ///
    pub z: T,
}
impl<T> Point3<T> {
    /// Initializes point from given coordinates.
    ///
    pub fn new(x: T, y: T, z: T) -> Self {
        Point3 { x, y, z }
    }
}
impl<T: ToPrimitive + Copy> Point3<T> {
    /// Converts point to another numeric coordinate type.
    ///
    /// Returns `None` when a coordinate has no finite image in `U`.
    ///
    pub fn cast<U: NumCast>(self) -> Option<Point3<U>> {
        Some(Point3::new(
            U::from(self.x)?,
            U::from(self.y)?,
            U::from(self.z)?,
        ))
    }

    /// Returns Euclidean distance to other point as `f64` regardless of `T`.
    ///
    pub fn distance_to<U: ToPrimitive + Copy>(self, other: Point3<U>) -> f64 {
        let (dx, dy, dz): (f64, f64, f64) = (
            to_f64(other.x) - to_f64(self.x),
            to_f64(other.y) - to_f64(self.y),
            to_f64(other.z) - to_f64(self.z),
        );
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}
impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Type alias for [`Point3`] with `i32` coordinates.
///
pub type Point3i = Point3<i32>;
/// Type alias for [`Point3`] with `u32` coordinates.
///
pub type Point3u = Point3<u32>;
/// Type alias for [`Point3`] with `f32` coordinates.
///
pub type Point3f = Point3<f32>;

#[cfg(test)]
mod tests {
    use super::{Point2, Point3};

    #[test]
    fn point2() {
        let point: Point2<i32> = Point2::new(3, 4);
        assert_eq!(point, Point2 { x: 3, y: 4 });
        assert_eq!(Point2::<i32>::default(), Point2::new(0, 0));

        assert_eq!(Point2::new(0, 0).distance_to(point), 5.0);
        assert_eq!(point.distance_to(Point2::new(3, 4)), 0.0);
        assert_eq!(
            Point2::new(1.0_f32, 1.0).distance_to(Point2::new(4.0_f32, 5.0)),
            5.0
        );

        assert_eq!(point.cast::<f32>(), Some(Point2::new(3.0, 4.0)));
        assert_eq!(Point2::new(1.9_f32, 2.1).cast::<i32>(), Some(Point2::new(1, 2)));
        assert_eq!(Point2::new(f32::NAN, 0.0).cast::<i32>(), None);

        assert_eq!(point.to_string(), "(3, 4)");
    }

    #[test]
    fn point3() {
        let point: Point3<i32> = Point3::new(1, 2, 2);
        assert_eq!(Point3::<i32>::default(), Point3::new(0, 0, 0));

        assert_eq!(Point3::new(0, 0, 0).distance_to(point), 3.0);

        assert_eq!(point.cast::<f64>(), Some(Point3::new(1.0, 2.0, 2.0)));

        assert_eq!(point.to_string(), "(1, 2, 2)");
    }
}
