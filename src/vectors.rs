//! `vectors` submodule implements 2-dimensional and 3-dimensional displacement vectors
//! which can be used to represent speed, acceleration, offsets and other things.
//!

use crate::points::{Point2, Point3};
use num_traits::{Num, NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Converts component to `f32`, falling back to NaN for values that have no `f32` image.
///
fn to_f32<T: ToPrimitive>(value: T) -> f32 {
    value.to_f32().unwrap_or(f32::NAN)
}
/// Converts component to `f64`, falling back to NaN for values that have no `f64` image.
///
fn to_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// [`Vector2`] struct represents 2-dimensional vector with components of numeric type `T`.
///
/// A vector is a coordinate tuple interpreted as displacement; it converts to and from
/// [`Point2`] of the same arity and can be built as the displacement between two points.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2<T> {
    /// X component of vector.
    ///
    pub x: T,

    /// Y component of vector.
    ///
    pub y: T,
}
impl<T> Vector2<T> {
    /// Initializes vector from given components.
    ///
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }
}
impl<T: Num + Copy> Vector2<T> {
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Initializes vector as the displacement between two points (`b - a` componentwise).
    ///
    pub fn between(a: Point2<T>, b: Point2<T>) -> Self {
        Vector2::new(b.x - a.x, b.y - a.y)
    }

    /// Returns the endpoint of the vector when anchored at the origin.
    ///
    pub fn endpoint(self) -> Point2<T> {
        Point2::new(self.x, self.y)
    }

    /// Returns squared magnitude of a vector (squared vector length).
    ///
    pub fn sqr_magnitude(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Returns whether two vectors are normal (orthogonal) to each other.
    ///
    /// Orthogonality is defined as the dot product being exactly equal to zero;
    /// no epsilon tolerance is applied.
    ///
    pub fn is_normal_to(self, other: Self) -> bool {
        self.dot_product(other) == T::zero()
    }
}
impl<T: Num + ToPrimitive + Copy> Vector2<T> {
    /// Returns magnitude of vector (vector length).
    ///
    /// The sum of squares is taken in `f64` and the root is returned as `f32`;
    /// extreme inputs produce infinity rather than failing.
    ///
    pub fn magnitude(self) -> f32 {
        let (x, y): (f64, f64) = (to_f64(self.x), to_f64(self.y));
        (x * x + y * y).sqrt() as f32
    }

    /// Returns a unit vector in the direction of this vector.
    ///
    /// A zero-length vector yields NaN components rather than a reported error;
    /// callers must guard zero-length vectors themselves.
    ///
    pub fn unit_vector(self) -> Vector2<f32> {
        let m: f32 = self.magnitude();
        Vector2::new(to_f32(self.x) / m, to_f32(self.y) / m)
    }

    /// Returns the scalar projection of the two vectors (dot product over `self.magnitude()`).
    ///
    pub fn scalar_proj(self, other: Self) -> f32 {
        to_f32(self.dot_product(other)) / self.magnitude()
    }

    /// Returns the vector projection of `other` onto this vector.
    ///
    pub fn vector_proj(self, other: Self) -> Vector2<f32> {
        let f: f32 = to_f32(self.dot_product(other)) / to_f32(self.dot_product(self));
        Vector2::new(to_f32(self.x) * f, to_f32(self.y) * f)
    }
}
impl<T: ToPrimitive + Copy> Vector2<T> {
    /// Converts vector to another numeric component type.
    ///
    /// Returns `None` when a component has no finite image in `U`.
    ///
    pub fn cast<U: NumCast>(self) -> Option<Vector2<U>> {
        Some(Vector2::new(U::from(self.x)?, U::from(self.y)?))
    }
}
impl<T> From<Point2<T>> for Vector2<T> {
    fn from(point: Point2<T>) -> Self {
        Vector2::new(point.x, point.y)
    }
}
impl<T> From<Vector2<T>> for Point2<T> {
    fn from(vector: Vector2<T>) -> Self {
        Point2::new(vector.x, vector.y)
    }
}
impl<T: Num + Neg<Output = T> + Copy> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}
impl<T: Num + Copy> Add<Self> for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl<T: Num + Copy> Sub<Self> for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl<T: Num + Copy> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}
impl<T: Num + Copy> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}
impl<T: Num + Copy> AddAssign<Self> for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<T: Num + Copy> SubAssign<Self> for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<T: Num + Copy> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
impl<T: Num + Copy> DivAssign<T> for Vector2<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
impl<T: fmt::Display> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

/// Type alias for [`Vector2`] with `i32` components.
///
pub type Vector2i = Vector2<i32>;
/// Type alias for [`Vector2`] with `u32` components.
///
pub type Vector2u = Vector2<u32>;
/// Type alias for [`Vector2`] with `f32` components.
///
pub type Vector2f = Vector2<f32>;

/// [`Vector3`] struct represents 3-dimensional vector with components of numeric type `T`.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    /// X component of vector.
    ///
    pub x: T,

    /// Y component of vector.
    ///
    pub y: T,

    /// Z component of vector.
    ///
    pub z: T,
}
impl<T> Vector3<T> {
    /// Initializes vector from given components.
    ///
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}
impl<T: Num + Copy> Vector3<T> {
    /// Initializes vector with zeroes.
    ///
    pub fn zero() -> Self {
        Vector3::new(T::zero(), T::zero(), T::zero())
    }

    /// Initializes vector as the displacement between two points (`b - a` componentwise).
    ///
    pub fn between(a: Point3<T>, b: Point3<T>) -> Self {
        Vector3::new(b.x - a.x, b.y - a.y, b.z - a.z)
    }

    /// Returns the endpoint of the vector when anchored at the origin.
    ///
    pub fn endpoint(self) -> Point3<T> {
        Point3::new(self.x, self.y, self.z)
    }

    /// Returns squared magnitude of a vector (squared vector length).
    ///
    pub fn sqr_magnitude(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Performs dot product operation on two vectors.
    ///
    pub fn dot_product(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns whether two vectors are normal (orthogonal) to each other.
    ///
    /// Orthogonality is defined as the dot product being exactly equal to zero;
    /// no epsilon tolerance is applied.
    ///
    pub fn is_normal_to(self, other: Self) -> bool {
        self.dot_product(other) == T::zero()
    }
}
impl<T: Num + ToPrimitive + Copy> Vector3<T> {
    /// Returns magnitude of vector (vector length).
    ///
    /// The sum of squares is taken in `f64` and the root is returned as `f32`;
    /// extreme inputs produce infinity rather than failing.
    ///
    pub fn magnitude(self) -> f32 {
        let (x, y, z): (f64, f64, f64) = (to_f64(self.x), to_f64(self.y), to_f64(self.z));
        (x * x + y * y + z * z).sqrt() as f32
    }

    /// Returns a unit vector in the direction of this vector.
    ///
    /// A zero-length vector yields NaN components rather than a reported error;
    /// callers must guard zero-length vectors themselves.
    ///
    pub fn unit_vector(self) -> Vector3<f32> {
        let m: f32 = self.magnitude();
        Vector3::new(to_f32(self.x) / m, to_f32(self.y) / m, to_f32(self.z) / m)
    }

    /// Returns the scalar projection of the two vectors (dot product over `self.magnitude()`).
    ///
    pub fn scalar_proj(self, other: Self) -> f32 {
        to_f32(self.dot_product(other)) / self.magnitude()
    }

    /// Returns the vector projection of `other` onto this vector.
    ///
    pub fn vector_proj(self, other: Self) -> Vector3<f32> {
        let f: f32 = to_f32(self.dot_product(other)) / to_f32(self.dot_product(self));
        Vector3::new(to_f32(self.x) * f, to_f32(self.y) * f, to_f32(self.z) * f)
    }
}
impl<T: ToPrimitive + Copy> Vector3<T> {
    /// Converts vector to another numeric component type.
    ///
    /// Returns `None` when a component has no finite image in `U`.
    ///
    pub fn cast<U: NumCast>(self) -> Option<Vector3<U>> {
        Some(Vector3::new(
            U::from(self.x)?,
            U::from(self.y)?,
            U::from(self.z)?,
        ))
    }
}
impl<T> From<Point3<T>> for Vector3<T> {
    fn from(point: Point3<T>) -> Self {
        Vector3::new(point.x, point.y, point.z)
    }
}
impl<T> From<Vector3<T>> for Point3<T> {
    fn from(vector: Vector3<T>) -> Self {
        Point3::new(vector.x, vector.y, vector.z)
    }
}
impl<T: Num + Neg<Output = T> + Copy> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
impl<T: Num + Copy> Add<Self> for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}
impl<T: Num + Copy> Sub<Self> for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
impl<T: Num + Copy> AddAssign<Self> for Vector3<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<T: Num + Copy> SubAssign<Self> for Vector3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<T: Num + Copy> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
impl<T: Num + Copy> DivAssign<T> for Vector3<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}
impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}

/// Type alias for [`Vector3`] with `i32` components.
///
pub type Vector3i = Vector3<i32>;
/// Type alias for [`Vector3`] with `u32` components.
///
pub type Vector3u = Vector3<u32>;
/// Type alias for [`Vector3`] with `f32` components.
///
pub type Vector3f = Vector3<f32>;

// Scalar-on-the-left multiplication cannot be written once over all numeric types
// (coherence forbids `impl Mul<Vector2<T>> for T`), so the grid of primitive types
// is covered by a macro.
/// Implements scalar-on-the-left multiplication of vectors for a primitive numeric type.
///
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),+ $(,)?) => {$(
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, rhs: Vector2<$t>) -> Self::Output {
                rhs * self
            }
        }
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, rhs: Vector3<$t>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}
impl_scalar_lhs_mul!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use crate::points::{Point2, Point3};

    #[test]
    fn vector2() {
        use super::Vector2;

        assert_eq!(Vector2::<f32>::zero(), Vector2 { x: 0.0, y: 0.0 });

        let displacement: Vector2<i32> =
            Vector2::between(Point2::new(1, 1), Point2::new(4, 5));
        assert_eq!(displacement, Vector2::new(3, 4));
        assert_eq!(displacement.endpoint(), Point2::new(3, 4));
        assert_eq!(Vector2::from(Point2::new(3, 4)), displacement);
        assert_eq!(Point2::from(displacement), Point2::new(3, 4));

        assert_eq!(displacement.sqr_magnitude(), 25);
        assert_eq!(displacement.magnitude(), 5.0);
        assert_eq!(Vector2::new(3.0_f32, 4.0).magnitude(), 5.0);
        assert_eq!(
            Vector2::new(3.0_f32, 4.0).unit_vector(),
            Vector2::new(0.6, 0.8)
        );

        assert_eq!(
            Vector2::new(3, 4).dot_product(Vector2::new(5, 3)),
            27
        );
        assert!(Vector2::new(1, 0).is_normal_to(Vector2::new(0, 1)));
        assert!(!Vector2::new(1, 1).is_normal_to(Vector2::new(0, 1)));

        assert_eq!(Vector2::new(3, 4).scalar_proj(Vector2::new(5, 3)), 5.4);
        assert_eq!(
            Vector2::new(1, 0).vector_proj(Vector2::new(3, 4)),
            Vector2::new(3.0, 0.0)
        );

        let mut vector: Vector2<i32> = Vector2::new(1, 2);
        assert_eq!(vector + Vector2::new(2, 3), Vector2::new(3, 5));
        assert_eq!(vector - Vector2::new(2, 3), Vector2::new(-1, -1));
        assert_eq!(vector * 3, Vector2::new(3, 6));
        assert_eq!(3 * vector, Vector2::new(3, 6));
        assert_eq!(Vector2::new(4, 6) / 2, Vector2::new(2, 3));
        assert_eq!(-vector, Vector2::new(-1, -2));

        vector += Vector2::new(1, 1);
        assert_eq!(vector, Vector2::new(2, 3));
        vector -= Vector2::new(2, 2);
        assert_eq!(vector, Vector2::new(0, 1));
        vector *= 5;
        assert_eq!(vector, Vector2::new(0, 5));
        vector /= 5;
        assert_eq!(vector, Vector2::new(0, 1));

        assert_eq!(Vector2::new(3, 4).cast::<f32>(), Some(Vector2::new(3.0, 4.0)));
        assert_eq!(Vector2::new(3, 4).to_string(), "<3, 4>");
    }

    #[test]
    fn vector3() {
        use super::Vector3;

        assert_eq!(Vector3::<i32>::zero(), Vector3::new(0, 0, 0));

        let displacement: Vector3<i32> =
            Vector3::between(Point3::new(1, 1, 1), Point3::new(2, 3, 3));
        assert_eq!(displacement, Vector3::new(1, 2, 2));
        assert_eq!(displacement.endpoint(), Point3::new(1, 2, 2));

        assert_eq!(displacement.sqr_magnitude(), 9);
        assert_eq!(displacement.magnitude(), 3.0);
        assert_eq!(
            Vector3::new(2.0_f32, 0.0, 0.0).unit_vector(),
            Vector3::new(1.0, 0.0, 0.0)
        );

        assert_eq!(
            Vector3::new(1, 2, 3).dot_product(Vector3::new(4, 5, 6)),
            32
        );
        assert!(Vector3::new(1, 0, 0).is_normal_to(Vector3::new(0, 0, 1)));

        assert_eq!(
            Vector3::new(1, 0, 0).vector_proj(Vector3::new(3, 4, 5)),
            Vector3::new(3.0, 0.0, 0.0)
        );

        let mut vector: Vector3<i32> = Vector3::new(1, 2, 3);
        assert_eq!(vector + Vector3::new(1, 1, 1), Vector3::new(2, 3, 4));
        assert_eq!(vector - Vector3::new(1, 1, 1), Vector3::new(0, 1, 2));
        assert_eq!(vector * 2, Vector3::new(2, 4, 6));
        assert_eq!(2 * vector, Vector3::new(2, 4, 6));
        assert_eq!(vector / 1, vector);
        assert_eq!(-vector, Vector3::new(-1, -2, -3));

        vector += Vector3::new(1, 1, 1);
        vector -= Vector3::new(0, 1, 0);
        vector *= 2;
        vector /= 1;
        assert_eq!(vector, Vector3::new(4, 4, 8));

        assert_eq!(Vector3::new(1, 2, 3).to_string(), "<1, 2, 3>");
    }
}
