//! `fractions` submodule implements an exact rational value type which stores
//! a numerator/denominator pair and evaluates to floating point on demand.
//!

use num_traits::{AsPrimitive, PrimInt};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// [`Fraction`] struct provides an exact representation of the quotient of two
/// integers by storing them and allowing fraction arithmetic with them.
///
/// Fractions are never reduced to lowest terms (no GCD normalization), and
/// arithmetic can silently overflow `T` - overflow is the caller's concern.
/// A denominator of zero makes the fraction invalid; [`Fraction::evaluate`]
/// on an invalid fraction produces IEEE infinity or NaN instead of an error,
/// so [`Fraction::is_valid`] is the caller's explicit check.
///
/// Comparison operators compare evaluated floating point results and inherit
/// all floating point comparison caveats (precision loss for large
/// numerators/denominators).
///
/// # Example
/// ```rust
/// # use gamemath::fractions::Fraction;
/// let fraction: Fraction<i32> = Fraction::new(6, 3);
/// assert_eq!(fraction.evaluate(), 2.0);
/// assert_eq!(fraction, Fraction::new(2, 1));
/// assert_eq!((fraction.numer, fraction.denom), (6, 3));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug)]
pub struct Fraction<T> {
    /// Numerator of fraction.
    ///
    pub numer: T,

    /// Denominator of fraction.
    ///
    pub denom: T,
}
impl<T: PrimInt> Fraction<T> {
    /// Initializes fraction from given numerator and denominator.
    ///
    pub fn new(numer: T, denom: T) -> Self {
        Fraction { numer, denom }
    }

    /// Sets numerator and denominator of fraction to given values.
    ///
    pub fn set_all(&mut self, numer: T, denom: T) {
        self.numer = numer;
        self.denom = denom;
    }

    /// Returns true if the denominator of the fraction is not zero.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::fractions::Fraction;
    /// assert!(Fraction::new(1, 2).is_valid());
    /// assert!(!Fraction::new(1, 0).is_valid());
    /// ```
    ///
    pub fn is_valid(&self) -> bool {
        self.denom != T::zero()
    }

    /// Raises both the numerator and denominator of the fraction to the nth power
    /// by repeated self-multiplication.
    ///
    /// `pow(0)` resets numerator and denominator to one; `pow(1)` leaves the
    /// fraction untouched.
    ///
    /// # Example
    /// ```rust
    /// # use gamemath::fractions::Fraction;
    /// let mut fraction: Fraction<i32> = Fraction::new(2, 3);
    /// fraction.pow(3);
    /// assert_eq!(fraction, Fraction::new(8, 27));
    /// fraction.pow(0);
    /// assert_eq!((fraction.numer, fraction.denom), (1, 1));
    /// ```
    ///
    pub fn pow(&mut self, n: u32) {
        if n == 1 {
            return;
        }
        if n == 0 {
            self.numer = T::one();
            self.denom = T::one();
            return;
        }

        let (base_numer, base_denom): (T, T) = (self.numer, self.denom);
        for _ in 1..n {
            self.numer = self.numer * base_numer;
            self.denom = self.denom * base_denom;
        }
    }
}
impl<T: PrimInt + AsPrimitive<f32>> Fraction<T> {
    /// Returns the result of the fraction as `f32`.
    ///
    /// A zero denominator produces IEEE infinity or NaN, not an error;
    /// check [`Fraction::is_valid`] first when that matters.
    ///
    pub fn evaluate(&self) -> f32 {
        let (numer, denom): (f32, f32) = (self.numer.as_(), self.denom.as_());
        numer / denom
    }
}
impl<T: PrimInt> Default for Fraction<T> {
    /// Initializes fraction that is equal to zero (`0 / 1`).
    ///
    fn default() -> Self {
        Fraction::new(T::zero(), T::one())
    }
}
impl<T: PrimInt> From<T> for Fraction<T> {
    /// Initializes fraction from bare integer (denominator is set to one).
    ///
    fn from(numer: T) -> Self {
        Fraction::new(numer, T::one())
    }
}

impl<T: PrimInt> AddAssign<Self> for Fraction<T> {
    /// Adds other fraction to this fraction.
    ///
    /// Matching denominators are combined directly; otherwise cross-multiplication
    /// is used: `a/b + c/d = (ad + cb) / bd`.
    ///
    fn add_assign(&mut self, other: Self) {
        if self.denom == other.denom {
            self.numer = self.numer + other.numer;
            return;
        }
        self.numer = self.numer * other.denom + other.numer * self.denom;
        self.denom = self.denom * other.denom;
    }
}
impl<T: PrimInt> SubAssign<Self> for Fraction<T> {
    /// Subtracts other fraction from this fraction.
    ///
    /// Matching denominators are combined directly; otherwise cross-multiplication
    /// is used: `a/b - c/d = (ad - cb) / bd`.
    ///
    fn sub_assign(&mut self, other: Self) {
        if self.denom == other.denom {
            self.numer = self.numer - other.numer;
            return;
        }
        self.numer = self.numer * other.denom - other.numer * self.denom;
        self.denom = self.denom * other.denom;
    }
}
impl<T: PrimInt> MulAssign<Self> for Fraction<T> {
    fn mul_assign(&mut self, other: Self) {
        self.numer = self.numer * other.numer;
        self.denom = self.denom * other.denom;
    }
}
impl<T: PrimInt> DivAssign<Self> for Fraction<T> {
    /// Divides this fraction by other fraction by multiplying with its reciprocal.
    ///
    /// Dividing by a fraction with zero numerator produces an invalid result
    /// (denominator becomes zero) instead of raising an error.
    ///
    fn div_assign(&mut self, other: Self) {
        self.numer = self.numer * other.denom;
        self.denom = self.denom * other.numer;
    }
}
impl<T: PrimInt> AddAssign<T> for Fraction<T> {
    /// Adds bare integer to this fraction.
    ///
    fn add_assign(&mut self, value: T) {
        self.numer = self.numer + value * self.denom;
    }
}
impl<T: PrimInt> SubAssign<T> for Fraction<T> {
    /// Subtracts bare integer from this fraction.
    ///
    fn sub_assign(&mut self, value: T) {
        self.numer = self.numer - value * self.denom;
    }
}
impl<T: PrimInt> MulAssign<T> for Fraction<T> {
    /// Multiplies the numerator of this fraction by bare integer.
    ///
    fn mul_assign(&mut self, value: T) {
        self.numer = self.numer * value;
    }
}
impl<T: PrimInt> DivAssign<T> for Fraction<T> {
    /// Divides this fraction by bare integer by multiplying its denominator.
    ///
    fn div_assign(&mut self, value: T) {
        self.denom = self.denom * value;
    }
}
/// Implements binary arithmetic operators for fraction in terms of the compound forms.
///
macro_rules! impl_fraction_operations {
    ($(($trait:ident, $method:ident, $assign_method:ident),)+) => {$(
        impl<T: PrimInt> $trait<Self> for Fraction<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                let mut fraction: Self = self;
                fraction.$assign_method(rhs);
                fraction
            }
        }
        impl<T: PrimInt> $trait<T> for Fraction<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self::Output {
                let mut fraction: Self = self;
                fraction.$assign_method(rhs);
                fraction
            }
        }
    )+};
}
impl_fraction_operations!(
    (Add, add, add_assign),
    (Sub, sub, sub_assign),
    (Mul, mul, mul_assign),
    (Div, div, div_assign),
);

impl<T: PrimInt + AsPrimitive<f32>> PartialEq for Fraction<T> {
    /// Checks if evaluated results of two fractions are equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        self.evaluate() == other.evaluate()
    }
}
impl<T: PrimInt + AsPrimitive<f32>> PartialOrd for Fraction<T> {
    /// Orders two fractions by their evaluated results.
    ///
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.evaluate().partial_cmp(&other.evaluate())
    }
}
impl<T: PrimInt + AsPrimitive<f32>> PartialEq<f32> for Fraction<T> {
    /// Checks if evaluated result of fraction is equal to given value.
    ///
    fn eq(&self, other: &f32) -> bool {
        self.evaluate() == *other
    }
}
impl<T: PrimInt + AsPrimitive<f32>> PartialOrd<f32> for Fraction<T> {
    /// Orders evaluated result of fraction against given value.
    ///
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        self.evaluate().partial_cmp(other)
    }
}
impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numer, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::Fraction;

    #[test]
    fn fraction() {
        assert_eq!(Fraction::<i32>::default(), Fraction::new(0, 1));
        assert_eq!(Fraction::from(7), Fraction::new(7, 1));

        // no reduction is performed, but evaluated equality holds
        let fraction: Fraction<i32> = Fraction::new(6, 3);
        assert_eq!((fraction.numer, fraction.denom), (6, 3));
        assert_eq!(fraction.evaluate(), Fraction::new(2, 1).evaluate());

        assert!(!Fraction::new(1, 0).is_valid());
        assert!(Fraction::new(1, 0).evaluate().is_infinite());
        assert!(Fraction::new(0, 0).evaluate().is_nan());

        let mut fraction: Fraction<i32> = Fraction::new(1, 2);
        fraction.set_all(2, 3);
        assert_eq!((fraction.numer, fraction.denom), (2, 3));
    }

    #[test]
    fn fraction_arithmetic() {
        // same denominator is combined directly
        let sum: Fraction<i32> = Fraction::new(1, 4) + Fraction::new(2, 4);
        assert_eq!((sum.numer, sum.denom), (3, 4));

        // differing denominators cross-multiply
        let sum: Fraction<i32> = Fraction::new(1, 2) + Fraction::new(1, 3);
        assert_eq!((sum.numer, sum.denom), (5, 6));
        let diff: Fraction<i32> = Fraction::new(1, 2) - Fraction::new(1, 3);
        assert_eq!((diff.numer, diff.denom), (1, 6));

        let product: Fraction<i32> = Fraction::new(2, 3) * Fraction::new(3, 5);
        assert_eq!((product.numer, product.denom), (6, 15));
        let quotient: Fraction<i32> = Fraction::new(2, 3) / Fraction::new(3, 5);
        assert_eq!((quotient.numer, quotient.denom), (10, 9));

        // dividing by a zero-numerator fraction yields an invalid result
        let quotient: Fraction<i32> = Fraction::new(1, 2) / Fraction::new(0, 5);
        assert!(!quotient.is_valid());

        // bare integer forms
        let mut fraction: Fraction<i32> = Fraction::new(1, 2);
        fraction += 1;
        assert_eq!((fraction.numer, fraction.denom), (3, 2));
        fraction -= 1;
        assert_eq!((fraction.numer, fraction.denom), (1, 2));
        fraction *= 3;
        assert_eq!((fraction.numer, fraction.denom), (3, 2));
        fraction /= 3;
        assert_eq!((fraction.numer, fraction.denom), (3, 6));

        let mut fraction: Fraction<i32> = Fraction::new(2, 3);
        fraction.pow(2);
        assert_eq!((fraction.numer, fraction.denom), (4, 9));
        fraction.pow(1);
        assert_eq!((fraction.numer, fraction.denom), (4, 9));
        fraction.pow(0);
        assert_eq!((fraction.numer, fraction.denom), (1, 1));
    }

    #[test]
    fn fraction_comparisons() {
        assert_eq!(Fraction::new(6, 3), Fraction::new(2, 1));
        assert_ne!(Fraction::new(1, 2), Fraction::new(1, 3));
        assert!(Fraction::new(1, 2) < Fraction::new(2, 3));
        assert!(Fraction::new(3, 4) >= Fraction::new(6, 8));

        assert_eq!(Fraction::new(1, 2), 0.5_f32);
        assert!(Fraction::new(1, 2) < 0.75_f32);
        assert!(Fraction::new(7, 2) > 3.0_f32);

        assert_eq!(Fraction::new(1, 2).to_string(), "1 / 2");
    }
}
