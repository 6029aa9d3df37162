use crate::core::traits::Real;
use std::ops::{Add, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2D point or direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Vector2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2 { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector2::new(T::zero(), T::zero())
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        Vector2::new(self.x * factor, self.y * factor)
    }

    #[inline]
    pub fn dot(&self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    ///
    /// Sign gives the turn direction going from `self` to `other`: positive for a counter
    /// clockwise turn, negative for clockwise, zero when parallel.
    #[inline]
    pub fn perp_dot(&self, other: Self) -> T {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    pub fn length(&self) -> T {
        self.x.hypot(self.y)
    }

    /// Unit length vector in the same direction.
    ///
    /// Components are NaN for a zero vector.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Vector2::new(self.x / len, self.y / len)
    }

    /// Componentwise interpolation toward `other`, see [Real::lerp].
    #[inline]
    pub fn lerp(&self, other: Self, fraction: T) -> Self {
        Vector2::new(
            T::lerp(self.x, other.x, fraction),
            T::lerp(self.y, other.y, fraction),
        )
    }

    /// True when both components are within `eps` of `other`'s.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, eps: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, eps) && self.y.fuzzy_eq_eps(other.y, eps)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T: Real> Add for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn add(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Real> Sub for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn sub(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Real> Neg for Vector2<T> {
    type Output = Vector2<T>;
    #[inline]
    fn neg(self) -> Vector2<T> {
        Vector2::new(-self.x, -self.y)
    }
}
