use crate::core::{math::Vector2, traits::Real};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon corner: a position plus how (and whether) the corner is rounded.
///
/// `custom_corner_radius` overrides the builder default radius when present. It only takes effect
/// when `is_rounded` is true, so toggling a corner back and forth keeps its radius.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct PolygonVertex<T = f64> {
    pub position: Vector2<T>,
    pub is_rounded: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub custom_corner_radius: Option<T>,
}

impl<T> PolygonVertex<T>
where
    T: Real,
{
    /// Create a vertex at (`x`, `y`) that uses the builder default radius when rounded.
    #[inline]
    pub fn new(x: T, y: T, is_rounded: bool) -> Self {
        PolygonVertex {
            position: Vector2::new(x, y),
            is_rounded,
            custom_corner_radius: None,
        }
    }

    /// Create a vertex at (`x`, `y`) with its own corner radius.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let v = PolygonVertex::with_radius(1.0, 2.0, true, 8.0);
    /// assert_eq!(v.custom_corner_radius, Some(8.0));
    /// assert_eq!(v.effective_radius(30.0), 8.0);
    /// ```
    #[inline]
    pub fn with_radius(x: T, y: T, is_rounded: bool, radius: T) -> Self {
        PolygonVertex {
            position: Vector2::new(x, y),
            is_rounded,
            custom_corner_radius: Some(radius),
        }
    }

    #[inline]
    pub fn from_vector2(position: Vector2<T>, is_rounded: bool, radius: Option<T>) -> Self {
        PolygonVertex {
            position,
            is_rounded,
            custom_corner_radius: radius,
        }
    }

    /// Copy of this vertex with `is_rounded` replaced, position and radius are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let sharp = PolygonVertex::with_radius(0.0, 0.0, false, 12.0);
    /// let rounded = sharp.with_rounded(true);
    /// assert!(rounded.is_rounded);
    /// assert_eq!(rounded.position, sharp.position);
    /// assert_eq!(rounded.custom_corner_radius, Some(12.0));
    /// ```
    #[inline]
    pub fn with_rounded(&self, is_rounded: bool) -> Self {
        PolygonVertex {
            is_rounded,
            ..*self
        }
    }

    /// Radius the corner is drawn with given the builder `default_radius`.
    ///
    /// Zero when the vertex is not rounded, otherwise the custom radius if present else
    /// `default_radius`. Negative, NaN, and infinite radii resolve to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// assert_eq!(PolygonVertex::new(0.0, 0.0, true).effective_radius(30.0), 30.0);
    /// assert_eq!(PolygonVertex::new(0.0, 0.0, false).effective_radius(30.0), 0.0);
    /// assert_eq!(PolygonVertex::with_radius(0.0, 0.0, true, -5.0).effective_radius(30.0), 0.0);
    /// ```
    #[inline]
    pub fn effective_radius(&self, default_radius: T) -> T {
        if !self.is_rounded {
            return T::zero();
        }

        self.custom_corner_radius
            .unwrap_or(default_radius)
            .positive_or_zero()
    }

    /// Fuzzy compare with another vertex using `fuzzy_epsilon` for position and radius, the
    /// rounded flag must match exactly.
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        let radius_eq = match (self.custom_corner_radius, other.custom_corner_radius) {
            (Some(r1), Some(r2)) => r1.fuzzy_eq_eps(r2, fuzzy_epsilon),
            (None, None) => true,
            _ => false,
        };

        self.is_rounded == other.is_rounded
            && radius_eq
            && self.position.fuzzy_eq_eps(other.position, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}
