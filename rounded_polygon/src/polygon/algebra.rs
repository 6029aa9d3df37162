use super::PolygonVertex;
use crate::core::{math::Vector2, traits::Real};
use thiserror::Error;

/// Vector space style operations used to animate between two vertex configurations.
///
/// Interpolation is expressed purely in terms of these operations:
/// `interpolate(a, b, f) = a + (b - a) * f`.
pub trait VertexAlgebra: Sized + Copy {
    type Num: Real;

    /// Additive identity.
    fn zero() -> Self;

    fn scale(&self, factor: Self::Num) -> Self;

    fn add(&self, other: &Self) -> Self;

    fn subtract(&self, other: &Self) -> Self;

    /// Interpolate from `self` toward `to` at `fraction` (0 returns `self`, 1 returns `to`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// # use rounded_polygon::core::math::*;
    /// let a = Vector2::new(0.0, 0.0);
    /// let b = Vector2::new(10.0, 20.0);
    /// assert_eq!(a.interpolate(&b, 0.25), Vector2::new(2.5, 5.0));
    /// ```
    #[inline]
    fn interpolate(&self, to: &Self, fraction: Self::Num) -> Self {
        self.add(&to.subtract(self).scale(fraction))
    }
}

impl<T> VertexAlgebra for Vector2<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn zero() -> Self {
        Vector2::zero()
    }

    #[inline]
    fn scale(&self, factor: T) -> Self {
        Vector2::scale(self, factor)
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        *self + *other
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Self {
        *self - *other
    }
}

/// Radius combination for add and subtract: the larger radius wins with a missing radius counting
/// as zero, the result is only missing if both sides are missing.
#[inline]
fn max_radius<T>(left: Option<T>, right: Option<T>) -> Option<T>
where
    T: Real,
{
    match (left, right) {
        (None, None) => None,
        (l, r) => Some(num_traits::real::Real::max(
            l.unwrap_or_else(T::zero),
            r.unwrap_or_else(T::zero),
        )),
    }
}

/// Positions follow vector arithmetic, flags combine with AND on add and OR on subtract, radii
/// combine by max.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// # use rounded_polygon::core::math::*;
/// let a = PolygonVertex::with_radius(10.0, 10.0, true, 4.0);
/// let b = PolygonVertex::new(30.0, 50.0, false);
/// let sum = a.add(&b);
/// assert_eq!(sum.position, Vector2::new(40.0, 60.0));
/// assert!(!sum.is_rounded);
/// assert_eq!(sum.custom_corner_radius, Some(4.0));
///
/// let diff = a.subtract(&b);
/// assert_eq!(diff.position, Vector2::new(-20.0, -40.0));
/// assert!(diff.is_rounded);
/// ```
impl<T> VertexAlgebra for PolygonVertex<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn zero() -> Self {
        PolygonVertex {
            position: Vector2::zero(),
            is_rounded: false,
            custom_corner_radius: None,
        }
    }

    #[inline]
    fn scale(&self, factor: T) -> Self {
        PolygonVertex {
            position: self.position.scale(factor),
            ..*self
        }
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        PolygonVertex {
            position: self.position + other.position,
            is_rounded: self.is_rounded && other.is_rounded,
            custom_corner_radius: max_radius(self.custom_corner_radius, other.custom_corner_radius),
        }
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Self {
        PolygonVertex {
            position: self.position - other.position,
            is_rounded: self.is_rounded || other.is_rounded,
            custom_corner_radius: max_radius(self.custom_corner_radius, other.custom_corner_radius),
        }
    }
}

/// Error returned when two vertex sequences cannot be blended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BlendError {
    #[error("cannot blend vertex sequences of different lengths ({left} and {right})")]
    LengthMismatch { left: usize, right: usize },
}

#[inline]
fn check_lengths(left: usize, right: usize) -> Result<(), BlendError> {
    if left != right {
        return Err(BlendError::LengthMismatch { left, right });
    }

    Ok(())
}

/// Element wise [VertexAlgebra::interpolate] of two equal length sequences.
///
/// Flags follow the algebra, so every output corner keeps the rounding flag of `from` for all
/// fractions (a sharp start stays sharp even at 1). Use [blend_resolved] for a continuous radius.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// let from = [PolygonVertex::new(0.0, 0.0, true), PolygonVertex::new(10.0, 0.0, true)];
/// let to = [PolygonVertex::new(0.0, 10.0, true), PolygonVertex::new(20.0, 0.0, true)];
/// let mid = blend(&from, &to, 0.5).unwrap();
/// assert_eq!(mid[0].position.y, 5.0);
/// assert_eq!(mid[1].position.x, 15.0);
///
/// assert_eq!(
///     blend(&from, &to[..1], 0.5),
///     Err(BlendError::LengthMismatch { left: 2, right: 1 })
/// );
/// ```
pub fn blend<V>(from: &[V], to: &[V], fraction: V::Num) -> Result<Vec<V>, BlendError>
where
    V: VertexAlgebra,
{
    check_lengths(from.len(), to.len())?;
    Ok(from
        .iter()
        .zip(to)
        .map(|(a, b)| a.interpolate(b, fraction))
        .collect())
}

/// Blend two vertex sequences by resolving each corner to its drawn radius first.
///
/// Each output vertex is rounded with a custom radius linearly interpolated between the two
/// effective radii (see [PolygonVertex::effective_radius]), so a corner animating from sharp to
/// rounded passes through every radius in between.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// let sharp = [PolygonVertex::new(0.0, 0.0, false)];
/// let rounded = [PolygonVertex::new(0.0, 0.0, true)];
/// let mid = blend_resolved(&sharp, &rounded, 0.5, 30.0).unwrap();
/// assert!(mid[0].is_rounded);
/// assert_eq!(mid[0].custom_corner_radius, Some(15.0));
/// ```
pub fn blend_resolved<T>(
    from: &[PolygonVertex<T>],
    to: &[PolygonVertex<T>],
    fraction: T,
    default_radius: T,
) -> Result<Vec<PolygonVertex<T>>, BlendError>
where
    T: Real,
{
    check_lengths(from.len(), to.len())?;
    Ok(from
        .iter()
        .zip(to)
        .map(|(a, b)| {
            let radius = T::lerp(
                a.effective_radius(default_radius),
                b.effective_radius(default_radius),
                fraction,
            );
            PolygonVertex {
                position: a.position.lerp(b.position, fraction),
                is_rounded: true,
                custom_corner_radius: Some(radius.positive_or_zero()),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn zero_has_no_radius() {
        let z = PolygonVertex::<f64>::zero();
        assert_eq!(z.position, Vector2::zero());
        assert!(!z.is_rounded);
        assert_eq!(z.custom_corner_radius, None);
    }

    #[test]
    fn max_radius_rule() {
        assert_eq!(max_radius::<f64>(None, None), None);
        assert_eq!(max_radius(Some(3.0), None), Some(3.0));
        assert_eq!(max_radius(None, Some(2.0)), Some(2.0));
        assert_eq!(max_radius(Some(3.0), Some(7.0)), Some(7.0));
        // missing counts as zero
        assert_eq!(max_radius(Some(-1.0), None), Some(0.0));
    }

    #[test]
    fn scale_keeps_flags_and_radius() {
        let v = PolygonVertex::with_radius(2.0, -3.0, true, 9.0);
        let s = v.scale(2.0);
        assert_eq!(s.position, Vector2::new(4.0, -6.0));
        assert!(s.is_rounded);
        assert_eq!(s.custom_corner_radius, Some(9.0));
    }

    #[test]
    fn interpolate_endpoints() {
        let a = PolygonVertex::with_radius(0.0, 0.0, true, 10.0);
        let b = PolygonVertex::with_radius(100.0, 50.0, true, 20.0);
        let start = a.interpolate(&b, 0.0);
        assert!(start.position.fuzzy_eq(a.position));
        let end = a.interpolate(&b, 1.0);
        assert!(end.position.fuzzy_eq(b.position));
        assert!(end.is_rounded);
    }

    #[test]
    fn blend_resolved_endpoints_match_effective_radii() {
        let from = [
            PolygonVertex::new(0.0, 0.0, false),
            PolygonVertex::with_radius(10.0, 0.0, true, 4.0),
        ];
        let to = [
            PolygonVertex::new(0.0, 0.0, true),
            PolygonVertex::new(10.0, 0.0, false),
        ];
        let start = blend_resolved(&from, &to, 0.0, 30.0).unwrap();
        assert_eq!(start[0].custom_corner_radius, Some(0.0));
        assert_eq!(start[1].custom_corner_radius, Some(4.0));
        let end = blend_resolved(&from, &to, 1.0, 30.0).unwrap();
        assert_eq!(end[0].custom_corner_radius, Some(30.0));
        assert_eq!(end[1].custom_corner_radius, Some(0.0));
    }

    #[test]
    fn blend_error_message() {
        let err = blend::<Vector2<f64>>(&[], &[Vector2::zero()], 0.5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot blend vertex sequences of different lengths (0 and 1)"
        );
    }
}
