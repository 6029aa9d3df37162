use super::Vector2;
use crate::core::traits::Real;

/// Point halfway between `a` and `b`.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::core::math::*;
/// // start point of a square outline: midpoint of the last to first vertex edge
/// let m = midpoint(Vector2::new(100.0, 300.0), Vector2::new(100.0, 100.0));
/// assert!(m.fuzzy_eq(Vector2::new(100.0, 200.0)));
/// ```
#[inline]
pub fn midpoint<T>(a: Vector2<T>, b: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    a.lerp(b, T::one() / T::two())
}

/// Point at polar `angle` (radians, counter clockwise from the positive x axis) on the circle
/// defined by `center` and `radius`.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin).scale(radius)
}

/// Bulge (`tan(sweep / 4)`) of an arc with signed `sweep` angle, negative for clockwise.
#[inline]
pub fn bulge_from_angle<T>(sweep: T) -> T
where
    T: Real,
{
    (sweep / (T::two() * T::two())).tan()
}

/// Signed sweep angle of an arc with the given `bulge`, inverse of [bulge_from_angle].
#[inline]
pub fn angle_from_bulge<T>(bulge: T) -> T
where
    T: Real,
{
    bulge.atan() * T::two() * T::two()
}

/// Unsigned angle between directions `v1` and `v2`, in `[0, PI]`.
///
/// Computed from `atan2(|cross|, dot)` so neither vector has to be unit length and nearly parallel
/// directions keep their precision.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::core::math::*;
/// # use rounded_polygon::core::traits::*;
/// use std::f64::consts::{FRAC_PI_2, PI};
/// let east = Vector2::new(2.0, 0.0);
/// assert!(angle_between(east, Vector2::new(0.0, 5.0)).fuzzy_eq(FRAC_PI_2));
/// assert!(angle_between(east, Vector2::new(0.0, -5.0)).fuzzy_eq(FRAC_PI_2));
/// assert!(angle_between(east, Vector2::new(-1.0, 0.0)).fuzzy_eq(PI));
/// assert!(angle_between(east, east).fuzzy_eq(0.0));
/// ```
#[inline]
pub fn angle_between<T>(v1: Vector2<T>, v2: Vector2<T>) -> T
where
    T: Real,
{
    v1.perp_dot(v2).abs().atan2(v1.dot(v2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn bulge_and_sweep_invert() {
        // quarter circle corner arcs
        assert!(bulge_from_angle(FRAC_PI_2).fuzzy_eq((PI / 8.0).tan()));
        assert!(angle_from_bulge(bulge_from_angle(-FRAC_PI_2)).fuzzy_eq(-FRAC_PI_2));
        assert!(bulge_from_angle(PI).fuzzy_eq(1.0));
    }

    #[test]
    fn point_on_circle_axes() {
        let center = Vector2::new(130.0, 130.0);
        assert!(point_on_circle(30.0, center, 0.0).fuzzy_eq(Vector2::new(160.0, 130.0)));
        assert!(point_on_circle(30.0, center, -FRAC_PI_2).fuzzy_eq(Vector2::new(130.0, 100.0)));
        assert!(point_on_circle(30.0, center, PI).fuzzy_eq(Vector2::new(100.0, 130.0)));
    }
}
