use super::FuzzyEq;
use static_aabb2d_index::IndexableNum;

/// Floating point scalar the vertex, arc, and outline types are generic over.
///
/// Implemented for `f32` (GPU bound rendering) and `f64` (measurement). The [IndexableNum] bound
/// lets outline extents be returned as an [AABB](static_aabb2d_index::AABB).
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyEq
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + IndexableNum
    + 'static
{
    fn pi() -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Linear interpolation from `start` to `end` at `fraction` (0 returns `start`, 1 returns
    /// `end`). Fractions outside of [0, 1] extrapolate.
    #[inline]
    fn lerp(start: Self, end: Self, fraction: Self) -> Self {
        start + (end - start) * fraction
    }

    /// Returns `self` if it is a finite value greater than zero, otherwise zero.
    ///
    /// Used to clamp corner radii: negative, NaN, and infinite radii all collapse the corner.
    #[inline]
    fn positive_or_zero(self) -> Self {
        // NaN fails both comparisons, infinity fails the upper bound
        if self > Self::zero() && self < <Self as num_traits::Bounded>::max_value() {
            self
        } else {
            Self::zero()
        }
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> f32 {
        std::f32::consts::PI
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> f64 {
        std::f64::consts::PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_or_zero_clamps_invalid_radii() {
        assert_eq!(3.5f64.positive_or_zero(), 3.5);
        assert_eq!((-1.0f64).positive_or_zero(), 0.0);
        assert_eq!(f64::NAN.positive_or_zero(), 0.0);
        assert_eq!(f64::INFINITY.positive_or_zero(), 0.0);
        assert_eq!(f32::NEG_INFINITY.positive_or_zero(), 0.0);
    }

    #[test]
    fn lerp_extrapolates() {
        assert_eq!(f64::lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(f64::lerp(10.0, 20.0, -1.0), 0.0);
        assert_eq!(f32::lerp(0.0, 4.0, 1.5), 6.0);
    }
}
