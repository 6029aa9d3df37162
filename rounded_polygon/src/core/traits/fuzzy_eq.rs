/// Approximate equality for floating point values.
///
/// Corner geometry goes through square roots and trig functions, so positions and radii are
/// compared within an epsilon rather than exactly.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::core::traits::*;
/// // tangent distance for a right angle corner with radius 30 is 30 / tan(PI / 4)
/// let tangent_dist = 30.0 / (std::f64::consts::FRAC_PI_4).tan();
/// assert!(tangent_dist != 30.0);
/// assert!(tangent_dist.fuzzy_eq(30.0));
/// assert!((tangent_dist - 30.0).fuzzy_eq_zero());
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Epsilon used by [FuzzyEq::fuzzy_eq] and [FuzzyEq::fuzzy_eq_zero].
    fn fuzzy_epsilon() -> Self;

    /// True when `self` and `other` differ by less than `eps`.
    fn fuzzy_eq_eps(&self, other: Self, eps: Self) -> bool;

    /// True when `self` is within `eps` of zero.
    fn fuzzy_eq_zero_eps(&self, eps: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

macro_rules! float_fuzzy_eq {
    ($($ty:ty => $eps:expr),*) => {
        $(
            impl FuzzyEq for $ty {
                #[inline]
                fn fuzzy_epsilon() -> $ty {
                    $eps
                }

                #[inline]
                fn fuzzy_eq_eps(&self, other: $ty, eps: $ty) -> bool {
                    (self - other).abs() < eps
                }

                #[inline]
                fn fuzzy_eq_zero_eps(&self, eps: $ty) -> bool {
                    self.abs() < eps
                }
            }
        )*
    };
}

float_fuzzy_eq!(f32 => 1.0e-5, f64 => 1.0e-8);
