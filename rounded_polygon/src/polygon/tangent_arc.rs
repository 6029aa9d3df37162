use crate::core::{
    math::{Vector2, angle_between, angle_from_bulge, bulge_from_angle},
    traits::Real,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Circular arc from `start` to `end` around `center`.
///
/// `bulge` is `tan(sweep / 4)`, positive for counter clockwise. Corner arcs always sweep less than
/// a half circle.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSeg<T = f64> {
    pub start: Vector2<T>,
    pub end: Vector2<T>,
    pub center: Vector2<T>,
    pub radius: T,
    pub bulge: T,
}

impl<T> ArcSeg<T>
where
    T: Real,
{
    /// Signed sweep angle in radians, positive for counter clockwise.
    #[inline]
    pub fn sweep_angle(&self) -> T {
        angle_from_bulge(self.bulge)
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.bulge > T::zero()
    }

    /// Arc length.
    #[inline]
    pub fn length(&self) -> T {
        self.radius * self.sweep_angle().abs()
    }

    /// Signed area between the chord `start` -> `end` and the arc.
    ///
    /// Positive for counter clockwise arcs, so adding it to the shoelace sum of the chord gives
    /// the area enclosed by a path that contains the arc.
    #[inline]
    pub fn segment_area(&self) -> T {
        let sweep = self.sweep_angle();
        self.radius * self.radius * (sweep - sweep.sin()) / T::two()
    }

    /// True if `point`, assumed to lie on the arc's circle, is on the arc.
    ///
    /// The arc occupies the side of its chord away from the turn direction: right of the chord for
    /// counter clockwise arcs, left for clockwise.
    #[inline]
    pub fn contains_circle_point(&self, point: Vector2<T>) -> bool {
        let side = (self.end - self.start).perp_dot(point - self.start);
        if self.is_counter_clockwise() {
            side <= T::zero()
        } else {
            side >= T::zero()
        }
    }

    /// Points where the arc's circle reaches its extreme x and y values that lie on the arc.
    pub fn axis_extremes(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        let r = self.radius;
        let c = self.center;
        [
            Vector2::new(c.x + r, c.y),
            Vector2::new(c.x, c.y + r),
            Vector2::new(c.x - r, c.y),
            Vector2::new(c.x, c.y - r),
        ]
        .into_iter()
        .filter(|p| self.contains_circle_point(*p))
    }

    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.start.fuzzy_eq_eps(other.start, fuzzy_epsilon)
            && self.end.fuzzy_eq_eps(other.end, fuzzy_epsilon)
            && self.center.fuzzy_eq_eps(other.center, fuzzy_epsilon)
            && self.radius.fuzzy_eq_eps(other.radius, fuzzy_epsilon)
            && self.bulge.fuzzy_eq_eps(other.bulge, fuzzy_epsilon)
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

/// Result of fitting a corner arc, either a sharp corner point or a tangent arc.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TangentArc<T = f64> {
    Point(Vector2<T>),
    Arc(ArcSeg<T>),
}

impl<T> TangentArc<T>
where
    T: Real,
{
    /// Position the corner geometry starts at.
    #[inline]
    pub fn start(&self) -> Vector2<T> {
        match self {
            TangentArc::Point(p) => *p,
            TangentArc::Arc(a) => a.start,
        }
    }

    /// Position the corner geometry ends at.
    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match self {
            TangentArc::Point(p) => *p,
            TangentArc::Arc(a) => a.end,
        }
    }
}

/// Fit an arc of `radius` tangent to the line `current` -> `corner` and the line `corner` ->
/// `next`.
///
/// The arc starts on the incoming line at distance `radius / tan(theta / 2)` from `corner` (where
/// `theta` is the interior angle at `corner`) and ends at the same distance along the outgoing
/// line. It sweeps counter clockwise when the path turns left at `corner`.
///
/// Returns [TangentArc::Point] at `corner` when the radius is not a positive finite value, when
/// either neighbor coincides with `corner`, or when the three points are collinear. Tangent points
/// are not clamped to the edge lengths, a radius too large for its edges yields tangent points
/// past the neighboring vertexes.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// # use rounded_polygon::core::math::*;
/// # use rounded_polygon::core::traits::*;
/// // top left corner of the square (100, 100) - (300, 300) approached from the left edge midpoint
/// let arc = tangent_arc(
///     Vector2::new(100.0, 200.0),
///     Vector2::new(100.0, 100.0),
///     Vector2::new(300.0, 100.0),
///     30.0,
/// );
/// match arc {
///     TangentArc::Arc(a) => {
///         assert!(a.start.fuzzy_eq(Vector2::new(100.0, 130.0)));
///         assert!(a.end.fuzzy_eq(Vector2::new(130.0, 100.0)));
///         assert!(a.center.fuzzy_eq(Vector2::new(130.0, 130.0)));
///         assert!(a.sweep_angle().fuzzy_eq(std::f64::consts::FRAC_PI_2));
///     }
///     TangentArc::Point(_) => unreachable!(),
/// }
///
/// let sharp = tangent_arc(
///     Vector2::new(100.0, 200.0),
///     Vector2::new(100.0, 100.0),
///     Vector2::new(300.0, 100.0),
///     0.0,
/// );
/// assert_eq!(sharp, TangentArc::Point(Vector2::new(100.0, 100.0)));
/// ```
#[inline]
pub fn tangent_arc<T>(
    current: Vector2<T>,
    corner: Vector2<T>,
    next: Vector2<T>,
    radius: T,
) -> TangentArc<T>
where
    T: Real,
{
    tangent_arc_eps(current, corner, next, radius, T::fuzzy_epsilon())
}

/// Same as [tangent_arc] using `eps` as the tolerance for the coincident neighbor and collinear
/// checks.
pub fn tangent_arc_eps<T>(
    current: Vector2<T>,
    corner: Vector2<T>,
    next: Vector2<T>,
    radius: T,
    eps: T,
) -> TangentArc<T>
where
    T: Real,
{
    let radius = radius.positive_or_zero();
    if radius == T::zero() {
        return TangentArc::Point(corner);
    }

    let to_current = current - corner;
    let to_next = next - corner;
    if to_current.length().fuzzy_eq_zero_eps(eps) || to_next.length().fuzzy_eq_zero_eps(eps) {
        log::trace!("corner at {:?} has a coincident neighbor, keeping it sharp", corner);
        return TangentArc::Point(corner);
    }

    let u1 = to_current.normalize();
    let u2 = to_next.normalize();
    let cross = u1.perp_dot(u2);
    if cross.fuzzy_eq_zero_eps(eps) {
        log::trace!("corner at {:?} is collinear with its neighbors, keeping it sharp", corner);
        return TangentArc::Point(corner);
    }

    // interior angle at the corner, strictly between 0 and PI here
    let theta = angle_between(u1, u2);
    let half_theta = theta / T::two();
    let tangent_dist = radius / half_theta.tan();
    let center_dist = radius / half_theta.sin();

    let start = corner + u1.scale(tangent_dist);
    let end = corner + u2.scale(tangent_dist);
    let center = corner + (u1 + u2).normalize().scale(center_dist);

    // left turn (incoming x outgoing > 0) is the same as u1 x u2 < 0
    let sweep_magnitude = T::pi() - theta;
    let sweep = if cross < T::zero() {
        sweep_magnitude
    } else {
        -sweep_magnitude
    };

    TangentArc::Arc(ArcSeg {
        start,
        end,
        center,
        radius,
        bulge: bulge_from_angle(sweep),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_fuzzy_eq;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn right_turn_sweeps_clockwise() {
        // walking +x then turning toward -y (right turn in y up coordinates)
        let arc = tangent_arc(
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, -10.0),
            2.0,
        );
        let TangentArc::Arc(a) = arc else {
            panic!("expected arc");
        };
        assert!(!a.is_counter_clockwise());
        assert_fuzzy_eq!(a.start, Vector2::new(8.0, 0.0));
        assert_fuzzy_eq!(a.end, Vector2::new(10.0, -2.0));
        assert_fuzzy_eq!(a.center, Vector2::new(8.0, -2.0));
        assert_fuzzy_eq!(a.sweep_angle(), -std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn tangent_points_are_radius_from_center() {
        // 60 degree corner
        let corner = Vector2::new(0.0, 0.0);
        let current = Vector2::new(100.0, 0.0);
        let next = Vector2::new(50.0, 50.0 * 3.0f64.sqrt());
        let TangentArc::Arc(a) = tangent_arc(current, corner, next, 10.0) else {
            panic!("expected arc");
        };

        assert_fuzzy_eq!((a.start - a.center).length(), 10.0);
        assert_fuzzy_eq!((a.end - a.center).length(), 10.0);
        // tangent distance is r / tan(30 deg)
        assert_fuzzy_eq!((a.start - corner).length(), 10.0 * 3.0f64.sqrt());
        assert_fuzzy_eq!(a.sweep_angle().abs(), 2.0 * std::f64::consts::FRAC_PI_3);
        // radius vectors are perpendicular to the edges
        assert_fuzzy_eq!((a.start - a.center).dot(current - corner), 0.0);
        assert_fuzzy_eq!((a.end - a.center).dot(next - corner), 0.0);
    }

    #[test]
    fn degenerate_inputs_collapse_to_corner() {
        let corner = Vector2::new(5.0, 5.0);
        let expected = TangentArc::Point(corner);
        // coincident neighbor
        assert_eq!(
            tangent_arc(corner, corner, Vector2::new(9.0, 5.0), 3.0),
            expected
        );
        assert_eq!(
            tangent_arc(Vector2::new(0.0, 5.0), corner, corner, 3.0),
            expected
        );
        // straight through and reversal
        assert_eq!(
            tangent_arc(Vector2::new(0.0, 5.0), corner, Vector2::new(9.0, 5.0), 3.0),
            expected
        );
        assert_eq!(
            tangent_arc(Vector2::new(0.0, 5.0), corner, Vector2::new(1.0, 5.0), 3.0),
            expected
        );
        // invalid radii
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                tangent_arc(Vector2::new(0.0, 0.0), corner, Vector2::new(9.0, 0.0), r),
                expected
            );
        }
    }

    #[test]
    fn shrinking_radius_converges_to_corner() {
        let corner: Vector2<f64> = Vector2::new(10.0, 10.0);
        let mut last_dist = f64::MAX;
        for r in [8.0, 4.0, 1.0, 0.1, 1e-4] {
            let arc = tangent_arc(Vector2::new(0.0, 10.0), corner, Vector2::new(10.0, 0.0), r);
            let dist = (arc.start() - corner).length().max((arc.end() - corner).length());
            assert!(dist < last_dist);
            last_dist = dist;
        }
        assert!(last_dist < 1e-3);
    }

    #[test]
    fn large_radius_is_not_clamped() {
        let arc = tangent_arc(
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            50.0,
        );
        // tangent point lands before the previous vertex
        assert_fuzzy_eq!(arc.start(), Vector2::new(-40.0, 0.0));
        assert_fuzzy_eq!(arc.end(), Vector2::new(10.0, 50.0));
    }

    #[test]
    fn segment_area_sign_follows_direction() {
        let quarter = |sign: f64| ArcSeg {
            start: Vector2::new(1.0, 0.0),
            end: Vector2::new(0.0, sign),
            center: Vector2::zero(),
            radius: 1.0,
            bulge: sign * (std::f64::consts::PI / 8.0).tan(),
        };
        let expected = std::f64::consts::FRAC_PI_4 - 0.5;
        assert_fuzzy_eq!(quarter(1.0).segment_area(), expected);
        assert_fuzzy_eq!(quarter(-1.0).segment_area(), -expected);
    }

    #[test]
    fn axis_extremes_only_on_arc() {
        // counter clockwise quarter from +x to +y around the origin, both extremes are endpoints
        let ccw = ArcSeg {
            start: Vector2::new(1.0, 0.0),
            end: Vector2::new(0.0, 1.0),
            center: Vector2::zero(),
            radius: 1.0,
            bulge: (std::f64::consts::PI / 8.0).tan(),
        };
        let points: Vec<_> = ccw.axis_extremes().collect();
        assert_eq!(points.len(), 2);
        assert!(ccw.contains_circle_point(Vector2::new(0.5f64.sqrt(), 0.5f64.sqrt())));
        assert!(!ccw.contains_circle_point(Vector2::new(-1.0, 0.0)));

        // clockwise quarter from (0, 1) through (1, 0) passing the +x extreme at its end, and the
        // 3/4 turn side is excluded
        let cw = ArcSeg {
            start: Vector2::new(0.0, 1.0),
            end: Vector2::new(0.5f64.sqrt(), -(0.5f64.sqrt())),
            center: Vector2::zero(),
            radius: 1.0,
            bulge: -(3.0 * std::f64::consts::PI / 16.0).tan(),
        };
        let points: Vec<_> = cw.axis_extremes().collect();
        assert_eq!(points, vec![Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0)]);
    }

    #[test]
    fn eps_controls_collinear_check() {
        let current = Vector2::new(0.0, 0.0);
        let corner = Vector2::new(10.0, 1e-4);
        let next = Vector2::new(20.0, 0.0);
        assert!(matches!(tangent_arc(current, corner, next, 1.0), TangentArc::Arc(_)));
        assert_eq!(
            tangent_arc_eps(current, corner, next, 1.0, 1e-3),
            TangentArc::Point(corner)
        );
    }
}
