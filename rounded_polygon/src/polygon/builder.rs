use super::{Outline, OutlineSeg, PolygonVertex, TangentArc, tangent_arc_eps};
use crate::core::{math::midpoint, traits::Real};

/// Options for building outlines.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// let builder = OutlineBuilder::new(20.0);
/// let outline = builder.build(&[
///     PolygonVertex::new(0.0, 0.0, true),
///     PolygonVertex::new(100.0, 0.0, false),
///     PolygonVertex::new(0.0, 100.0, false),
/// ]);
/// assert_eq!(outline.arc_count(), 1);
/// assert!(outline.is_closed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineBuilder<T = f64> {
    /// Radius used by rounded vertexes that carry no custom radius.
    pub default_radius: T,
    /// Tolerance for treating a corner as degenerate (neighbor on top of the corner, or the
    /// neighbors collinear with it), degenerate corners are drawn sharp.
    pub pos_equal_eps: T,
}

impl<T> OutlineBuilder<T>
where
    T: Real,
{
    #[inline]
    pub fn new(default_radius: T) -> Self {
        OutlineBuilder {
            default_radius,
            ..Default::default()
        }
    }

    /// Build the outline of `vertexes`, see [build_outline].
    #[inline]
    pub fn build(&self, vertexes: &[PolygonVertex<T>]) -> Outline<T> {
        outline_with_eps(vertexes, self.default_radius, self.pos_equal_eps)
    }
}

impl<T> Default for OutlineBuilder<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        OutlineBuilder {
            default_radius: T::zero(),
            pos_equal_eps: T::fuzzy_epsilon(),
        }
    }
}

/// Build the closed outline of a polygon, rounding each vertex flagged as rounded with a tangent
/// arc.
///
/// The outline starts at the midpoint of the last and first vertex positions (the middle of the
/// closing edge) so that the first and last corners are both fitted like any other corner. For
/// each corner a line is emitted to the corner point (sharp) or to the arc start followed by the
/// arc (rounded), and a final line returns to the start.
///
/// A rounded vertex uses its custom radius when present, otherwise `default_radius`. Sequences of
/// fewer than 3 vertexes have no corners and produce [Outline::empty].
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// # use rounded_polygon::core::math::*;
/// let square = [
///     PolygonVertex::new(100.0, 100.0, true),
///     PolygonVertex::new(300.0, 100.0, true),
///     PolygonVertex::new(300.0, 300.0, true),
///     PolygonVertex::new(100.0, 300.0, true),
/// ];
/// let outline = build_outline(&square, 30.0);
/// assert_eq!(outline.start(), Vector2::new(100.0, 200.0));
/// assert_eq!(outline.arc_count(), 4);
/// assert!(outline.arcs().all(|a| a.radius == 30.0));
/// assert_eq!(outline.end_point(), outline.start());
///
/// assert!(build_outline(&square[..2], 30.0).is_empty());
/// ```
pub fn build_outline<T>(vertexes: &[PolygonVertex<T>], default_radius: T) -> Outline<T>
where
    T: Real,
{
    outline_with_eps(vertexes, default_radius, T::fuzzy_epsilon())
}

fn outline_with_eps<T>(vertexes: &[PolygonVertex<T>], default_radius: T, eps: T) -> Outline<T>
where
    T: Real,
{
    let n = vertexes.len();
    if n < 3 {
        log::debug!("cannot outline {} vertexes, returning empty outline", n);
        return Outline::empty();
    }

    let start = midpoint(vertexes[n - 1].position, vertexes[0].position);
    // worst case every corner is rounded (line + arc) plus the closing line
    let mut segments = Vec::with_capacity(2 * n + 1);
    let mut current_point = start;

    for (i, v) in vertexes.iter().enumerate() {
        let next = &vertexes[(i + 1) % n];
        let radius = v.effective_radius(default_radius);
        log::trace!(
            "corner {} at {:?}: rounded = {}, radius = {}",
            i,
            v.position,
            v.is_rounded,
            radius
        );

        match tangent_arc_eps(current_point, v.position, next.position, radius, eps) {
            TangentArc::Point(p) => {
                segments.push(OutlineSeg::Line(p));
                current_point = p;
            }
            TangentArc::Arc(arc) => {
                segments.push(OutlineSeg::Line(arc.start));
                segments.push(OutlineSeg::Arc(arc));
                current_point = arc.end;
            }
        }
    }

    segments.push(OutlineSeg::Line(start));

    Outline { start, segments }
}
