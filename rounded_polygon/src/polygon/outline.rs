use super::ArcSeg;
use crate::core::{
    math::{Vector2, point_on_circle},
    traits::Real,
};
use static_aabb2d_index::AABB;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One drawing command of an [Outline], each segment continues from where the previous one ended.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutlineSeg<T = f64> {
    /// Straight line to the point.
    Line(Vector2<T>),
    /// Arc, its start always equals the end of the previous segment.
    Arc(ArcSeg<T>),
}

impl<T> OutlineSeg<T>
where
    T: Real,
{
    /// Position the segment ends at.
    #[inline]
    pub fn end(&self) -> Vector2<T> {
        match self {
            OutlineSeg::Line(p) => *p,
            OutlineSeg::Arc(a) => a.end,
        }
    }
}

/// Closed path produced by [build_outline](super::build_outline).
///
/// The path starts at [Outline::start] and is drawn by following [Outline::segments] in order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Outline<T = f64> {
    pub(crate) start: Vector2<T>,
    pub(crate) segments: Vec<OutlineSeg<T>>,
}

impl<T> Default for Outline<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Outline<T>
where
    T: Real,
{
    /// Zero area placeholder returned for polygons with too few vertexes.
    #[inline]
    pub fn empty() -> Self {
        Outline {
            start: Vector2::zero(),
            segments: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Vector2<T> {
        self.start
    }

    #[inline]
    pub fn segments(&self) -> &[OutlineSeg<T>] {
        &self.segments
    }

    /// End position of the last segment, or [Outline::start] if there are no segments.
    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        self.segments.last().map_or(self.start, |s| s.end())
    }

    /// True when the outline has segments and the last one returns to the start.
    #[inline]
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.end_point().fuzzy_eq(self.start)
    }

    /// Iterate over the arc segments (the rounded corners).
    #[inline]
    pub fn arcs(&self) -> impl Iterator<Item = &ArcSeg<T>> + '_ {
        self.segments.iter().filter_map(|s| match s {
            OutlineSeg::Arc(a) => Some(a),
            OutlineSeg::Line(_) => None,
        })
    }

    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs().count()
    }

    /// Signed enclosed area, positive when the outline winds counter clockwise.
    ///
    /// Shoelace sum over the segment endpoints plus, for each arc, the area between its chord and
    /// the arc. An outline whose last segment does not return to the start is treated as closed by
    /// a straight line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// # use rounded_polygon::core::traits::*;
    /// use std::f64::consts::PI;
    /// let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    /// let outline = rounded_rect_outline(rect, RectCorners::ALL, 10.0);
    /// assert!(outline.area().fuzzy_eq(200.0 * 100.0 - (4.0 - PI) * 100.0));
    /// ```
    pub fn area(&self) -> T {
        if self.is_empty() {
            return T::zero();
        }

        let mut twice_chord_area = T::zero();
        let mut arc_area = T::zero();
        let mut prev = self.start;
        for seg in &self.segments {
            let end = seg.end();
            twice_chord_area = twice_chord_area + prev.perp_dot(end);
            if let OutlineSeg::Arc(a) = seg {
                arc_area = arc_area + a.segment_area();
            }
            prev = end;
        }
        twice_chord_area = twice_chord_area + prev.perp_dot(self.start);

        twice_chord_area / T::two() + arc_area
    }

    /// Total length of all segments.
    pub fn path_length(&self) -> T {
        let mut prev = self.start;
        let mut total = T::zero();
        for seg in &self.segments {
            total = total
                + match seg {
                    OutlineSeg::Line(p) => (*p - prev).length(),
                    OutlineSeg::Arc(a) => a.length(),
                };
            prev = seg.end();
        }

        total
    }

    /// Axis aligned bounding box, `None` if the outline is empty.
    ///
    /// Arcs contribute their endpoints and any circle extreme (leftmost, rightmost, top, bottom
    /// point) they pass through, so large unclamped radii that bulge past the vertexes are
    /// covered.
    pub fn extents(&self) -> Option<AABB<T>> {
        if self.is_empty() {
            return None;
        }

        let mut result = AABB::new(self.start.x, self.start.y, self.start.x, self.start.y);
        let mut add_point = |p: Vector2<T>| {
            result.min_x = num_traits::real::Real::min(result.min_x, p.x);
            result.min_y = num_traits::real::Real::min(result.min_y, p.y);
            result.max_x = num_traits::real::Real::max(result.max_x, p.x);
            result.max_y = num_traits::real::Real::max(result.max_y, p.y);
        };

        for seg in &self.segments {
            add_point(seg.end());
            if let OutlineSeg::Arc(a) = seg {
                a.axis_extremes().for_each(&mut add_point);
            }
        }

        Some(result)
    }

    /// Closed loop of points approximating the outline with straight segments only.
    ///
    /// Each arc is subdivided into equal angle chords whose distance to the arc is at most
    /// `error_distance` (capped at [MAX_ARC_SUBDIVISIONS] chords per arc). Consecutive repeat
    /// positions are dropped and the loop does not repeat its first point at the end. Returns an
    /// empty vector for an empty outline.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let rect: Rect<f64> = Rect::new(0.0, 0.0, 20.0, 10.0);
    /// let sharp = rounded_rect_outline(rect, RectCorners::NONE, 2.0);
    /// // start point plus the 4 corners
    /// assert_eq!(sharp.flatten(0.01).len(), 5);
    ///
    /// let rounded = rounded_rect_outline(rect, RectCorners::ALL, 2.0);
    /// let points = rounded.flatten(0.01);
    /// assert!(points.len() > 5 + 4);
    /// assert!((rounded.area() - polygon_area(&points)).abs() < 0.1);
    /// ```
    pub fn flatten(&self, error_distance: T) -> Vec<Vector2<T>> {
        let mut result = Vec::with_capacity(self.segments.len() + 1);
        if self.is_empty() {
            return result;
        }

        fn push<T: Real>(p: Vector2<T>, points: &mut Vec<Vector2<T>>) {
            if points.last().is_none_or(|last| !last.fuzzy_eq(p)) {
                points.push(p);
            }
        }

        push(self.start, &mut result);
        for seg in &self.segments {
            match seg {
                OutlineSeg::Line(p) => push(*p, &mut result),
                OutlineSeg::Arc(a) => {
                    let count = arc_subdivisions(a, error_distance);
                    let start_angle = (a.start.y - a.center.y).atan2(a.start.x - a.center.x);
                    let sweep = a.sweep_angle();
                    let count_t = T::from(count).unwrap_or_else(T::one);
                    for i in 1..count {
                        let fraction = T::from(i).unwrap_or_else(T::zero) / count_t;
                        let angle = start_angle + sweep * fraction;
                        push(point_on_circle(a.radius, a.center, angle), &mut result);
                    }
                    push(a.end, &mut result);
                }
            }
        }

        if result.len() > 1 && result[result.len() - 1].fuzzy_eq(result[0]) {
            result.pop();
        }

        result
    }

    /// Write the outline as SVG path data (`M`, `L`, `A`, and `Z` commands).
    ///
    /// The arc sweep flag is set for counter clockwise arcs (increasing angle in the outline's
    /// coordinate system), which matches how SVG renders y down coordinates.
    pub fn write_svg_path_data<W>(&self, w: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        if self.is_empty() {
            return Ok(());
        }

        write!(w, "M {} {}", self.start.x, self.start.y)?;
        let closed = self.is_closed();
        let count = if closed {
            self.segments.len() - 1
        } else {
            self.segments.len()
        };

        for seg in &self.segments[..count] {
            match seg {
                OutlineSeg::Line(p) => write!(w, " L {} {}", p.x, p.y)?,
                OutlineSeg::Arc(a) => write!(
                    w,
                    " A {r} {r} 0 0 {sweep} {x} {y}",
                    r = a.radius,
                    sweep = u8::from(a.is_counter_clockwise()),
                    x = a.end.x,
                    y = a.end.y
                )?,
            }
        }

        if closed {
            w.write_str(" Z")?;
        }

        Ok(())
    }

    /// Same as [Outline::write_svg_path_data] but returns a new string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use rounded_polygon::polygon::*;
    /// let triangle = [
    ///     PolygonVertex::new(0.0, 0.0, false),
    ///     PolygonVertex::new(4.0, 0.0, false),
    ///     PolygonVertex::new(0.0, 4.0, false),
    /// ];
    /// assert_eq!(
    ///     build_outline(&triangle, 0.0).to_svg_path_data(),
    ///     "M 0 2 L 0 0 L 4 0 L 0 4 Z"
    /// );
    /// ```
    pub fn to_svg_path_data(&self) -> String {
        let mut result = String::new();
        // fmt::Write for String never errors
        let _ = self.write_svg_path_data(&mut result);
        result
    }
}

/// Upper bound on the chords a single arc is split into by [Outline::flatten].
pub const MAX_ARC_SUBDIVISIONS: usize = 4096;

/// Number of equal angle chords needed to keep `arc` within `error_distance`.
///
/// A chord spanning angle `a` deviates from the arc by `r * (1 - cos(a / 2))`.
fn arc_subdivisions<T>(arc: &ArcSeg<T>, error_distance: T) -> usize
where
    T: Real,
{
    if error_distance >= arc.radius {
        return 1;
    }

    if error_distance != error_distance || error_distance <= T::zero() {
        return MAX_ARC_SUBDIVISIONS;
    }

    let max_chord_angle = T::two() * (T::one() - error_distance / arc.radius).acos();
    (arc.sweep_angle().abs() / max_chord_angle)
        .ceil()
        .to_usize()
        .unwrap_or(MAX_ARC_SUBDIVISIONS)
        .clamp(1, MAX_ARC_SUBDIVISIONS)
}

/// Signed area of the closed polygon through `points`, positive for counter clockwise.
pub fn polygon_area<T>(points: &[Vector2<T>]) -> T
where
    T: Real,
{
    let Some(&last) = points.last() else {
        return T::zero();
    };

    let mut prev = last;
    let mut twice_area = T::zero();
    for &p in points {
        twice_area = twice_area + prev.perp_dot(p);
        prev = p;
    }

    twice_area / T::two()
}
