mod test_utils;

use rounded_polygon::{
    assert_fuzzy_eq,
    core::{math::Vector2, traits::FuzzyEq},
    polygon::{Outline, PolygonVertex, build_outline, polygon_area},
    polygon_closed,
};
use std::f64::consts::{PI, SQRT_2};
use test_utils::{OutlineProperties, assert_outline_invariants, assert_outline_properties};

fn diamond(rounded: bool) -> Vec<PolygonVertex> {
    polygon_closed![
        (0.0, -10.0, rounded),
        (10.0, 0.0, rounded),
        (0.0, 10.0, rounded),
        (-10.0, 0.0, rounded),
    ]
}

/// Every flattened point lies on a line segment or an arc of the outline.
fn assert_points_on_outline(outline: &Outline, points: &[Vector2]) {
    let mut prev = outline.start();
    let on_line = |p: Vector2, a: Vector2, b: Vector2| {
        let ab = b - a;
        let ap = p - a;
        let len = ab.length();
        len > 0.0
            && (ab.perp_dot(ap) / len).abs() < 1e-6
            && ab.dot(ap) >= -1e-6
            && ab.dot(ap) <= len * len + 1e-6
    };

    let mut lines = Vec::new();
    for seg in outline.segments() {
        lines.push((prev, seg.end()));
        prev = seg.end();
    }

    for &p in points {
        let hits_line = lines.iter().any(|&(a, b)| on_line(p, a, b) || p.fuzzy_eq(a));
        let hits_arc = outline
            .arcs()
            .any(|a| (p - a.center).length().fuzzy_eq_eps(a.radius, 1e-6));
        assert!(hits_line || hits_arc, "{:?} is not on the outline", p);
    }
}

#[test]
fn diamond_arcs_reach_past_tangent_points() {
    let r = 2.0;
    let vertexes = diamond(true);
    let outline = build_outline(&vertexes, r);
    assert_outline_invariants(&vertexes, &outline);

    // each 90 degree corner trims r^2 (1 - PI / 4)
    let area = 200.0 - 4.0 * r * r * (1.0 - PI / 4.0);
    let length = 4.0 * (10.0 * SQRT_2 - 2.0 * r) + 2.0 * PI * r;
    // arc centers sit r * sqrt(2) in from the corners, the arc tops out one radius past that
    let reach = 10.0 - r * SQRT_2 + r;
    assert_outline_properties(
        &outline,
        &OutlineProperties::new(4, area, length, -reach, -reach, reach, reach),
    );

    // tangent points alone stop short of the arc extremes
    let max_tangent_x = outline
        .arcs()
        .flat_map(|a| [a.start.x, a.end.x])
        .fold(f64::MIN, f64::max);
    assert!(max_tangent_x < reach - 0.5);
}

#[test]
fn rounded_reflex_corner_adds_area() {
    let vertexes = polygon_closed![
        (0.0, 0.0, false),
        (20.0, 0.0, false),
        (20.0, 10.0, false),
        (10.0, 10.0, true),
        (10.0, 20.0, false),
        (0.0, 20.0, false),
    ];
    let outline = build_outline(&vertexes, 2.0);
    assert_eq!(outline.arc_count(), 1);
    let arc = outline.arcs().next().unwrap();
    // right turn in a counter clockwise outline
    assert!(!arc.is_counter_clockwise());
    assert_fuzzy_eq!(arc.center, Vector2::new(12.0, 12.0));

    assert_fuzzy_eq!(outline.area(), 300.0 + 4.0 - PI);
    assert_fuzzy_eq!(outline.path_length(), 80.0 - 4.0 + PI);
    // concave arc never leaves the sharp bounds
    let extents = outline.extents().unwrap();
    assert_fuzzy_eq!(extents.max_x, 20.0);
    assert_fuzzy_eq!(extents.max_y, 20.0);
}

#[test]
fn reversed_winding_negates_area_only() {
    let forward = build_outline(&diamond(true), 3.0);
    let mut reversed_vertexes = diamond(true);
    reversed_vertexes.reverse();
    let reversed = build_outline(&reversed_vertexes, 3.0);

    assert_fuzzy_eq!(forward.area(), -reversed.area());
    assert_fuzzy_eq!(forward.path_length(), reversed.path_length());
    let (a, b) = (forward.extents().unwrap(), reversed.extents().unwrap());
    assert_fuzzy_eq!(a.min_x, b.min_x);
    assert_fuzzy_eq!(a.max_y, b.max_y);
}

#[test]
fn unclamped_radius_extends_extents() {
    // radius far larger than the edges puts the tangent points outside the square
    let vertexes = polygon_closed![
        (0.0, 0.0, false),
        (10.0, 0.0, true),
        (10.0, 10.0, false),
        (0.0, 10.0, false),
    ];
    let outline = build_outline(&vertexes, 50.0);
    let arc = outline.arcs().next().unwrap();
    assert_fuzzy_eq!(arc.start, Vector2::new(-40.0, 0.0));
    assert_fuzzy_eq!(arc.end, Vector2::new(10.0, 50.0));

    let extents = outline.extents().unwrap();
    assert_fuzzy_eq!(extents.min_x, -40.0);
    assert_fuzzy_eq!(extents.min_y, 0.0);
    assert_fuzzy_eq!(extents.max_x, 10.0);
    assert_fuzzy_eq!(extents.max_y, 50.0);
}

#[test]
fn flatten_tracks_outline() {
    let outline = build_outline(&diamond(true), 2.0);
    let points = outline.flatten(0.01);
    assert_eq!(points[0], outline.start());
    assert!(!points[points.len() - 1].fuzzy_eq(points[0]));
    assert!(points.windows(2).all(|w| !w[0].fuzzy_eq(w[1])));
    assert_points_on_outline(&outline, &points);

    // chords cut inside a convex outline
    let flat_area = polygon_area(&points);
    assert!(flat_area < outline.area());
    assert!(outline.area() - flat_area < 0.1);

    // looser error uses fewer points
    assert!(outline.flatten(0.5).len() < points.len());
    // error larger than the radius keeps a single chord per arc
    assert_eq!(outline.flatten(5.0).len(), 1 + 4 * 2);
}

#[test]
fn flatten_sharp_outline_is_vertexes() {
    let outline = build_outline(&diamond(false), 2.0);
    let points = outline.flatten(0.01);
    // closing edge midpoint then the four corners
    assert_eq!(
        points,
        vec![
            Vector2::new(-5.0, -5.0),
            Vector2::new(0.0, -10.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(0.0, 10.0),
            Vector2::new(-10.0, 0.0),
        ]
    );
    assert_fuzzy_eq!(polygon_area(&points), outline.area());
}
