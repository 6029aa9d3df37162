use rounded_polygon::{
    AABB,
    core::traits::FuzzyEq,
    polygon::{Outline, OutlineSeg, PolygonVertex},
};

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Holds a set of properties of an outline for comparison in tests
#[derive(Debug, Copy, Clone)]
pub struct OutlineProperties {
    pub arc_count: usize,
    pub area: f64,
    pub path_length: f64,
    pub extents: AABB<f64>,
}

impl OutlineProperties {
    // property comparer epsilon
    pub const PROP_CMP_EPS: f64 = 1e-4;

    pub fn new(
        arc_count: usize,
        area: f64,
        path_length: f64,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Self {
        Self {
            arc_count,
            area,
            path_length,
            extents: AABB::new(min_x, min_y, max_x, max_y),
        }
    }

    pub fn from_outline(outline: &Outline<f64>) -> Self {
        Self {
            arc_count: outline.arc_count(),
            area: outline.area(),
            path_length: outline.path_length(),
            extents: outline.extents().unwrap(),
        }
    }

    pub fn fuzzy_eq_eps(&self, other: &Self, eps: f64) -> bool {
        if self.arc_count != other.arc_count {
            return false;
        }
        if !self.area.fuzzy_eq_eps(other.area, eps) {
            return false;
        }
        if !self.path_length.fuzzy_eq_eps(other.path_length, eps) {
            return false;
        }
        if !aabb_fuzzy_eq_eps(&self.extents, &other.extents, eps) {
            return false;
        }
        true
    }
}

/// Assert the outline has the expected properties, printing both sets on failure.
pub fn assert_outline_properties(outline: &Outline<f64>, expected: &OutlineProperties) {
    let result = OutlineProperties::from_outline(outline);
    if !result.fuzzy_eq_eps(expected, OutlineProperties::PROP_CMP_EPS) {
        eprintln!("result:\n{:?}", result);
        eprintln!("expected:\n{:?}", expected);
        eprintln!("outline:\n{}", to_debug_json_str(outline));
        panic!("outline properties do not match");
    }
}

/// Checks shared by every outline built from 3 or more vertexes.
pub fn assert_outline_invariants(vertexes: &[PolygonVertex<f64>], outline: &Outline<f64>) {
    assert!(!outline.is_empty());
    assert!(outline.is_closed());
    assert_eq!(outline.end_point(), outline.start());
    // sharp corners never produce arcs
    assert!(outline.arc_count() <= vertexes.iter().filter(|v| v.is_rounded).count());
    // every arc is tangent: start and end are both one radius from the center
    for arc in outline.arcs() {
        assert!((arc.start - arc.center).length().fuzzy_eq_eps(arc.radius, 1e-6));
        assert!((arc.end - arc.center).length().fuzzy_eq_eps(arc.radius, 1e-6));
    }
}

/// Helper function to create json string from an outline to be used for debugging.
pub fn to_debug_json_str(outline: &Outline<f64>) -> String {
    format!(
        r#"
{{
    "start": [{}, {}],
    "segments": [
        {}
    ]
}}
"#,
        outline.start().x,
        outline.start().y,
        outline
            .segments()
            .iter()
            .map(|s| match s {
                OutlineSeg::Line(p) => format!(r#"{{ "line": [{}, {}] }}"#, p.x, p.y),
                OutlineSeg::Arc(a) => format!(
                    r#"{{ "arc": [{}, {}], "center": [{}, {}], "radius": {}, "bulge": {} }}"#,
                    a.end.x, a.end.y, a.center.x, a.center.y, a.radius, a.bulge
                ),
            })
            .collect::<Vec<_>>()
            .join(",\n        ")
    )
}
