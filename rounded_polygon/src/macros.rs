/// Assert two values (scalars, vectors, vertexes, arcs) are equal within the fuzzy epsilon, or
/// within an explicit epsilon given as a third argument.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        let (left, right) = ($left, $right);
        assert!(
            left.fuzzy_eq(right),
            "values differ by more than the fuzzy epsilon\n  left: {:?}\n right: {:?}",
            left,
            right
        );
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right, eps) = ($left, $right, $eps);
        assert!(
            left.fuzzy_eq_eps(right, eps),
            "values differ by more than {:?}\n  left: {:?}\n right: {:?}",
            eps,
            left,
            right
        );
    }};
}

/// Macro used for implementing the vertex list macros. Used for extracting macro repetition count
/// for reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Macro used by [polygon_closed] for the optional custom radius of each vertex.
#[doc(hidden)]
#[macro_export]
macro_rules! optional_radius {
    () => {
        None
    };
    ($radius:expr) => {
        Some($radius)
    };
}

/// Construct polygon vertexes from a list of `(x, y, is_rounded)` or
/// `(x, y, is_rounded, radius)` tuples. The polygon closes back on the first vertex, like every
/// vertex sequence passed to the outline builder.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon_closed;
/// # use rounded_polygon::polygon::*;
/// let vertexes = polygon_closed![(0.0, 0.0, true), (10.0, 0.0, false, 4.0), (0.0, 10.0, true)];
/// assert_eq!(vertexes.len(), 3);
/// assert_eq!(vertexes[0], PolygonVertex::new(0.0, 0.0, true));
/// assert_eq!(vertexes[1], PolygonVertex::with_radius(10.0, 0.0, false, 4.0));
/// ```
#[macro_export]
macro_rules! polygon_closed {
    ($( ($x:expr, $y:expr, $rounded:expr $(, $radius:expr)?) ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut vertexes = Vec::with_capacity(size);
            $(
                vertexes.push($crate::polygon::PolygonVertex::from_vector2(
                    $crate::core::math::Vector2::new($x, $y),
                    $rounded,
                    $crate::optional_radius!($($radius)?),
                ));
            )*
            vertexes
        }
    };
}
