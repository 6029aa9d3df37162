//! 2D vector type and the angle/arc helpers used to place tangent arcs.
mod arc_math;
mod vector2;

pub use arc_math::*;
pub use vector2::Vector2;
