//! Rounded corner polygon outlines and the vertex algebra used to animate them.
//!
//! A polygon is an ordered slice of [PolygonVertex] with cyclic edges. [build_outline] turns it
//! into an [Outline] where every rounded vertex is replaced by an arc tangent to both of its
//! edges, and [blend] / [blend_resolved] interpolate between two vertex configurations.
mod algebra;
mod builder;
mod outline;
mod polygon_vertex;
mod rect;
mod tangent_arc;

pub use algebra::*;
pub use builder::*;
pub use outline::*;
pub use polygon_vertex::*;
pub use rect::*;
pub use tangent_arc::*;
