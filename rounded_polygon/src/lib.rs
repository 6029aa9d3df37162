//! Rounded corner polygon outlines.
//!
//! Build a closed outline from an ordered set of vertexes where each vertex decides whether its
//! corner is sharp or rounded with a tangent arc ([polygon::build_outline]), and interpolate
//! between vertex configurations to animate corners ([polygon::blend]). Outlines measure their own
//! area, length, and extents, and flatten to straight segments for backends without arcs.
//!
//! # Examples
//!
//! ```
//! use rounded_polygon::polygon::*;
//! use rounded_polygon::core::traits::*;
//!
//! let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
//! let sharp = rounded_rect_corners(rect, RectCorners::NONE, 16.0);
//! let rounded = rounded_rect_corners(rect, RectCorners::ALL, 16.0);
//!
//! // halfway through the animation every corner has radius 8
//! let frame = blend_resolved(&sharp, &rounded, 0.5, 16.0).unwrap();
//! let outline = build_outline(&frame, 16.0);
//! assert_eq!(outline.arc_count(), 4);
//! assert!(outline.arcs().all(|a| a.radius.fuzzy_eq(8.0)));
//! ```
#[macro_use]
mod macros;
pub mod core;
pub mod polygon;

pub use static_aabb2d_index::AABB;
