//! Numeric traits and 2D math shared by the polygon module.
pub mod math;
pub mod traits;
