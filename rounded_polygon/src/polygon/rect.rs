use super::{Outline, PolygonVertex, build_outline};
use crate::core::traits::Real;
use std::ops::BitOr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis aligned rectangle with its origin at the top left (minimum x and y) corner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect<T = f64> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> T {
        self.y + self.height
    }
}

/// Set of rectangle corners. "Top" is the minimum y side, as in screen coordinates.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// let top = RectCorners::TOP_LEFT | RectCorners::TOP_RIGHT;
/// assert!(top.contains(RectCorners::TOP_LEFT));
/// assert!(!top.contains(RectCorners::BOTTOM_LEFT));
/// assert!(RectCorners::ALL.contains(top));
/// assert_eq!(RectCorners::from_bits(top.bits()), top);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct RectCorners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl RectCorners {
    pub const NONE: Self = Self::from_bits(0);
    pub const TOP_LEFT: Self = Self::from_bits(1);
    pub const TOP_RIGHT: Self = Self::from_bits(1 << 1);
    pub const BOTTOM_RIGHT: Self = Self::from_bits(1 << 2);
    pub const BOTTOM_LEFT: Self = Self::from_bits(1 << 3);
    pub const ALL: Self = Self::from_bits(0b1111);

    /// Corners from a bit mask: bit 0 top left, bit 1 top right, bit 2 bottom right, bit 3 bottom
    /// left. Higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        RectCorners {
            top_left: bits & 1 != 0,
            top_right: bits & (1 << 1) != 0,
            bottom_right: bits & (1 << 2) != 0,
            bottom_left: bits & (1 << 3) != 0,
        }
    }

    #[inline]
    pub const fn bits(&self) -> u8 {
        (self.top_left as u8)
            | (self.top_right as u8) << 1
            | (self.bottom_right as u8) << 2
            | (self.bottom_left as u8) << 3
    }

    /// True if every corner in `other` is also in `self`.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        self.bits() & other.bits() == other.bits()
    }
}

impl BitOr for RectCorners {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

/// Corner vertexes of `rect` in drawing order: top left, top right, bottom right, bottom left.
///
/// Every vertex carries `radius` as its custom radius, only corners in `corners` are flagged
/// rounded. Keeping the radius on sharp corners lets a corner be toggled (or blended) without
/// losing its radius.
///
/// # Examples
///
/// ```
/// # use rounded_polygon::polygon::*;
/// let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
/// let vertexes = rounded_rect_corners(rect, RectCorners::TOP_RIGHT, 8.0);
/// assert_eq!(vertexes[1], PolygonVertex::with_radius(110.0, 20.0, true, 8.0));
/// assert_eq!(vertexes[3], PolygonVertex::with_radius(10.0, 70.0, false, 8.0));
/// ```
pub fn rounded_rect_corners<T>(rect: Rect<T>, corners: RectCorners, radius: T) -> Vec<PolygonVertex<T>>
where
    T: Real,
{
    vec![
        PolygonVertex::with_radius(rect.min_x(), rect.min_y(), corners.top_left, radius),
        PolygonVertex::with_radius(rect.max_x(), rect.min_y(), corners.top_right, radius),
        PolygonVertex::with_radius(rect.max_x(), rect.max_y(), corners.bottom_right, radius),
        PolygonVertex::with_radius(rect.min_x(), rect.max_y(), corners.bottom_left, radius),
    ]
}

/// Outline of `rect` with the selected `corners` rounded by `radius`.
#[inline]
pub fn rounded_rect_outline<T>(rect: Rect<T>, corners: RectCorners, radius: T) -> Outline<T>
where
    T: Real,
{
    build_outline(&rounded_rect_corners(rect, corners, radius), radius)
}
