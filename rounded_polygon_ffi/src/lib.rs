//! This module contains the C foreign function interface for rounded_polygon.
//!
//! All functions return an `i32` error code (or write through out parameters): 0 is success, -1 is
//! a caught panic, and positive values are function specific (documented on each function). Error
//! codes caused by invalid input also set a thread local error message readable with
//! [rpoly_last_error_msg].
#![allow(non_camel_case_types)]
mod error_handling;

use core::slice;
use error_handling::{last_error_fn_name_ptr, last_error_msg_ptr, set_last_error};
use rounded_polygon::{
    core::math::Vector2,
    polygon::{
        ArcSeg, Outline, OutlineSeg, PolygonVertex, Rect, RectCorners, blend, blend_resolved,
        build_outline, rounded_rect_outline,
    },
};
use std::{os::raw::c_char, panic};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct rpoly_point {
    pub x: f64,
    pub y: f64,
}

impl rpoly_point {
    pub fn new(x: f64, y: f64) -> Self {
        rpoly_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        rpoly_point::new(v.x, v.y)
    }
}

/// Represents a polygon vertex.
///
/// `is_rounded` is non-zero when the corner should be rounded, `radius` is only read when
/// `has_radius` is non-zero (otherwise the default radius applies).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct rpoly_vertex {
    pub x: f64,
    pub y: f64,
    pub is_rounded: u8,
    pub has_radius: u8,
    pub radius: f64,
}

impl rpoly_vertex {
    pub fn new(x: f64, y: f64, is_rounded: bool, radius: Option<f64>) -> Self {
        rpoly_vertex {
            x,
            y,
            is_rounded: is_rounded as u8,
            has_radius: radius.is_some() as u8,
            radius: radius.unwrap_or_default(),
        }
    }

    pub fn from_internal(v: PolygonVertex<f64>) -> Self {
        rpoly_vertex::new(
            v.position.x,
            v.position.y,
            v.is_rounded,
            v.custom_corner_radius,
        )
    }

    pub fn to_internal(&self) -> PolygonVertex<f64> {
        PolygonVertex::from_vector2(
            Vector2::new(self.x, self.y),
            self.is_rounded != 0,
            (self.has_radius != 0).then_some(self.radius),
        )
    }
}

/// Outline segment kind value for straight lines.
pub const RPOLY_SEG_LINE: u8 = 0;
/// Outline segment kind value for arcs.
pub const RPOLY_SEG_ARC: u8 = 1;

/// Represents one outline segment.
///
/// `kind` is [RPOLY_SEG_LINE] or [RPOLY_SEG_ARC]. `start` is where the segment begins (end of the
/// previous segment or the outline start). For lines `center`, `radius`, and `bulge` are all zero.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct rpoly_outline_seg {
    pub kind: u8,
    pub start: rpoly_point,
    pub end: rpoly_point,
    pub center: rpoly_point,
    pub radius: f64,
    pub bulge: f64,
}

impl rpoly_outline_seg {
    pub fn from_internal(start: Vector2<f64>, seg: &OutlineSeg<f64>) -> Self {
        match seg {
            OutlineSeg::Line(end) => rpoly_outline_seg {
                kind: RPOLY_SEG_LINE,
                start: rpoly_point::from_internal(start),
                end: rpoly_point::from_internal(*end),
                ..Default::default()
            },
            OutlineSeg::Arc(ArcSeg {
                start,
                end,
                center,
                radius,
                bulge,
            }) => rpoly_outline_seg {
                kind: RPOLY_SEG_ARC,
                start: rpoly_point::from_internal(*start),
                end: rpoly_point::from_internal(*end),
                center: rpoly_point::from_internal(*center),
                radius: *radius,
                bulge: *bulge,
            },
        }
    }
}

/// Opaque type that wraps an [Outline].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct rpoly_outline(pub Outline<f64>);

unsafe fn read_vertexes(vertexes: *const rpoly_vertex, n_vertexes: u32) -> Vec<PolygonVertex<f64>> {
    if vertexes.is_null() || n_vertexes == 0 {
        return Vec::new();
    }

    slice::from_raw_parts(vertexes, n_vertexes as usize)
        .iter()
        .map(|v| v.to_internal())
        .collect()
}

/// Wraps [build_outline].
///
/// `vertexes` is an array of [rpoly_vertex] (may be null if `n_vertexes` is 0).
/// `default_radius` is used by rounded vertexes without their own radius.
/// `outline` is an out parameter to hold the created outline, fewer than 3 vertexes creates an
/// empty outline.
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `vertexes` may be null if `n_vertexes` is 0 or must point to a valid contiguous buffer of
/// [rpoly_vertex] with length of at least `n_vertexes`.
/// `outline` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_build_outline(
    vertexes: *const rpoly_vertex,
    n_vertexes: u32,
    default_radius: f64,
    outline: *mut *const rpoly_outline,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline out parameter is null", "rpoly_build_outline");
            return 1;
        }

        let input = read_vertexes(vertexes, n_vertexes);
        let result = build_outline(&input, default_radius);
        outline.write(Box::into_raw(Box::new(rpoly_outline(result))));
        0
    })
}

/// Wraps [rounded_rect_outline].
///
/// `corner_mask` selects the rounded corners: bit 0 top left, bit 1 top right, bit 2 bottom right,
/// bit 3 bottom left.
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `outline` must be null or point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_rounded_rect_outline(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    corner_mask: u8,
    radius: f64,
    outline: *mut *const rpoly_outline,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline out parameter is null", "rpoly_rounded_rect_outline");
            return 1;
        }

        let rect = Rect::new(x, y, width, height);
        let result = rounded_rect_outline(rect, RectCorners::from_bits(corner_mask), radius);
        outline.write(Box::into_raw(Box::new(rpoly_outline(result))));
        0
    })
}

/// Free an existing [rpoly_outline] object.
///
/// Nothing happens if `outline` is null.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object that was created by this library and has
/// not already been freed.
#[no_mangle]
pub unsafe extern "C" fn rpoly_outline_f(outline: *mut rpoly_outline) {
    if !outline.is_null() {
        drop(Box::from_raw(outline))
    }
}

/// Get the start point of an outline.
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `point` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_start(
    outline: *const rpoly_outline,
    point: *mut rpoly_point,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_start");
            return 1;
        }
        point.write(rpoly_point::from_internal((*outline).0.start()));
        0
    })
}

/// Get the number of segments in an outline (0 for an empty outline).
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_seg_count(
    outline: *const rpoly_outline,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_seg_count");
            return 1;
        }
        count.write((*outline).0.segments().len() as u32);
        0
    })
}

/// Get the segment at `index` of an outline.
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
/// * 2 = `index` is out of range.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `seg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_seg(
    outline: *const rpoly_outline,
    index: u32,
    seg: *mut rpoly_outline_seg,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_seg");
            return 1;
        }

        let outline = &(*outline).0;
        let i = index as usize;
        let segments = outline.segments();
        let Some(s) = segments.get(i) else {
            set_last_error(
                format!("segment index {} out of range ({} segments)", i, segments.len()),
                "rpoly_outline_get_seg".to_string(),
            );
            return 2;
        };

        let start = if i == 0 {
            outline.start()
        } else {
            segments[i - 1].end()
        };
        seg.write(rpoly_outline_seg::from_internal(start, s));
        0
    })
}

/// Wraps [Outline::area].
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `area` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_area(outline: *const rpoly_outline, area: *mut f64) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_area");
            return 1;
        }
        area.write((*outline).0.area());
        0
    })
}

/// Wraps [Outline::path_length].
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `path_length` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_path_length(
    outline: *const rpoly_outline,
    path_length: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_path_length");
            return 1;
        }
        path_length.write((*outline).0.path_length());
        0
    })
}

/// Wraps [Outline::extents].
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
/// * 2 = `outline` is empty.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `min_x`, `min_y`, `max_x`, and `max_y` must all point to a valid places in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_extents(
    outline: *const rpoly_outline,
    min_x: *mut f64,
    min_y: *mut f64,
    max_x: *mut f64,
    max_y: *mut f64,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_extents");
            return 1;
        }
        match (*outline).0.extents() {
            Some(aabb) => {
                min_x.write(aabb.min_x);
                min_y.write(aabb.min_y);
                max_x.write(aabb.max_x);
                max_y.write(aabb.max_y);
                0
            }
            None => {
                set_last_error("outline is empty", "rpoly_outline_get_extents");
                2
            }
        }
    })
}

/// Write the outline SVG path data (see [Outline::to_svg_path_data]) as a null terminated string.
///
/// `required_len` is always written with the buffer length required (including the null
/// terminator). `buffer` may be null to only query the required length.
///
/// ## Specific Error Codes
/// * 1 = `outline` is null.
/// * 2 = `buffer` is not null and `buffer_len` is less than the required length.
///
/// # Safety
///
/// `outline` must be null or a valid rpoly_outline object.
/// `buffer` must be null or point to a writable buffer of at least `buffer_len` bytes.
/// `required_len` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_outline_get_svg_path_data(
    outline: *const rpoly_outline,
    buffer: *mut c_char,
    buffer_len: u32,
    required_len: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if outline.is_null() {
            set_last_error("outline is null", "rpoly_outline_get_svg_path_data");
            return 1;
        }

        let data = (*outline).0.to_svg_path_data();
        let len = data.len() + 1;
        required_len.write(len as u32);
        if buffer.is_null() {
            return 0;
        }

        if (buffer_len as usize) < len {
            set_last_error(
                format!("buffer length {} is less than required {}", buffer_len, len),
                "rpoly_outline_get_svg_path_data".to_string(),
            );
            return 2;
        }

        let out = slice::from_raw_parts_mut(buffer as *mut u8, len);
        out[..data.len()].copy_from_slice(data.as_bytes());
        out[data.len()] = 0;
        0
    })
}

unsafe fn write_blend_result(
    result: Result<Vec<PolygonVertex<f64>>, rounded_polygon::polygon::BlendError>,
    out_buffer: *mut rpoly_vertex,
    fn_name: &str,
) -> i32 {
    match result {
        Ok(vertexes) => {
            let out = slice::from_raw_parts_mut(out_buffer, vertexes.len());
            for (o, v) in out.iter_mut().zip(vertexes) {
                *o = rpoly_vertex::from_internal(v);
            }
            0
        }
        Err(e) => {
            set_last_error(e.to_string(), fn_name.to_string());
            2
        }
    }
}

/// Wraps [blend], interpolating two vertex arrays element wise at `fraction`.
///
/// `out_buffer` receives `n_a` blended vertexes.
///
/// ## Specific Error Codes
/// * 1 = `out_buffer` is null, or `a` or `b` is null with a non-zero count.
/// * 2 = `n_a` and `n_b` are not equal.
///
/// # Safety
///
/// `a` and `b` must point to valid contiguous buffers of [rpoly_vertex] with lengths of at least
/// `n_a` and `n_b` (or be null if their count is 0).
/// `out_buffer` must point to a writable buffer of at least `n_a` [rpoly_vertex].
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_blend(
    a: *const rpoly_vertex,
    b: *const rpoly_vertex,
    n_a: u32,
    n_b: u32,
    fraction: f64,
    out_buffer: *mut rpoly_vertex,
) -> i32 {
    ffi_catch_unwind!({
        if out_buffer.is_null() || (a.is_null() && n_a != 0) || (b.is_null() && n_b != 0) {
            set_last_error("null vertex buffer", "rpoly_blend");
            return 1;
        }

        let a = read_vertexes(a, n_a);
        let b = read_vertexes(b, n_b);
        write_blend_result(blend(&a, &b, fraction), out_buffer, "rpoly_blend")
    })
}

/// Wraps [blend_resolved], interpolating the drawn radius of each corner so rounding animates
/// continuously.
///
/// `out_buffer` receives `n_a` blended vertexes, all rounded with their own radius.
///
/// ## Specific Error Codes
/// * 1 = `out_buffer` is null, or `a` or `b` is null with a non-zero count.
/// * 2 = `n_a` and `n_b` are not equal.
///
/// # Safety
///
/// Same requirements as [rpoly_blend].
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn rpoly_blend_resolved(
    a: *const rpoly_vertex,
    b: *const rpoly_vertex,
    n_a: u32,
    n_b: u32,
    fraction: f64,
    default_radius: f64,
    out_buffer: *mut rpoly_vertex,
) -> i32 {
    ffi_catch_unwind!({
        if out_buffer.is_null() || (a.is_null() && n_a != 0) || (b.is_null() && n_b != 0) {
            set_last_error("null vertex buffer", "rpoly_blend_resolved");
            return 1;
        }

        let a = read_vertexes(a, n_a);
        let b = read_vertexes(b, n_b);
        write_blend_result(
            blend_resolved(&a, &b, fraction, default_radius),
            out_buffer,
            "rpoly_blend_resolved",
        )
    })
}

/// Returns the last error message set on the calling thread as a null terminated string, or null
/// if no error has been set.
///
/// The returned pointer is owned by the library and stays valid until the next error is set on the
/// same thread.
#[no_mangle]
pub extern "C" fn rpoly_last_error_msg() -> *const c_char {
    last_error_msg_ptr()
}

/// Returns the name of the function that set the last error on the calling thread, or null if no
/// error has been set. Same lifetime rules as [rpoly_last_error_msg].
#[no_mangle]
pub extern "C" fn rpoly_last_error_fn_name() -> *const c_char {
    last_error_fn_name_ptr()
}

/// Clear the last error set on the calling thread.
#[no_mangle]
pub extern "C" fn rpoly_clear_last_error() {
    error_handling::clear_last_error();
}
