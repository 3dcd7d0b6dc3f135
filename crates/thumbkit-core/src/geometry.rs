//! Sizes, rectangles and 2×3 affine matrices.
//!
//! # Coordinate System
//!
//! Rectangles passed to [`crate::crop`] are raw pixel coordinates with the
//! origin at the top-left corner. Everything drawn onto a surface uses a
//! y-up user space with the origin at the bottom-left corner; the surface
//! flips it onto pixel rows.

use serde::{Deserialize, Serialize};

use crate::types::Orientation;

/// Values closer than this to an integer are treated as that integer when
/// rounding rectangles outward.
const INTEGRAL_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square of the given side.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }

    /// Both dimensions are finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn scale(&self, ratio: f64) -> Size {
        Size::new(self.width * ratio, self.height * ratio)
    }

    pub fn transposed(&self) -> Size {
        Size::new(self.height, self.width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rect at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Smallest rect with integer edges containing this one.
    ///
    /// The origin is rounded down and the far edges up, so `(0, 0, 10.2, 4)`
    /// becomes `(0, 0, 11, 4)`.
    pub fn integral(&self) -> Rect {
        let x0 = snap_floor(self.x);
        let y0 = snap_floor(self.y);
        let x1 = snap_ceil(self.max_x());
        let y1 = snap_ceil(self.max_y());
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Overlap of two rects, or `None` if they don't overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.max_x().min(other.max_x());
        let y1 = self.max_y().min(other.max_y());
        let rect = Rect::new(x0, y0, x1 - x0, y1 - y0);
        (!rect.is_empty()).then_some(rect)
    }

    /// Shrink by `d` on every side.
    pub fn inset(&self, d: f64) -> Rect {
        Rect::new(
            self.x + d,
            self.y + d,
            self.width - 2.0 * d,
            self.height - 2.0 * d,
        )
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        tiny_skia::Rect::from_xywh(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

fn snap_floor(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < INTEGRAL_EPSILON {
        r
    } else {
        v.floor()
    }
}

fn snap_ceil(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < INTEGRAL_EPSILON {
        r
    } else {
        v.ceil()
    }
}

/// A 2×3 affine matrix.
///
/// Maps `(x, y)` to `(a·x + c·y + tx, b·x + d·y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Counter-clockwise rotation in a y-up space.
    pub fn rotate(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// `self` followed by `next`.
    pub fn then(&self, next: &Affine) -> Affine {
        Affine::new(
            self.a * next.a + self.b * next.c,
            self.a * next.b + self.b * next.d,
            self.c * next.a + self.d * next.c,
            self.c * next.b + self.d * next.d,
            self.tx * next.a + self.ty * next.c + next.tx,
            self.tx * next.b + self.ty * next.d + next.ty,
        )
    }

    /// Translate points before applying `self`.
    pub fn pre_translate(&self, tx: f64, ty: f64) -> Affine {
        Affine::translate(tx, ty).then(self)
    }

    /// Rotate points before applying `self`.
    pub fn pre_rotate(&self, radians: f64) -> Affine {
        Affine::rotate(radians).then(self)
    }

    /// Scale points before applying `self`.
    pub fn pre_scale(&self, sx: f64, sy: f64) -> Affine {
        Affine::scale(sx, sy).then(self)
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    /// Matrix that draws a raw bitmap upright into a target of `size`.
    ///
    /// `size` is the upright (display) size. For the four 90° variants the
    /// bitmap must be drawn into the transposed rect `(0, 0, H, W)`. The
    /// entries are the closed forms of translate, rotate, then mirror
    /// (translate and flip x) in y-up user space.
    pub fn for_orientation(orientation: Orientation, size: Size) -> Affine {
        let (w, h) = (size.width, size.height);
        match orientation {
            Orientation::Normal => Affine::IDENTITY,
            Orientation::FlipHorizontal => Affine::new(-1.0, 0.0, 0.0, 1.0, w, 0.0),
            Orientation::Rotate180 => Affine::new(-1.0, 0.0, 0.0, -1.0, w, h),
            Orientation::FlipVertical => Affine::new(1.0, 0.0, 0.0, -1.0, 0.0, h),
            Orientation::Rotate270CW => Affine::new(0.0, 1.0, -1.0, 0.0, w, 0.0),
            Orientation::Transpose => Affine::new(0.0, -1.0, -1.0, 0.0, w, h),
            Orientation::Rotate90CW => Affine::new(0.0, -1.0, 1.0, 0.0, 0.0, h),
            Orientation::Transverse => Affine::new(0.0, 1.0, 1.0, 0.0, 0.0, 0.0),
        }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Transform {
        tiny_skia::Transform::from_row(
            self.a as f32,
            self.b as f32,
            self.c as f32,
            self.d as f32,
            self.tx as f32,
            self.ty as f32,
        )
    }
}
