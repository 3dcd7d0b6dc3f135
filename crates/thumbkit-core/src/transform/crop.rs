//! Rectangular cropping on raw pixel buffers.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel of the stored grid
//! - rectangles are rounded outward to integer edges before copying
//! - the orientation tag is not interpreted; it is carried over unchanged
//!
//! # Example
//!
//! ```ignore
//! // Take the 50x50 region starting at (10, 20)
//! let cropped = crop(&bitmap, Rect::new(10.0, 20.0, 50.0, 50.0))?;
//! ```

use crate::bitmap::Bitmap;
use crate::geometry::Rect;
use crate::types::{Result, TransformError};

/// Copy a rectangular region out of a bitmap.
///
/// The rect is first made integral (origin rounded down, far edges rounded
/// up), then clamped to the bitmap bounds.
///
/// # Arguments
///
/// * `bitmap` - Source bitmap
/// * `rect` - Region in raw pixel coordinates
///
/// # Returns
///
/// A new `Bitmap` with the same pixel format and orientation tag.
///
/// # Errors
///
/// Returns `TransformError::EmptyCrop` if the rect doesn't overlap the bitmap.
pub fn crop(bitmap: &Bitmap, rect: Rect) -> Result<Bitmap> {
    let bounds = Rect::from_size(bitmap.size());
    let region = rect
        .integral()
        .intersect(&bounds)
        .ok_or(TransformError::EmptyCrop {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        })?;

    let px_left = region.x as usize;
    let px_top = region.y as usize;
    let out_width = region.width as u32;
    let out_height = region.height as u32;

    // Fast path: region covers the whole bitmap
    if out_width == bitmap.width() && out_height == bitmap.height() {
        return Ok(bitmap.clone());
    }

    let bpp = bitmap.bytes_per_pixel();
    let src_stride = bitmap.bytes_per_row();
    let dst_stride = out_width as usize * bpp;
    let mut output = Vec::with_capacity(dst_stride * out_height as usize);

    // Copy pixel data row by row
    for y in 0..out_height as usize {
        let start = (px_top + y) * src_stride + px_left * bpp;
        output.extend_from_slice(&bitmap.pixels()[start..start + dst_stride]);
    }

    Bitmap::with_orientation(
        out_width,
        out_height,
        bitmap.format(),
        bitmap.orientation(),
        output,
    )
}

/// Crop the largest centered square.
///
/// The side is `min(width, height)`; the origin is
/// `((width - side) / 2, (height - side) / 2)` rounded down, so the output
/// is always exactly square.
pub fn center_square_crop(bitmap: &Bitmap) -> Result<Bitmap> {
    let side = bitmap.width().min(bitmap.height());
    let x = (bitmap.width() - side) / 2;
    let y = (bitmap.height() - side) / 2;
    crop(
        bitmap,
        Rect::new(x as f64, y as f64, side as f64, side as f64),
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
