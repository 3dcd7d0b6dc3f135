//! Orientation-aware resizing.
//!
//! The source is redrawn onto a fresh surface under the affine matrix for its
//! orientation tag, so the output is always upright and tagged
//! `Orientation::Normal`.
//!
//! # Algorithm
//!
//! 1. Bitmaps whose orientation swaps axes are drawn into the transposed
//!    rect `(0, 0, H, W)`; all others into `(0, 0, W, H)`.
//! 2. The orientation matrix (see [`Affine::for_orientation`]) maps that rect
//!    onto the upright target.
//! 3. The surface is sized to the target rounded up to whole pixels.

use crate::bitmap::Bitmap;
use crate::geometry::{Affine, Rect, Size};
use crate::surface::{DrawCommand, Surface};
use crate::types::{ContentMode, InterpolationQuality, Result, TransformError};

/// Resize to an exact upright size, applying the orientation tag.
///
/// The target is not required to preserve the aspect ratio. A fractional
/// target is rounded up to whole pixels.
///
/// # Arguments
///
/// * `bitmap` - Source bitmap (raw pixels plus orientation tag)
/// * `target` - Upright output size
/// * `quality` - Sampling quality used while scaling
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` for a zero, negative or
/// non-finite target, and `TransformError::SurfaceAllocation` if the
/// surface can't be created.
pub fn resize(bitmap: &Bitmap, target: Size, quality: InterpolationQuality) -> Result<Bitmap> {
    if !target.is_valid() {
        return Err(TransformError::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }

    let orientation = bitmap.orientation();
    let transpose = orientation.swaps_dimensions();
    let transform = Affine::for_orientation(orientation, target);

    let new_rect = Rect::from_size(target).integral();
    let draw_rect = if transpose {
        Rect::from_size(new_rect.size().transposed())
    } else {
        new_rect
    };

    tracing::debug!(
        ?orientation,
        width = new_rect.width,
        height = new_rect.height,
        transpose,
        "resizing bitmap"
    );

    let mut surface = Surface::allocate(
        to_pixels(new_rect.width, target)?,
        to_pixels(new_rect.height, target)?,
    )?;
    surface.draw(
        bitmap,
        &DrawCommand::at(draw_rect)
            .with_transform(transform)
            .with_quality(quality),
    )?;
    surface.into_bitmap()
}

/// Resize into `bounds` under an aspect-ratio policy.
///
/// `Fill` scales by the larger of the two axis ratios (the result covers the
/// bounds, overflowing on one axis); `Fit` by the smaller (the result fits
/// inside). Ratios are computed against the upright size.
///
/// # Errors
///
/// Returns `TransformError::UnsupportedContentMode` for any other mode.
pub fn resize_with_mode(
    bitmap: &Bitmap,
    mode: ContentMode,
    bounds: Size,
    quality: InterpolationQuality,
) -> Result<Bitmap> {
    let new_size = scaled_size(bitmap.display_size(), mode, bounds)?;
    resize(bitmap, new_size, quality)
}

/// Size of `source` scaled into `bounds` under `mode`.
///
/// # Errors
///
/// Returns `TransformError::UnsupportedContentMode` unless `mode` is `Fill`
/// or `Fit`, and `TransformError::InvalidDimensions` for invalid sizes.
pub fn scaled_size(source: Size, mode: ContentMode, bounds: Size) -> Result<Size> {
    let horizontal = bounds.width / source.width;
    let vertical = bounds.height / source.height;

    let ratio = match mode {
        ContentMode::Fill => horizontal.max(vertical),
        ContentMode::Fit => horizontal.min(vertical),
        other => return Err(TransformError::UnsupportedContentMode(other)),
    };

    if !source.is_valid() || !bounds.is_valid() {
        return Err(TransformError::InvalidDimensions {
            width: bounds.width,
            height: bounds.height,
        });
    }

    tracing::trace!(?mode, ratio, "content mode ratio");
    Ok(source.scale(ratio))
}

fn to_pixels(v: f64, target: Size) -> Result<u32> {
    if v < 1.0 || v > u32::MAX as f64 {
        return Err(TransformError::InvalidDimensions {
            width: target.width,
            height: target.height,
        });
    }
    Ok(v as u32)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
