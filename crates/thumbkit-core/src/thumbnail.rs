//! Square thumbnails with optional transparent border and rounded corners.

use serde::{Deserialize, Serialize};

use crate::bitmap::Bitmap;
use crate::geometry::{Rect, Size};
use crate::mask::{add_transparent_border, round_corners};
use crate::transform::{crop, resize_with_mode};
use crate::types::{ContentMode, InterpolationQuality, Result, TransformError};

/// Settings for [`thumbnail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThumbnailOptions {
    /// Side of the square thumbnail, border excluded.
    pub size: u32,
    /// Transparent margin added on every side.
    pub border: u32,
    /// Radius of the rounded corners; 0 keeps them square.
    pub corner_radius: f64,
    pub quality: InterpolationQuality,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            size: 128,
            border: 0,
            corner_radius: 0.0,
            quality: InterpolationQuality::default(),
        }
    }
}

impl ThumbnailOptions {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_quality(mut self, quality: InterpolationQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Side of the finished thumbnail, border included.
    pub fn output_side(&self) -> u32 {
        self.size + 2 * self.border
    }
}

/// Generate a square thumbnail.
///
/// The bitmap is scaled to cover a `size`×`size` square (honoring its
/// orientation), the centered square is cropped out, a transparent border is
/// added when `border > 0`, and finally the corners are rounded inside that
/// border. A border of at least one pixel also gives the edges a clean
/// transparent fringe when the thumbnail is later rotated.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` for a zero `size`, plus any
/// error of the underlying transforms.
pub fn thumbnail(bitmap: &Bitmap, options: &ThumbnailOptions) -> Result<Bitmap> {
    if options.size == 0 {
        return Err(TransformError::InvalidDimensions {
            width: 0.0,
            height: 0.0,
        });
    }

    tracing::debug!(
        size = options.size,
        border = options.border,
        corner_radius = options.corner_radius,
        "generating thumbnail"
    );

    let side = options.size as f64;
    let resized = resize_with_mode(
        bitmap,
        ContentMode::Fill,
        Size::square(side),
        options.quality,
    )?;

    // Whole-pixel origin so the crop keeps exactly `size` pixels.
    let crop_rect = Rect::new(
        ((resized.width() as f64 - side) / 2.0).round(),
        ((resized.height() as f64 - side) / 2.0).round(),
        side,
        side,
    );
    let cropped = crop(&resized, crop_rect)?;

    let bordered = if options.border > 0 {
        add_transparent_border(&cropped, options.border)?
    } else {
        cropped
    };
    round_corners(&bordered, options.corner_radius, options.border)
}
