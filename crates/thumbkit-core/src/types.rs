//! Core value types shared by every transform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Error types for bitmap transform operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// The drawing backend could not create a surface of the requested size.
    #[error("Failed to allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },

    /// Only fill and fit are valid for resize-with-mode.
    #[error("Unsupported content mode: {0:?}")]
    UnsupportedContentMode(ContentMode),

    /// Width or height is zero, negative or not finite.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    /// Pixel data length doesn't match the dimensions and format.
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The crop rectangle does not overlap the bitmap at all.
    #[error("Crop rectangle ({x}, {y}, {width}x{height}) lies outside the bitmap")]
    EmptyCrop {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// EXIF orientation values (1-8).
///
/// Describes how the stored pixel rows must be reinterpreted before the
/// bitmap is considered upright.
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Upright (identity).
    #[default]
    Normal = 1,
    /// Mirrored about the vertical axis.
    FlipHorizontal = 2,
    /// Rotated 180 degrees.
    Rotate180 = 3,
    /// Mirrored about the horizontal axis.
    FlipVertical = 4,
    /// Mirrored about the main diagonal.
    Transpose = 5,
    /// Needs a 90 degree clockwise turn to display.
    Rotate90CW = 6,
    /// Mirrored about the anti-diagonal.
    Transverse = 7,
    /// Needs a 90 degree counter-clockwise turn to display.
    Rotate270CW = 8,
}

impl Orientation {
    /// All eight orientations in EXIF order.
    pub const ALL: [Orientation; 8] = [
        Orientation::Normal,
        Orientation::FlipHorizontal,
        Orientation::Rotate180,
        Orientation::FlipVertical,
        Orientation::Transpose,
        Orientation::Rotate90CW,
        Orientation::Transverse,
        Orientation::Rotate270CW,
    ];

    /// Returns true if this orientation swaps width and height dimensions.
    ///
    /// Rotations of 90° and 270° (and their flip variants Transpose/Transverse)
    /// swap the image dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }

    /// Returns true for the four mirrored variants.
    #[inline]
    pub fn is_mirrored(self) -> bool {
        matches!(
            self,
            Orientation::FlipHorizontal
                | Orientation::FlipVertical
                | Orientation::Transpose
                | Orientation::Transverse
        )
    }

    /// The EXIF tag value.
    pub fn exif_value(self) -> u32 {
        self as u32
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Sampling quality used when a draw scales or rotates its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpolationQuality {
    /// Nearest neighbor, no smoothing.
    None,
    /// Bilinear.
    Low,
    /// Bilinear.
    #[default]
    Medium,
    /// Bicubic.
    High,
}

impl InterpolationQuality {
    /// Convert to the rasterizer's filter.
    pub fn to_filter_quality(self) -> tiny_skia::FilterQuality {
        match self {
            InterpolationQuality::None => tiny_skia::FilterQuality::Nearest,
            InterpolationQuality::Low | InterpolationQuality::Medium => {
                tiny_skia::FilterQuality::Bilinear
            }
            InterpolationQuality::High => tiny_skia::FilterQuality::Bicubic,
        }
    }
}

/// Aspect-ratio policy for fitting a bitmap into bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    /// Scale by the larger axis ratio; the result covers the bounds.
    Fill,
    /// Scale by the smaller axis ratio; the result fits inside the bounds.
    Fit,
    /// Scale each axis independently to the bounds.
    Stretch,
    /// Keep the native size, centered.
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_orientation_exif_round_trip() {
        for orientation in Orientation::ALL {
            assert_eq!(Orientation::from(orientation.exif_value()), orientation);
        }
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::FlipHorizontal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::FlipVertical.swaps_dimensions());

        assert!(Orientation::Transpose.swaps_dimensions());
        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Transverse.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_orientation_mirrored() {
        let mirrored: Vec<_> = Orientation::ALL
            .into_iter()
            .filter(|o| o.is_mirrored())
            .collect();
        assert_eq!(
            mirrored,
            vec![
                Orientation::FlipHorizontal,
                Orientation::FlipVertical,
                Orientation::Transpose,
                Orientation::Transverse,
            ]
        );
    }

    #[test]
    fn test_quality_conversion() {
        assert!(matches!(
            InterpolationQuality::None.to_filter_quality(),
            tiny_skia::FilterQuality::Nearest
        ));
        assert!(matches!(
            InterpolationQuality::Medium.to_filter_quality(),
            tiny_skia::FilterQuality::Bilinear
        ));
        assert!(matches!(
            InterpolationQuality::High.to_filter_quality(),
            tiny_skia::FilterQuality::Bicubic
        ));
    }

    #[test]
    fn test_error_display() {
        let err = TransformError::SurfaceAllocation {
            width: 0,
            height: 10,
        };
        assert_eq!(err.to_string(), "Failed to allocate a 0x10 drawing surface");

        let err = TransformError::UnsupportedContentMode(ContentMode::Center);
        assert_eq!(err.to_string(), "Unsupported content mode: Center");
    }
}
