//! Transparent border padding.

use crate::bitmap::Bitmap;
use crate::geometry::{Rect, Size};
use crate::surface::{DrawCommand, Surface};
use crate::transform::ensure_alpha;
use crate::types::{Result, TransformError};

use super::{MASK_CLEAR, MASK_OPAQUE};

/// Build a luminance mask: black everywhere, white inside a rect inset by
/// `border` on every side.
///
/// # Arguments
/// * `size` - Mask size, border included
/// * `border` - Width of the transparent ring
pub fn border_mask(size: Size, border: f64) -> Result<Bitmap> {
    let rect = Rect::from_size(size).integral();
    if rect.is_empty() {
        return Err(TransformError::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }

    let mut surface = Surface::allocate(rect.width as u32, rect.height as u32)?;
    surface.fill_rect(rect, MASK_CLEAR);
    surface.fill_rect(rect.inset(border), MASK_OPAQUE);
    surface.into_gray_bitmap()
}

/// Add a transparent border of `border` pixels around a bitmap.
///
/// The bitmap gains an alpha channel if it has none, is drawn centered onto
/// a canvas `2 * border` larger on each axis, and the ring is cleared through
/// [`border_mask`]. With `border == 0` the size is unchanged.
///
/// # Example
/// ```ignore
/// let padded = add_transparent_border(&bitmap, 2)?;
/// assert_eq!(padded.width(), bitmap.width() + 4);
/// ```
pub fn add_transparent_border(bitmap: &Bitmap, border: u32) -> Result<Bitmap> {
    let image = ensure_alpha(bitmap)?;

    let width = image
        .width()
        .checked_add(border.saturating_mul(2))
        .ok_or(TransformError::SurfaceAllocation {
            width: u32::MAX,
            height: image.height(),
        })?;
    let height = image
        .height()
        .checked_add(border.saturating_mul(2))
        .ok_or(TransformError::SurfaceAllocation {
            width,
            height: u32::MAX,
        })?;

    let b = border as f64;
    let mut surface = Surface::allocate(width, height)?;
    surface.draw(
        &image,
        &DrawCommand::at(Rect::new(b, b, image.width() as f64, image.height() as f64)),
    )?;
    let padded = surface.into_bitmap()?;

    let mask = border_mask(padded.size(), b)?;
    let out = padded.masked(&mask)?;

    Ok(out.reoriented(bitmap.orientation()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PixelFormat;
    use crate::types::Orientation;

    fn solid(width: u32, height: u32) -> Bitmap {
        Bitmap::new(
            width,
            height,
            PixelFormat::Rgb8,
            [40u8, 80, 120].repeat((width * height) as usize),
        )
        .unwrap()
    }

    #[test]
    fn test_border_mask_layout() {
        let mask = border_mask(Size::new(5.0, 4.0), 1.0).unwrap();

        assert_eq!(mask.format(), PixelFormat::Gray8);
        #[rustfmt::skip]
        let expected = vec![
            0, 0,   0,   0,   0,
            0, 255, 255, 255, 0,
            0, 255, 255, 255, 0,
            0, 0,   0,   0,   0,
        ];
        assert_eq!(mask.pixels(), &expected[..]);
    }

    #[test]
    fn test_border_mask_zero_border_is_all_white() {
        let mask = border_mask(Size::new(3.0, 3.0), 0.0).unwrap();
        assert!(mask.pixels().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_border_adds_size() {
        let img = solid(10, 6);
        let out = add_transparent_border(&img, 3).unwrap();

        assert_eq!((out.width(), out.height()), (16, 12));
        assert!(out.has_alpha());
    }

    #[test]
    fn test_border_ring_is_transparent() {
        let img = solid(10, 6);
        let out = add_transparent_border(&img, 2).unwrap();

        assert_eq!(out.pixel_rgba(0, 0).unwrap()[3], 0);
        assert_eq!(out.pixel_rgba(1, 5).unwrap()[3], 0);
        assert_eq!(out.pixel_rgba(13, 9).unwrap()[3], 0);
    }

    #[test]
    fn test_border_interior_is_original() {
        let img = solid(10, 6);
        let out = add_transparent_border(&img, 2).unwrap();

        for y in 0..6 {
            for x in 0..10 {
                assert_eq!(out.pixel_rgba(x + 2, y + 2), img.pixel_rgba(x, y));
            }
        }
    }

    #[test]
    fn test_zero_border_keeps_size_and_pixels() {
        let img = solid(7, 7);
        let out = add_transparent_border(&img, 0).unwrap();

        assert_eq!((out.width(), out.height()), (7, 7));
        assert_eq!(out.format(), PixelFormat::PremultipliedRgba8);
        assert_eq!(out.pixel_rgba(0, 0), img.pixel_rgba(0, 0));
    }

    #[test]
    fn test_border_keeps_orientation() {
        let img = solid(4, 4).reoriented(Orientation::FlipVertical);
        let out = add_transparent_border(&img, 1).unwrap();
        assert_eq!(out.orientation(), Orientation::FlipVertical);
    }
}
