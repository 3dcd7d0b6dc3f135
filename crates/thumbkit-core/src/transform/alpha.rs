//! Alpha-channel normalization.

use std::borrow::Cow;

use crate::bitmap::Bitmap;
use crate::geometry::Rect;
use crate::surface::{DrawCommand, Surface};
use crate::types::Result;

/// Returns true if the bitmap carries an alpha channel.
pub fn has_alpha(bitmap: &Bitmap) -> bool {
    bitmap.has_alpha()
}

/// Return a bitmap that is guaranteed to carry an alpha channel.
///
/// A bitmap that already has alpha is returned as-is, borrowed, without
/// touching a surface. Otherwise it is redrawn once at its native size onto
/// a premultiplied RGBA surface. The orientation tag is kept, since the
/// pixels are still the raw ones.
///
/// # Errors
///
/// Returns `TransformError::SurfaceAllocation` if the surface can't be
/// created.
pub fn ensure_alpha(bitmap: &Bitmap) -> Result<Cow<'_, Bitmap>> {
    if bitmap.has_alpha() {
        return Ok(Cow::Borrowed(bitmap));
    }

    let mut surface = Surface::allocate(bitmap.width(), bitmap.height())?;
    surface.draw(bitmap, &DrawCommand::at(Rect::from_size(bitmap.size())))?;
    let out = surface.into_bitmap()?.reoriented(bitmap.orientation());

    Ok(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PixelFormat;
    use crate::types::Orientation;

    fn rgb_gradient(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 20) as u8);
                pixels.push((y * 20) as u8);
                pixels.push(128);
            }
        }
        Bitmap::new(width, height, PixelFormat::Rgb8, pixels).unwrap()
    }

    #[test]
    fn test_rgb_gains_alpha() {
        let img = rgb_gradient(8, 5);
        let out = ensure_alpha(&img).unwrap();

        assert!(out.has_alpha());
        assert_eq!(out.format(), PixelFormat::PremultipliedRgba8);
        assert_eq!((out.width(), out.height()), (8, 5));
    }

    #[test]
    fn test_pixels_preserved() {
        let img = rgb_gradient(8, 5);
        let out = ensure_alpha(&img).unwrap();

        for y in 0..5 {
            for x in 0..8 {
                assert_eq!(out.pixel_rgba(x, y), img.pixel_rgba(x, y), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_alpha_input_is_borrowed() {
        let img = Bitmap::new(2, 2, PixelFormat::Rgba8, vec![9u8; 16]).unwrap();
        let out = ensure_alpha(&img).unwrap();

        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(*out, img);
    }

    #[test]
    fn test_idempotent() {
        let img = rgb_gradient(6, 6);
        let once = ensure_alpha(&img).unwrap().into_owned();
        let twice = ensure_alpha(&once).unwrap();

        assert!(matches!(twice, Cow::Borrowed(_)));
        assert_eq!(*twice, once);
    }

    #[test]
    fn test_gray_gains_alpha() {
        let img = Bitmap::new(3, 1, PixelFormat::Gray8, vec![0, 128, 255]).unwrap();
        let out = ensure_alpha(&img).unwrap();

        assert!(has_alpha(&out));
        assert_eq!(out.pixel_rgba(1, 0), Some([128, 128, 128, 255]));
    }

    #[test]
    fn test_orientation_kept() {
        let img = rgb_gradient(4, 2).reoriented(Orientation::Rotate90CW);
        let out = ensure_alpha(&img).unwrap();
        assert_eq!(out.orientation(), Orientation::Rotate90CW);
    }
}
