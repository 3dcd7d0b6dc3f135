//! Thumbkit Core - bitmap transform library
//!
//! This crate provides small, self-contained bitmap transforms: alpha
//! normalization, cropping, orientation-aware resizing, transparent borders,
//! rounded corners, and a thumbnail routine chaining them.
//!
//! Each transform allocates its own offscreen surface, draws once, and
//! returns a new [`Bitmap`]. Nothing is cached and no state survives a call,
//! so transforms can run concurrently on any number of bitmaps.
//!
//! # Example
//!
//! ```ignore
//! use thumbkit_core::{thumbnail, Bitmap, ThumbnailOptions};
//!
//! let bitmap = Bitmap::from_dynamic(image::open("photo.jpg")?)?;
//! let thumb = thumbnail(&bitmap, &ThumbnailOptions::new(100).with_border(2))?;
//! ```

pub mod bitmap;
pub mod geometry;
pub mod mask;
pub mod surface;
pub mod thumbnail;
pub mod transform;
pub mod types;

pub use bitmap::{Bitmap, ColorModel, PixelFormat};
pub use geometry::{Affine, Rect, Size};
pub use mask::{add_transparent_border, border_mask, round_corners, rounded_rect_path};
pub use thumbnail::{thumbnail, ThumbnailOptions};
pub use transform::{
    center_square_crop, crop, ensure_alpha, has_alpha, resize, resize_with_mode, scaled_size,
};
pub use types::{ContentMode, InterpolationQuality, Orientation, Result, TransformError};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bitmap {
        let pixels = (0..12 * 8 * 3).map(|i| (i % 251) as u8).collect();
        Bitmap::new(12, 8, PixelFormat::Rgb8, pixels).unwrap()
    }

    #[test]
    fn test_pipeline_chains() {
        let img = sample();
        let resized = resize(&img, Size::new(24.0, 16.0), InterpolationQuality::Medium).unwrap();
        let square = center_square_crop(&resized).unwrap();
        let bordered = add_transparent_border(&square, 1).unwrap();
        let rounded = round_corners(&bordered, 3.0, 1).unwrap();

        assert_eq!((rounded.width(), rounded.height()), (18, 18));
        assert!(has_alpha(&rounded));
    }

    #[test]
    fn test_inputs_are_untouched() {
        let img = sample();
        let before = img.clone();

        let _ = ensure_alpha(&img).unwrap();
        let _ = crop(&img, Rect::new(1.0, 1.0, 4.0, 4.0)).unwrap();
        let _ = resize(&img, Size::new(5.0, 5.0), InterpolationQuality::Low).unwrap();
        let _ = add_transparent_border(&img, 2).unwrap();
        let _ = round_corners(&img, 2.0, 0).unwrap();

        assert_eq!(img, before);
    }

    #[test]
    fn test_bitmap_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Bitmap>();
    }
}
