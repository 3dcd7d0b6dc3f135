//! WASM-compatible wrapper types for bitmaps.
//!
//! This module provides JavaScript-friendly types that wrap the core thumbkit
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use thumbkit_core::{Bitmap, InterpolationQuality, Orientation, PixelFormat};
use wasm_bindgen::prelude::*;

/// A bitmap wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`.
///
/// # Format codes
///
/// - 0 = Gray8
/// - 1 = Rgb8
/// - 2 = Rgba8 (straight alpha)
/// - 3 = PremultipliedRgba8
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Create a bitmap from dimensions, a format code and pixel data.
    ///
    /// `orientation` is the EXIF orientation value (1-8); anything else is
    /// treated as upright.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: u32,
        height: u32,
        format: u8,
        orientation: u32,
        pixels: Vec<u8>,
    ) -> Result<JsBitmap, JsValue> {
        Bitmap::with_orientation(
            width,
            height,
            format_from_u8(format),
            Orientation::from(orientation),
            pixels,
        )
        .map(JsBitmap::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Format code (see type docs)
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> u8 {
        format_to_u8(self.inner.format())
    }

    /// EXIF orientation value (1-8)
    #[wasm_bindgen(getter)]
    pub fn orientation(&self) -> u32 {
        self.inner.orientation().exif_value()
    }

    #[wasm_bindgen(getter, js_name = hasAlpha)]
    pub fn has_alpha(&self) -> bool {
        self.inner.has_alpha()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns the pixel data as a `Uint8Array` in the bitmap's own format.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns straight-alpha RGBA pixels, ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.inner.to_rgba_image().into_raw()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsBitmap {
    pub(crate) fn from_core(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn as_core(&self) -> &Bitmap {
        &self.inner
    }
}

/// Convert a u8 format code to the core `PixelFormat`.
///
/// Unknown values are treated as straight RGBA.
pub(crate) fn format_from_u8(value: u8) -> PixelFormat {
    match value {
        0 => PixelFormat::Gray8,
        1 => PixelFormat::Rgb8,
        3 => PixelFormat::PremultipliedRgba8,
        _ => PixelFormat::Rgba8,
    }
}

pub(crate) fn format_to_u8(format: PixelFormat) -> u8 {
    match format {
        PixelFormat::Gray8 => 0,
        PixelFormat::Rgb8 => 1,
        PixelFormat::Rgba8 => 2,
        PixelFormat::PremultipliedRgba8 => 3,
    }
}

/// Convert a u8 quality value to the core `InterpolationQuality`.
///
/// Values:
/// - 0 = None (nearest neighbor)
/// - 1 = Low
/// - 2 = Medium
/// - 3 = High
///
/// Any other value defaults to Medium.
pub(crate) fn quality_from_u8(value: u8) -> InterpolationQuality {
    match value {
        0 => InterpolationQuality::None,
        1 => InterpolationQuality::Low,
        3 => InterpolationQuality::High,
        _ => InterpolationQuality::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core_bitmap(width: u32, height: u32) -> Bitmap {
        Bitmap::new(
            width,
            height,
            PixelFormat::Rgb8,
            vec![0u8; (width * height * 3) as usize],
        )
        .unwrap()
    }

    #[test]
    fn test_js_bitmap_accessors() {
        let img = JsBitmap::from_core(core_bitmap(100, 50));
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.format(), 1);
        assert_eq!(img.orientation(), 1);
        assert!(!img.has_alpha());
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_bitmap_rgba_pixels() {
        let bitmap = Bitmap::new(1, 1, PixelFormat::Rgb8, vec![9, 8, 7]).unwrap();
        let img = JsBitmap::from_core(bitmap);
        assert_eq!(img.rgba_pixels(), vec![9, 8, 7, 255]);
        assert_eq!(img.pixels(), vec![9, 8, 7]);
    }

    #[test]
    fn test_format_codes_round_trip() {
        for format in [
            PixelFormat::Gray8,
            PixelFormat::Rgb8,
            PixelFormat::Rgba8,
            PixelFormat::PremultipliedRgba8,
        ] {
            assert_eq!(format_from_u8(format_to_u8(format)), format);
        }
        assert_eq!(format_from_u8(200), PixelFormat::Rgba8);
    }

    #[test]
    fn test_quality_from_u8() {
        assert_eq!(quality_from_u8(0), InterpolationQuality::None);
        assert_eq!(quality_from_u8(1), InterpolationQuality::Low);
        assert_eq!(quality_from_u8(2), InterpolationQuality::Medium);
        assert_eq!(quality_from_u8(3), InterpolationQuality::High);
        // Unknown values default to Medium
        assert_eq!(quality_from_u8(255), InterpolationQuality::Medium);
    }
}
