//! WASM bindings for bitmap transformation operations.
//!
//! This module exposes alpha normalization, cropping and resizing to
//! JavaScript. Every function returns a new `JsBitmap`; the source is never
//! modified.

use crate::types::{quality_from_u8, JsBitmap};
use thumbkit_core::{
    center_square_crop as core_square_crop, crop as core_crop, ensure_alpha as core_ensure_alpha,
    resize as core_resize, resize_with_mode as core_resize_with_mode, ContentMode, Rect, Size,
};
use wasm_bindgen::prelude::*;

fn to_js_error(e: thumbkit_core::TransformError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Whether the bitmap carries an alpha channel.
#[wasm_bindgen]
pub fn has_alpha(image: &JsBitmap) -> bool {
    image.as_core().has_alpha()
}

/// Return a copy of the bitmap with an alpha channel.
///
/// Bitmaps that already have alpha come back unchanged.
#[wasm_bindgen]
pub fn ensure_alpha(image: &JsBitmap) -> Result<JsBitmap, JsValue> {
    core_ensure_alpha(image.as_core())
        .map(|bitmap| JsBitmap::from_core(bitmap.into_owned()))
        .map_err(to_js_error)
}

/// Crop a region of the bitmap in pixel coordinates.
///
/// Fractional edges are rounded outward and the region is clamped to the
/// bitmap. Throws if the region does not overlap the bitmap.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const region = crop(bitmap, 10, 10, 64, 48);
/// ```
#[wasm_bindgen]
pub fn crop(
    image: &JsBitmap,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
) -> Result<JsBitmap, JsValue> {
    core_crop(image.as_core(), Rect::new(x, y, width, height))
        .map(JsBitmap::from_core)
        .map_err(to_js_error)
}

/// Crop the largest centered square.
#[wasm_bindgen]
pub fn center_square_crop(image: &JsBitmap) -> Result<JsBitmap, JsValue> {
    core_square_crop(image.as_core())
        .map(JsBitmap::from_core)
        .map_err(to_js_error)
}

/// Resize to exact dimensions, applying the bitmap's orientation.
///
/// # Arguments
///
/// * `image` - Source bitmap
/// * `width` - Target width in pixels (rounded up)
/// * `height` - Target height in pixels (rounded up)
/// * `quality` - 0 = nearest, 1 = low, 2 = medium, 3 = high
#[wasm_bindgen]
pub fn resize(image: &JsBitmap, width: f64, height: f64, quality: u8) -> Result<JsBitmap, JsValue> {
    core_resize(
        image.as_core(),
        Size::new(width, height),
        quality_from_u8(quality),
    )
    .map(JsBitmap::from_core)
    .map_err(to_js_error)
}

/// Resize to fill or fit the given bounds, keeping the aspect ratio.
///
/// # Arguments
///
/// * `fill` - `true` to cover the bounds, `false` to fit inside them
#[wasm_bindgen]
pub fn resize_with_mode(
    image: &JsBitmap,
    fill: bool,
    width: f64,
    height: f64,
    quality: u8,
) -> Result<JsBitmap, JsValue> {
    let mode = if fill {
        ContentMode::Fill
    } else {
        ContentMode::Fit
    };
    core_resize_with_mode(
        image.as_core(),
        mode,
        Size::new(width, height),
        quality_from_u8(quality),
    )
    .map(JsBitmap::from_core)
    .map_err(to_js_error)
}
