//! WASM binding for thumbnail generation.

use crate::types::JsBitmap;
use thumbkit_core::{thumbnail as core_thumbnail, ThumbnailOptions};
use wasm_bindgen::prelude::*;

/// Generate a square thumbnail.
///
/// `options` is a plain object; every field is optional:
///
/// ```typescript
/// const thumb = generate_thumbnail(bitmap, {
///   size: 100,          // side in pixels, border excluded (default 128)
///   border: 2,          // transparent margin (default 0)
///   cornerRadius: 8,    // rounded corners (default 0)
///   quality: 'high',    // 'none' | 'low' | 'medium' | 'high'
/// });
/// ```
///
/// Passing `undefined` uses the defaults.
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsBitmap, options: JsValue) -> Result<JsBitmap, JsValue> {
    let options: ThumbnailOptions = if options.is_undefined() || options.is_null() {
        ThumbnailOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid thumbnail options: {}", e)))?
    };
    generate_thumbnail_with(image, &options)
}

/// Generate a thumbnail from already-parsed options.
pub(crate) fn generate_thumbnail_with(
    image: &JsBitmap,
    options: &ThumbnailOptions,
) -> Result<JsBitmap, JsValue> {
    core_thumbnail(image.as_core(), options)
        .map(JsBitmap::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
