//! WASM bindings for border and rounded-corner masking.

use crate::types::JsBitmap;
use thumbkit_core::{add_transparent_border as core_border, round_corners as core_round_corners};
use wasm_bindgen::prelude::*;

/// Pad the bitmap with a transparent margin of `border` pixels on every side.
///
/// The result always has an alpha channel and measures
/// `(width + 2 * border) x (height + 2 * border)`.
#[wasm_bindgen]
pub fn add_transparent_border(image: &JsBitmap, border: u32) -> Result<JsBitmap, JsValue> {
    core_border(image.as_core(), border)
        .map(JsBitmap::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Clip the bitmap to a rounded rectangle inset by `border` pixels.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // 8px corners inside a 2px transparent margin
/// const rounded = round_corners(bordered, 8, 2);
/// ```
#[wasm_bindgen]
pub fn round_corners(
    image: &JsBitmap,
    corner_radius: f64,
    border: u32,
) -> Result<JsBitmap, JsValue> {
    core_round_corners(image.as_core(), corner_radius, border)
        .map(JsBitmap::from_core)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
