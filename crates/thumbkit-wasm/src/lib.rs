//! Thumbkit WASM - WebAssembly bindings for Thumbkit
//!
//! This crate provides WASM bindings to expose the thumbkit-core bitmap
//! transforms to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - `JsBitmap`, the JavaScript-facing bitmap wrapper
//! - `transform` - Alpha normalization, cropping and resizing
//! - `mask` - Transparent borders and rounded corners
//! - `thumbnail` - Square thumbnail generation
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsBitmap, generate_thumbnail } from '@thumbkit/wasm';
//!
//! await init();
//!
//! const { width, height, data } = ctx.getImageData(0, 0, w, h);
//! const bitmap = new JsBitmap(width, height, 2, 1, data);
//! const thumb = generate_thumbnail(bitmap, { size: 96, border: 2, cornerRadius: 8 });
//! ```

use wasm_bindgen::prelude::*;

mod mask;
mod thumbnail;
mod transform;
mod types;

// Re-export public types
pub use mask::{add_transparent_border, round_corners};
pub use thumbnail::generate_thumbnail;
pub use transform::{center_square_crop, crop, ensure_alpha, has_alpha, resize, resize_with_mode};
pub use types::JsBitmap;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
