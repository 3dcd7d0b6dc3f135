//! Masking transforms: transparent borders and rounded corners.
//!
//! ## Mask Types
//!
//! - **Border mask**: a luminance bitmap, black on an outer ring and white
//!   inside, combined with the padded canvas
//! - **Rounded clip**: a vector path used as the clip of a single draw
//!
//! Both leave the bitmap's orientation tag untouched: the geometry is the
//! same on every side, so it commutes with any of the eight orientations.

pub mod border;
pub mod corner;

pub use border::{add_transparent_border, border_mask};
pub use corner::{round_corners, rounded_rect_path};

/// Mask level that clears a pixel.
pub const MASK_CLEAR: u8 = 0;

/// Mask level that keeps a pixel unchanged.
pub const MASK_OPAQUE: u8 = 255;
