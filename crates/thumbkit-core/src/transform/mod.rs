//! Geometric transforms: alpha normalization, cropping and resizing.
//!
//! Every function takes a bitmap by reference and returns a new one; the
//! only shared state is the surface each call allocates for itself and drops
//! before returning.

mod alpha;
mod crop;
mod resize;

pub use alpha::{ensure_alpha, has_alpha};
pub use crop::{center_square_crop, crop};
pub use resize::{resize, resize_with_mode, scaled_size};
