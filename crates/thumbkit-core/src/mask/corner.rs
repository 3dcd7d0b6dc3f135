//! Rounded-corner clipping.
//!
//! The clip path is a rectangle whose corners are replaced by quarter
//! circles. It is laid out in a unit space where the corner radius is 1,
//! then scaled by the radius and moved onto the rect.

use tiny_skia::{Path, PathBuilder, Transform};

use crate::bitmap::Bitmap;
use crate::geometry::Rect;
use crate::surface::{DrawCommand, Surface};
use crate::transform::ensure_alpha;
use crate::types::Result;

/// Control-point distance for a cubic approximating a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Build a closed rounded-rectangle path.
///
/// A radius of zero (or less) yields the plain rectangle. The radius is
/// clamped to half the shorter side. Returns `None` for an empty rect.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> Option<Path> {
    if rect.is_empty() {
        return None;
    }
    if radius <= 0.0 {
        return Some(PathBuilder::from_rect(rect.to_skia()?));
    }

    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0);
    let fw = (rect.width / r) as f32;
    let fh = (rect.height / r) as f32;

    let mut pb = PathBuilder::new();
    pb.move_to(fw, fh / 2.0);
    quarter_arc(&mut pb, (fw, fh - 1.0), (fw, fh), (fw - 1.0, fh));
    quarter_arc(&mut pb, (1.0, fh), (0.0, fh), (0.0, fh - 1.0));
    quarter_arc(&mut pb, (0.0, 1.0), (0.0, 0.0), (1.0, 0.0));
    quarter_arc(&mut pb, (fw - 1.0, 0.0), (fw, 0.0), (fw, 1.0));
    pb.close();

    let unit = pb.finish()?;
    unit.transform(Transform::from_row(
        r as f32,
        0.0,
        0.0,
        r as f32,
        rect.x as f32,
        rect.y as f32,
    ))
}

/// Line to `start`, then a quarter arc around `corner` ending at `end`.
fn quarter_arc(pb: &mut PathBuilder, start: (f32, f32), corner: (f32, f32), end: (f32, f32)) {
    let toward = |from: (f32, f32)| {
        (
            from.0 + (corner.0 - from.0) * KAPPA,
            from.1 + (corner.1 - from.1) * KAPPA,
        )
    };
    let c1 = toward(start);
    let c2 = toward(end);

    pb.line_to(start.0, start.1);
    pb.cubic_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
}

/// Clip a bitmap to a rounded rectangle.
///
/// The clip covers the bitmap inset by `border` on every side, with corners
/// of `corner_radius`. Pixels outside the clip become transparent. The
/// bitmap gains an alpha channel if it has none.
///
/// # Arguments
/// * `bitmap` - Source bitmap
/// * `corner_radius` - Radius of each corner arc; 0 keeps square corners
/// * `border` - Transparent margin left outside the clip
pub fn round_corners(bitmap: &Bitmap, corner_radius: f64, border: u32) -> Result<Bitmap> {
    let image = ensure_alpha(bitmap)?;
    let bounds = Rect::from_size(image.size());

    let mut surface = Surface::allocate(image.width(), image.height())?;
    if let Some(clip) = rounded_rect_path(bounds.inset(border as f64), corner_radius) {
        surface.draw(&image, &DrawCommand::at(bounds).with_clip(&clip))?;
    }

    Ok(surface.into_bitmap()?.reoriented(bitmap.orientation()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::PixelFormat;
    use crate::types::Orientation;

    fn gradient(width: u32, height: u32) -> Bitmap {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 7 % 256) as u8);
                pixels.push((y * 11 % 256) as u8);
                pixels.push(90);
            }
        }
        Bitmap::new(width, height, PixelFormat::Rgb8, pixels).unwrap()
    }

    fn alpha_at(bitmap: &Bitmap, x: u32, y: u32) -> u8 {
        bitmap.pixel_rgba(x, y).unwrap()[3]
    }

    #[test]
    fn test_path_bounds_match_rect() {
        let rect = Rect::new(2.0, 3.0, 40.0, 20.0);
        let path = rounded_rect_path(rect, 5.0).unwrap();
        let b = path.bounds();

        assert!((b.left() - 2.0).abs() < 1e-3);
        assert!((b.top() - 3.0).abs() < 1e-3);
        assert!((b.right() - 42.0).abs() < 1e-3);
        assert!((b.bottom() - 23.0).abs() < 1e-3);
    }

    fn curve_count(path: &Path) -> usize {
        path.segments()
            .filter(|s| matches!(s, tiny_skia::PathSegment::CubicTo(..)))
            .count()
    }

    #[test]
    fn test_zero_radius_is_rectangle() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let path = rounded_rect_path(rect, 0.0).unwrap();
        assert_eq!(curve_count(&path), 0);
    }

    #[test]
    fn test_rounded_path_has_four_arcs() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let path = rounded_rect_path(rect, 3.0).unwrap();
        assert_eq!(curve_count(&path), 4);
    }

    #[test]
    fn test_empty_rect_has_no_path() {
        assert!(rounded_rect_path(Rect::new(0.0, 0.0, 0.0, 10.0), 3.0).is_none());
        assert!(rounded_rect_path(Rect::new(5.0, 5.0, -2.0, -2.0), 0.0).is_none());
    }

    #[test]
    fn test_corners_become_transparent() {
        let img = gradient(40, 30);
        let out = round_corners(&img, 10.0, 0).unwrap();

        for (x, y) in [(0, 0), (39, 0), (0, 29), (39, 29)] {
            assert_eq!(alpha_at(&out, x, y), 0, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn test_edges_and_center_stay_opaque() {
        let img = gradient(40, 30);
        let out = round_corners(&img, 10.0, 0).unwrap();

        assert_eq!(out.pixel_rgba(20, 15), img.pixel_rgba(20, 15));
        assert_eq!(alpha_at(&out, 20, 0), 255);
        assert_eq!(alpha_at(&out, 0, 15), 255);
        assert_eq!(alpha_at(&out, 39, 15), 255);
    }

    #[test]
    fn test_border_clips_margin() {
        let img = gradient(20, 20);
        let out = round_corners(&img, 0.0, 2).unwrap();

        assert_eq!(alpha_at(&out, 1, 10), 0);
        assert_eq!(alpha_at(&out, 10, 18), 0);
        assert_eq!(out.pixel_rgba(2, 2), img.pixel_rgba(2, 2));
        assert_eq!(out.pixel_rgba(17, 17), img.pixel_rgba(17, 17));
    }

    #[test]
    fn test_degenerate_matches_alpha_normalized() {
        let img = gradient(16, 9);
        let rounded = round_corners(&img, 0.0, 0).unwrap();
        let alpha = ensure_alpha(&img).unwrap();

        assert_eq!(rounded.format(), alpha.format());
        assert_eq!(rounded.size(), alpha.size());
        for (a, b) in rounded.pixels().iter().zip(alpha.pixels()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_oversized_radius_is_clamped() {
        let img = gradient(20, 10);
        let out = round_corners(&img, 500.0, 0).unwrap();

        // Clamped to a 5px radius: a stadium shape
        assert_eq!(alpha_at(&out, 0, 0), 0);
        assert_eq!(alpha_at(&out, 10, 5), 255);
    }

    #[test]
    fn test_border_wider_than_bitmap_clears_everything() {
        let img = gradient(6, 6);
        let out = round_corners(&img, 1.0, 4).unwrap();
        assert!(out.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_orientation_kept() {
        let img = gradient(8, 8).reoriented(Orientation::Transverse);
        let out = round_corners(&img, 2.0, 0).unwrap();
        assert_eq!(out.orientation(), Orientation::Transverse);
    }
}
