//! Immutable pixel buffers.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::types::{Orientation, Result, TransformError};

/// Byte layout of a bitmap's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PixelFormat {
    /// Single-channel luminance.
    Gray8,
    /// RGB, no alpha.
    Rgb8,
    /// RGBA with straight (non-premultiplied) alpha.
    Rgba8,
    /// RGBA with color channels premultiplied by alpha.
    PremultipliedRgba8,
}

/// Color model of a pixel format, independent of alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorModel {
    Gray,
    Rgb,
}

impl PixelFormat {
    /// Number of bytes per pixel.
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Gray8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 | PixelFormat::PremultipliedRgba8 => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Rgba8 | PixelFormat::PremultipliedRgba8)
    }

    pub fn color_model(self) -> ColorModel {
        match self {
            PixelFormat::Gray8 => ColorModel::Gray,
            _ => ColorModel::Rgb,
        }
    }
}

/// An immutable bitmap: dimensions, pixel layout, orientation tag and pixels.
///
/// Every transform in this crate returns a new `Bitmap`; none mutates its
/// input. Rows are tightly packed, so `bytes_per_row` is always
/// `width * bytes_per_pixel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    format: PixelFormat,
    orientation: Orientation,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap with `Orientation::Normal`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidDimensions` if either dimension is zero,
    /// or `TransformError::InvalidPixelData` if the buffer length doesn't match.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        Self::with_orientation(width, height, format, Orientation::Normal, pixels)
    }

    /// Create a bitmap carrying an orientation tag.
    pub fn with_orientation(
        width: u32,
        height: u32,
        format: PixelFormat,
        orientation: Orientation,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidDimensions {
                width: width as f64,
                height: height as f64,
            });
        }

        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if pixels.len() != expected {
            return Err(TransformError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            format,
            orientation,
            pixels,
        })
    }

    /// Same pixels, different orientation tag.
    pub fn reoriented(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Width of the stored pixel grid.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the stored pixel grid.
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn bits_per_component(&self) -> u32 {
        8
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    pub fn bytes_per_row(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    pub fn color_model(&self) -> ColorModel {
        self.format.color_model()
    }

    /// True if the pixels carry an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.format.has_alpha()
    }

    /// Size of the stored pixel grid.
    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    /// Size once the orientation tag has been applied.
    pub fn display_size(&self) -> Size {
        if self.orientation.swaps_dimensions() {
            Size::new(self.height as f64, self.width as f64)
        } else {
            self.size()
        }
    }

    /// Straight-alpha RGBA sample at a raw pixel coordinate.
    ///
    /// Returns `None` outside the pixel grid.
    pub fn pixel_rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.bytes_per_row() + x as usize * self.bytes_per_pixel();
        let p = &self.pixels[idx..idx + self.bytes_per_pixel()];
        Some(match self.format {
            PixelFormat::Gray8 => [p[0], p[0], p[0], 255],
            PixelFormat::Rgb8 => [p[0], p[1], p[2], 255],
            PixelFormat::Rgba8 => [p[0], p[1], p[2], p[3]],
            PixelFormat::PremultipliedRgba8 => unpremultiply([p[0], p[1], p[2], p[3]]),
        })
    }

    /// Convert to an `image::RgbaImage` with straight alpha.
    ///
    /// The orientation tag is not applied.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                // Coordinates are always in range here.
                out.extend_from_slice(&self.pixel_rgba(x, y).unwrap_or([0; 4]));
            }
        }
        RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    /// Pixel data as premultiplied RGBA, whatever the stored format.
    pub(crate) fn premultiplied_rgba(&self) -> Vec<u8> {
        match self.format {
            PixelFormat::PremultipliedRgba8 => self.pixels.clone(),
            PixelFormat::Rgba8 => self
                .pixels
                .chunks_exact(4)
                .flat_map(|p| premultiply([p[0], p[1], p[2], p[3]]))
                .collect(),
            PixelFormat::Rgb8 => self
                .pixels
                .chunks_exact(3)
                .flat_map(|p| [p[0], p[1], p[2], 255])
                .collect(),
            PixelFormat::Gray8 => self.pixels.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        }
    }

    /// Build from an `image` buffer, rejecting zero-sized images.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        match img {
            DynamicImage::ImageLuma8(gray) => Self::from_gray_image(gray),
            DynamicImage::ImageRgb8(rgb) => Self::from_rgb_image(rgb),
            other => Self::from_rgba_image(other.into_rgba8()),
        }
    }

    pub fn from_rgba_image(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgba8, img.into_raw())
    }

    pub fn from_rgb_image(img: RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Rgb8, img.into_raw())
    }

    pub fn from_gray_image(img: GrayImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::new(width, height, PixelFormat::Gray8, img.into_raw())
    }
}

impl TryFrom<DynamicImage> for Bitmap {
    type Error = TransformError;

    fn try_from(img: DynamicImage) -> Result<Self> {
        Bitmap::from_dynamic(img)
    }
}

#[inline]
pub(crate) fn premultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    let mul = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
    [mul(r), mul(g), mul(b), a]
}

#[inline]
pub(crate) fn unpremultiply([r, g, b, a]: [u8; 4]) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let div = |c: u8| ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8;
    [div(r), div(g), div(b), a]
}
