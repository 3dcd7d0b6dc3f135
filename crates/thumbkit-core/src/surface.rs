//! Offscreen drawing surfaces backed by `tiny-skia`.
//!
//! A surface is allocated, drawn into a bounded number of times, and turned
//! into a [`Bitmap`]. Each draw takes a single immutable [`DrawCommand`]
//! carrying its transform, clip and sampling quality; the surface keeps no
//! graphics state between draws.
//!
//! Surfaces use a y-up user space (origin at the bottom-left corner). The
//! flip onto top-down pixel rows happens here, so a bitmap drawn into a rect
//! always lands upright in that rect.

use tiny_skia::{FillRule, Mask, Paint, Path, Pixmap, PixmapPaint};

use crate::bitmap::{Bitmap, PixelFormat};
use crate::geometry::{Affine, Rect};
use crate::types::{InterpolationQuality, Result, TransformError};

/// One draw of a bitmap onto a surface.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand<'a> {
    /// Where the bitmap lands, in user space, before `transform`.
    pub dest: Rect,
    /// Applied to `dest` and the clip-free drawing.
    pub transform: Affine,
    /// Pixels outside this path (in user space) are left untouched.
    pub clip: Option<&'a Path>,
    pub quality: InterpolationQuality,
}

impl<'a> DrawCommand<'a> {
    /// Draw into `dest` unscaled by any extra transform, without clipping.
    pub fn at(dest: Rect) -> Self {
        Self {
            dest,
            transform: Affine::IDENTITY,
            clip: None,
            quality: InterpolationQuality::None,
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_clip(mut self, clip: &'a Path) -> Self {
        self.clip = Some(clip);
        self
    }

    pub fn with_quality(mut self, quality: InterpolationQuality) -> Self {
        self.quality = quality;
        self
    }
}

/// A transparent premultiplied-RGBA canvas.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a fully transparent surface.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::SurfaceAllocation` if either dimension is
    /// zero or the buffer size overflows.
    pub fn allocate(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(TransformError::SurfaceAllocation { width, height })?;
        tracing::trace!(width, height, "allocated surface");
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Maps y-up user space onto pixel rows.
    fn base_transform(&self) -> Affine {
        Affine::new(1.0, 0.0, 0.0, -1.0, 0.0, self.height() as f64)
    }

    /// Draw `bitmap` as described by `cmd`.
    pub fn draw(&mut self, bitmap: &Bitmap, cmd: &DrawCommand<'_>) -> Result<()> {
        let source = to_pixmap(bitmap)?;
        let base = self.base_transform();

        // Bitmap rows run top-down; user space runs bottom-up.
        let to_dest = Affine::new(
            cmd.dest.width / bitmap.width() as f64,
            0.0,
            0.0,
            -cmd.dest.height / bitmap.height() as f64,
            cmd.dest.x,
            cmd.dest.y + cmd.dest.height,
        );
        let total = to_dest.then(&cmd.transform).then(&base);

        let clip = match cmd.clip {
            Some(path) => {
                let mut mask = Mask::new(self.width(), self.height()).ok_or(
                    TransformError::SurfaceAllocation {
                        width: self.width(),
                        height: self.height(),
                    },
                )?;
                mask.fill_path(path, FillRule::Winding, true, base.to_skia());
                Some(mask)
            }
            None => None,
        };

        let paint = PixmapPaint {
            quality: cmd.quality.to_filter_quality(),
            ..PixmapPaint::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, total.to_skia(), clip.as_ref());
        Ok(())
    }

    /// Fill `rect` (user space) with an opaque gray level.
    pub fn fill_rect(&mut self, rect: Rect, level: u8) {
        let Some(rect) = rect.to_skia() else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(level, level, level, 255);
        paint.anti_alias = false;
        self.pixmap
            .fill_rect(rect, &paint, self.base_transform().to_skia(), None);
    }

    /// Snapshot the surface as a premultiplied RGBA bitmap.
    pub fn into_bitmap(self) -> Result<Bitmap> {
        let (width, height) = (self.width(), self.height());
        Bitmap::new(
            width,
            height,
            PixelFormat::PremultipliedRgba8,
            self.pixmap.take(),
        )
    }

    /// Snapshot the surface as a single-channel luminance bitmap.
    ///
    /// Intended for surfaces that only received gray fills.
    pub fn into_gray_bitmap(self) -> Result<Bitmap> {
        let (width, height) = (self.width(), self.height());
        let gray = self.pixmap.data().chunks_exact(4).map(|p| p[0]).collect();
        Bitmap::new(width, height, PixelFormat::Gray8, gray)
    }
}

/// Upload a bitmap's pixels as a premultiplied pixmap.
pub(crate) fn to_pixmap(bitmap: &Bitmap) -> Result<Pixmap> {
    let size = tiny_skia::IntSize::from_wh(bitmap.width(), bitmap.height()).ok_or(
        TransformError::SurfaceAllocation {
            width: bitmap.width(),
            height: bitmap.height(),
        },
    )?;
    Pixmap::from_vec(bitmap.premultiplied_rgba(), size).ok_or(TransformError::SurfaceAllocation {
        width: bitmap.width(),
        height: bitmap.height(),
    })
}

impl Bitmap {
    /// Combine with a luminance mask of the same size.
    ///
    /// White mask pixels keep the color, black ones make it fully
    /// transparent, intermediate levels scale opacity.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidDimensions` if the mask isn't `Gray8`
    /// or its size differs.
    pub fn masked(&self, mask: &Bitmap) -> Result<Bitmap> {
        if mask.format() != PixelFormat::Gray8
            || mask.width() != self.width()
            || mask.height() != self.height()
        {
            return Err(TransformError::InvalidDimensions {
                width: mask.width() as f64,
                height: mask.height() as f64,
            });
        }

        let mut pixmap = to_pixmap(self)?;
        let size = tiny_skia::IntSize::from_wh(mask.width(), mask.height()).ok_or(
            TransformError::SurfaceAllocation {
                width: mask.width(),
                height: mask.height(),
            },
        )?;
        let mask = Mask::from_vec(mask.pixels().to_vec(), size).ok_or(
            TransformError::InvalidPixelData {
                expected: mask.width() as usize * mask.height() as usize,
                actual: mask.pixels().len(),
            },
        )?;
        pixmap.apply_mask(&mask);

        Ok(Bitmap::new(
            self.width(),
            self.height(),
            PixelFormat::PremultipliedRgba8,
            pixmap.take(),
        )?
        .reoriented(self.orientation()))
    }
}
