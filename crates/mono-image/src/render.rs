//! Entry points: configuration check, optional resize, strategy dispatch.

use std::borrow::Cow;

use image::RgbaImage;
use image::imageops::{self, FilterType};
use mono_style::{Encoder, Palette, Rgb};
use tracing::{debug_span, trace};

use crate::blocks::{render_blocks, render_pixels};
use crate::config::RenderConfig;
use crate::dither::render_dithered;
use crate::error::RenderError;
use crate::mode::RenderMode;
use crate::quadrant::render_super;

/// Sampling strategy bound to the data it needs.
///
/// Dithering carries the palette's color list so a missing list is ruled out
/// before any pixel is touched.
enum Strategy {
    Blocks(Palette),
    Pixels(Palette),
    Dithered(&'static [Rgb]),
    Super(Palette),
}

impl Strategy {
    fn select(mode: RenderMode, palette: Palette) -> Result<Self, RenderError> {
        match mode {
            RenderMode::Blocks => Ok(Self::Blocks(palette)),
            RenderMode::Pixels => Ok(Self::Pixels(palette)),
            RenderMode::Dithered => palette
                .colors()
                .map(Self::Dithered)
                .ok_or(RenderError::NeedsQuantizingPalette { mode, palette }),
            RenderMode::Super => Ok(Self::Super(palette)),
        }
    }

    fn run<E: Encoder + ?Sized>(&self, image: &RgbaImage, encoder: &E) -> Vec<String> {
        match *self {
            Self::Blocks(palette) => render_blocks(image, palette, encoder),
            Self::Pixels(palette) => render_pixels(image, palette, encoder),
            Self::Dithered(colors) => render_dithered(image, colors, encoder),
            Self::Super(palette) => render_super(image, palette, encoder),
        }
    }
}

/// Source dimensions after resizing to `columns` glyph cells.
///
/// The height keeps the aspect ratio, floored, and never drops below one pixel.
/// An empty source stays empty.
#[must_use]
pub fn scaled_size(width: u32, height: u32, columns: u32, mode: RenderMode) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let target_width = columns.saturating_mul(mode.columns_per_cell()).max(1);
    let target_height = u64::from(target_width) * u64::from(height) / u64::from(width);
    let target_height = u32::try_from(target_height).unwrap_or(u32::MAX).max(1);
    (target_width, target_height)
}

fn prepare(image: &RgbaImage, target_width: Option<u32>, mode: RenderMode) -> Cow<'_, RgbaImage> {
    if image.width() == 0 || image.height() == 0 {
        trace!(
            width = image.width(),
            height = image.height(),
            "image render: empty source, nothing to resize"
        );
        return Cow::Borrowed(image);
    }
    let Some(columns) = target_width else {
        trace!(
            width = image.width(),
            height = image.height(),
            "image render: native size"
        );
        return Cow::Borrowed(image);
    };
    let (width, height) = scaled_size(image.width(), image.height(), columns, mode);
    if (width, height) == image.dimensions() {
        trace!(width, height, "image render: already at target size");
        return Cow::Borrowed(image);
    }
    trace!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "image render: resize (lanczos3)"
    );
    Cow::Owned(imageops::resize(image, width, height, FilterType::Lanczos3))
}

/// Render `pixels` as styled text lines.
///
/// `target_width` is the number of glyph columns wanted; `None` keeps the
/// native size. Blocks, Pixels and Dithered produce `height / 2` lines of
/// `width` cells; Super produces `height / 4` lines of `width / 2` cells.
/// Trailing odd rows and columns are dropped.
///
/// # Errors
///
/// [`RenderError::ZeroWidth`] for a zero target width and
/// [`RenderError::NeedsQuantizingPalette`] for Dithered with TrueColor. Both
/// are reported before any resizing or sampling.
pub fn render<E: Encoder + ?Sized>(
    pixels: &RgbaImage,
    mode: RenderMode,
    palette: Palette,
    target_width: Option<u32>,
    encoder: &E,
) -> Result<Vec<String>, RenderError> {
    let _span = debug_span!(
        "image_render",
        mode = mode.as_str(),
        palette = palette.as_str(),
        w = pixels.width(),
        h = pixels.height(),
        target = ?target_width
    )
    .entered();

    let config = RenderConfig {
        mode,
        palette,
        width: target_width,
    };
    if let Err(err) = config.check() {
        trace!(error = %err, "image render: rejected");
        return Err(err);
    }
    let strategy = Strategy::select(mode, palette)?;

    let image = prepare(pixels, target_width, mode);
    Ok(strategy.run(&image, encoder))
}

/// [`render`] with every setting taken from `config`.
///
/// # Errors
///
/// Same as [`render`].
pub fn render_with_config<E: Encoder + ?Sized>(
    pixels: &RgbaImage,
    config: &RenderConfig,
    encoder: &E,
) -> Result<Vec<String>, RenderError> {
    render(pixels, config.mode, config.palette, config.width, encoder)
}
