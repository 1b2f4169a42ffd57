use image::RgbaImage;
use mono_style::{Directive, Encoder, Palette, TagStream};

use crate::sample::{FULL_BLOCK, LOWER_HALF_BLOCK, pair_average, pixel};

/// One full block per pixel pair, colored with the pair's quantized average.
pub(crate) fn render_blocks<E: Encoder + ?Sized>(
    image: &RgbaImage,
    palette: Palette,
    encoder: &E,
) -> Vec<String> {
    (0..image.height() / 2)
        .map(|row| {
            let y = row * 2;
            let mut stream = TagStream::with_capacity(image.width() as usize * 3);
            for x in 0..image.width() {
                let color = palette.quantize(pair_average(image, x, y));
                stream.push_styled(&[Directive::foreground(color)], FULL_BLOCK);
            }
            stream.encode(encoder)
        })
        .collect()
}

/// One lower half block per pixel pair: the cell background shows the upper
/// pixel, the glyph the lower one.
pub(crate) fn render_pixels<E: Encoder + ?Sized>(
    image: &RgbaImage,
    palette: Palette,
    encoder: &E,
) -> Vec<String> {
    (0..image.height() / 2)
        .map(|row| {
            let y = row * 2;
            let mut stream = TagStream::with_capacity(image.width() as usize * 5);
            for x in 0..image.width() {
                let upper = palette.quantize(pixel(image, x, y));
                let lower = palette.quantize(pixel(image, x, y + 1));
                stream.push_styled(
                    &[Directive::background(upper), Directive::foreground(lower)],
                    LOWER_HALF_BLOCK,
                );
            }
            stream.encode(encoder)
        })
        .collect()
}
