//! Pixel access and the glyph vocabulary shared by the sampling strategies.

use image::RgbaImage;
use mono_style::Rgb;

pub const BLANK: &str = " ";
pub const FULL_BLOCK: &str = "█";
pub const LOWER_HALF_BLOCK: &str = "▄";

/// Increasing-density glyphs used by the dithered renderer.
pub const SHADES: [&str; 5] = [BLANK, "░", "▒", "▓", FULL_BLOCK];

/// Color of one pixel; alpha is ignored.
#[inline]
pub(crate) fn pixel(image: &RgbaImage, x: u32, y: u32) -> Rgb {
    let [r, g, b, _] = image.get_pixel(x, y).0;
    Rgb::new(r, g, b)
}

/// Floor average of the pixel at (x, y) and the one below it.
#[inline]
pub(crate) fn pair_average(image: &RgbaImage, x: u32, y: u32) -> Rgb {
    pixel(image, x, y).midpoint(pixel(image, x, y + 1))
}
