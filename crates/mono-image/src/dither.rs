use image::RgbaImage;
use mono_style::{Directive, Encoder, Rgb, TagStream, n_closest};

use crate::sample::{FULL_BLOCK, SHADES, pair_average};

/// Glyph and colors chosen for one dithered cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DitherCell {
    pub glyph: &'static str,
    pub fg: Rgb,
    pub bg: Rgb,
}

#[inline]
fn distance(a: Rgb, b: Rgb) -> f64 {
    f64::from(a.distance_sq(b)).sqrt()
}

/// Blend `color` between its two nearest palette colors.
///
/// The nearest color is the background, the second nearest the foreground,
/// and the shade density follows how far `color` sits from the nearest one
/// relative to the gap between the two.
pub(crate) fn dither_cell(color: Rgb, colors: &[Rgb]) -> DitherCell {
    let closest = n_closest(color, 2, colors);
    let (c1, c2) = match closest.as_slice() {
        [c1, c2, ..] => (*c1, *c2),
        [c1] => (*c1, *c1),
        [] => (color, color),
    };

    let d01 = distance(color, c1);
    let d12 = distance(c1, c2);
    let d02 = distance(color, c2);

    if d02 > d01 + d12 || d12 == 0.0 {
        return DitherCell {
            glyph: FULL_BLOCK,
            fg: c1,
            bg: c1,
        };
    }

    let mut factor = d01 / d12;
    if factor >= 1.0 {
        factor = 0.99;
    }
    let index = ((factor * SHADES.len() as f64) as usize).min(SHADES.len() - 1);
    DitherCell {
        glyph: SHADES[index],
        fg: c2,
        bg: c1,
    }
}

pub(crate) fn render_dithered<E: Encoder + ?Sized>(
    image: &RgbaImage,
    colors: &[Rgb],
    encoder: &E,
) -> Vec<String> {
    (0..image.height() / 2)
        .map(|row| {
            let y = row * 2;
            let mut stream = TagStream::with_capacity(image.width() as usize * 5);
            for x in 0..image.width() {
                let cell = dither_cell(pair_average(image, x, y), colors);
                stream.push_styled(
                    &[Directive::foreground(cell.fg), Directive::background(cell.bg)],
                    cell.glyph,
                );
            }
            stream.encode(encoder)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::tagged;
    use image::Rgba;
    use mono_style::Palette;

    const MONO: [Rgb; 2] = [Rgb::BLACK, Rgb::WHITE];

    #[test]
    fn exact_palette_color_is_blank() {
        let cell = dither_cell(Rgb::WHITE, &MONO);
        assert_eq!(
            cell,
            DitherCell {
                glyph: " ",
                fg: Rgb::BLACK,
                bg: Rgb::WHITE,
            }
        );
    }

    #[test]
    fn shade_density_grows_with_distance() {
        let palette = [Rgb::BLACK, Rgb::new(250, 0, 0)];
        let glyphs: Vec<&str> = [
            Rgb::new(0, 0, 0),
            Rgb::new(60, 0, 0),
            Rgb::new(110, 0, 0),
            Rgb::new(100, 120, 0),
            Rgb::new(100, 180, 0),
        ]
        .into_iter()
        .map(|color| dither_cell(color, &palette).glyph)
        .collect();
        assert_eq!(glyphs, vec![" ", "░", "▒", "▓", "█"]);
    }

    #[test]
    fn factor_above_one_clamps_to_densest_shade() {
        let palette = [Rgb::BLACK, Rgb::new(10, 0, 0)];
        let cell = dither_cell(Rgb::new(0, 100, 0), &palette);
        assert_eq!(
            cell,
            DitherCell {
                glyph: "█",
                fg: Rgb::new(10, 0, 0),
                bg: Rgb::BLACK,
            }
        );
    }

    #[test]
    fn coincident_candidates_collapse_to_solid() {
        let same = [Rgb::new(9, 9, 9), Rgb::new(9, 9, 9)];
        let cell = dither_cell(Rgb::new(50, 50, 50), &same);
        assert_eq!(
            cell,
            DitherCell {
                glyph: "█",
                fg: Rgb::new(9, 9, 9),
                bg: Rgb::new(9, 9, 9),
            }
        );
    }

    #[test]
    fn single_color_palette_is_solid() {
        let cell = dither_cell(Rgb::new(1, 2, 3), &[Rgb::WHITE]);
        assert_eq!(cell.glyph, "█");
        assert_eq!(cell.fg, Rgb::WHITE);
    }

    #[test]
    fn rendered_cell_uses_second_nearest_as_foreground() {
        let image = RgbaImage::from_pixel(1, 2, Rgba([60, 60, 60, 255]));
        let colors = Palette::Monochrome.colors().unwrap();
        let lines = render_dithered(&image, colors, &tagged);
        assert_eq!(
            lines,
            vec!["[Foreground #ffffff][Background #000000]░[/Background][/Foreground]"]
        );
    }
}
