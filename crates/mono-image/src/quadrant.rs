//! Two-color quarter-block rendering of 2x4 pixel regions.
//!
//! Each region is reduced to four quadrant colors (top-left, top-right,
//! bottom-left, bottom-right). Quadrants darker than the region's average
//! brightness form group A, the rest group B. The group pattern picks a
//! quarter-block glyph drawn with A as foreground and B as background.

use image::RgbaImage;
use mono_style::{Directive, Encoder, Palette, Rgb, TagStream};
use smallvec::SmallVec;

use crate::sample::{BLANK, FULL_BLOCK, pair_average};

const TOP_LEFT: u8 = 0b1000;

/// Glyph for each mixed group pattern. Bits are TL, TR, BL, BR (high to low);
/// a set bit marks a group A quadrant.
const QUADRANT_GLYPHS: [(u8, &str); 14] = [
    (0b1110, "▛"), // aaab
    (0b1101, "▜"), // aaba
    (0b1100, "▀"), // aabb
    (0b1011, "▙"), // abaa
    (0b1010, "▌"), // abab
    (0b1001, "▚"), // abba
    (0b1000, "▘"), // abbb
    (0b0111, "▟"), // baaa
    (0b0110, "▞"), // baab
    (0b0101, "▐"), // baba
    (0b0100, "▝"), // babb
    (0b0011, "▄"), // bbaa
    (0b0010, "▖"), // bbab
    (0b0001, "▗"), // bbba
];

/// Quarter-block glyph for a group pattern, `None` for the uniform patterns.
#[must_use]
pub(crate) fn quadrant_glyph(mask: u8) -> Option<&'static str> {
    QUADRANT_GLYPHS
        .iter()
        .find(|(pattern, _)| *pattern == mask)
        .map(|(_, glyph)| *glyph)
}

/// Output for one 2x4 region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SuperCell {
    /// Every quadrant at or above the average: background only.
    Blank { bg: Rgb },
    /// Every quadrant below the average: foreground only.
    Solid { fg: Rgb },
    Split {
        glyph: &'static str,
        fg: Rgb,
        bg: Rgb,
    },
}

pub(crate) fn super_cell(quadrants: [Rgb; 4], palette: Palette) -> SuperCell {
    // brightness < mean(brightness)  <=>  4 * channel_sum < total channel_sum
    let total: u32 = quadrants.iter().map(|q| q.channel_sum()).sum();
    let mut mask = 0u8;
    let mut dark: SmallVec<[Rgb; 4]> = SmallVec::new();
    let mut light: SmallVec<[Rgb; 4]> = SmallVec::new();
    for (i, quadrant) in quadrants.iter().enumerate() {
        if 4 * quadrant.channel_sum() < total {
            mask |= TOP_LEFT >> i;
            dark.push(*quadrant);
        } else {
            light.push(*quadrant);
        }
    }

    match (Rgb::average(&dark), Rgb::average(&light)) {
        (Some(a), Some(b)) => SuperCell::Split {
            glyph: quadrant_glyph(mask).unwrap_or(FULL_BLOCK),
            fg: palette.quantize(a),
            bg: palette.quantize(b),
        },
        (Some(a), None) => SuperCell::Solid {
            fg: palette.quantize(a),
        },
        (None, b) => SuperCell::Blank {
            bg: palette.quantize(b.unwrap_or_default()),
        },
    }
}

pub(crate) fn render_super<E: Encoder + ?Sized>(
    image: &RgbaImage,
    palette: Palette,
    encoder: &E,
) -> Vec<String> {
    let columns = image.width() / 2;
    (0..image.height() / 4)
        .map(|row| {
            let y = row * 4;
            let mut stream = TagStream::with_capacity(columns as usize * 5);
            for col in 0..columns {
                let x = col * 2;
                let quadrants = [
                    pair_average(image, x, y),
                    pair_average(image, x + 1, y),
                    pair_average(image, x, y + 2),
                    pair_average(image, x + 1, y + 2),
                ];
                match super_cell(quadrants, palette) {
                    SuperCell::Blank { bg } => {
                        stream.push_styled(&[Directive::background(bg)], BLANK);
                    }
                    SuperCell::Solid { fg } => {
                        stream.push_styled(&[Directive::foreground(fg)], FULL_BLOCK);
                    }
                    SuperCell::Split { glyph, fg, bg } => {
                        stream.push_styled(
                            &[Directive::foreground(fg), Directive::background(bg)],
                            glyph,
                        );
                    }
                }
            }
            stream.encode(encoder)
        })
        .collect()
}
