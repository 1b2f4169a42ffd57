//! Property-based invariant tests for the image renderers.
//!
//! 1. Line count and cell count follow the mode's sampling granularity
//! 2. Every encoded line is a balanced directive stream
//! 3. Uniform images produce uniform cells in the quantized source color
//! 4. Palette colors dither to a blank cell over themselves

use image::{Rgba, RgbaImage};
use mono_image::{RenderMode, render};
use mono_style::{DirectiveKind, Palette, PlainEncoder, Rgb, Token, check_balanced};
use proptest::prelude::*;

/// Encodes each text token as `glyph|fg|bg` on its own line, with the colors
/// that are open at that point (`-` when none).
fn cells(tokens: &[Token<'_>]) -> String {
    let mut fg = None;
    let mut bg = None;
    let mut out = String::new();
    for token in tokens {
        match token {
            Token::Text(text) => {
                let show = |c: Option<Rgb>| c.map_or_else(|| "-".to_string(), |c| c.to_string());
                out.push_str(&format!("{text}|{}|{}\n", show(fg), show(bg)));
            }
            Token::Directive(d) => match d.kind {
                DirectiveKind::Foreground => fg = d.color.filter(|_| d.open),
                DirectiveKind::Background => bg = d.color.filter(|_| d.open),
                _ => {}
            },
        }
    }
    out
}

fn balance(tokens: &[Token<'_>]) -> String {
    match check_balanced(tokens) {
        Ok(()) => "ok".to_string(),
        Err(err) => err.to_string(),
    }
}

fn mode() -> impl Strategy<Value = RenderMode> {
    prop_oneof![
        Just(RenderMode::Blocks),
        Just(RenderMode::Pixels),
        Just(RenderMode::Dithered),
        Just(RenderMode::Super),
    ]
}

fn quantizing_palette() -> impl Strategy<Value = Palette> {
    prop_oneof![
        Just(Palette::Monochrome),
        Just(Palette::Ansi16),
        Just(Palette::Xterm256),
    ]
}

fn noisy_image() -> impl Strategy<Value = RgbaImage> {
    (1u32..24, 1u32..24).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), (w * h * 4) as usize).prop_map(move |raw| {
            RgbaImage::from_raw(w, h, raw).unwrap_or_else(|| RgbaImage::new(w, h))
        })
    })
}

proptest! {
    #[test]
    fn line_and_cell_counts_follow_mode(
        image in noisy_image(),
        mode in mode(),
        palette in quantizing_palette(),
    ) {
        let lines = render(&image, mode, palette, None, &PlainEncoder).unwrap();
        let rows = (image.height() / mode.rows_per_cell()) as usize;
        let columns = (image.width() / mode.columns_per_cell()) as usize;
        prop_assert_eq!(lines.len(), rows);
        for line in &lines {
            prop_assert_eq!(line.chars().count(), columns);
        }
    }

    #[test]
    fn every_line_is_balanced(
        image in noisy_image(),
        mode in mode(),
        palette in quantizing_palette(),
    ) {
        let lines = render(&image, mode, palette, None, &balance).unwrap();
        for line in lines {
            prop_assert_eq!(line, "ok");
        }
    }

    #[test]
    fn uniform_blocks_are_uniform(
        color in any::<[u8; 3]>(),
        palette in prop_oneof![quantizing_palette(), Just(Palette::TrueColor)],
        w in 1u32..8,
        h in 1u32..4,
    ) {
        let [r, g, b] = color;
        let image = RgbaImage::from_pixel(w, h * 2, Rgba([r, g, b, 255]));
        let expected = format!("█|{}|-", palette.quantize(Rgb::from(color)));
        for line in render(&image, RenderMode::Blocks, palette, None, &cells).unwrap() {
            for cell in line.lines() {
                prop_assert_eq!(cell, expected.as_str());
            }
        }
    }

    #[test]
    fn uniform_super_regions_are_blank(
        color in any::<[u8; 3]>(),
        palette in prop_oneof![quantizing_palette(), Just(Palette::TrueColor)],
        w in 1u32..6,
        h in 1u32..4,
    ) {
        let [r, g, b] = color;
        let image = RgbaImage::from_pixel(w * 2, h * 4, Rgba([r, g, b, 255]));
        let expected = format!(" |-|{}", palette.quantize(Rgb::from(color)));
        let lines = render(&image, RenderMode::Super, palette, None, &cells).unwrap();
        prop_assert_eq!(lines.len(), h as usize);
        for line in lines {
            prop_assert_eq!(line.lines().count(), w as usize);
            for cell in line.lines() {
                prop_assert_eq!(cell, expected.as_str());
            }
        }
    }

    #[test]
    fn palette_colors_dither_to_blank(index in 0usize..16) {
        let color = Palette::Ansi16.colors().unwrap()[index];
        let image = RgbaImage::from_pixel(1, 2, Rgba([color.r, color.g, color.b, 255]));
        let lines = render(&image, RenderMode::Dithered, Palette::Ansi16, None, &cells).unwrap();
        prop_assert_eq!(lines.len(), 1);
        let cell = lines[0].trim_end();
        let (glyph, rest) = cell.split_once('|').unwrap();
        prop_assert_eq!(glyph, " ");
        let background = rest.rsplit('|').next().unwrap();
        prop_assert_eq!(background, color.to_string());
    }
}
