#![forbid(unsafe_code)]

//! End-to-end rendering through the public API with the ANSI encoder.

use image::{Rgba, RgbaImage};
use mono_image::{RenderConfig, RenderError, RenderMode, render, render_with_config};
use mono_style::{AnsiEncoder, Palette};
use tracing::{Level, info};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(Level::TRACE)
        .try_init();
}

/// Left half black, right half white.
fn split_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    })
}

#[test]
fn super_mode_draws_half_blocks_on_a_vertical_edge() {
    init_tracing();
    info!("super mode on a two-tone image");

    let lines = render(
        &split_image(2, 4),
        RenderMode::Super,
        Palette::Monochrome,
        None,
        &AnsiEncoder,
    )
    .unwrap();
    assert_eq!(
        lines,
        vec!["\x1b[38;2;0;0;0m\x1b[48;2;255;255;255m▌\x1b[39;49m"]
    );
}

#[test]
fn blocks_mode_after_downscale() {
    init_tracing();

    let lines = render(
        &RgbaImage::from_pixel(64, 32, Rgba([0, 0, 238, 255])),
        RenderMode::Blocks,
        Palette::Ansi16,
        Some(8),
        &AnsiEncoder,
    )
    .unwrap();
    assert_eq!(lines.len(), 2);
    let cell = "\x1b[38;2;0;0;238m█\x1b[39m";
    for line in lines {
        assert_eq!(line, cell.repeat(8));
    }
}

#[test]
fn dithered_mode_with_every_quantizing_palette() {
    init_tracing();

    for palette in [Palette::Monochrome, Palette::Ansi16, Palette::Xterm256] {
        let lines = render(
            &split_image(4, 4),
            RenderMode::Dithered,
            palette,
            None,
            &AnsiEncoder,
        )
        .unwrap();
        assert_eq!(lines.len(), 2, "{palette}");
        for line in &lines {
            assert!(line.ends_with("\x1b[39;49m"), "{palette}: {line:?}");
        }
    }
}

#[test]
fn config_errors_surface_before_rendering() {
    init_tracing();

    let config = RenderConfig::new(RenderMode::Dithered, Palette::TrueColor);
    let err = render_with_config(&split_image(2, 2), &config, &AnsiEncoder).unwrap_err();
    assert_eq!(
        err.to_string(),
        "dithered mode needs a quantizing palette, got truecolor"
    );

    let config = RenderConfig::default().with_width(0);
    assert_eq!(
        render_with_config(&split_image(2, 2), &config, &AnsiEncoder),
        Err(RenderError::ZeroWidth)
    );
}
