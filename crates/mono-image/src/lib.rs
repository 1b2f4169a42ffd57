#![forbid(unsafe_code)]

//! Raster images rendered as rows of styled monospace glyphs.
//!
//! [`render`] takes a decoded [`image::RgbaImage`], a [`RenderMode`], a
//! [`Palette`](mono_style::Palette) and an [`Encoder`](mono_style::Encoder),
//! and returns one encoded string per output line:
//!
//! | Mode | Pixels per cell | Glyphs |
//! |---|---|---|
//! | Blocks | 1x2 | `█` in the pair's average color |
//! | Pixels | 1x2 | `▄` over the upper pixel's color |
//! | Dithered | 1x2 | ` ░▒▓█` blending the two nearest palette colors |
//! | Super | 2x4 | quarter blocks in two colors |
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use mono_image::{RenderMode, render};
//! use mono_style::{Palette, PlainEncoder};
//!
//! let image = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
//! let lines = render(&image, RenderMode::Blocks, Palette::Ansi16, None, &PlainEncoder)?;
//! assert_eq!(lines, vec!["████", "████"]);
//! # Ok::<(), mono_image::RenderError>(())
//! ```

mod blocks;
pub mod config;
mod dither;
pub mod error;
pub mod mode;
mod quadrant;
mod render;
pub mod sample;

pub use config::{ConfigError, RenderConfig, RenderConfigParse};
pub use error::RenderError;
pub use mode::RenderMode;
pub use render::{render, render_with_config, scaled_size};
