#![forbid(unsafe_code)]

//! Style primitives shared by the monospace renderers.
//!
//! This crate provides:
//! - [`Rgb`], the reference xterm table, [`Palette`] and the nearest-color
//!   quantizer
//! - [`Directive`]/[`Token`] style-tag streams with balanced open/close pairs
//! - the [`Encoder`] capability and its ANSI and plain dialects

/// Colors, palettes, and quantization.
pub mod color;
/// Style directives and tag streams.
pub mod directive;
/// Token stream encoders.
pub mod encoder;

pub use color::{Palette, Rgb, XTERM_256, n_closest, nearest};
pub use directive::{Directive, DirectiveError, DirectiveKind, TagStream, Token, check_balanced};
pub use encoder::{AnsiEncoder, Encoder, PlainEncoder};
