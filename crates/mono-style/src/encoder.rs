//! Encoders turn a token stream into a string in some text-styling dialect.
//!
//! Renderers only see the [`Encoder`] trait. [`AnsiEncoder`] is the reference
//! dialect (SGR control sequences); [`PlainEncoder`] drops every directive.
//! Any `Fn(&[Token]) -> String` closure is an encoder too.

use std::fmt::Write as _;

use crate::directive::{Directive, DirectiveKind, Token};

/// Maps a mixed sequence of literal text and directives to an output string.
pub trait Encoder {
    fn encode(&self, tokens: &[Token<'_>]) -> String;
}

impl<F> Encoder for F
where
    F: Fn(&[Token<'_>]) -> String,
{
    fn encode(&self, tokens: &[Token<'_>]) -> String {
        self(tokens)
    }
}

/// ANSI/ECMA-48 SGR encoder with 24-bit color.
///
/// | Directive | Open | Close |
/// |---|---|---|
/// | Bold | `ESC[1m` | `ESC[22m` |
/// | Italic | `ESC[3m` | `ESC[23m` |
/// | Foreground | `ESC[38;2;r;g;bm` | `ESC[39m` |
/// | Background | `ESC[48;2;r;g;bm` | `ESC[49m` |
///
/// A foreground close directly next to a background close collapses into the
/// combined reset `ESC[39;49m`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnsiEncoder;

impl AnsiEncoder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn csi(out: &mut String, params: &[u8]) {
    out.push_str("\x1b[");
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        let _ = write!(out, "{param}");
    }
    out.push('m');
}

fn is_color_close(token: Option<&Token<'_>>, kind: DirectiveKind) -> bool {
    matches!(
        token,
        Some(Token::Directive(Directive { kind: k, open: false, .. })) if *k == kind
    )
}

fn write_directive(out: &mut String, directive: &Directive) {
    match (directive.kind, directive.open, directive.color) {
        (DirectiveKind::Bold, true, _) => csi(out, &[1]),
        (DirectiveKind::Bold, false, _) => csi(out, &[22]),
        (DirectiveKind::Italic, true, _) => csi(out, &[3]),
        (DirectiveKind::Italic, false, _) => csi(out, &[23]),
        (DirectiveKind::Foreground, true, Some(c)) => csi(out, &[38, 2, c.r, c.g, c.b]),
        (DirectiveKind::Background, true, Some(c)) => csi(out, &[48, 2, c.r, c.g, c.b]),
        // A color open without a payload selects the terminal default.
        (DirectiveKind::Foreground, _, _) => csi(out, &[39]),
        (DirectiveKind::Background, _, _) => csi(out, &[49]),
    }
}

impl Encoder for AnsiEncoder {
    fn encode(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::with_capacity(tokens.len() * 8);
        let mut i = 0;
        while i < tokens.len() {
            match &tokens[i] {
                Token::Text(text) => out.push_str(text),
                Token::Directive(directive) => {
                    let partner = match directive.kind {
                        DirectiveKind::Foreground => Some(DirectiveKind::Background),
                        DirectiveKind::Background => Some(DirectiveKind::Foreground),
                        _ => None,
                    };
                    match partner {
                        Some(other)
                            if !directive.open && is_color_close(tokens.get(i + 1), other) =>
                        {
                            csi(&mut out, &[39, 49]);
                            i += 1;
                        }
                        _ => write_directive(&mut out, directive),
                    }
                }
            }
            i += 1;
        }
        out
    }
}

/// Dialect without any styling: only literal text survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainEncoder;

impl Encoder for PlainEncoder {
    fn encode(&self, tokens: &[Token<'_>]) -> String {
        tokens
            .iter()
            .filter_map(|token| match token {
                Token::Text(text) => Some(text.as_ref()),
                Token::Directive(_) => None,
            })
            .collect()
    }
}
