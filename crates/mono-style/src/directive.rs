//! Style directives and the tag streams built from them.
//!
//! A line of styled output is a sequence of [`Token`]s: literal text
//! interleaved with open/close [`Directive`]s. Closing a kind resets it
//! unconditionally (bold off, default foreground, ...) rather than restoring a
//! previous value, so no style stack is needed.

use std::borrow::Cow;
use std::fmt;

use crate::color::Rgb;
use crate::encoder::Encoder;

/// What a directive changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Bold,
    Italic,
    Foreground,
    Background,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 4] = [
        DirectiveKind::Bold,
        DirectiveKind::Italic,
        DirectiveKind::Foreground,
        DirectiveKind::Background,
    ];

    #[inline]
    const fn slot(self) -> usize {
        match self {
            Self::Bold => 0,
            Self::Italic => 1,
            Self::Foreground => 2,
            Self::Background => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_color(self) -> bool {
        matches!(self, Self::Foreground | Self::Background)
    }
}

/// An open or close formatting instruction.
///
/// Color kinds carry their color on the open side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub open: bool,
    pub color: Option<Rgb>,
}

impl Directive {
    #[must_use]
    pub const fn bold() -> Self {
        Self::open_plain(DirectiveKind::Bold)
    }

    #[must_use]
    pub const fn italic() -> Self {
        Self::open_plain(DirectiveKind::Italic)
    }

    #[must_use]
    pub const fn foreground(color: Rgb) -> Self {
        Self {
            kind: DirectiveKind::Foreground,
            open: true,
            color: Some(color),
        }
    }

    #[must_use]
    pub const fn background(color: Rgb) -> Self {
        Self {
            kind: DirectiveKind::Background,
            open: true,
            color: Some(color),
        }
    }

    const fn open_plain(kind: DirectiveKind) -> Self {
        Self {
            kind,
            open: true,
            color: None,
        }
    }

    /// The matching close directive: same kind, no payload.
    #[must_use]
    pub const fn close_tag(self) -> Self {
        Self {
            kind: self.kind,
            open: false,
            color: None,
        }
    }
}

/// One element of a styled line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Text(Cow<'a, str>),
    Directive(Directive),
}

impl<'a> Token<'a> {
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Self::Text(text.into())
    }
}

impl From<Directive> for Token<'_> {
    fn from(directive: Directive) -> Self {
        Self::Directive(directive)
    }
}

/// Builder for a balanced token stream.
///
/// Every styled run pushed through [`TagStream::push_styled`] is emitted as
/// its opens, the text, then the closes in reverse order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TagStream<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Append unstyled text.
    pub fn push_text(&mut self, text: impl Into<Cow<'a, str>>) {
        self.tokens.push(Token::text(text));
    }

    /// Append `text` wrapped in `opens` and their matching closes.
    pub fn push_styled(&mut self, opens: &[Directive], text: impl Into<Cow<'a, str>>) {
        self.tokens
            .extend(opens.iter().map(|directive| Token::Directive(*directive)));
        self.tokens.push(Token::text(text));
        self.tokens.extend(
            opens
                .iter()
                .rev()
                .map(|directive| Token::Directive(directive.close_tag())),
        );
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    #[must_use]
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Encode the stream with the given dialect.
    #[must_use]
    pub fn encode<E: Encoder + ?Sized>(&self, encoder: &E) -> String {
        encoder.encode(&self.tokens)
    }
}

/// A violation of directive pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveError {
    /// A close with no open of the same kind before it.
    UnmatchedClose { index: usize, kind: DirectiveKind },
    /// An open while the same kind is already open.
    AlreadyOpen { index: usize, kind: DirectiveKind },
    /// A color payload on a non-color kind or on a close, or a missing color on
    /// a color open.
    MalformedPayload { index: usize, kind: DirectiveKind },
    /// The stream ended with the kind still open.
    Unclosed { kind: DirectiveKind },
}

impl fmt::Display for DirectiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedClose { index, kind } => {
                write!(f, "token {index}: close of {kind:?} without a matching open")
            }
            Self::AlreadyOpen { index, kind } => {
                write!(f, "token {index}: {kind:?} opened while already open")
            }
            Self::MalformedPayload { index, kind } => {
                write!(f, "token {index}: malformed color payload on {kind:?}")
            }
            Self::Unclosed { kind } => write!(f, "{kind:?} left open at end of stream"),
        }
    }
}

impl std::error::Error for DirectiveError {}

/// Verify that every close matches an earlier open and nothing is left open.
pub fn check_balanced(tokens: &[Token<'_>]) -> Result<(), DirectiveError> {
    let mut open = [false; 4];
    for (index, token) in tokens.iter().enumerate() {
        let Token::Directive(directive) = token else {
            continue;
        };
        let kind = directive.kind;
        let wants_color = directive.open && kind.is_color();
        if directive.color.is_some() != wants_color {
            return Err(DirectiveError::MalformedPayload { index, kind });
        }
        let slot = &mut open[kind.slot()];
        match (directive.open, *slot) {
            (true, true) => return Err(DirectiveError::AlreadyOpen { index, kind }),
            (false, false) => return Err(DirectiveError::UnmatchedClose { index, kind }),
            (is_open, _) => *slot = is_open,
        }
    }
    match DirectiveKind::ALL.into_iter().find(|kind| open[kind.slot()]) {
        Some(kind) => Err(DirectiveError::Unclosed { kind }),
        None => Ok(()),
    }
}
