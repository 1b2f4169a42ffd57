use std::fmt;

use mono_style::Palette;

use crate::mode::RenderMode;

/// Configuration rejected before any rendering work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// A target width of zero columns was requested.
    ZeroWidth,
    /// The mode needs a finite palette to pick candidate colors from.
    NeedsQuantizingPalette { mode: RenderMode, palette: Palette },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => f.write_str("target width must be at least one column"),
            Self::NeedsQuantizingPalette { mode, palette } => write!(
                f,
                "{mode} mode needs a quantizing palette, got {palette}"
            ),
        }
    }
}

impl std::error::Error for RenderError {}
