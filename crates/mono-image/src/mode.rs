use std::fmt;

/// Sampling strategy used to turn pixels into glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// One averaged color per 1x2 pixel pair, drawn as a full block.
    Blocks,
    /// Two independent colors per 1x2 pixel pair, drawn as a half block.
    #[default]
    Pixels,
    /// Blend of the two nearest palette colors, drawn as a shade glyph.
    Dithered,
    /// Two-color quarter-block approximation of a 2x4 pixel region.
    Super,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::Blocks,
        RenderMode::Pixels,
        RenderMode::Dithered,
        RenderMode::Super,
    ];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blocks" | "block" => Some(Self::Blocks),
            "pixels" | "pixel" | "half" => Some(Self::Pixels),
            "dithered" | "dither" => Some(Self::Dithered),
            "super" | "quadrant" | "quadrants" => Some(Self::Super),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocks => "blocks",
            Self::Pixels => "pixels",
            Self::Dithered => "dithered",
            Self::Super => "super",
        }
    }

    /// Source rows consumed by one line of output.
    #[must_use]
    pub const fn rows_per_cell(self) -> u32 {
        match self {
            Self::Super => 4,
            Self::Blocks | Self::Pixels | Self::Dithered => 2,
        }
    }

    /// Source columns consumed by one glyph.
    #[must_use]
    pub const fn columns_per_cell(self) -> u32 {
        match self {
            Self::Super => 2,
            Self::Blocks | Self::Pixels | Self::Dithered => 1,
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
