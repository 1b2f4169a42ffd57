use std::fmt;

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels.
    #[must_use]
    pub const fn channel_sum(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }

    /// Squared Euclidean distance over the channels. No gamma correction.
    #[must_use]
    pub const fn distance_sq(self, other: Self) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Channel-wise floor average of two colors.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new(
            ((self.r as u16 + other.r as u16) / 2) as u8,
            ((self.g as u16 + other.g as u16) / 2) as u8,
            ((self.b as u16 + other.b as u16) / 2) as u8,
        )
    }

    /// Channel-wise floor average of any number of colors.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn average(colors: &[Rgb]) -> Option<Rgb> {
        if colors.is_empty() {
            return None;
        }
        let n = colors.len() as u32;
        let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
            (r + u32::from(c.r), g + u32::from(c.g), b + u32::from(c.b))
        });
        Some(Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const ANSI16_PALETTE: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(205, 0, 0),     // Red
    Rgb::new(0, 205, 0),     // Green
    Rgb::new(205, 205, 0),   // Yellow
    Rgb::new(0, 0, 238),     // Blue
    Rgb::new(205, 0, 205),   // Magenta
    Rgb::new(0, 205, 205),   // Cyan
    Rgb::new(229, 229, 229), // White
    Rgb::new(127, 127, 127), // Bright Black
    Rgb::new(255, 0, 0),     // Bright Red
    Rgb::new(0, 255, 0),     // Bright Green
    Rgb::new(255, 255, 0),   // Bright Yellow
    Rgb::new(92, 92, 255),   // Bright Blue
    Rgb::new(255, 0, 255),   // Bright Magenta
    Rgb::new(0, 255, 255),   // Bright Cyan
    Rgb::new(255, 255, 255), // Bright White
];

/// Reference xterm 256-color table: 16 system colors, the 6x6x6 cube, and the
/// 24-step gray ramp.
pub static XTERM_256: [Rgb; 256] = build_xterm_256();

static MONOCHROME: [Rgb; 2] = [ansi256_to_rgb(0), ansi256_to_rgb(15)];

#[must_use]
pub const fn ansi256_to_rgb(index: u8) -> Rgb {
    if index < 16 {
        return ANSI16_PALETTE[index as usize];
    }
    if index >= 232 {
        let gray = 8 + 10 * (index - 232);
        return Rgb::new(gray, gray, gray);
    }
    let idx = index - 16;
    let r = idx / 36;
    let g = (idx / 6) % 6;
    let b = idx % 6;
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    Rgb::new(LEVELS[r as usize], LEVELS[g as usize], LEVELS[b as usize])
}

const fn build_xterm_256() -> [Rgb; 256] {
    let mut table = [Rgb::BLACK; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = ansi256_to_rgb(i as u8);
        i += 1;
    }
    table
}

/// Color palette used to quantize sampled pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// Black and white (reference indices 0 and 15).
    Monochrome,
    /// The 16 xterm system colors.
    Ansi16,
    /// The full xterm 256-color table.
    Xterm256,
    /// No quantization: colors pass through unchanged.
    #[default]
    TrueColor,
}

impl Palette {
    pub const ALL: [Palette; 4] = [
        Palette::Monochrome,
        Palette::Ansi16,
        Palette::Xterm256,
        Palette::TrueColor,
    ];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochrome" | "2" => Some(Self::Monochrome),
            "ansi" | "ansi16" | "16" => Some(Self::Ansi16),
            "xterm" | "xterm256" | "ansi256" | "256" => Some(Self::Xterm256),
            "rgb" | "truecolor" | "24bit" => Some(Self::TrueColor),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monochrome => "monochrome",
            Self::Ansi16 => "ansi16",
            Self::Xterm256 => "xterm256",
            Self::TrueColor => "truecolor",
        }
    }

    /// The finite color set of a quantizing palette, in canonical order.
    ///
    /// `None` for [`Palette::TrueColor`].
    #[must_use]
    pub fn colors(self) -> Option<&'static [Rgb]> {
        match self {
            Self::Monochrome => Some(&MONOCHROME),
            Self::Ansi16 => Some(&XTERM_256[..16]),
            Self::Xterm256 => Some(&XTERM_256),
            Self::TrueColor => None,
        }
    }

    #[must_use]
    pub const fn is_quantizing(self) -> bool {
        !matches!(self, Self::TrueColor)
    }

    /// Replace `color` with its nearest palette color (identity for true color).
    #[must_use]
    pub fn quantize(self, color: Rgb) -> Rgb {
        match self.colors() {
            Some(colors) => nearest(color, colors),
            None => color,
        }
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nearest palette color. Ties resolve to the first color in palette order.
///
/// An empty palette leaves `color` unchanged.
#[must_use]
pub fn nearest(color: Rgb, colors: &[Rgb]) -> Rgb {
    let mut best = color;
    let mut best_dist = u32::MAX;
    for candidate in colors {
        let dist = color.distance_sq(*candidate);
        if dist < best_dist {
            best = *candidate;
            best_dist = dist;
        }
    }
    best
}

/// The `n` palette colors closest to `color`, nearest first.
///
/// Ties keep palette order, so the result is deterministic.
#[must_use]
pub fn n_closest(color: Rgb, n: usize, colors: &[Rgb]) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(u32, usize)> = colors
        .iter()
        .enumerate()
        .map(|(idx, candidate)| (color.distance_sq(*candidate), idx))
        .collect();
    if n < ranked.len() {
        ranked.select_nth_unstable(n);
        ranked.truncate(n);
    }
    ranked.sort_unstable();
    ranked.into_iter().map(|(_, idx)| colors[idx]).collect()
}
