//! Line weights for a single cell edge.

/// Stroke of one cell edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum EdgeWeight {
    /// No line.
    #[default]
    Empty,
    /// Thin line (`─`, `│`).
    Light,
    /// Thick line (`━`, `┃`).
    Heavy,
    /// Two parallel thin lines (`═`, `║`).
    Double,
}

impl EdgeWeight {
    pub const ALL: [EdgeWeight; 4] = [
        EdgeWeight::Empty,
        EdgeWeight::Light,
        EdgeWeight::Heavy,
        EdgeWeight::Double,
    ];

    /// Parse a code letter (`e`, `l`, `h`, `d`), case-insensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            'e' => Some(Self::Empty),
            'l' => Some(Self::Light),
            'h' => Some(Self::Heavy),
            'd' => Some(Self::Double),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Empty => 'e',
            Self::Light => 'l',
            Self::Heavy => 'h',
            Self::Double => 'd',
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Light => 1,
            Self::Heavy => 2,
            Self::Double => 3,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for weight in EdgeWeight::ALL {
            assert_eq!(EdgeWeight::from_code(weight.code()), Some(weight));
        }
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(EdgeWeight::from_code('H'), Some(EdgeWeight::Heavy));
        assert_eq!(EdgeWeight::from_code('x'), None);
    }

    #[test]
    fn indices_are_dense() {
        let indices: Vec<_> = EdgeWeight::ALL.iter().map(|w| w.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }
}
