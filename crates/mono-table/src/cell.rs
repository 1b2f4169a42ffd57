//! Per-cell border specification.

use std::fmt;

use crate::weight::EdgeWeight;

/// Edge weights of one table cell.
///
/// Neighboring cells share edges: when drawing, a cell's left and top edges
/// are taken from the cell itself, and only the last column and last row
/// contribute their right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub left: EdgeWeight,
    pub top: EdgeWeight,
    pub right: EdgeWeight,
    pub bottom: EdgeWeight,
}

impl Cell {
    /// Sentinel for positions outside the grid.
    pub const EMPTY: Cell = Cell::uniform(EdgeWeight::Empty);

    #[must_use]
    pub const fn new(
        left: EdgeWeight,
        top: EdgeWeight,
        right: EdgeWeight,
        bottom: EdgeWeight,
    ) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(weight: EdgeWeight) -> Self {
        Self::new(weight, weight, weight, weight)
    }

    /// Parse an edge code.
    ///
    /// One letter (`l`, `h`, `d`, `e`) sets all four edges; four letters set
    /// left, top, right, bottom in that order. Case-insensitive.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        let mut weights = [EdgeWeight::Empty; 4];
        let mut count = 0;
        for ch in code.chars() {
            if count == weights.len() {
                return None;
            }
            weights[count] = EdgeWeight::from_code(ch)?;
            count += 1;
        }
        match count {
            1 => Some(Self::uniform(weights[0])),
            4 => {
                let [left, top, right, bottom] = weights;
                Some(Self::new(left, top, right, bottom))
            }
            _ => None,
        }
    }

    /// Four-letter code in left, top, right, bottom order.
    #[must_use]
    pub fn code(&self) -> String {
        [self.left, self.top, self.right, self.bottom]
            .iter()
            .map(|weight| weight.code())
            .collect()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_is_uniform() {
        assert_eq!(Cell::parse("H"), Some(Cell::uniform(EdgeWeight::Heavy)));
        assert_eq!(Cell::parse("e"), Some(Cell::EMPTY));
    }

    #[test]
    fn four_letters_are_left_top_right_bottom() {
        let cell = Cell::parse("eLhD").unwrap();
        assert_eq!(cell.left, EdgeWeight::Empty);
        assert_eq!(cell.top, EdgeWeight::Light);
        assert_eq!(cell.right, EdgeWeight::Heavy);
        assert_eq!(cell.bottom, EdgeWeight::Double);
        assert_eq!(cell.code(), "elhd");
    }

    #[test]
    fn bad_codes_are_rejected() {
        for code in ["", "ll", "lll", "lllll", "x", "llxl"] {
            assert_eq!(Cell::parse(code), None, "{code:?}");
        }
    }

    #[test]
    fn display_uses_long_code() {
        assert_eq!(Cell::uniform(EdgeWeight::Double).to_string(), "dddd");
    }
}
