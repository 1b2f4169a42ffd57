//! Rectangular grid of cell edge specs with sentinel neighbor lookup.

use std::fmt::Write as _;

use crate::cell::Cell;
use crate::error::TableError;

/// The four cells around a position; outside positions read as [`Cell::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    pub left: Cell,
    pub top: Cell,
    pub right: Cell,
    pub bottom: Cell,
}

/// Row-major cell grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parse rows of edge codes.
    ///
    /// Every row must have as many codes as the first one. A grid with no
    /// rows, or with rows of no codes, is empty.
    ///
    /// # Errors
    ///
    /// [`TableError::Ragged`] for a row of the wrong length,
    /// [`TableError::InvalidEdgeCode`] for a code [`Cell::parse`] rejects.
    pub fn parse<S: AsRef<str>>(specs: &[Vec<S>]) -> Result<Self, TableError> {
        let width = specs.first().map_or(0, Vec::len);
        for (row, line) in specs.iter().enumerate() {
            if line.len() != width {
                return Err(TableError::Ragged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
        }
        if width == 0 {
            return Ok(Self::default());
        }

        let mut cells = Vec::with_capacity(width * specs.len());
        for (row, line) in specs.iter().enumerate() {
            for (col, code) in line.iter().enumerate() {
                let code = code.as_ref();
                let cell = Cell::parse(code).ok_or_else(|| TableError::InvalidEdgeCode {
                    row,
                    col,
                    code: code.to_string(),
                })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            width,
            height: specs.len(),
            cells,
        })
    }

    /// Build a grid directly from cells, row-major.
    ///
    /// Returns `None` unless `cells.len() == width * height`.
    #[must_use]
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        if width.checked_mul(height)? != cells.len() {
            return None;
        }
        if width == 0 || height == 0 {
            return Some(Self::default());
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`, or [`Cell::EMPTY`] outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Cell {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return Cell::EMPTY;
        };
        if row >= self.height || col >= self.width {
            return Cell::EMPTY;
        }
        self.cells[row * self.width + col]
    }

    #[must_use]
    pub fn neighbors(&self, row: usize, col: usize) -> Neighbors {
        let (r, c) = (row as isize, col as isize);
        Neighbors {
            left: self.get(r, c - 1),
            top: self.get(r - 1, c),
            right: self.get(r, c + 1),
            bottom: self.get(r + 1, c),
        }
    }

    /// Debug listing: one line per cell with its code and its neighbors' codes.
    ///
    /// ```text
    /// (0, 0) llll  left eeee  top eeee  right hhhh  bottom eeee
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let n = self.neighbors(row, col);
                let _ = writeln!(
                    out,
                    "({row}, {col}) {}  left {}  top {}  right {}  bottom {}",
                    self.cells[row * self.width + col],
                    n.left,
                    n.top,
                    n.right,
                    n.bottom
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weight::EdgeWeight;

    fn grid(rows: &[&[&str]]) -> Result<Grid, TableError> {
        let specs: Vec<Vec<&str>> = rows.iter().map(|row| row.to_vec()).collect();
        Grid::parse(&specs)
    }

    #[test]
    fn parses_rectangular_specs() {
        let g = grid(&[&["l", "h"], &["d", "elhd"]]).unwrap();
        assert_eq!((g.width(), g.height()), (2, 2));
        assert_eq!(g.get(0, 1), Cell::uniform(EdgeWeight::Heavy));
        assert_eq!(g.get(1, 1).code(), "elhd");
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            grid(&[&["l", "l"], &["l"]]),
            Err(TableError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn invalid_codes_are_located() {
        assert_eq!(
            grid(&[&["l", "l"], &["l", "lq"]]),
            Err(TableError::InvalidEdgeCode {
                row: 1,
                col: 1,
                code: "lq".to_string()
            })
        );
    }

    #[test]
    fn outside_positions_read_as_sentinel() {
        let g = grid(&[&["l"]]).unwrap();
        assert_eq!(g.get(-1, 0), Cell::EMPTY);
        assert_eq!(g.get(0, 1), Cell::EMPTY);
        let n = g.neighbors(0, 0);
        assert_eq!(n.left, Cell::EMPTY);
        assert_eq!(n.top, Cell::EMPTY);
        assert_eq!(n.right, Cell::EMPTY);
        assert_eq!(n.bottom, Cell::EMPTY);
    }

    #[test]
    fn neighbors_inside_the_grid() {
        let g = grid(&[&["l", "h"], &["d", "e"]]).unwrap();
        let n = g.neighbors(1, 1);
        assert_eq!(n.left, Cell::uniform(EdgeWeight::Double));
        assert_eq!(n.top, Cell::uniform(EdgeWeight::Heavy));
        assert_eq!(n.right, Cell::EMPTY);
    }

    #[test]
    fn empty_specs_make_an_empty_grid() {
        assert!(grid(&[]).unwrap().is_empty());
        assert!(grid(&[&[], &[]]).unwrap().is_empty());
    }

    #[test]
    fn from_cells_checks_the_count() {
        assert!(Grid::from_cells(2, 1, vec![Cell::EMPTY]).is_none());
        let g = Grid::from_cells(1, 1, vec![Cell::EMPTY]).unwrap();
        assert_eq!(g.get(0, 0), Cell::EMPTY);
    }

    #[test]
    fn describe_lists_cells_with_neighbors() {
        let g = grid(&[&["l", "h"]]).unwrap();
        assert_eq!(
            g.describe(),
            "(0, 0) llll  left eeee  top eeee  right hhhh  bottom eeee\n\
             (0, 1) hhhh  left llll  top eeee  right eeee  bottom eeee\n"
        );
    }
}
