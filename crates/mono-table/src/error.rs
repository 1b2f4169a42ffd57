use std::fmt;

/// Table input rejected before any drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An edge-spec row whose length differs from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Contents do not match the edge-spec grid. `row` is `None` when the
    /// number of rows differs, otherwise it names the row whose column count
    /// differs.
    ContentShape {
        row: Option<usize>,
        expected: usize,
        found: usize,
    },
    /// An edge code that is not one letter or four letters over `e l h d`.
    InvalidEdgeCode { row: usize, col: usize, code: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "edge spec row {row} has {found} cells, expected {expected}"
            ),
            Self::ContentShape {
                row: None,
                expected,
                found,
            } => write!(f, "contents have {found} rows, expected {expected}"),
            Self::ContentShape {
                row: Some(row),
                expected,
                found,
            } => write!(
                f,
                "contents row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidEdgeCode { row, col, code } => {
                write!(f, "invalid edge code {code:?} at ({row}, {col})")
            }
        }
    }
}

impl std::error::Error for TableError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_location() {
        let err = TableError::InvalidEdgeCode {
            row: 1,
            col: 2,
            code: "lx".to_string(),
        };
        assert_eq!(err.to_string(), "invalid edge code \"lx\" at (1, 2)");

        let err = TableError::ContentShape {
            row: None,
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "contents have 3 rows, expected 2");
    }
}
