//! Column/row sizing and line assembly.

use mono_style::{Directive, Encoder, Rgb, TagStream};
use tracing::{debug_span, trace};
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;
use crate::error::TableError;
use crate::grid::{Grid, Neighbors};
use crate::junction::Junction;
use crate::weight::EdgeWeight;

/// Text of one output line, split into border glyph runs and content runs.
#[derive(Debug, Default)]
struct Line {
    runs: Vec<(bool, String)>,
}

impl Line {
    fn push(&mut self, border: bool, text: &str) {
        match self.runs.last_mut() {
            Some((kind, run)) if *kind == border => run.push_str(text),
            _ => self.runs.push((border, text.to_string())),
        }
    }

    fn push_glyph(&mut self, glyph: char, count: usize) {
        let mut buf = [0u8; 4];
        let glyph = glyph.encode_utf8(&mut buf);
        for _ in 0..count {
            self.push(true, glyph);
        }
    }

    fn has_glyph(&self) -> bool {
        self.runs
            .iter()
            .any(|(border, text)| *border && text.chars().any(|c| c != ' '))
    }

    fn plain(&self) -> String {
        self.runs.iter().map(|(_, text)| text.as_str()).collect()
    }

    fn styled<E: Encoder + ?Sized>(&self, color: Rgb, encoder: &E) -> String {
        let mut stream = TagStream::with_capacity(self.runs.len() * 3);
        for (border, text) in &self.runs {
            if *border && !text.trim().is_empty() {
                stream.push_styled(&[Directive::foreground(color)], text.as_str());
            } else {
                stream.push_text(text.as_str());
            }
        }
        stream.encode(encoder)
    }
}

fn horizontal(weight: EdgeWeight) -> char {
    Junction::horizontal(weight).glyph()
}

fn vertical(weight: EdgeWeight) -> char {
    Junction::vertical(weight).glyph()
}

/// Validated grid plus the split, measured contents.
struct Table<'a> {
    grid: Grid,
    contents: Vec<Vec<Vec<&'a str>>>,
    widths: Vec<usize>,
    heights: Vec<usize>,
}

impl<'a> Table<'a> {
    fn build<S, C>(specs: &[Vec<S>], contents: &'a [Vec<C>]) -> Result<Self, TableError>
    where
        S: AsRef<str>,
        C: AsRef<str>,
    {
        let grid = Grid::parse(specs)?;
        if contents.len() != specs.len() {
            return Err(TableError::ContentShape {
                row: None,
                expected: specs.len(),
                found: contents.len(),
            });
        }
        for (row, line) in contents.iter().enumerate() {
            if line.len() != grid.width() {
                return Err(TableError::ContentShape {
                    row: Some(row),
                    expected: grid.width(),
                    found: line.len(),
                });
            }
        }

        let contents: Vec<Vec<Vec<&str>>> = contents
            .iter()
            .map(|line| line.iter().map(|text| text.as_ref().lines().collect()).collect())
            .collect();
        let widths = (0..grid.width())
            .map(|col| {
                contents
                    .iter()
                    .flat_map(|line| line[col].iter())
                    .map(|text| text.width())
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let heights = contents
            .iter()
            .map(|line| line.iter().map(Vec::len).max().unwrap_or(0).max(1))
            .collect();

        Ok(Self {
            grid,
            contents,
            widths,
            heights,
        })
    }

    fn lines(&self) -> Vec<Line> {
        let grid = &self.grid;
        let last_row = grid.height().saturating_sub(1);
        let last_col = grid.width().saturating_sub(1);
        let mut out = Vec::new();

        for row in 0..grid.height() {
            let cells: Vec<(Cell, Neighbors)> = (0..grid.width())
                .map(|col| (grid.get(row as isize, col as isize), grid.neighbors(row, col)))
                .collect();

            let mut top = Line::default();
            for (col, (cell, around)) in cells.iter().enumerate() {
                let corner =
                    Junction::new(around.top.left, cell.top, cell.left, around.left.top);
                top.push_glyph(corner.glyph(), 1);
                top.push_glyph(horizontal(cell.top), self.widths[col] + 2);
                if col == last_col {
                    let corner = Junction::new(
                        around.top.right,
                        EdgeWeight::Empty,
                        cell.right,
                        cell.top,
                    );
                    top.push_glyph(corner.glyph(), 1);
                }
            }
            if top.has_glyph() {
                out.push(top);
            }

            for unit in 0..self.heights[row] {
                let mut middle = Line::default();
                for (col, (cell, _)) in cells.iter().enumerate() {
                    middle.push_glyph(vertical(cell.left), 1);
                    let text = self.contents[row][col].get(unit).copied().unwrap_or("");
                    let pad = self.widths[col].saturating_sub(text.width());
                    middle.push(false, &format!(" {text}{} ", " ".repeat(pad)));
                    if col == last_col {
                        middle.push_glyph(vertical(cell.right), 1);
                    }
                }
                out.push(middle);
            }

            if row == last_row {
                let mut bottom = Line::default();
                for (col, (cell, around)) in cells.iter().enumerate() {
                    let corner = Junction::new(
                        cell.left,
                        cell.bottom,
                        EdgeWeight::Empty,
                        around.left.bottom,
                    );
                    bottom.push_glyph(corner.glyph(), 1);
                    bottom.push_glyph(horizontal(cell.bottom), self.widths[col] + 2);
                    if col == last_col {
                        let corner = Junction::new(
                            cell.right,
                            EdgeWeight::Empty,
                            EdgeWeight::Empty,
                            cell.bottom,
                        );
                        bottom.push_glyph(corner.glyph(), 1);
                    }
                }
                out.push(bottom);
            }
        }
        out
    }
}

fn layout<S, C>(specs: &[Vec<S>], contents: &[Vec<C>]) -> Result<Vec<Line>, TableError>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    let _span = debug_span!(
        "table_draw",
        rows = specs.len(),
        cols = specs.first().map_or(0, Vec::len)
    )
    .entered();

    match Table::build(specs, contents) {
        Ok(table) => {
            trace!(widths = ?table.widths, heights = ?table.heights, "table draw: measured");
            Ok(table.lines())
        }
        Err(err) => {
            trace!(error = %err, "table draw: rejected");
            Err(err)
        }
    }
}

/// Draw a bordered table as plain text lines.
///
/// `edge_specs[r][c]` is the edge code of cell `(r, c)` (see
/// [`Cell::parse`]); `contents[r][c]` is its text, which may span several
/// lines. Columns are as wide as their widest line, rows as tall as their
/// tallest cell. Shared edges are drawn once, from the left/top cell's
/// perspective, with junction glyphs merging the strokes that meet.
///
/// # Errors
///
/// [`TableError`] when the specs are ragged, a code is invalid, or the
/// contents do not match the edge-spec grid. Nothing is drawn in that case.
///
/// # Example
///
/// ```
/// use mono_table::draw_table;
///
/// let lines = draw_table(&[vec!["l", "l"]], &[vec!["a", "b"]])?;
/// assert_eq!(lines, vec!["┌───┬───┐", "│ a │ b │", "└───┴───┘"]);
/// # Ok::<(), mono_table::TableError>(())
/// ```
pub fn draw_table<S, C>(
    edge_specs: &[Vec<S>],
    contents: &[Vec<C>],
) -> Result<Vec<String>, TableError>
where
    S: AsRef<str>,
    C: AsRef<str>,
{
    Ok(layout(edge_specs, contents)?.iter().map(Line::plain).collect())
}

/// [`draw_table`] with every border run wrapped in a foreground directive of
/// `border_color` and each line encoded through `encoder`.
///
/// # Errors
///
/// Same as [`draw_table`].
pub fn draw_table_styled<S, C, E>(
    edge_specs: &[Vec<S>],
    contents: &[Vec<C>],
    border_color: Rgb,
    encoder: &E,
) -> Result<Vec<String>, TableError>
where
    S: AsRef<str>,
    C: AsRef<str>,
    E: Encoder + ?Sized,
{
    Ok(layout(edge_specs, contents)?
        .iter()
        .map(|line| line.styled(border_color, encoder))
        .collect())
}

/// Edge specs for a grid of full-width rules.
///
/// `horizontal` holds one weight letter per horizontal rule (rows + 1) and
/// `vertical` one per vertical rule (columns + 1). Cell `(r, c)` gets
/// `vertical[c] horizontal[r] vertical[c + 1] horizontal[r + 1]`. Letters are
/// not validated here; [`draw_table`] reports bad ones.
#[must_use]
pub fn linear_specs(horizontal: &str, vertical: &str) -> Vec<Vec<String>> {
    let horizontal: Vec<char> = horizontal.chars().collect();
    let vertical: Vec<char> = vertical.chars().collect();
    horizontal
        .windows(2)
        .map(|h| {
            vertical
                .windows(2)
                .map(|v| [v[0], h[0], v[1], h[1]].iter().collect())
                .collect()
        })
        .collect()
}
