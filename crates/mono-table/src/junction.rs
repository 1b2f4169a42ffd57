//! Box-drawing glyph lookup keyed on the four segments meeting at a point.
//!
//! The table is total: every one of the 256 `(north, east, south, west)`
//! combinations resolves to a glyph. Light/heavy combinations all exist in
//! Unicode. Double lines only exist next to light lines and never as stubs,
//! so keys involving a double segment are normalized first:
//!
//! - on an axis carrying a double segment, every present segment is double
//! - heavy segments on the other axis become light
//! - a lone stub with nothing on the crossing axis extends to a full line

use std::sync::LazyLock;

use crate::weight::EdgeWeight;

/// The segments leaving a point in each compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Junction {
    pub north: EdgeWeight,
    pub east: EdgeWeight,
    pub south: EdgeWeight,
    pub west: EdgeWeight,
}

impl Junction {
    #[must_use]
    pub const fn new(
        north: EdgeWeight,
        east: EdgeWeight,
        south: EdgeWeight,
        west: EdgeWeight,
    ) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Horizontal run (`west == east == weight`).
    #[must_use]
    pub const fn horizontal(weight: EdgeWeight) -> Self {
        Self::new(EdgeWeight::Empty, weight, EdgeWeight::Empty, weight)
    }

    /// Vertical run (`north == south == weight`).
    #[must_use]
    pub const fn vertical(weight: EdgeWeight) -> Self {
        Self::new(weight, EdgeWeight::Empty, weight, EdgeWeight::Empty)
    }

    const fn index(self) -> usize {
        self.north.index() * 64
            + self.east.index() * 16
            + self.south.index() * 4
            + self.west.index()
    }

    const fn from_index(index: usize) -> Self {
        Self::new(
            EdgeWeight::ALL[(index >> 6) & 3],
            EdgeWeight::ALL[(index >> 4) & 3],
            EdgeWeight::ALL[(index >> 2) & 3],
            EdgeWeight::ALL[index & 3],
        )
    }

    /// Every possible key, in index order.
    pub fn all() -> impl Iterator<Item = Junction> {
        (0..256).map(Self::from_index)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }

    fn has_double(self) -> bool {
        [self.north, self.east, self.south, self.west].contains(&EdgeWeight::Double)
    }

    /// The key whose glyph is drawn for `self`.
    #[must_use]
    pub fn normalized(self) -> Junction {
        if !self.has_double() {
            return self;
        }
        let vertical_double = self.north == EdgeWeight::Double || self.south == EdgeWeight::Double;
        let horizontal_double = self.east == EdgeWeight::Double || self.west == EdgeWeight::Double;
        let fix = |weight: EdgeWeight, double_axis: bool| match weight {
            EdgeWeight::Empty => EdgeWeight::Empty,
            _ if double_axis => EdgeWeight::Double,
            EdgeWeight::Heavy => EdgeWeight::Light,
            other => other,
        };
        let mut key = Junction::new(
            fix(self.north, vertical_double),
            fix(self.east, horizontal_double),
            fix(self.south, vertical_double),
            fix(self.west, horizontal_double),
        );

        let vertical_present = !key.north.is_empty() || !key.south.is_empty();
        let horizontal_present = !key.east.is_empty() || !key.west.is_empty();
        if vertical_present && !horizontal_present {
            key.north = EdgeWeight::Double;
            key.south = EdgeWeight::Double;
        } else if horizontal_present && !vertical_present {
            key.east = EdgeWeight::Double;
            key.west = EdgeWeight::Double;
        }
        key
    }

    /// The box-drawing glyph for this junction; a space when nothing meets.
    #[must_use]
    pub fn glyph(self) -> char {
        GLYPHS[self.index()]
    }
}

use EdgeWeight::{Double as D, Empty as E, Heavy as H, Light as L};

/// Exact glyphs as `(glyph, [north, east, south, west])`.
static GLYPH_ENTRIES: &[(char, [EdgeWeight; 4])] = &[
    (' ', [E, E, E, E]),
    // Straight lines.
    ('─', [E, L, E, L]),
    ('━', [E, H, E, H]),
    ('│', [L, E, L, E]),
    ('┃', [H, E, H, E]),
    // Corners.
    ('┌', [E, L, L, E]),
    ('┍', [E, H, L, E]),
    ('┎', [E, L, H, E]),
    ('┏', [E, H, H, E]),
    ('┐', [E, E, L, L]),
    ('┑', [E, E, L, H]),
    ('┒', [E, E, H, L]),
    ('┓', [E, E, H, H]),
    ('└', [L, L, E, E]),
    ('┕', [L, H, E, E]),
    ('┖', [H, L, E, E]),
    ('┗', [H, H, E, E]),
    ('┘', [L, E, E, L]),
    ('┙', [L, E, E, H]),
    ('┚', [H, E, E, L]),
    ('┛', [H, E, E, H]),
    // Tees opening east.
    ('├', [L, L, L, E]),
    ('┝', [L, H, L, E]),
    ('┞', [H, L, L, E]),
    ('┟', [L, L, H, E]),
    ('┠', [H, L, H, E]),
    ('┡', [H, H, L, E]),
    ('┢', [L, H, H, E]),
    ('┣', [H, H, H, E]),
    // Tees opening west.
    ('┤', [L, E, L, L]),
    ('┥', [L, E, L, H]),
    ('┦', [H, E, L, L]),
    ('┧', [L, E, H, L]),
    ('┨', [H, E, H, L]),
    ('┩', [H, E, L, H]),
    ('┪', [L, E, H, H]),
    ('┫', [H, E, H, H]),
    // Tees opening south.
    ('┬', [E, L, L, L]),
    ('┭', [E, L, L, H]),
    ('┮', [E, H, L, L]),
    ('┯', [E, H, L, H]),
    ('┰', [E, L, H, L]),
    ('┱', [E, L, H, H]),
    ('┲', [E, H, H, L]),
    ('┳', [E, H, H, H]),
    // Tees opening north.
    ('┴', [L, L, E, L]),
    ('┵', [L, L, E, H]),
    ('┶', [L, H, E, L]),
    ('┷', [L, H, E, H]),
    ('┸', [H, L, E, L]),
    ('┹', [H, L, E, H]),
    ('┺', [H, H, E, L]),
    ('┻', [H, H, E, H]),
    // Crosses.
    ('┼', [L, L, L, L]),
    ('┽', [L, L, L, H]),
    ('┾', [L, H, L, L]),
    ('┿', [L, H, L, H]),
    ('╀', [H, L, L, L]),
    ('╁', [L, L, H, L]),
    ('╂', [H, L, H, L]),
    ('╃', [H, L, L, H]),
    ('╄', [H, H, L, L]),
    ('╅', [L, L, H, H]),
    ('╆', [L, H, H, L]),
    ('╇', [H, H, L, H]),
    ('╈', [L, H, H, H]),
    ('╉', [H, L, H, H]),
    ('╊', [H, H, H, L]),
    ('╋', [H, H, H, H]),
    // Stubs.
    ('╴', [E, E, E, L]),
    ('╵', [L, E, E, E]),
    ('╶', [E, L, E, E]),
    ('╷', [E, E, L, E]),
    ('╸', [E, E, E, H]),
    ('╹', [H, E, E, E]),
    ('╺', [E, H, E, E]),
    ('╻', [E, E, H, E]),
    ('╼', [E, H, E, L]),
    ('╽', [L, E, H, E]),
    ('╾', [E, L, E, H]),
    ('╿', [H, E, L, E]),
    // Double lines, alone or crossing light lines.
    ('═', [E, D, E, D]),
    ('║', [D, E, D, E]),
    ('╒', [E, D, L, E]),
    ('╓', [E, L, D, E]),
    ('╔', [E, D, D, E]),
    ('╕', [E, E, L, D]),
    ('╖', [E, E, D, L]),
    ('╗', [E, E, D, D]),
    ('╘', [L, D, E, E]),
    ('╙', [D, L, E, E]),
    ('╚', [D, D, E, E]),
    ('╛', [L, E, E, D]),
    ('╜', [D, E, E, L]),
    ('╝', [D, E, E, D]),
    ('╞', [L, D, L, E]),
    ('╟', [D, L, D, E]),
    ('╠', [D, D, D, E]),
    ('╡', [L, E, L, D]),
    ('╢', [D, E, D, L]),
    ('╣', [D, E, D, D]),
    ('╤', [E, D, L, D]),
    ('╥', [E, L, D, L]),
    ('╦', [E, D, D, D]),
    ('╧', [L, D, E, D]),
    ('╨', [D, L, E, L]),
    ('╩', [D, D, E, D]),
    ('╪', [L, D, L, D]),
    ('╫', [D, L, D, L]),
    ('╬', [D, D, D, D]),
];

static GLYPHS: LazyLock<[char; 256]> = LazyLock::new(build_glyphs);

fn build_glyphs() -> [char; 256] {
    let mut exact = [None; 256];
    for &(glyph, [north, east, south, west]) in GLYPH_ENTRIES {
        exact[Junction::new(north, east, south, west).index()] = Some(glyph);
    }
    std::array::from_fn(|index| {
        exact[index]
            .or_else(|| exact[Junction::from_index(index).normalized().index()])
            .unwrap_or(' ')
    })
}
