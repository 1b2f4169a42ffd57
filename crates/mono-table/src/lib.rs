#![forbid(unsafe_code)]

//! Bordered tables drawn with Unicode box-drawing glyphs.
//!
//! Each cell names the weight of its four edges (empty, light, heavy or
//! double). Where edges of neighboring cells meet, [`Junction`] picks the
//! glyph that merges them, so mixed-weight grids still draw as continuous
//! strokes.
//!
//! ```
//! use mono_table::{draw_table, linear_specs};
//!
//! let specs = linear_specs("hlh", "lll");
//! let contents = vec![vec!["id", "name"], vec!["7", "ada"]];
//! for line in draw_table(&specs, &contents)? {
//!     println!("{line}");
//! }
//! # Ok::<(), mono_table::TableError>(())
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod junction;
mod layout;
pub mod weight;

pub use cell::Cell;
pub use error::TableError;
pub use grid::{Grid, Neighbors};
pub use junction::Junction;
pub use layout::{draw_table, draw_table_styled, linear_specs};
pub use weight::EdgeWeight;
