//! Conway's Game of Life on a finite, non-wrapping grid.

pub mod error;
pub mod grid;
pub mod gridfile;
pub mod pos;

pub use error::GridError;
pub use grid::{Cell, Glyphs, Grid, KMAX, MAX_DIMENSION_LIMIT};
pub use pos::Position;
