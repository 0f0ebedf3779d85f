//! Plain text grid files.
//!
//! ```text
//! <rows> <cols>
//! <cell> <cell> ... one line per row
//! ```
//!
//! Any cell value greater than zero is alive. Missing or unreadable cell values
//! leave the rest of the grid dead.

use std::{
    fs, io, iter,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use thiserror::Error;

use crate::{
    error::GridError,
    grid::{self, Cell, Grid},
};

#[derive(Debug, Error)]
pub enum GridFileError {
    #[error("no such file: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to save file: {}", path.display())]
    FileWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

pub fn read_grid<P>(path: P, max_dimension: usize) -> Result<Grid, GridFileError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| GridFileError::FileNotFound {
        path: path.to_owned(),
        source,
    })?;

    let grid = parse_grid(&String::from_utf8_lossy(&bytes), max_dimension)?;

    tracing::debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "read grid file"
    );

    Ok(grid)
}

pub fn write_grid<P>(path: P, grid: &Grid) -> Result<(), GridFileError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    fs::write(path, format_grid(grid)).map_err(|source| GridFileError::FileWriteFailed {
        path: path.to_owned(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "wrote grid file");
    Ok(())
}

pub fn parse_grid(text: &str, max_dimension: usize) -> Result<Grid, GridError> {
    let mut tokens = text.split_whitespace();

    // An unreadable dimension counts as zero.
    let mut next_dimension = || {
        tokens
            .next()
            .and_then(|token| token.parse::<i64>().ok())
            .unwrap_or(0)
    };

    let rows = next_dimension();
    let cols = next_dimension();

    if rows <= 0 || cols <= 0 {
        return Err(GridError::IllegalSize);
    }

    let rows = usize::try_from(rows).unwrap_or(usize::MAX);
    let cols = usize::try_from(cols).unwrap_or(usize::MAX);
    let cell_count = grid::check_dimensions(rows, cols, max_dimension)?;

    let cells = tokens
        .map_while(|token| token.parse::<f64>().ok())
        .map(|value| if value > 0.0 { Cell::Alive } else { Cell::Dead })
        .chain(iter::repeat(Cell::Dead))
        .take(cell_count)
        .collect();

    Ok(Grid::with_cells(rows, cols, cells))
}

pub fn format_grid(grid: &Grid) -> String {
    let header = format!("{} {}", grid.rows(), grid.cols());

    let rows = grid.row_slices().map(|row| {
        row.iter()
            .map(|cell| if cell.is_alive() { '1' } else { '0' })
            .join(" ")
    });

    let mut text = iter::once(header).chain(rows).join("\n");
    text.push('\n');
    text
}
