use itertools::Itertools;

use crate::{error::GridError, pos::Position};

/// Exclusive upper bound on either grid dimension unless a caller picks another one.
pub const KMAX: usize = 120;

/// Largest bound a caller may configure in place of [`KMAX`].
pub const MAX_DIMENSION_LIMIT: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid bounded by [`KMAX`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::with_limit(rows, cols, KMAX)
    }

    /// Creates an all-dead grid, rejecting any dimension that is zero or `>= max_dimension`.
    pub fn with_limit(rows: usize, cols: usize, max_dimension: usize) -> Result<Self, GridError> {
        let cell_count = check_dimensions(rows, cols, max_dimension)?;

        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); cell_count],
        })
    }

    pub(crate) fn with_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell<P>(&self, pos: P) -> Option<Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    /// Marks one cell alive. Marking an already living cell is a no-op.
    pub fn set_alive<P>(&mut self, pos: P) -> Result<(), GridError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let index = self.pos_to_index(pos).ok_or(GridError::OutOfBounds {
            row: pos.row,
            col: pos.col,
            rows: self.rows,
            cols: self.cols,
        })?;

        self.cells[index] = Cell::Alive;
        Ok(())
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Number of living cells among the up to eight cells around `pos`.
    /// Positions past an edge are skipped, the grid does not wrap.
    pub fn count_live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        let center = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|[rel_row, rel_col]| {
                let neighbor = Position {
                    row: center.row.checked_add_signed(*rel_row)?,
                    col: center.col.checked_add_signed(*rel_col)?,
                };

                self.cell(neighbor)
            })
            .filter(|neighbor| neighbor.is_alive())
            .count()
    }

    /// Applies one generation to every cell at once.
    ///
    /// The next generation is collected from the untouched current cells before
    /// anything is replaced, so no cell ever sees a neighbor that was already updated.
    pub fn advance(&mut self) {
        let next_cells = self
            .enumerate_cells()
            .map(|(pos, cell)| cell.next(self.count_live_neighbors(pos)))
            .collect();

        self.cells = next_cells;

        tracing::trace!(live = self.live_count(), "advanced one generation");
    }

    pub fn render(&self, glyphs: Glyphs) -> Vec<String> {
        self.row_slices()
            .map(|row| row.iter().map(|cell| glyphs.glyph(*cell)).join(" "))
            .collect()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(col + row * self.cols)
    }

    fn index_to_pos(&self, index: usize) -> Position {
        Position {
            row: index / self.cols,
            col: index % self.cols,
        }
    }
}

pub(crate) fn check_dimensions(
    rows: usize,
    cols: usize,
    max_dimension: usize,
) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::IllegalSize);
    }

    if rows >= max_dimension || cols >= max_dimension {
        return Err(GridError::SizeTooLarge { max_dimension });
    }

    // The cell count can only overflow under a bound far above KMAX.
    rows.checked_mul(cols).ok_or(GridError::SizeTooLarge { max_dimension })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    Alive,

    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Standard Life rule: survive on 2 or 3 neighbors, birth on exactly 3.
    pub fn next(self, live_neighbors: usize) -> Cell {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub alive: char,
    pub dead: char,
}

impl Glyphs {
    pub fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Alive => self.alive,
            Cell::Dead => self.dead,
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: '■',
            dead: '□',
        }
    }
}
