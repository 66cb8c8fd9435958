use std::fmt;

use crate::error::BoardError;

/// A fixed rectangular cell grid, stored row-major.
///
/// The board has no toroidal wraparound: coordinates outside
/// `[0, rows) x [0, cols)` read as dead via [`Board::is_alive`], so the
/// neighbor rule needs no special-casing at the edges.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Creates an all-dead board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(BoardError::InvalidDimension { rows, cols })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::InvalidDimension { rows, cols })?;
        cells.resize(len, false);

        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// Out-of-range coordinates read as dead rather than erroring; this is
    /// the wrap-to-dead policy the neighbor count relies on.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    pub fn set_alive(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.set(row, col, true)
    }

    pub fn set_dead(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.set(row, col, false)
    }

    fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = alive;
        Ok(())
    }

    /// Renders the board as `rows` lines of `cols` characters, `'#'` for
    /// alive and `'.'` for dead.
    pub fn render(&self) -> Vec<String> {
        (0..self.rows).map(|row| self.row_line(row)).collect()
    }

    fn row_line(&self, row: usize) -> String {
        (0..self.cols)
            .map(|col| if self.is_alive(row, col) { '#' } else { '.' })
            .collect()
    }

    /// Swaps in a freshly computed generation.
    ///
    /// The replacement must hold exactly `rows * cols` cells; on error the
    /// current generation is left untouched.
    pub fn replace_cells(&mut self, cells: Vec<bool>) -> Result<(), BoardError> {
        if cells.len() != self.cells.len() {
            return Err(BoardError::BufferSize {
                got: cells.len(),
                expected: self.cells.len(),
            });
        }
        self.cells = cells;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            f.write_str(&self.row_line(row))?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}
