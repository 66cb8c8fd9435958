use super::rule;
use crate::board::Board;

/// A contiguous run of columns owned by one tick task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Slice {
    pub(super) start_col: usize,
    pub(super) width: usize,
}

impl Slice {
    /// Splits `[0, cols)` into slices of at most `nominal` columns.
    ///
    /// Every column lands in exactly one slice; the last slice may be
    /// narrower than `nominal`. `cols == 0` yields no slices.
    pub(super) fn partition(cols: usize, nominal: usize) -> Vec<Slice> {
        debug_assert!(nominal >= 1, "slice width must be at least 1");

        let mut slices = Vec::with_capacity(cols.div_ceil(nominal.max(1)));
        let mut start_col = 0;
        while start_col < cols {
            let width = nominal.min(cols - start_col);
            slices.push(Slice { start_col, width });
            start_col += width;
        }
        slices
    }

    /// Computes the next generation of this slice's column range.
    ///
    /// Reads only the current generation; the returned run holds
    /// `rows * width` cells, row-major within the slice.
    pub(super) fn compute(&self, board: &Board) -> Vec<bool> {
        let mut cells = Vec::with_capacity(board.rows() * self.width);
        for row in 0..board.rows() {
            for col in self.start_col..self.start_col + self.width {
                cells.push(rule::next_state(board, row, col));
            }
        }
        cells
    }
}
