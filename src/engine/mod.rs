mod rule;
mod slice;

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use rayon::prelude::*;

use self::slice::Slice;
use crate::board::Board;
use crate::error::TickError;

/// Nominal number of columns handed to each tick task.
///
/// Correctness does not depend on this value, only throughput; anything
/// from 1 to the full board width produces the same generation.
pub const SLICE_WIDTH: usize = 32;

/// Advances the board by one generation.
#[inline]
pub fn advance(board: &mut Board) -> Result<(), TickError> {
    advance_with(board, SLICE_WIDTH)
}

/// Advances the board by one generation using the given nominal slice width.
///
/// The board is partitioned into column slices, each slice's next generation
/// is computed in parallel against the immutable current cells, and after
/// every task has finished the results are merged into one fresh buffer and
/// swapped in as a single step. On error the board keeps its current
/// generation. A width of 0 is treated as 1.
pub fn advance_with(board: &mut Board, slice_width: usize) -> Result<(), TickError> {
    let (rows, cols) = (board.rows(), board.cols());
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let slices = Slice::partition(cols, slice_width.max(1));
    let total = slices.len();

    // One task per slice. Each panic is caught in place so sibling slices
    // run to completion and the failure surfaces only after the join.
    let current = &*board;
    let outputs: Vec<(Slice, thread::Result<Vec<bool>>)> = slices
        .into_par_iter()
        .map(|slice| {
            let cells = panic::catch_unwind(AssertUnwindSafe(|| slice.compute(current)));
            (slice, cells)
        })
        .collect();

    // merge the disjoint column runs into the next generation's buffer
    let mut next = vec![false; rows * cols];
    let mut failed = 0;
    for (slice, cells) in outputs {
        let Ok(cells) = cells else {
            failed += 1;
            continue;
        };
        for row in 0..rows {
            let dst = row * cols + slice.start_col;
            let src = row * slice.width;
            next[dst..dst + slice.width].copy_from_slice(&cells[src..src + slice.width]);
        }
    }

    if failed > 0 {
        return Err(TickError::SliceFailed { failed, total });
    }
    board.replace_cells(next)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(lines: &[&str]) -> Board {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.len());
        let mut board = Board::new(rows, cols).expect("test board");
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set_alive(row, col).expect("in bounds");
                }
            }
        }
        board
    }

    #[test]
    fn empty_board_stays_empty() {
        let mut board = board_from(&["...", "...", "..."]);

        advance(&mut board).expect("tick");
        assert_eq!(board.render(), vec!["...", "...", "..."]);
    }

    #[test]
    fn zero_sized_boards_are_a_no_op() {
        for (rows, cols) in [(0, 0), (0, 5), (5, 0)] {
            let mut board = Board::new(rows, cols).expect("degenerate board");
            advance(&mut board).expect("tick");
        }
    }

    #[test]
    fn lone_cell_dies_of_underpopulation() {
        let mut board = board_from(&["...", ".#.", "..."]);

        advance(&mut board).expect("tick");
        assert!(!board.is_alive(1, 1));
    }

    #[test]
    fn cell_with_three_neighbors_is_born() {
        let mut board = board_from(&["##.", "#..", "..."]);

        advance(&mut board).expect("tick");
        assert!(board.is_alive(1, 1));
    }

    #[test]
    fn block_is_a_still_life() {
        let seed = ["....", ".##.", ".##.", "...."];
        let mut board = board_from(&seed);

        for _ in 0..5 {
            advance(&mut board).expect("tick");
            assert_eq!(board.render(), seed);
        }
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = [".....", ".....", ".###.", ".....", "....."];
        let vertical = [".....", "..#..", "..#..", "..#..", "....."];
        let mut board = board_from(&horizontal);

        advance(&mut board).expect("tick");
        assert_eq!(board.render(), vertical);

        advance(&mut board).expect("tick");
        assert_eq!(board.render(), horizontal);
    }

    #[test]
    fn corner_block_survives_without_wraparound() {
        // with toroidal wrap these corner cells would see phantom neighbors
        let seed = ["##..", "##..", "....", "...."];
        let mut board = board_from(&seed);

        advance(&mut board).expect("tick");
        assert_eq!(board.render(), seed);
    }

    #[test]
    fn every_slice_width_produces_the_same_generation() {
        let seed = [
            "..........",
            ".###...##.",
            "........#.",
            ".#.....#..",
            "..........",
        ];
        let expected = {
            let mut board = board_from(&seed);
            advance_with(&mut board, 1).expect("tick");
            board.render()
        };

        for width in [2, 3, 7, 10, usize::MAX] {
            let mut board = board_from(&seed);
            advance_with(&mut board, width).expect("tick");
            assert_eq!(board.render(), expected, "slice width {width}");
        }
    }

    #[test]
    fn zero_slice_width_is_clamped() {
        let mut board = board_from(&[".#.", ".#.", ".#."]);

        advance_with(&mut board, 0).expect("tick");
        assert_eq!(board.render(), vec!["...", "###", "..."]);
    }

    #[test]
    fn tick_preserves_the_cell_count_invariant() {
        let mut board = board_from(&["#.#", ".#.", "#.#"]);

        advance(&mut board).expect("tick");
        assert_eq!(board.cell_count(), 9);
    }
}
