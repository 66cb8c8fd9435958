use crate::board::Board;

/// Computes the next state of the cell at `(row, col)` from the current
/// generation.
///
/// Standard Life rules: a live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3. Everything else dies or stays dead.
pub(super) fn next_state(board: &Board, row: usize, col: usize) -> bool {
    matches!(
        (board.is_alive(row, col), alive_neighbors(board, row, col)),
        (true, 2) | (_, 3)
    )
}

/// Counts the live cells among the 8 neighbors of `(row, col)`.
///
/// Probes one ring outside the live coordinates; both underflow below zero
/// and the board's wrap-to-dead read make those probes count as dead.
fn alive_neighbors(board: &Board, row: usize, col: usize) -> u32 {
    let mut count = 0;
    for dr in -1..=1isize {
        for dc in -1..=1isize {
            if dr == 0 && dc == 0 {
                continue;
            }
            let probe = row.checked_add_signed(dr).zip(col.checked_add_signed(dc));
            if probe.is_some_and(|(r, c)| board.is_alive(r, c)) {
                count += 1;
            }
        }
    }
    count
}
