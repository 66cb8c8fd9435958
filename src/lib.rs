//! Conway's Game of Life on a fixed rectangular board.
//!
//! The board has an implicit dead border (no toroidal wraparound); each tick
//! splits the columns into slices that are computed in parallel and committed
//! as one atomic buffer swap.

pub mod board;
pub mod enc;
pub mod engine;
pub mod error;

pub use board::Board;
pub use enc::PlainText;
pub use engine::{SLICE_WIDTH, advance};
pub use error::{BoardError, ParseError, TickError};
