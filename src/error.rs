use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("a {rows}x{cols} board cannot be represented")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("replacement buffer holds {got} cells, expected {expected}")]
    BufferSize { got: usize, expected: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '{key}<count>' header line")]
    MissingHeader { key: &'static str },

    #[error("malformed header \"{line}\", expected '{key}' followed by 1-10 digits")]
    MalformedHeader { key: &'static str, line: String },

    #[error("board row {row} is {got} characters long, expected {expected}")]
    RowLength {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("unexpected character '{got}' at row {row}, column {col}")]
    UnexpectedChar { row: usize, col: usize, got: char },

    #[error("expected {expected} board rows, found only {got}")]
    MissingRows { got: usize, expected: usize },

    #[error("unexpected content after the last board row")]
    TrailingContent,

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickError {
    #[error("{failed} of {total} slice tasks did not complete")]
    SliceFailed { failed: usize, total: usize },

    #[error(transparent)]
    Board(#[from] BoardError),
}
