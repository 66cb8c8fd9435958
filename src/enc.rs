use crate::board::Board;
use crate::error::ParseError;

const MAX_HEADER_DIGITS: usize = 10;

/// The plain-text board format:
///
/// ```notrust
/// Rows:<count>
/// Cols:<count>
/// <cols characters of '#'/'.'>   (repeated rows times)
/// ```
///
/// Header counts are 1-10 decimal digits with no surrounding whitespace,
/// and nothing may follow the last board row. The same text is produced by
/// [`PlainText::encode`], so encode and decode round-trip.
pub struct PlainText;

impl PlainText {
    pub fn encode(board: &Board) -> String {
        let mut out = String::with_capacity((board.cols() + 1) * board.rows() + 24);
        out.push_str(&format!("Rows:{}\n", board.rows()));
        out.push_str(&format!("Cols:{}\n", board.cols()));
        for line in board.render() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn decode(input: &str) -> Result<Board, ParseError> {
        let mut lines = input.lines();
        let rows = parse_header(lines.next(), "Rows:")?;
        let cols = parse_header(lines.next(), "Cols:")?;

        let mut board = Board::new(rows, cols)?;
        for row in 0..rows {
            let line = lines.next().ok_or(ParseError::MissingRows {
                got: row,
                expected: rows,
            })?;
            decode_row(&mut board, row, line)?;
        }
        if lines.next().is_some() {
            return Err(ParseError::TrailingContent);
        }
        Ok(board)
    }
}

fn parse_header(line: Option<&str>, key: &'static str) -> Result<usize, ParseError> {
    let line = line.ok_or(ParseError::MissingHeader { key })?;
    let malformed = || ParseError::MalformedHeader {
        key,
        line: line.to_owned(),
    };

    let value = line.strip_prefix(key).ok_or_else(malformed)?;
    if value.is_empty()
        || value.len() > MAX_HEADER_DIGITS
        || !value.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }
    value.parse().map_err(|_| malformed())
}

fn decode_row(board: &mut Board, row: usize, line: &str) -> Result<(), ParseError> {
    let got = line.chars().count();
    if got != board.cols() {
        return Err(ParseError::RowLength {
            row,
            got,
            expected: board.cols(),
        });
    }
    for (col, ch) in line.chars().enumerate() {
        match ch {
            '#' => board.set_alive(row, col)?,
            '.' => {}
            got => return Err(ParseError::UnexpectedChar { row, col, got }),
        }
    }
    Ok(())
}
