//! Placement text: the piece-placement field of FEN.
//!
//! Rows are separated by '/', the first one being row 0 (Black's back
//! rank). Pieces are case-coded (uppercase White) and digits count empty
//! squares.

use std::str::FromStr;

use super::error::LayoutError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a board from placement text.
    ///
    /// Surrounding whitespace is ignored; anything after the first space
    /// (such as the remaining FEN fields) is ignored too.
    pub fn from_placement(text: &str) -> Result<Self, LayoutError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0;
            for c in row_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|&n| n > 0) {
                    col += skip as usize;
                } else {
                    let cell = Piece::from_case_char(c).ok_or(LayoutError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(LayoutError::TooManyCols { row, cols: col + 1 });
                    }
                    board.cells[row][col] = Some(cell);
                    col += 1;
                }
            }
            if col > 8 {
                return Err(LayoutError::TooManyCols { row, cols: col });
            }
            if col < 8 {
                return Err(LayoutError::TooFewCols { row, cols: col });
            }
        }

        Ok(board)
    }

    /// Convert the board to placement text.
    #[must_use]
    pub fn to_placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_case_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_placement(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_starting_placement() {
        assert_eq!(Board::new().to_placement(), START);
        assert_eq!(Board::from_placement(START), Ok(Board::new()));
    }

    #[test]
    fn test_trailing_fen_fields_ignored() {
        let board: Board = format!("{START} w KQkq - 0 1").parse().expect("valid placement");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_row_zero_is_first() {
        let board = Board::from_placement("k7/8/8/8/8/8/8/7K").expect("valid placement");
        assert_eq!(board.piece_at(Square(0, 0)), Some((Color::Black, Piece::King)));
        assert_eq!(board.piece_at(Square(7, 7)), Some((Color::White, Piece::King)));
        assert_eq!(board.to_placement(), "k7/8/8/8/8/8/8/7K");
    }

    #[test]
    fn test_wrong_row_count() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(LayoutError::WrongRowCount { found: 3 })
        );
        assert_eq!(
            Board::from_placement(""),
            Err(LayoutError::WrongRowCount { found: 1 })
        );
    }

    #[test]
    fn test_invalid_piece() {
        assert_eq!(
            Board::from_placement("x7/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPiece { char: 'x' })
        );
    }

    #[test]
    fn test_zero_skip_rejected() {
        assert_eq!(
            Board::from_placement("08/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidPiece { char: '0' })
        );
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(
            Board::from_placement("ppppppppp/8/8/8/8/8/8/8"),
            Err(LayoutError::TooManyCols { row: 0, cols: 9 })
        );
        assert_eq!(
            Board::from_placement("8/7/8/8/8/8/8/8"),
            Err(LayoutError::TooFewCols { row: 1, cols: 7 })
        );
        assert_eq!(
            Board::from_placement("8/8/9/8/8/8/8/8"),
            Err(LayoutError::TooManyCols { row: 2, cols: 9 })
        );
    }
}
