//! Fluent builder for constructing board positions.
//!
//! Allows creating positions piece by piece rather than parsing placement
//! text.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(6, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(Color::White), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    ///
    /// # Panics
    /// Panics if `square` is off the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board = self.board.with_cell(square, Some((color, piece)));
        self
    }

    /// Remove a piece from a square.
    ///
    /// # Panics
    /// Panics if `square` is off the board.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board = self.board.with_cell(square, None);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
        assert_eq!(built.to_placement(), Board::new().to_placement());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, Piece::King)
            .piece(Square(0, 4), Color::Black, Piece::King)
            .build();

        assert!(board.piece_at(Square(7, 4)).is_some());
        assert!(board.piece_at(Square(0, 4)).is_some());
        assert!(board.piece_at(Square(0, 0)).is_none());
    }

    #[test]
    fn test_piece_replaces_existing() {
        let board = BoardBuilder::new()
            .piece(Square(3, 3), Color::White, Piece::Knight)
            .piece(Square(3, 3), Color::Black, Piece::Queen)
            .build();
        assert_eq!(board.piece_at(Square(3, 3)), Some((Color::Black, Piece::Queen)));
        assert_eq!(board.piece_count(Color::White), 0);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 0))
            .build();

        assert!(board.piece_at(Square(7, 0)).is_none());
        assert!(board.piece_at(Square(7, 1)).is_some());
    }
}
