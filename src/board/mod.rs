//! Board representation and the rules engine.
//!
//! The board is a plain 8x8 grid of optional pieces, copied on every move.
//! Legality follows a deliberately reduced rule set: piece shapes and
//! occupancy only, with no path blocking, castling, en passant or
//! promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{is_king_in_check, is_legal_move, Board, Color, Square};
//!
//! let board = Board::new();
//! assert!(is_legal_move(&board, Square(6, 4), Square(4, 4)));
//! assert!(!is_king_in_check(&board, Color::White));
//! ```

mod builder;
mod display;
mod error;
mod layout;
pub mod prelude;
pub mod rules;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{ConfigError, GameError, LayoutError, SquareError};
pub use rules::{
    apply_move, choose_move, classify_status, is_checkmate, is_king_in_check, is_legal_move,
    legal_moves, GameStatus,
};
pub use state::{Board, Cell};
pub use types::{Color, Move, Piece, Square};
