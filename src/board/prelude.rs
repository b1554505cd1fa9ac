//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(classify_status(&board, Color::Black), GameStatus::Ongoing);
//! ```

pub use super::{
    apply_move, choose_move, classify_status, is_checkmate, is_king_in_check, is_legal_move,
    legal_moves, Board, BoardBuilder, Color, GameStatus, Move, Piece, Square,
};
