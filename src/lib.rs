pub mod board;
pub mod game;
pub mod sync;
pub mod timer;

pub use board::{Board, Color, GameStatus, Move, Piece, Square};
pub use game::{GameConfig, GameSession, GameState};
