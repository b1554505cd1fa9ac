use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

use super::{is_checkmate, is_king_in_check};

/// Status of the side that has just been moved against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Ongoing,
    /// The given side's king is attacked but can escape
    Check(Color),
    /// The given side is mated; the game is over
    Checkmate(Color),
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_checkmate(self) -> bool {
        matches!(self, GameStatus::Checkmate(_))
    }

    /// The side in check or mated, if any
    #[must_use]
    pub const fn side_in_check(self) -> Option<Color> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Check(color) | GameStatus::Checkmate(color) => Some(color),
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => Ok(()),
            GameStatus::Check(_) => write!(f, "Check!"),
            GameStatus::Checkmate(_) => write!(f, "Checkmate! Game Over!"),
        }
    }
}

/// Classifies `board` from `color`'s point of view, `color` being the side
/// about to move after the last move was applied.
#[must_use]
pub fn classify_status(board: &Board, color: Color) -> GameStatus {
    if !is_king_in_check(board, color) {
        GameStatus::Ongoing
    } else if is_checkmate(board, color) {
        GameStatus::Checkmate(color)
    } else {
        GameStatus::Check(color)
    }
}
