//! Error types for board and game operations.

use std::fmt;

use super::{Color, Move};

/// Error type for placement-text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Placement must have exactly 8 rows separated by '/'
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// A row describes more than 8 columns
    TooManyCols { row: usize, cols: usize },
    /// A row describes fewer than 8 columns
    TooFewCols { row: usize, cols: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            LayoutError::TooManyCols { row, cols } => {
                write!(f, "Too many columns ({cols}) in row {row}")
            }
            LayoutError::TooFewCols { row, cols } => {
                write!(f, "Too few columns ({cols}) in row {row}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Not of the form "row,col"
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected game transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game ended in checkmate; no further moves are accepted
    GameOver,
    /// The request came from the side that is not to move
    NotYourTurn { expected: Color },
    /// The move failed the legality rules
    IllegalMove { mv: Move },
    /// The side to move has no legal move at all
    NoLegalMoves { color: Color },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is over"),
            GameError::NotYourTurn { expected } => {
                write!(f, "Not your turn, {expected} is to move")
            }
            GameError::IllegalMove { mv } => write!(f, "Illegal move {mv}"),
            GameError::NoLegalMoves { color } => {
                write!(f, "{color} has no legal moves")
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Error type for configuration option failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No option with this name
    UnknownOption { name: String },
    /// The value could not be parsed for this option
    InvalidValue { name: String, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption { name } => write!(f, "Unknown option '{name}'"),
            ConfigError::InvalidValue { name, value } => {
                write!(f, "Invalid value '{value}' for option '{name}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
