use crate::board::{Board, Color};

use super::is_legal_move;

/// Returns true if any piece of the opposite color may legally move onto
/// `color`'s king.
///
/// A board without a king for `color` is never in check.
#[must_use]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        return false;
    };

    board
        .squares_of(color.opponent())
        .any(|(sq, _)| is_legal_move(board, sq, king))
}
