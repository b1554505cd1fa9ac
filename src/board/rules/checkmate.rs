use crate::board::{Board, Color, Move, Square};

use super::{apply_move, is_king_in_check, is_legal_move};

/// Returns true if `color` is in check and no legal move by any of its
/// pieces produces a board where its king is out of check.
///
/// Exhaustive: every own piece is tried against every destination square.
/// A side that is not in check is never mated, even with no moves left.
#[must_use]
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_king_in_check(board, color) {
        return false;
    }

    let escapes = board.squares_of(color).any(|(from, _)| {
        Square::all()
            .filter(|&to| is_legal_move(board, from, to))
            .any(|to| !is_king_in_check(&apply_move(board, Move::new(from, to)), color))
    });

    !escapes
}
