//! Piece-shape and occupancy legality.
//!
//! Sliding pieces and the pawn double step never look at the squares they
//! pass over: a rook on (7,0) may "move" to (0,0) through its own pawns.
//! Moving into an attacked square, or leaving the own king attacked, is not
//! considered here either.

use crate::board::{Board, Color, Move, Piece, Square};

/// Returns true if the piece on `from` may move to `to`.
///
/// Never fails: an empty or off-board source, an off-board destination, or a
/// destination holding a piece of the mover's color all yield `false`.
#[must_use]
pub fn is_legal_move(board: &Board, from: Square, to: Square) -> bool {
    let Some((color, piece)) = board.piece_at(from) else {
        return false;
    };
    if !to.is_on_board() {
        return false;
    }

    let target = board.piece_at(to);
    if matches!(target, Some((target_color, _)) if target_color == color) {
        return false;
    }

    let mv = Move::new(from, to);
    let row_diff = mv.row_diff();
    let col_diff = mv.col_diff();

    match piece {
        Piece::Pawn => is_pawn_move(color, mv, target.is_some()),
        Piece::Knight => (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2),
        Piece::Bishop => row_diff == col_diff,
        Piece::Rook => row_diff == 0 || col_diff == 0,
        Piece::Queen => row_diff == col_diff || row_diff == 0 || col_diff == 0,
        Piece::King => row_diff <= 1 && col_diff <= 1,
    }
}

fn is_pawn_move(color: Color, mv: Move, occupied: bool) -> bool {
    let dir = color.pawn_direction();
    let row_delta = mv.to.0 as isize - mv.from.0 as isize;
    let col_diff = mv.col_diff();

    if col_diff == 0 && !occupied {
        if mv.from.0 == color.pawn_home_row() && row_delta == 2 * dir {
            return true;
        }
        return row_delta == dir;
    }

    col_diff == 1 && row_delta == dir && occupied
}
