//! Rules engine: move legality, check and checkmate detection, and the
//! random-move opponent.
//!
//! Every function here is pure and total over on-board inputs. Illegal
//! requests come back as `false` or `None`, never as an error.

mod check;
mod checkmate;
mod selector;
mod status;
mod validator;

pub use check::is_king_in_check;
pub use checkmate::is_checkmate;
pub use selector::{choose_move, legal_moves};
pub use status::{classify_status, GameStatus};
pub use validator::is_legal_move;

use super::{Board, Move};

/// Returns a copy of `board` with `mv` played: the moving piece replaces
/// whatever stood on `mv.to` and `mv.from` is cleared.
///
/// No legality check is made; pair with [`is_legal_move`].
///
/// # Panics
/// Panics if either square is off the board.
#[inline]
#[must_use]
pub fn apply_move(board: &Board, mv: Move) -> Board {
    board.with_move(mv)
}
