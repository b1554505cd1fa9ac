//! Random move selection for the computer opponent.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color, Move, Square};

use super::is_legal_move;

/// Every legal move for `color`, row-major by source then destination.
///
/// Moves that leave `color`'s own king attacked are included.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .squares_of(color)
        .flat_map(move |(from, _)| {
            Square::all()
                .filter(move |&to| is_legal_move(board, from, to))
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Picks one of `color`'s legal moves uniformly at random, or `None` when
/// there are none.
///
/// No evaluation, lookahead or self-check filtering is done. The caller
/// supplies the random source so a seeded generator gives repeatable games.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> Option<Move> {
    let candidates = legal_moves(board, color);
    let picked = candidates.choose(rng).copied();
    log::trace!(
        "{color} random pick among {} candidates: {:?}",
        candidates.len(),
        picked
    );
    picked
}
