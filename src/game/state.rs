//! Immutable game state and its transitions.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    apply_move, choose_move, classify_status, is_legal_move, Board, Color, GameError, GameStatus,
    Move, Square,
};

/// A snapshot of a game between a human and the random opponent.
///
/// Every transition returns a new value; the previous snapshot stays valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    to_move: Color,
    status: GameStatus,
    selected: Option<Square>,
    human: Color,
}

impl GameState {
    /// Starting position, White to move.
    #[must_use]
    pub fn new(human: Color) -> Self {
        GameState {
            board: Board::new(),
            to_move: Color::White,
            status: GameStatus::Ongoing,
            selected: None,
            human,
        }
    }

    /// Resume from an arbitrary position with `to_move` on turn.
    ///
    /// The status is classified for `to_move` as if the opponent had just
    /// moved.
    #[must_use]
    pub fn from_position(board: Board, to_move: Color, human: Color) -> Self {
        GameState {
            board,
            to_move,
            status: classify_status(&board, to_move),
            selected: None,
            human,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[must_use]
    pub fn ai_color(&self) -> Color {
        self.human.opponent()
    }

    /// Checkmate freezes the game.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_checkmate()
    }

    /// True when the computer should move next.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.to_move == self.ai_color()
    }

    /// Square click from the human.
    ///
    /// With nothing selected, a click on one of the human's pieces selects
    /// it; any other click is ignored. With a piece selected, the click is
    /// a move attempt from the selection, and the selection is cleared
    /// whether or not the move was legal. Clicks outside the human's turn
    /// or after the game ended leave the state unchanged.
    #[must_use]
    pub fn select(&self, square: Square) -> GameState {
        if self.is_over() || self.to_move != self.human {
            return *self;
        }

        match self.selected {
            None => {
                if self.board.color_at(square) == Some(self.human) {
                    GameState {
                        selected: Some(square),
                        ..*self
                    }
                } else {
                    *self
                }
            }
            Some(from) => {
                let cleared = GameState {
                    selected: None,
                    ..*self
                };
                match cleared.play(Move::new(from, square)) {
                    Ok(next) => next,
                    Err(err) => {
                        log::debug!("selection dropped: {err}");
                        cleared
                    }
                }
            }
        }
    }

    /// Human move request.
    pub fn play(&self, mv: Move) -> Result<GameState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.to_move != self.human {
            return Err(GameError::NotYourTurn {
                expected: self.to_move,
            });
        }
        if self.board.color_at(mv.from) != Some(self.human)
            || !is_legal_move(&self.board, mv.from, mv.to)
        {
            return Err(GameError::IllegalMove { mv });
        }
        Ok(self.advance(mv))
    }

    /// Computer move, drawn uniformly from the AI side's legal moves.
    pub fn play_ai<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let ai = self.ai_color();
        if self.to_move != ai {
            return Err(GameError::NotYourTurn {
                expected: self.to_move,
            });
        }
        let mv = choose_move(&self.board, ai, rng).ok_or(GameError::NoLegalMoves { color: ai })?;
        Ok(self.advance(mv))
    }

    fn advance(&self, mv: Move) -> GameState {
        let board = apply_move(&self.board, mv);
        let opponent = self.to_move.opponent();
        let status = classify_status(&board, opponent);
        log::debug!("{} played {mv}; {opponent} status {status:?}", self.to_move);

        GameState {
            board,
            to_move: opponent,
            status,
            selected: None,
            human: self.human,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Color::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_game() {
        let game = GameState::new(Color::White);
        assert_eq!(game.to_move(), Color::White);
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.ai_color(), Color::Black);
        assert!(!game.is_ai_turn());
        assert!(!game.is_over());
    }

    #[test]
    fn test_human_move_passes_turn() {
        let game = GameState::new(Color::White);
        let next = game
            .play(Move::new(Square(6, 4), Square(4, 4)))
            .expect("legal opening move");
        assert_eq!(next.to_move(), Color::Black);
        assert!(next.is_ai_turn());
        assert_eq!(
            next.board().piece_at(Square(4, 4)),
            Some((Color::White, Piece::Pawn))
        );
        // Old snapshot unchanged.
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_illegal_move_rejected() {
        let game = GameState::new(Color::White);
        let mv = Move::new(Square(6, 4), Square(3, 4));
        assert_eq!(game.play(mv), Err(GameError::IllegalMove { mv }));
    }

    #[test]
    fn test_moving_opponent_piece_rejected_on_turn_check() {
        let game = GameState::new(Color::White)
            .play(Move::new(Square(6, 4), Square(4, 4)))
            .expect("legal opening move");
        assert_eq!(
            game.play(Move::new(Square(6, 3), Square(4, 3))),
            Err(GameError::NotYourTurn {
                expected: Color::Black
            })
        );
    }

    #[test]
    fn test_human_cannot_move_opponent_piece() {
        let game = GameState::new(Color::White);
        let mv = Move::new(Square(1, 3), Square(3, 3));
        assert!(is_legal_move(game.board(), mv.from, mv.to));
        assert_eq!(game.play(mv), Err(GameError::IllegalMove { mv }));
    }

    #[test]
    fn test_ai_reply() {
        let game = GameState::new(Color::White)
            .play(Move::new(Square(6, 4), Square(4, 4)))
            .expect("legal opening move");
        let mut rng = StdRng::seed_from_u64(3);
        let reply = game.play_ai(&mut rng).expect("black has moves");
        assert_eq!(reply.to_move(), Color::White);
        assert_eq!(reply.board().piece_count(Color::Black), 16);
        assert_ne!(reply.board(), game.board());
    }

    #[test]
    fn test_ai_cannot_move_on_human_turn() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            GameState::new(Color::White).play_ai(&mut rng),
            Err(GameError::NotYourTurn {
                expected: Color::White
            })
        );
    }

    #[test]
    fn test_ai_without_moves() {
        let board = BoardBuilder::new()
            .piece(Square(3, 0), Color::Black, Piece::Pawn)
            .piece(Square(4, 0), Color::White, Piece::Rook)
            .build();
        let game = GameState::from_position(board, Color::Black, Color::White);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            game.play_ai(&mut rng),
            Err(GameError::NoLegalMoves {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_mating_move_ends_game() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::Black, Piece::King)
            .piece(Square(5, 1), Color::White, Piece::Queen)
            .piece(Square(7, 1), Color::White, Piece::Rook)
            .piece(Square(7, 4), Color::White, Piece::King)
            .build();
        let game = GameState::from_position(board, Color::White, Color::White);
        let mated = game
            .play(Move::new(Square(5, 1), Square(1, 1)))
            .expect("queen move is legal");

        assert_eq!(mated.status(), GameStatus::Checkmate(Color::Black));
        assert!(mated.is_over());
        assert!(!mated.is_ai_turn());

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(mated.play_ai(&mut rng), Err(GameError::GameOver));
        assert_eq!(
            mated.play(Move::new(Square(7, 4), Square(6, 4))),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn test_check_status_reported() {
        let board = BoardBuilder::new()
            .piece(Square(0, 4), Color::Black, Piece::King)
            .piece(Square(5, 0), Color::White, Piece::Rook)
            .piece(Square(7, 0), Color::White, Piece::King)
            .build();
        let game = GameState::from_position(board, Color::White, Color::White);
        let next = game
            .play(Move::new(Square(5, 0), Square(5, 4)))
            .expect("rook move is legal");
        assert_eq!(next.status(), GameStatus::Check(Color::Black));
        assert!(next.is_ai_turn());
    }

    #[test]
    fn test_select_then_move() {
        let game = GameState::new(Color::White);
        let picked = game.select(Square(6, 4));
        assert_eq!(picked.selected(), Some(Square(6, 4)));

        let moved = picked.select(Square(4, 4));
        assert_eq!(moved.selected(), None);
        assert_eq!(moved.to_move(), Color::Black);
        assert_eq!(
            moved.board().piece_at(Square(4, 4)),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_select_ignores_empty_and_enemy_squares() {
        let game = GameState::new(Color::White);
        assert_eq!(game.select(Square(4, 4)), game);
        assert_eq!(game.select(Square(1, 4)), game);
    }

    #[test]
    fn test_illegal_target_clears_selection() {
        let game = GameState::new(Color::White).select(Square(6, 4));
        let after = game.select(Square(3, 4));
        assert_eq!(after.selected(), None);
        assert_eq!(after.to_move(), Color::White);
        assert_eq!(after.board(), &Board::new());
    }

    #[test]
    fn test_select_ignored_on_ai_turn() {
        let game = GameState::new(Color::White)
            .play(Move::new(Square(6, 4), Square(4, 4)))
            .expect("legal opening move");
        assert_eq!(game.select(Square(6, 3)), game);
    }

    #[test]
    fn test_human_playing_black() {
        let game = GameState::new(Color::Black);
        assert!(game.is_ai_turn());
        let mut rng = StdRng::seed_from_u64(11);
        let next = game.play_ai(&mut rng).expect("white has moves");
        assert_eq!(next.to_move(), Color::Black);
        assert!(!next.is_ai_turn());
    }
}
