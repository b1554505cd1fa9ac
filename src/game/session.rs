//! Session driver: holds the current snapshot and paces the computer's
//! replies.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{GameError, Move, Square};
use crate::timer::AiTimer;

use super::{GameConfig, GameState};

struct Inner {
    state: GameState,
    rng: StdRng,
}

/// A running game between the human and the random opponent.
///
/// Human requests apply immediately. When they hand the turn to the
/// computer, its reply is scheduled on a single-shot [`AiTimer`] after
/// `ai_delay`. All state changes go through one mutex, so there is only ever
/// one actor advancing the game.
pub struct GameSession {
    inner: Arc<Mutex<Inner>>,
    pending: Mutex<Option<AiTimer>>,
    config: GameConfig,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = GameState::new(config.human_color);
        let session = GameSession {
            inner: Arc::new(Mutex::new(Inner { state, rng })),
            pending: Mutex::new(None),
            config,
        };
        session.schedule_if_ai_turn(&state);
        session
    }

    /// Current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().state
    }

    /// True while a computer reply is scheduled and has not resolved.
    #[must_use]
    pub fn ai_pending(&self) -> bool {
        let scheduled = self
            .pending
            .lock()
            .as_ref()
            .is_some_and(|timer| !timer.is_cancelled());
        scheduled && self.snapshot().is_ai_turn()
    }

    /// Square click from the presentation layer.
    pub fn click(&self, square: Square) -> GameState {
        let (prev, next) = {
            let mut inner = self.inner.lock();
            let prev = inner.state;
            inner.state = prev.select(square);
            (prev, inner.state)
        };
        // Clicks during the computer's turn change nothing and must not
        // restart its timer.
        if prev.to_move() != next.to_move() {
            self.schedule_if_ai_turn(&next);
        }
        next
    }

    /// Direct move request from the human.
    pub fn submit(&self, mv: Move) -> Result<GameState, GameError> {
        let next = {
            let mut inner = self.inner.lock();
            let next = inner.state.play(mv)?;
            inner.state = next;
            next
        };
        self.schedule_if_ai_turn(&next);
        Ok(next)
    }

    /// Cancel any pending computer move and start over.
    pub fn reset(&self) -> GameState {
        self.cancel_pending();
        let state = GameState::new(self.config.human_color);
        self.inner.lock().state = state;
        log::debug!("session reset");
        self.schedule_if_ai_turn(&state);
        state
    }

    /// Block until a scheduled computer move has resolved.
    pub fn wait_idle(&self) {
        let timer = self.pending.lock().take();
        if let Some(timer) = timer {
            timer.wait();
        }
    }

    fn cancel_pending(&self) {
        if let Some(timer) = self.pending.lock().take() {
            timer.cancel();
        }
    }

    fn schedule_if_ai_turn(&self, state: &GameState) {
        if !state.is_ai_turn() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let timer = AiTimer::start(self.config.ai_delay, move |cancel| {
            let mut guard = inner.lock();
            if cancel.is_cancelled() {
                return;
            }
            let Inner { state, rng } = &mut *guard;
            match state.play_ai(rng) {
                Ok(next) => *state = next,
                Err(err) => log::warn!("computer move skipped: {err}"),
            }
        });
        log::trace!("ai move scheduled in {:?}", self.config.ai_delay);

        if let Some(previous) = self.pending.lock().replace(timer) {
            previous.cancel();
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new(GameConfig::default())
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
