//! Game flow around the rules engine.
//!
//! [`GameState`] is an immutable snapshot advanced by pure transitions.
//! [`GameSession`] holds the current snapshot for a presentation layer and
//! schedules the computer's delayed replies.

mod config;
mod session;
mod state;

pub use config::{GameConfig, DEFAULT_AI_DELAY_MS};
pub use session::GameSession;
pub use state::GameState;
