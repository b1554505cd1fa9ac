use std::time::Duration;

use crate::board::{Color, ConfigError};

/// Delay before the computer replies, for presentation pacing only.
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Settings for a [`GameSession`](super::GameSession).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Side controlled by the human player
    pub human_color: Color,
    /// Wait between the human move and the computer's reply
    pub ai_delay: Duration,
    /// Seed for the computer's random source; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            human_color: Color::White,
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set an option by name, case-insensitively.
    ///
    /// Recognized names: `human` (`white`/`black`), `ai delay` (milliseconds)
    /// and `seed` (an integer, or `random` to clear it).
    pub fn apply_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match normalized.as_str() {
            "human" | "human color" => {
                self.human_color = match value.to_ascii_lowercase().as_str() {
                    "white" | "w" => Color::White,
                    "black" | "b" => Color::Black,
                    _ => return Err(invalid()),
                };
            }
            "ai delay" | "ai_delay" => {
                let ms = value.parse::<u64>().map_err(|_| invalid())?;
                self.ai_delay = Duration::from_millis(ms);
            }
            "seed" => {
                self.seed = if value.eq_ignore_ascii_case("random") {
                    None
                } else {
                    Some(value.parse::<u64>().map_err(|_| invalid())?)
                };
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        log::debug!("option {normalized} set to {value}");
        Ok(())
    }
}
