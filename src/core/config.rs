//! Game configuration.
//!
//! The only construction-time knob is the shuffle seed. Roster bounds and
//! the hand-size table are fixed rules of the game:
//!
//! | players | hand size |
//! |---------|-----------|
//! | 1       | 8         |
//! | 2       | 7         |
//! | 3-5     | 6         |

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Smallest supported roster.
pub const MIN_PLAYERS: usize = 1;

/// Largest supported roster.
pub const MAX_PLAYERS: usize = 5;

/// Target hand size for a roster of `player_count` seats.
///
/// ```
/// use the_game::core::config::draw_count;
///
/// assert_eq!(draw_count(1).unwrap(), 8);
/// assert_eq!(draw_count(2).unwrap(), 7);
/// assert_eq!(draw_count(5).unwrap(), 6);
/// assert!(draw_count(0).is_err());
/// ```
pub fn draw_count(player_count: usize) -> Result<usize, GameError> {
    match player_count {
        1 => Ok(8),
        2 => Ok(7),
        3..=MAX_PLAYERS => Ok(6),
        _ => Err(GameError::InvalidConfiguration(format!(
            "roster must have {MIN_PLAYERS} to {MAX_PLAYERS} players, got {player_count}"
        ))),
    }
}

/// Engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Deck shuffle seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with an entropy-seeded shuffle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
