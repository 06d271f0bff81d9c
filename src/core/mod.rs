//! Core engine types: cards, seats, RNG, configuration, errors.
//!
//! Everything here is independent of the turn loop; the `game` module builds
//! on top of it.

pub mod card;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use card::{Card, DECK_SIZE, HIGHEST_CARD, LOWEST_CARD, SHORTCUT};
pub use config::{draw_count, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{GameError, Rejection};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
