//! # the-game
//!
//! Rules engine for "The Game", a cooperative card game for 1-5 players.
//!
//! Cards 2..=99 are shuffled into one deck. Players take turns playing from
//! their hands onto four heaps: two that climb from 1 and two that fall from
//! 100. A card may also go exactly 10 against a heap's direction. Each turn
//! must play at least two cards while the deck lasts, and at least one once
//! it is empty; otherwise the game ends.
//!
//! ## Design
//!
//! - **Pluggable players**: decision logic lives behind the [`Player`] trait.
//!   The engine owns every hand and hands a policy a [`Turn`] that can only
//!   move that player's own cards.
//! - **Deterministic**: a seeded ChaCha8 RNG shuffles the deck once.
//! - **Cheap observation**: heaps and hands use `im` persistent collections
//!   so [`GameSnapshot`]s clone in O(1).
//!
//! ## Modules
//!
//! - `core`: cards, seats, RNG, configuration, errors
//! - `cards`: deck and hand
//! - `heaps`: heap rules and the four-heap set
//! - `players`: the player contract
//! - `game`: engine, rules, turn history, reports

pub mod cards;
pub mod core;
pub mod game;
pub mod heaps;
pub mod players;

// Re-export commonly used types
pub use crate::core::{Card, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Rejection};

pub use crate::cards::{Deck, Hand};

pub use crate::heaps::{Direction, Heap, HeapId, HeapSet};

pub use crate::players::{Play, Player, Seat, Turn};

pub use crate::game::{
    GameEnv, GameOutcome, GamePhase, GameReport, GameSnapshot, TurnRecord, TurnStatus,
};
