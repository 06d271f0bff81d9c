//! The game engine and its results.
//!
//! - `GameEnv`: deck, heaps, roster and turn loop
//! - `rules`: the per-turn minimum and the score formula
//! - `TurnRecord` / `GameReport`: what happened
//! - `GameSnapshot`: public state for observers

pub mod env;
pub mod record;
pub mod rules;
pub mod snapshot;

pub use env::GameEnv;
pub use record::{GameOutcome, GamePhase, GameReport, TurnRecord, TurnStatus};
pub use snapshot::GameSnapshot;
