//! Engine error type.

use thiserror::Error;

use super::card::Card;
use crate::heaps::{Direction, HeapId};

/// Errors raised by the engine.
///
/// Ordinary game states (empty deck, empty hand, a rejected speculative play)
/// are reported through return values, not through this type.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Setup is not valid; the game never starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A card was committed to a heap that does not accept it.
    #[error("card {card} cannot be played on {reason}")]
    InvalidMove { card: Card, reason: Rejection },
}

/// Why a heap refused a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The heap's rule does not allow the card on its current top.
    #[error("{direction} heap topped by {top}")]
    Blocked { top: Card, direction: Direction },

    /// No heap has this id.
    #[error("unknown {0}")]
    UnknownHeap(HeapId),
}
