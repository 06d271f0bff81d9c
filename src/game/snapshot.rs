//! Public, read-only picture of a game.

use serde::{Deserialize, Serialize};

use super::record::GamePhase;
use crate::core::PlayerId;
use crate::heaps::HeapSet;

/// Everything the table can see: heaps, hand sizes and deck size.
///
/// Hand contents stay private. Cloning is O(1) in the number of played
/// cards since heaps are persistent vectors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    /// Turns executed so far.
    pub turn: u32,
    /// Seat whose turn is next.
    pub current_player: PlayerId,
    pub heaps: HeapSet,
    /// Hand sizes in seat order. Empty before the deal.
    pub hand_sizes: Vec<usize>,
    pub remaining_cards: usize,
    pub played_cards: usize,
}

impl GameSnapshot {
    /// Cards currently held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.hand_sizes.iter().sum()
    }
}
