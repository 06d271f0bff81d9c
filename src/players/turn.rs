//! The capability handed to a player for the length of one turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Hand;
use crate::core::{Card, PlayerId};
use crate::heaps::{HeapId, HeapSet};

/// One committed play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub card: Card,
    pub heap: HeapId,
}

/// A player's view of the game during their turn.
///
/// Exposes the player's own hand, the four heaps (read-only) and the deck
/// size. The only way to change anything is [`Turn::play_card`], and it can
/// only move cards out of this player's hand.
pub struct Turn<'a> {
    player: PlayerId,
    hand: &'a mut Hand,
    heaps: &'a mut HeapSet,
    remaining_cards: usize,
    plays: SmallVec<[Play; 8]>,
}

impl<'a> Turn<'a> {
    pub(crate) fn new(
        player: PlayerId,
        hand: &'a mut Hand,
        heaps: &'a mut HeapSet,
        remaining_cards: usize,
    ) -> Self {
        Self {
            player,
            hand,
            heaps,
            remaining_cards,
            plays: SmallVec::new(),
        }
    }

    /// Seat taking this turn.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The active player's hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        self.hand
    }

    /// All four heaps.
    #[must_use]
    pub fn heaps(&self) -> &HeapSet {
        self.heaps
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.remaining_cards
    }

    /// Whether `card` is held and `heap` would accept it.
    #[must_use]
    pub fn can_play(&self, card: Card, heap: HeapId) -> bool {
        self.hand.contains(card) && self.heaps.validate(heap, card)
    }

    /// Try to play `card` on `heap`.
    ///
    /// Returns `false` and changes nothing if the card is not held or the
    /// heap rejects it, so policies can try moves freely.
    pub fn play_card(&mut self, card: Card, heap: HeapId) -> bool {
        if !self.can_play(card, heap) {
            return false;
        }
        if let Err(err) = self.heaps.play(heap, card) {
            unreachable!("validated play rejected: {err}");
        }
        self.hand.remove(card);
        self.plays.push(Play { card, heap });
        debug!(player = %self.player, card, %heap, "played card");
        true
    }

    /// Plays committed so far this turn, in order.
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub(crate) fn into_plays(self) -> SmallVec<[Play; 8]> {
        self.plays
    }
}
