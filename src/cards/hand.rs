//! A player's hand.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Cards held by one player, kept in ascending order.
///
/// Card values are unique across the deck, so a set is enough.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: OrdSet<Card>,
}

impl Hand {
    /// An empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `card` is held.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Held cards, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    pub(crate) fn insert(&mut self, card: Card) {
        self.cards.insert(card);
    }

    pub(crate) fn remove(&mut self, card: Card) -> bool {
        self.cards.remove(&card).is_some()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
