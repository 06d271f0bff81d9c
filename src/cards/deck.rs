//! The shared draw pile.

use tracing::trace;

use crate::core::{Card, GameError, GameRng, HIGHEST_CARD, LOWEST_CARD};

/// Draw pile holding each undrawn card exactly once.
///
/// Never refilled: `remaining()` only goes down.
#[derive(Clone, Debug)]
pub struct Deck {
    /// Undrawn cards; the next draw comes off the end.
    cards: Vec<Card>,
    /// Cards handed out so far.
    drawn: usize,
}

impl Deck {
    /// A full deck of `LOWEST_CARD..=HIGHEST_CARD` in random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = (LOWEST_CARD..=HIGHEST_CARD).collect();
        rng.shuffle(&mut cards);
        Self { cards, drawn: 0 }
    }

    /// A deck that deals `cards` in the given order.
    ///
    /// Any subset of the full deck is allowed. Values outside
    /// `LOWEST_CARD..=HIGHEST_CARD` and repeated cards are rejected.
    ///
    /// ```
    /// use the_game::cards::Deck;
    ///
    /// let mut deck = Deck::from_cards([5, 9]).unwrap();
    /// assert_eq!(deck.draw(), Some(5));
    /// assert_eq!(deck.draw(), Some(9));
    /// assert_eq!(deck.draw(), None);
    ///
    /// assert!(Deck::from_cards([5, 5]).is_err());
    /// ```
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self, GameError> {
        let mut seen = [false; HIGHEST_CARD as usize + 1];
        let mut cards: Vec<Card> = cards.into_iter().collect();
        for &card in &cards {
            if !(LOWEST_CARD..=HIGHEST_CARD).contains(&card) {
                return Err(GameError::InvalidConfiguration(format!(
                    "card {card} is outside {LOWEST_CARD}..={HIGHEST_CARD}"
                )));
            }
            if std::mem::replace(&mut seen[card as usize], true) {
                return Err(GameError::InvalidConfiguration(format!(
                    "card {card} appears twice in the deck"
                )));
            }
        }
        cards.reverse();
        Ok(Self { cards, drawn: 0 })
    }

    /// Take the next card. `None` once the deck is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop()?;
        self.drawn += 1;
        trace!(card, remaining = self.cards.len(), "drew card");
        Some(card)
    }

    /// Cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}
