//! Engine-side state of one seat.

use tracing::debug;

use crate::cards::{Deck, Hand};

/// What the engine keeps for each registered player: the hand and the
/// target hand size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seat {
    /// Cards currently held.
    pub hand: Hand,
    /// Target hand size, fixed when the game starts.
    pub draw_count: usize,
}

impl Seat {
    /// An empty seat that refills up to `draw_count` cards.
    #[must_use]
    pub fn new(draw_count: usize) -> Self {
        Self {
            hand: Hand::new(),
            draw_count,
        }
    }

    /// Draw until the hand holds `draw_count` cards or the deck runs out.
    ///
    /// Returns the number of cards drawn, possibly 0.
    pub fn fill_hand(&mut self, deck: &mut Deck) -> usize {
        let mut drawn = 0;
        while self.hand.len() < self.draw_count {
            let Some(card) = deck.draw() else {
                break;
            };
            self.hand.insert(card);
            drawn += 1;
        }
        if drawn > 0 {
            debug!(drawn, hand = self.hand.len(), "filled hand");
        }
        drawn
    }
}
