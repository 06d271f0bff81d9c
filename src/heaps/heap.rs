//! A single directional heap.
//!
//! Heaps only grow. An ascending heap accepts any card above its top, plus
//! the card exactly `SHORTCUT` below it; a descending heap mirrors that.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Card, GameError, Rejection, HIGHEST_CARD, LOWEST_CARD, SHORTCUT};

/// Direction a heap is built in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Starts at 1, climbs towards 99.
    Ascending,
    /// Starts at 100, falls towards 2.
    Descending,
}

impl Direction {
    /// Sentinel value a fresh heap starts with.
    #[must_use]
    pub const fn seed(self) -> Card {
        match self {
            Direction::Ascending => LOWEST_CARD - 1,
            Direction::Descending => HIGHEST_CARD + 1,
        }
    }

    /// Whether `card` may go on a heap of this direction topped by `top`.
    ///
    /// Values outside the deck never fit. The shortcut is tested first: it is
    /// the only move against the direction of the heap.
    #[must_use]
    pub fn accepts(self, top: Card, card: Card) -> bool {
        if !(LOWEST_CARD..=HIGHEST_CARD).contains(&card) {
            return false;
        }
        match self {
            Direction::Ascending => top.checked_sub(SHORTCUT) == Some(card) || card > top,
            Direction::Descending => top.checked_add(SHORTCUT) == Some(card) || card < top,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => f.write_str("ascending"),
            Direction::Descending => f.write_str("descending"),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" | "ascending" => Ok(Direction::Ascending),
            "down" | "descending" => Ok(Direction::Descending),
            other => Err(GameError::InvalidConfiguration(format!(
                "unknown heap direction {other:?}"
            ))),
        }
    }
}

/// An ordered pile of played cards, newest first.
///
/// The sentinel seed stays at the bottom for the heap's whole life.
///
/// ```
/// use the_game::heaps::{Direction, Heap};
///
/// let mut heap = Heap::new(Direction::Ascending);
/// assert_eq!(heap.top(), 1);
///
/// heap.play(30).unwrap();
/// assert!(heap.validate(20)); // shortcut
/// assert!(!heap.validate(25));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heap {
    direction: Direction,
    cards: Vector<Card>,
}

impl Heap {
    /// Create a fresh heap holding only its sentinel.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            cards: Vector::unit(direction.seed()),
        }
    }

    /// Rebuild a heap from a recorded play sequence, oldest card first.
    ///
    /// Fails on the first card the heap would not have accepted.
    pub fn replay(
        direction: Direction,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, GameError> {
        let mut heap = Self::new(direction);
        for card in cards {
            heap.play(card)?;
        }
        Ok(heap)
    }

    /// The direction of this heap.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The card currently on top.
    #[must_use]
    pub fn top(&self) -> Card {
        // Never empty: the sentinel is never removed.
        self.cards.front().copied().unwrap_or(self.direction.seed())
    }

    /// Check whether `card` may be played here. No side effects.
    #[must_use]
    pub fn validate(&self, card: Card) -> bool {
        self.direction.accepts(self.top(), card)
    }

    /// Put `card` on top of the heap.
    pub fn play(&mut self, card: Card) -> Result<(), GameError> {
        if !self.validate(card) {
            return Err(GameError::InvalidMove {
                card,
                reason: Rejection::Blocked {
                    top: self.top(),
                    direction: self.direction,
                },
            });
        }
        self.cards.push_front(card);
        Ok(())
    }

    /// Number of cards played on this heap, sentinel excluded.
    #[must_use]
    pub fn played(&self) -> usize {
        self.cards.len() - 1
    }

    /// All values on the heap, newest first, ending with the sentinel.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_heaps() {
        let up = Heap::new(Direction::Ascending);
        let down = Heap::new(Direction::Descending);

        assert_eq!(up.top(), 1);
        assert_eq!(down.top(), 100);
        assert_eq!(up.played(), 0);
        assert_eq!(down.cards().collect::<Vec<_>>(), vec![100]);
    }

    #[test]
    fn test_ascending_validation() {
        let mut heap = Heap::new(Direction::Ascending);
        assert!(heap.validate(2));
        assert!(heap.validate(99));

        heap.play(50).unwrap();
        assert!(heap.validate(51));
        assert!(heap.validate(40));
        assert!(!heap.validate(50));
        assert!(!heap.validate(41));
        assert!(!heap.validate(39));
    }

    #[test]
    fn test_descending_validation() {
        let mut heap = Heap::new(Direction::Descending);
        assert!(heap.validate(99));
        assert!(heap.validate(2));

        heap.play(50).unwrap();
        assert!(heap.validate(49));
        assert!(heap.validate(60));
        assert!(!heap.validate(50));
        assert!(!heap.validate(59));
        assert!(!heap.validate(61));
    }

    #[test]
    fn test_shortcut_near_bounds() {
        // No shortcut below the ascending sentinel.
        let mut up = Heap::new(Direction::Ascending);
        assert!(!up.validate(0));

        // Nor above the descending one.
        let mut down = Heap::new(Direction::Descending);
        assert!(!down.validate(110));
        assert!(down.play(110).is_err());

        assert!(!up.validate(1));
        assert!(!up.validate(100));
        assert!(up.play(200).is_err());
        assert_eq!(up.cards().collect::<Vec<_>>(), vec![1]);
        assert_eq!(down.cards().collect::<Vec<_>>(), vec![100]);
    }

    #[test]
    fn test_shortcut_never_leaves_the_deck() {
        let mut up = Heap::new(Direction::Ascending);
        up.play(99).unwrap();
        up.play(89).unwrap();
        assert!(!up.validate(100));

        let mut down = Heap::new(Direction::Descending);
        down.play(2).unwrap();
        assert!(down.validate(12));
        assert!(!down.validate(1));
    }

    #[test]
    fn test_rejected_play_leaves_heap_untouched() {
        let mut heap = Heap::new(Direction::Ascending);
        heap.play(30).unwrap();

        let err = heap.play(25).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                card: 25,
                reason: Rejection::Blocked {
                    top: 30,
                    direction: Direction::Ascending,
                },
            }
        );
        assert_eq!(heap.cards().collect::<Vec<_>>(), vec![30, 1]);
    }

    #[test]
    fn test_cards_are_newest_first() {
        let mut heap = Heap::new(Direction::Descending);
        for card in [90, 80, 90, 85] {
            heap.play(card).unwrap();
        }
        assert_eq!(heap.cards().collect::<Vec<_>>(), vec![85, 90, 80, 90, 100]);
        assert_eq!(heap.played(), 4);
        assert_eq!(heap.top(), 85);
    }

    #[test]
    fn test_replay() {
        let heap = Heap::replay(Direction::Ascending, [10, 20, 10, 15]).unwrap();
        assert_eq!(heap.cards().collect::<Vec<_>>(), vec![15, 10, 20, 10, 1]);

        assert!(Heap::replay(Direction::Ascending, [10, 5]).is_err());
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Ascending);
        assert_eq!("descending".parse::<Direction>().unwrap(), Direction::Descending);
        assert!(matches!(
            "sideways".parse::<Direction>(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
