//! The four heaps shared by every player.

use serde::{Deserialize, Serialize};

use super::heap::{Direction, Heap};
use crate::core::{Card, GameError, Rejection};

/// Heap identifier.
///
/// Ids 0 and 1 are the ascending heaps, 2 and 3 the descending ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HeapId(pub u8);

impl HeapId {
    /// Create a new heap ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for HeapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Heap({})", self.0)
    }
}

/// Fixed set of two ascending and two descending heaps.
///
/// Created once per game; heaps are never added, removed or reset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapSet {
    heaps: [Heap; HeapSet::COUNT],
}

impl Default for HeapSet {
    fn default() -> Self {
        Self::new()
    }
}

impl HeapSet {
    /// Number of heaps in play.
    pub const COUNT: usize = 4;

    /// Fresh heaps, each holding only its sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heaps: [
                Heap::new(Direction::Ascending),
                Heap::new(Direction::Ascending),
                Heap::new(Direction::Descending),
                Heap::new(Direction::Descending),
            ],
        }
    }

    /// Look up a heap. Returns `None` for an id outside the set.
    #[must_use]
    pub fn get(&self, id: HeapId) -> Option<&Heap> {
        self.heaps.get(id.index())
    }

    /// Iterate over all heaps as (HeapId, &Heap).
    pub fn iter(&self) -> impl Iterator<Item = (HeapId, &Heap)> {
        self.heaps
            .iter()
            .enumerate()
            .map(|(i, heap)| (HeapId(i as u8), heap))
    }

    /// The ascending heaps.
    pub fn ascending(&self) -> impl Iterator<Item = (HeapId, &Heap)> {
        self.with_direction(Direction::Ascending)
    }

    /// The descending heaps.
    pub fn descending(&self) -> impl Iterator<Item = (HeapId, &Heap)> {
        self.with_direction(Direction::Descending)
    }

    fn with_direction(&self, direction: Direction) -> impl Iterator<Item = (HeapId, &Heap)> {
        self.iter()
            .filter(move |(_, heap)| heap.direction() == direction)
    }

    /// Whether `card` may be played on heap `id`. Unknown ids reject.
    #[must_use]
    pub fn validate(&self, id: HeapId, card: Card) -> bool {
        self.get(id).is_some_and(|heap| heap.validate(card))
    }

    /// Commit `card` to heap `id`.
    pub fn play(&mut self, id: HeapId, card: Card) -> Result<(), GameError> {
        match self.heaps.get_mut(id.index()) {
            Some(heap) => heap.play(card),
            None => Err(GameError::InvalidMove {
                card,
                reason: Rejection::UnknownHeap(id),
            }),
        }
    }

    /// Cards resting on all heaps, sentinels excluded.
    #[must_use]
    pub fn played_cards(&self) -> usize {
        self.heaps.iter().map(Heap::played).sum()
    }
}
