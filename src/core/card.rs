//! Card values.
//!
//! A card is just its face value. The deck holds every value in
//! `LOWEST_CARD..=HIGHEST_CARD` exactly once.

/// Face value of a card.
pub type Card = u8;

/// Lowest card in the deck.
pub const LOWEST_CARD: Card = 2;

/// Highest card in the deck.
pub const HIGHEST_CARD: Card = 99;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = (HIGHEST_CARD - LOWEST_CARD + 1) as usize;

/// Distance of the backwards shortcut allowed on every heap.
pub const SHORTCUT: Card = 10;
