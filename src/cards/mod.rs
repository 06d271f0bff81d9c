//! Card containers outside the heaps.
//!
//! - `Deck`: the shared, shuffled draw pile
//! - `Hand`: the cards one player currently holds

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
