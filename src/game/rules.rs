//! Turn and scoring rules.

use crate::heaps::HeapSet;

/// Plays required per turn while the deck still has cards.
pub const MIN_PLAYS_PER_TURN: usize = 2;

/// Deck size below which each missing card earns a bonus.
pub const NEAR_FINISH_THRESHOLD: usize = 10;

/// Points per card short of [`NEAR_FINISH_THRESHOLD`].
pub const NEAR_FINISH_POINTS: u32 = 2;

/// Flat bonus for emptying the deck.
pub const EXHAUSTION_BONUS: u32 = 50;

/// Points for the heap sentinels, which count as cards on the table.
pub const SEED_POINTS: u32 = HeapSet::COUNT as u32;

/// Whether a turn that played `played` cards ends the game.
///
/// Two separate failures: too few plays while cards are left to draw, and
/// no play at all, which loses even with an empty deck.
#[must_use]
pub fn ends_game(played: usize, remaining_cards: usize) -> bool {
    (remaining_cards > 0 && played < MIN_PLAYS_PER_TURN) || played == 0
}

/// Score for `played_cards` on the heaps with `remaining_cards` undrawn.
///
/// `played_cards` excludes the sentinels; the four of them are added here.
///
/// ```
/// use the_game::game::rules::score;
///
/// assert_eq!(score(98, 0), 98 + 4 + 20 + 50);
/// assert_eq!(score(40, 30), 40 + 4);
/// assert_eq!(score(85, 7), 85 + 4 + 6);
/// ```
#[must_use]
pub fn score(played_cards: usize, remaining_cards: usize) -> u32 {
    let short = NEAR_FINISH_THRESHOLD.saturating_sub(remaining_cards) as u32;
    let mut score = played_cards as u32 + SEED_POINTS + short * NEAR_FINISH_POINTS;
    if remaining_cards == 0 {
        score += EXHAUSTION_BONUS;
    }
    score
}
