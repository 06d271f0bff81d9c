//! Player trait: the pluggable decision policy.

use super::turn::Turn;

/// A participant in the game.
///
/// The engine owns the hand; a `Player` only decides what to play. Policies
/// are registered with [`GameEnv::add_player`](crate::game::GameEnv::add_player)
/// and called back in seat order.
///
/// ## Implementation Notes
///
/// - `take_turn` must return; the engine has no timeout
/// - Playing fewer than two cards while the deck still holds cards (or none
///   at all) ends the game
/// - `on_game_end` is called exactly once, after the final score is known
pub trait Player {
    /// Play zero or more cards through `turn`, then return.
    fn take_turn(&mut self, turn: &mut Turn<'_>);

    /// Receive the final score.
    fn on_game_end(&mut self, score: u32) {
        let _ = score;
    }
}

/// Closures work as players that ignore the final score.
///
/// ```
/// use the_game::heaps::HeapId;
/// use the_game::players::{Player, Turn};
///
/// let mut lowest_up = |turn: &mut Turn<'_>| {
///     let cards: Vec<_> = turn.hand().iter().collect();
///     for card in cards {
///         turn.play_card(card, HeapId::new(0));
///     }
/// };
/// let _: &mut dyn Player = &mut lowest_up;
/// ```
impl<F> Player for F
where
    F: FnMut(&mut Turn<'_>),
{
    fn take_turn(&mut self, turn: &mut Turn<'_>) {
        self(turn);
    }
}
