//! Turn history and end-of-game results.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;
use crate::players::Play;

/// Engine lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Accepting players; no cards dealt.
    Setup,
    /// Hands dealt, turns in progress.
    Running,
    /// Score computed and broadcast. Nothing changes any more.
    Finished,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// The seat had no cards; nothing happened.
    Skipped,
    /// Enough cards were played; the hand was refilled.
    Continued,
    /// Too few cards were played; the game is over.
    Stalled,
}

/// A recorded turn.
///
/// Used for:
/// - Replay/debugging
/// - Checking the round-robin order after a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The seat that took this turn.
    pub player: PlayerId,

    /// Committed plays, in order.
    pub plays: SmallVec<[Play; 8]>,

    /// Cards drawn when refilling afterwards.
    pub drawn: usize,

    /// How the turn ended.
    pub status: TurnStatus,
}

impl TurnRecord {
    /// Number of cards played during this turn.
    #[must_use]
    pub fn played(&self) -> usize {
        self.plays.len()
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every card reached a heap.
    Victory,
    /// A player could not meet the per-turn minimum.
    Stalled { player: PlayerId, played: usize },
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub score: u32,
    pub outcome: GameOutcome,
    /// Turns executed, skipped turns included.
    pub turns: u32,
    pub played_cards: usize,
    pub remaining_cards: usize,
    pub drawn_cards: usize,
}

impl GameReport {
    /// Whether every card was played.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.outcome == GameOutcome::Victory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heaps::HeapId;

    #[test]
    fn test_turn_record_played() {
        let record = TurnRecord {
            turn: 3,
            player: PlayerId::new(1),
            plays: SmallVec::from_slice(&[
                Play {
                    card: 12,
                    heap: HeapId::new(0),
                },
                Play {
                    card: 88,
                    heap: HeapId::new(3),
                },
            ]),
            drawn: 2,
            status: TurnStatus::Continued,
        };
        assert_eq!(record.played(), 2);
    }

    #[test]
    fn test_report_serde() {
        let report = GameReport {
            score: 65,
            outcome: GameOutcome::Stalled {
                player: PlayerId::new(0),
                played: 1,
            },
            turns: 12,
            played_cards: 61,
            remaining_cards: 21,
            drawn_cards: 77,
        };
        assert!(!report.is_victory());

        let json = serde_json::to_string(&report).unwrap();
        let back: GameReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
