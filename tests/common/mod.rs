//! Policies shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use the_game::core::{Card, PlayerId};
use the_game::heaps::HeapId;
use the_game::players::{Player, Turn};

/// Plays every card it can, lowest first, on the first heap that takes it
/// (ascending heaps before descending ones).
#[derive(Default)]
pub struct Greedy;

impl Player for Greedy {
    fn take_turn(&mut self, turn: &mut Turn<'_>) {
        let cards: Vec<Card> = turn.hand().iter().collect();
        let heaps: Vec<HeapId> = turn.heaps().iter().map(|(id, _)| id).collect();
        for card in cards {
            for &heap in &heaps {
                if turn.play_card(card, heap) {
                    break;
                }
            }
        }
    }
}

/// Plays at most `limit` cards per turn, lowest first.
pub struct Limited {
    pub limit: usize,
}

impl Player for Limited {
    fn take_turn(&mut self, turn: &mut Turn<'_>) {
        let cards: Vec<Card> = turn.hand().iter().collect();
        let heaps: Vec<HeapId> = turn.heaps().iter().map(|(id, _)| id).collect();
        for card in cards {
            if turn.plays().len() >= self.limit {
                return;
            }
            for &heap in &heaps {
                if turn.play_card(card, heap) {
                    break;
                }
            }
        }
    }
}

/// End-of-game notifications, in the order they arrived.
pub type ScoreLog = Rc<RefCell<Vec<(PlayerId, u32)>>>;

/// Wraps a policy and logs the final score it receives.
pub struct Recording<P> {
    pub seat: PlayerId,
    pub inner: P,
    pub log: ScoreLog,
}

impl<P: Player> Player for Recording<P> {
    fn take_turn(&mut self, turn: &mut Turn<'_>) {
        self.inner.take_turn(turn);
    }

    fn on_game_end(&mut self, score: u32) {
        self.log.borrow_mut().push((self.seat, score));
    }
}
