//! The game engine.
//!
//! `GameEnv` owns the deck, the heaps and the roster, and drives the turn
//! loop:
//!
//! 1. **Setup**: players register with [`GameEnv::add_player`]
//! 2. **Running**: [`GameEnv::prepare`] deals, then each [`GameEnv::step`]
//!    runs one turn for the next seat in round-robin order
//! 3. **Finished**: the score is computed once and sent to every player
//!
//! [`GameEnv::play`] runs all three.

use tracing::{debug, info, warn};

use super::record::{GameOutcome, GamePhase, GameReport, TurnRecord, TurnStatus};
use super::rules;
use super::snapshot::GameSnapshot;
use crate::cards::{Deck, Hand};
use crate::core::{draw_count, GameConfig, GameError, GameRng, PlayerId, PlayerMap, MAX_PLAYERS};
use crate::heaps::HeapSet;
use crate::players::{Player, Seat, Turn};

/// One game of The Game.
///
/// ## Example
///
/// ```
/// use the_game::core::GameConfig;
/// use the_game::game::GameEnv;
/// use the_game::players::Turn;
///
/// let mut env = GameEnv::new(&GameConfig::new().with_seed(42));
/// env.add_player(|turn: &mut Turn<'_>| {
///     let cards: Vec<_> = turn.hand().iter().collect();
///     let heaps: Vec<_> = turn.heaps().iter().map(|(id, _)| id).collect();
///     for card in cards {
///         heaps.iter().any(|&heap| turn.play_card(card, heap));
///     }
/// })
/// .unwrap();
///
/// let report = env.play().unwrap();
/// assert!(report.played_cards > 0);
/// ```
pub struct GameEnv {
    seed: Option<u64>,
    deck: Deck,
    heaps: HeapSet,
    players: Vec<Box<dyn Player>>,
    /// Dealt on `prepare`; `None` during setup.
    seats: Option<PlayerMap<Seat>>,
    current: PlayerId,
    phase: GamePhase,
    history: Vec<TurnRecord>,
    outcome: Option<GameOutcome>,
}

impl GameEnv {
    /// Create a game with a freshly shuffled deck.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let deck = Deck::shuffled(&mut rng);
        let mut env = Self::with_deck(deck);
        env.seed = Some(rng.seed());
        env
    }

    /// Create a game that deals from a prepared deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            seed: None,
            deck,
            heaps: HeapSet::new(),
            players: Vec::new(),
            seats: None,
            current: PlayerId::new(0),
            phase: GamePhase::Setup,
            history: Vec::new(),
            outcome: None,
        }
    }

    // === Setup ===

    /// Register a player. Seats are assigned in registration order.
    pub fn add_player(&mut self, player: impl Player + 'static) -> Result<PlayerId, GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidConfiguration(
                "players cannot join a game that has started".into(),
            ));
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::InvalidConfiguration(format!(
                "roster is full ({MAX_PLAYERS} players)"
            )));
        }

        let id = PlayerId::new(self.players.len() as u8);
        self.players.push(Box::new(player));
        Ok(id)
    }

    /// Fix the roster and deal every hand.
    pub fn prepare(&mut self) -> Result<(), GameError> {
        if self.phase != GamePhase::Setup {
            return Err(GameError::InvalidConfiguration(
                "game has already been prepared".into(),
            ));
        }

        let player_count = self.players.len();
        let draw_count = draw_count(player_count)?;
        let mut seats = PlayerMap::new(player_count, |_| Seat::new(draw_count));
        for (_, seat) in seats.iter_mut() {
            seat.fill_hand(&mut self.deck);
        }

        info!(
            players = player_count,
            draw_count,
            seed = ?self.seed,
            remaining = self.deck.remaining(),
            "game started"
        );
        self.seats = Some(seats);
        self.phase = GamePhase::Running;
        Ok(())
    }

    // === Turn loop ===

    /// Run one turn for the current seat and advance to the next.
    ///
    /// Finishes the game when the turn stalls or the last card is played.
    pub fn step(&mut self) -> Result<TurnRecord, GameError> {
        let seats = match self.seats.as_mut() {
            Some(seats) if self.phase == GamePhase::Running => seats,
            _ => {
                return Err(GameError::InvalidConfiguration(
                    "game is not running".into(),
                ))
            }
        };

        let player = self.current;
        self.current = player.next(seats.player_count());
        let turn_number = self.history.len() as u32 + 1;
        let seat = &mut seats[player];

        let record = if seat.hand.is_empty() {
            debug!(turn = turn_number, %player, "skipped empty hand");
            TurnRecord {
                turn: turn_number,
                player,
                plays: Default::default(),
                drawn: 0,
                status: TurnStatus::Skipped,
            }
        } else {
            let before = self.heaps.played_cards();
            let remaining = self.deck.remaining();
            let mut turn = Turn::new(player, &mut seat.hand, &mut self.heaps, remaining);
            self.players[player.index()].take_turn(&mut turn);
            let plays = turn.into_plays();
            let played = self.heaps.played_cards() - before;

            let (status, drawn) = if rules::ends_game(played, self.deck.remaining()) {
                warn!(
                    turn = turn_number,
                    %player,
                    played,
                    remaining = self.deck.remaining(),
                    "turn stalled"
                );
                (TurnStatus::Stalled, 0)
            } else {
                (TurnStatus::Continued, seat.fill_hand(&mut self.deck))
            };
            debug!(turn = turn_number, %player, played, drawn, ?status, "turn finished");

            TurnRecord {
                turn: turn_number,
                player,
                plays,
                drawn,
                status,
            }
        };

        let all_empty = seats.values().all(|seat| seat.hand.is_empty());
        self.history.push(record.clone());

        if record.status == TurnStatus::Stalled {
            self.finish(GameOutcome::Stalled {
                player,
                played: record.played(),
            });
        } else if all_empty {
            self.finish(GameOutcome::Victory);
        }
        Ok(record)
    }

    /// Play a whole game: deal if needed, run turns until the end, and
    /// return the final report.
    pub fn play(&mut self) -> Result<GameReport, GameError> {
        if self.phase == GamePhase::Setup {
            self.prepare()?;
        }
        while self.phase == GamePhase::Running {
            self.step()?;
        }
        self.report().ok_or_else(|| {
            GameError::InvalidConfiguration("game ended without an outcome".into())
        })
    }

    fn finish(&mut self, outcome: GameOutcome) {
        let score = self.score();
        self.phase = GamePhase::Finished;
        self.outcome = Some(outcome);

        info!(
            score,
            ?outcome,
            turns = self.history.len(),
            played = self.played_cards(),
            remaining = self.remaining_cards(),
            "game over"
        );
        for player in &mut self.players {
            player.on_game_end(score);
        }
    }

    // === Queries ===

    /// Shuffle seed, if the deck was shuffled by the engine.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat that plays next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// The four heaps.
    #[must_use]
    pub fn heaps(&self) -> &HeapSet {
        &self.heaps
    }

    /// A seat's hand. `None` before the deal or for an unknown seat.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.seats
            .as_ref()
            .filter(|seats| player.index() < seats.player_count())
            .map(|seats| &seats[player].hand)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards resting on the heaps.
    #[must_use]
    pub fn played_cards(&self) -> usize {
        self.heaps.played_cards()
    }

    /// Cards drawn from the deck so far.
    #[must_use]
    pub fn drawn_cards(&self) -> usize {
        self.deck.drawn()
    }

    /// Score of the game as it stands.
    #[must_use]
    pub fn score(&self) -> u32 {
        rules::score(self.played_cards(), self.remaining_cards())
    }

    /// Every turn executed so far.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Final summary. `None` until the game is finished.
    #[must_use]
    pub fn report(&self) -> Option<GameReport> {
        let outcome = self.outcome?;
        Some(GameReport {
            score: self.score(),
            outcome,
            turns: self.history.len() as u32,
            played_cards: self.played_cards(),
            remaining_cards: self.remaining_cards(),
            drawn_cards: self.drawn_cards(),
        })
    }

    /// Public state of the table.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let hand_sizes = self
            .seats
            .as_ref()
            .map(|seats| seats.values().map(|seat| seat.hand.len()).collect())
            .unwrap_or_default();

        GameSnapshot {
            phase: self.phase,
            turn: self.history.len() as u32,
            current_player: self.current,
            heaps: self.heaps.clone(),
            hand_sizes,
            remaining_cards: self.remaining_cards(),
            played_cards: self.played_cards(),
        }
    }
}

impl std::fmt::Debug for GameEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEnv")
            .field("seed", &self.seed)
            .field("phase", &self.phase)
            .field("players", &self.players.len())
            .field("current", &self.current)
            .field("remaining_cards", &self.deck.remaining())
            .field("played_cards", &self.heaps.played_cards())
            .finish()
    }
}
