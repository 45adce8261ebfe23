//! Game engine and state management.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::discards::Discards;
use crate::error::{ContractViolation, GameError};
use crate::hand::{Crib, Hand};
use crate::notification::{Notification, NotificationKind};
use crate::options::GameOptions;
use crate::player::BoxedPlayer;
use crate::result::GameResult;

mod counting;
mod deal;
mod pegging;
pub mod state;

pub use state::{GameState, TurnOrder};

/// Number of players a game is dealt for.
pub const PLAYERS: usize = 2;

/// A player's place at the table.
#[derive(Debug, Clone)]
struct Seat {
    name: String,
    hand: Hand,
    score: u8,
}

/// A cribbage game engine that manages the deck, the players, pegging and
/// counting.
///
/// The game can be driven one step at a time ([`Game::start_game`],
/// [`Game::deal`], [`Game::lay_away`], [`Game::draw_starter`],
/// [`Game::take_turn`], [`Game::score_hands`]) or all at once with
/// [`Game::play`]. Every decision is delegated to the joined
/// [`Player`](crate::player::Player)s.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Decision makers, by seat.
    players: Mutex<Vec<BoxedPlayer>>,
    /// Hands and scores, by seat.
    seats: Mutex<Vec<Seat>>,
    /// Dealer and turn cursors. Set once a game starts.
    order: Mutex<Option<TurnOrder>>,
    /// Cards left after the deal.
    deck: Mutex<Deck>,
    /// The dealer's crib.
    crib: Mutex<Crib>,
    /// The starter card, once cut.
    starter: Mutex<Option<Card>>,
    /// The pegging pile.
    discards: Mutex<Discards>,
    /// Last seat to peg a card this round.
    last_to_peg: Mutex<Option<usize>>,
    /// Every notification sent this game, oldest first.
    events: Mutex<Vec<Notification>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.player_count(), 0);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::NewGame),
            players: Mutex::new(Vec::new()),
            seats: Mutex::new(Vec::new()),
            order: Mutex::new(None),
            deck: Mutex::new(Deck::new()),
            crib: Mutex::new(Crib::new()),
            starter: Mutex::new(None),
            discards: Mutex::new(Discards::new()),
            last_to_peg: Mutex::new(None),
            events: Mutex::new(Vec::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats a player at the table.
    ///
    /// Returns the assigned seat index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] while a game is in progress and
    /// [`GameError::PlayerCount`] if the table is full.
    pub fn join(&self, player: BoxedPlayer) -> Result<usize, GameError> {
        if !self.state().is_idle() {
            return Err(GameError::InvalidState);
        }
        let mut players = self.players.lock();
        if players.len() >= PLAYERS {
            return Err(GameError::PlayerCount);
        }
        let name = String::from(player.name());
        players.push(player);
        drop(players);

        let mut seats = self.seats.lock();
        seats.push(Seat {
            name,
            hand: Hand::new(),
            score: 0,
        });
        Ok(seats.len() - 1)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.seats.lock().len()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the name of the player in `seat`.
    pub fn name(&self, seat: usize) -> Option<String> {
        self.seats.lock().get(seat).map(|s| s.name.clone())
    }

    /// Returns the score of the player in `seat`.
    pub fn score(&self, seat: usize) -> Option<u8> {
        self.seats.lock().get(seat).map(|s| s.score)
    }

    /// Returns every score, by seat.
    pub fn scores(&self) -> Vec<u8> {
        self.seats.lock().iter().map(|s| s.score).collect()
    }

    /// Returns a copy of the hand in `seat`.
    pub fn hand(&self, seat: usize) -> Option<Hand> {
        self.seats.lock().get(seat).map(|s| s.hand.clone())
    }

    /// Returns a copy of the crib.
    pub fn crib(&self) -> Crib {
        self.crib.lock().clone()
    }

    /// Returns the starter card, once cut.
    pub fn starter(&self) -> Option<Card> {
        *self.starter.lock()
    }

    /// Returns a copy of the pegging pile.
    pub fn discards(&self) -> Discards {
        self.discards.lock().clone()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the seating order, once a game has started.
    pub fn turn_order(&self) -> Option<TurnOrder> {
        *self.order.lock()
    }

    /// Returns the seat of the dealer.
    pub fn dealer(&self) -> Option<usize> {
        self.turn_order().map(|order| order.dealer())
    }

    /// Returns the seat whose turn it is.
    pub fn current_player(&self) -> Option<usize> {
        self.turn_order().map(|order| order.turn())
    }

    /// Returns whether somebody has reached the winning score.
    pub fn is_game_over(&self) -> bool {
        let winning = self.options.winning_score;
        self.seats.lock().iter().any(|s| s.score >= winning)
    }

    /// Returns whether the round is over: the game is won or every card has
    /// been pegged.
    pub fn is_round_over(&self) -> bool {
        self.is_game_over() || self.all_cards_played()
    }

    fn all_cards_played(&self) -> bool {
        self.seats.lock().iter().all(|s| s.hand.is_empty())
    }

    /// Returns a copy of every notification sent this game.
    pub fn events(&self) -> Vec<Notification> {
        self.events.lock().clone()
    }

    /// Removes and returns the notifications sent so far.
    pub fn drain_events(&self) -> Vec<Notification> {
        core::mem::take(&mut *self.events.lock())
    }

    /// Returns the result of the game once it is over.
    pub fn result(&self) -> Option<GameResult> {
        if self.state() != GameState::GameOver {
            return None;
        }
        let scores = self.scores();
        let winning = self.options.winning_score;
        let winner = scores.iter().position(|&score| score >= winning)?;
        let skunk = scores
            .iter()
            .enumerate()
            .filter(|&(seat, _)| seat != winner)
            .all(|(_, &score)| score <= self.options.skunk_line);
        Some(GameResult {
            winner,
            scores,
            skunk,
        })
    }

    fn order(&self) -> Result<TurnOrder, GameError> {
        self.turn_order().ok_or(GameError::InvalidState)
    }

    fn update_order(&self, f: impl FnOnce(&mut TurnOrder)) {
        if let Some(order) = self.order.lock().as_mut() {
            f(order);
        }
    }

    fn set_state(&self, state: GameState) {
        *self.state.lock() = state;
    }

    /// Sends a notification to every player and records it.
    fn notify_all(&self, mut notification: Notification) {
        if let Some(name) = notification.player.and_then(|seat| self.name(seat)) {
            notification.name = name;
        }
        log::debug!(
            "{:?} player={:?} points={} {}",
            notification.kind,
            notification.player,
            notification.points,
            notification.data
        );
        for player in self.players.lock().iter_mut() {
            player.notify(&notification);
        }
        self.events.lock().push(notification);
    }

    /// Adds up to `points` to `seat`, stopping at the winning score.
    ///
    /// Returns the points actually credited.
    fn credit(&self, seat: usize, points: u8) -> u8 {
        let winning = self.options.winning_score;
        let mut seats = self.seats.lock();
        let Some(seat) = seats.get_mut(seat) else {
            return 0;
        };
        let before = seat.score;
        seat.score = before.saturating_add(points).min(winning);
        seat.score - before
    }

    /// Pegs points for `seat` and reports them. Does nothing once the game
    /// is over.
    fn add_points(&self, seat: usize, points: u8, reason: &str) -> u8 {
        if self.state() == GameState::GameOver || points == 0 {
            return 0;
        }
        let credited = self.credit(seat, points);
        let score = self.score(seat).unwrap_or(0);
        self.notify_all(
            Notification::new(NotificationKind::Points, Some(seat), reason)
                .with_points(credited, score),
        );
        self.check_for_winner(seat);
        credited
    }

    /// Ends the game if `seat` has reached the winning score.
    fn check_for_winner(&self, seat: usize) {
        if self.score(seat).is_some_and(|s| s >= self.options.winning_score) {
            self.end_game(seat);
        }
    }

    fn end_game(&self, winner: usize) {
        self.set_state(GameState::GameOver);
        let final_score = {
            let seats = self.seats.lock();
            seats
                .iter()
                .map(|s| format!("{} {}", s.name, s.score))
                .collect::<Vec<_>>()
                .join(", ")
        };
        log::info!("game over, seat {winner} won ({final_score})");
        self.notify_all(Notification::new(
            NotificationKind::GameOver,
            Some(winner),
            final_score,
        ));
    }

    /// Aborts the game over a broken player contract.
    fn violation(&self, player: usize, violation: ContractViolation) -> GameError {
        log::error!("seat {player} broke the player contract: {violation}");
        self.set_state(GameState::Aborted);
        GameError::ContractViolation { player, violation }
    }

    /// Aborts the game after running out of cards.
    fn out_of_cards(&self) -> GameError {
        log::error!("ran out of cards");
        self.set_state(GameState::Aborted);
        GameError::EmptyDeck
    }
}
