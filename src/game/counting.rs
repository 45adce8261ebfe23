use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::card::Card;
use crate::error::GameError;
use crate::notification::{Notification, NotificationKind};
use crate::result::{GameResult, HandResult, MatchResult, RoundResult};
use crate::score::{HandValue, ScoreCategory, hand_value};

use super::deal::describe_cards;
use super::{Game, GameState, PLAYERS};

impl Game {
    /// Counts every hand, starting after the dealer, and then the dealer's
    /// crib. Counting stops the moment somebody reaches the winning score.
    /// The deal then passes to the next player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless every card has been pegged.
    pub fn score_hands(&self) -> Result<RoundResult, GameError> {
        if self.state() != GameState::Scoring {
            return Err(GameError::InvalidState);
        }
        let order = self.order()?;
        let starter = self.starter().ok_or(GameError::InvalidState)?;
        let dealer = order.dealer();

        self.notify_all(Notification::new(
            NotificationKind::RoundOver,
            None,
            starter.to_string(),
        ));

        let mut hands = Vec::with_capacity(PLAYERS);
        for seat in order.from_pone() {
            if self.is_game_over() {
                break;
            }
            let cards = {
                let mut seats = self.seats.lock();
                let hand = &mut seats[seat].hand;
                hand.reset().map_err(|_| GameError::InvalidState)?;
                hand.cards().to_vec()
            };
            let value = hand_value(&cards, starter, false);
            let credited = self.count(seat, &cards, value, NotificationKind::ScoreHand);
            hands.push(HandResult {
                player: seat,
                value,
                credited,
            });
        }

        let mut crib = None;
        if !self.is_game_over() {
            let cards = {
                let mut crib = self.crib.lock();
                crib.sort();
                crib.cards().to_vec()
            };
            let value = hand_value(&cards, starter, true);
            let credited = self.count(dealer, &cards, value, NotificationKind::ScoreCrib);
            crib = Some(HandResult {
                player: dealer,
                value,
                credited,
            });
        }

        self.update_order(|order| order.rotate_dealer());
        if self.state() == GameState::Scoring {
            self.set_state(GameState::RoundOver);
        }
        log::info!("round counted, scores {:?}", self.scores());

        Ok(RoundResult {
            dealer,
            starter,
            hands,
            crib,
        })
    }

    /// Credits a count category by category, stopping at the winning score,
    /// and reports it. Returns the points credited.
    fn count(&self, seat: usize, cards: &[Card], value: HandValue, kind: NotificationKind) -> u8 {
        let mut credited = 0;
        let mut reason = describe_cards(cards);
        for category in ScoreCategory::ALL {
            let points = value.points(category);
            if points == 0 {
                continue;
            }
            reason.push('\n');
            let _ = value.describe(category, &mut reason);
            credited += self.credit(seat, points);
            if self.score(seat).is_some_and(|s| s >= self.options.winning_score) {
                break;
            }
        }

        let score = self.score(seat).unwrap_or(0);
        self.notify_all(Notification::new(kind, Some(seat), reason).with_points(credited, score));
        self.check_for_winner(seat);
        credited
    }

    /// Plays a full round: deal, lay-away, starter, pegging and counting.
    ///
    /// Returns `None` if the game was won before the count.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or a player
    /// breaks its contract.
    pub fn play_round(&self) -> Result<Option<RoundResult>, GameError> {
        self.deal()?;
        self.lay_away()?;
        self.draw_starter()?;
        while self.state().is_pegging() {
            self.take_turn()?;
        }
        if self.state() == GameState::Scoring {
            return self.score_hands().map(Some);
        }
        Ok(None)
    }

    /// Plays a whole game from the cut for deal to the winning peg.
    ///
    /// # Errors
    ///
    /// Returns an error if two players have not joined or a player breaks
    /// its contract.
    pub fn play(&self) -> Result<GameResult, GameError> {
        self.start_game()?;
        while self.state() != GameState::GameOver {
            self.play_round()?;
        }
        self.result().ok_or(GameError::InvalidState)
    }

    /// Plays `games` games between the same players.
    ///
    /// # Errors
    ///
    /// Returns the first error any game returns.
    pub fn play_match(&self, games: u32) -> Result<MatchResult, GameError> {
        let mut result = MatchResult {
            games: 0,
            wins: vec![0; PLAYERS],
            points: vec![0; PLAYERS],
        };
        for _ in 0..games {
            let game = self.play()?;
            result.games += 1;
            result.wins[game.winner] += 1;
            result.points[game.winner] += if game.skunk { 2 } else { 1 };
        }
        log::info!("match over: {}", summarize(self, &result));
        Ok(result)
    }
}

fn summarize(game: &Game, result: &MatchResult) -> String {
    let mut summary = String::new();
    for (seat, points) in result.points.iter().enumerate() {
        if seat > 0 {
            summary.push_str(", ");
        }
        let name = game.name(seat).unwrap_or_else(|| format!("seat {seat}"));
        let _ = write!(summary, "{name} {points}");
    }
    summary
}
