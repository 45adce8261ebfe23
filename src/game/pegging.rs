use alloc::string::ToString;

use crate::discards::MAX_COUNT;
use crate::error::{ContractViolation, GameError};
use crate::notification::{Notification, NotificationKind};
use crate::pegging::score_play;
use crate::result::TurnOutcome;

use super::{Game, GameState};

impl Game {
    /// Returns whether any player holds a card that fits on the pile.
    pub fn can_anyone_go(&self) -> bool {
        let sum = self.discards.lock().sum();
        self.seats.lock().iter().any(|s| s.hand.can_play_on(sum))
    }

    /// Lets the player whose turn it is peg, then passes the turn on.
    ///
    /// A player with no cards left is skipped. A player who cannot play says
    /// "go"; when nobody can play, the last player to peg takes a point, the
    /// pile starts over and play resumes with the player after them.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] outside of pegging, or
    /// [`GameError::ContractViolation`] (aborting the game) if the player
    /// pegs a card it does not hold or one that takes the count past 31.
    pub fn take_turn(&self) -> Result<TurnOutcome, GameError> {
        if !self.state().is_pegging() {
            return Err(GameError::InvalidState);
        }
        self.set_state(GameState::Pegging);

        let seat = self.order()?.turn();
        let outcome = self.peg(seat)?;

        if self.state() == GameState::Pegging && self.all_cards_played() {
            log::debug!("all cards pegged");
            self.set_state(GameState::Scoring);
        }
        self.update_order(|order| order.rotate_turn());
        Ok(outcome)
    }

    fn peg(&self, seat: usize) -> Result<TurnOutcome, GameError> {
        let hand = self.hand(seat).ok_or(GameError::PlayerNotFound)?;
        if hand.is_empty() {
            return Ok(TurnOutcome::Skipped);
        }

        let discards = self.discards();
        if !hand.can_play_on(discards.sum()) {
            return Ok(self.go(seat));
        }

        let starter = self.starter().ok_or(GameError::InvalidState)?;
        let card = {
            let mut players = self.players.lock();
            let player = players.get_mut(seat).ok_or(GameError::PlayerNotFound)?;
            player.select_play(&hand, starter, &discards)
        };

        if hand.find_card(card).is_none() {
            return Err(self.violation(seat, ContractViolation::PlayNotInHand));
        }
        let added = self.discards.lock().add_card(card);
        if added.is_err() {
            return Err(self.violation(seat, ContractViolation::PlayExceeds31));
        }
        let played = self.seats.lock()[seat].hand.play_card(card);
        if played.is_err() {
            return Err(self.violation(seat, ContractViolation::PlayNotInHand));
        }
        *self.last_to_peg.lock() = Some(seat);

        self.notify_all(Notification::new(
            NotificationKind::Play,
            Some(seat),
            card.to_string(),
        ));

        let pile = self.discards();
        let score = score_play(pile.cards());
        if score.points() > 0 {
            self.add_points(seat, score.points(), &score.to_string());
        }

        let mut last_card = false;
        if pile.sum() == MAX_COUNT {
            self.discards.lock().start_new_pile();
        } else if self.all_cards_played() && self.state() != GameState::GameOver {
            last_card = self.add_points(seat, 1, "Last card") > 0;
        }

        Ok(TurnOutcome::Played {
            card,
            score,
            last_card,
        })
    }

    /// The player in `seat` holds cards but none fit.
    fn go(&self, seat: usize) -> TurnOutcome {
        self.notify_all(Notification::new(NotificationKind::Go, Some(seat), "Go"));
        if self.can_anyone_go() {
            return TurnOutcome::Go { awarded: None };
        }

        let last = *self.last_to_peg.lock();
        if let Some(last) = last {
            self.add_points(last, 1, "Go");
            self.update_order(|order| {
                let _ = order.set_turn(last);
            });
        }
        self.discards.lock().start_new_pile();
        TurnOutcome::Go { awarded: last }
    }
}
