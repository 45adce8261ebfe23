use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, JACK, KING};
use crate::deck::Deck;
use crate::discards::Discards;
use crate::error::{ContractViolation, GameError};
use crate::hand::{CRIB_SIZE, Hand};
use crate::notification::{Notification, NotificationKind};

use super::{Game, GameState, PLAYERS, TurnOrder};

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 6;
/// Cards each player keeps after laying away to the crib.
pub const KEPT_SIZE: usize = 4;

impl Game {
    /// Starts a new game: clears scores and hands, announces the players and
    /// cuts for deal. The lowest cut deals first.
    ///
    /// Any game in progress is abandoned. Returns the seat of the first
    /// dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] unless exactly two players have
    /// joined.
    pub fn start_game(&self) -> Result<usize, GameError> {
        if self.player_count() != PLAYERS {
            return Err(GameError::PlayerCount);
        }
        let mut order = TurnOrder::new(PLAYERS)?;

        let names = {
            let mut seats = self.seats.lock();
            for seat in seats.iter_mut() {
                seat.hand = Hand::new();
                seat.score = 0;
            }
            seats
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.clear_table();
        self.events.lock().clear();
        self.set_state(GameState::NewGame);

        log::info!("new game between {names}");
        self.notify_all(Notification::new(NotificationKind::NewGame, None, names));

        let dealer = self.cut_for_deal()?;
        order.set_dealer(dealer)?;
        *self.order.lock() = Some(order);
        self.set_state(GameState::CutForDeal);

        log::info!("seat {dealer} deals first");
        Ok(dealer)
    }

    /// Every player cuts a shuffled deck. A player whose cut ties the lowest
    /// rank seen so far cuts again.
    fn cut_for_deal(&self) -> Result<usize, GameError> {
        let cuts: Vec<Card> = {
            let mut rng = self.rng.lock();
            let deck = Deck::shuffled(&mut *rng);
            let mut lowest = KING + 1;
            let mut cuts = Vec::with_capacity(PLAYERS);
            for _ in 0..PLAYERS {
                let mut card = deck.cut_a_card(&mut *rng)?;
                while card.rank() == lowest {
                    card = deck.cut_a_card(&mut *rng)?;
                }
                lowest = lowest.min(card.rank());
                cuts.push(card);
            }
            cuts
        };

        let mut dealer = 0;
        for (seat, card) in cuts.iter().enumerate() {
            self.notify_all(Notification::new(
                NotificationKind::CutForDeal,
                Some(seat),
                card.to_string(),
            ));
            if card.rank() < cuts[dealer].rank() {
                dealer = seat;
            }
        }
        Ok(dealer)
    }

    /// Overrides the dealer before a deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the seat
    /// does not exist.
    pub fn set_dealer(&self, seat: usize) -> Result<(), GameError> {
        if !self.state().awaits_deal() {
            return Err(GameError::InvalidState);
        }
        let mut order = self.order.lock();
        order.as_mut().ok_or(GameError::InvalidState)?.set_dealer(seat)
    }

    fn clear_table(&self) {
        self.crib.lock().clear();
        *self.discards.lock() = Discards::new();
        *self.starter.lock() = None;
        *self.last_to_peg.lock() = None;
    }

    /// Deals six cards to each player from a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is waiting for a
    /// deal.
    pub fn deal(&self) -> Result<(), GameError> {
        let deck = {
            let mut rng = self.rng.lock();
            Deck::shuffled(&mut *rng)
        };
        self.deal_from(deck)
    }

    /// Deals six cards to each player from `deck`, starting with the player
    /// after the dealer. The rest of the deck is kept for the starter.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the game is waiting for a
    /// deal, or [`GameError::EmptyDeck`] if `deck` cannot cover the hands
    /// and the starter. A short deck aborts the game.
    pub fn deal_from(&self, mut deck: Deck) -> Result<(), GameError> {
        if !self.state().awaits_deal() {
            return Err(GameError::InvalidState);
        }
        if deck.len() < PLAYERS * HAND_SIZE + 1 {
            return Err(self.out_of_cards());
        }

        let mut order = self.order()?;
        order.set_dealer(order.dealer())?;
        *self.order.lock() = Some(order);
        self.clear_table();

        let mut hands: Vec<Hand> = (0..PLAYERS).map(|_| Hand::new()).collect();
        for _ in 0..HAND_SIZE {
            for seat in order.from_pone() {
                hands[seat].add_card(deck.draw()?);
            }
        }
        for hand in &mut hands {
            hand.sort_by(self.options.card_order);
        }

        {
            let mut seats = self.seats.lock();
            for (seat, hand) in seats.iter_mut().zip(hands) {
                seat.hand = hand;
            }
        }
        *self.deck.lock() = deck;
        self.set_state(GameState::Dealt);

        let dealer = order.dealer();
        log::debug!("seat {dealer} dealt");
        self.notify_all(Notification::new(
            NotificationKind::Deal,
            Some(dealer),
            self.name(dealer).unwrap_or_default(),
        ));
        Ok(())
    }

    /// Asks every player, starting after the dealer, for two cards to lay
    /// away to the dealer's crib.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the hands have just been
    /// dealt, or [`GameError::ContractViolation`] (aborting the game) if a
    /// player picks cards it does not hold or the crib and hands do not end
    /// up with four cards each.
    pub fn lay_away(&self) -> Result<(), GameError> {
        if self.state() != GameState::Dealt {
            return Err(GameError::InvalidState);
        }
        let order = self.order()?;

        for seat in order.from_pone() {
            let hand = self.hand(seat).ok_or(GameError::PlayerNotFound)?;
            let is_dealer = seat == order.dealer();

            let (first, second) = {
                let mut players = self.players.lock();
                let player = players.get_mut(seat).ok_or(GameError::PlayerNotFound)?;
                player.select_lay_aways(&hand, is_dealer)
            };
            if first == second {
                return Err(self.violation(seat, ContractViolation::DuplicateLayAway));
            }

            let laid_away = {
                let mut seats = self.seats.lock();
                let hand = &mut seats[seat].hand;
                hand.lay_away(first).and_then(|_| hand.lay_away(second))
            };
            if laid_away.is_err() {
                return Err(self.violation(seat, ContractViolation::LayAwayNotInHand));
            }

            let mut crib = self.crib.lock();
            crib.add_card(first);
            crib.add_card(second);
        }

        if self.crib.lock().len() != CRIB_SIZE {
            return Err(self.violation(order.dealer(), ContractViolation::CribSize));
        }
        let short = self
            .seats
            .lock()
            .iter()
            .position(|s| s.hand.len() != KEPT_SIZE || !s.hand.played_cards().is_empty());
        if let Some(seat) = short {
            return Err(self.violation(seat, ContractViolation::HandSize));
        }

        self.set_state(GameState::LayAway);
        log::debug!("crib laid away: {:?}", self.crib.lock().cards());
        Ok(())
    }

    /// Cuts the starter card. A jack earns the dealer two for his heels.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] unless the crib has just been
    /// laid away, or [`GameError::EmptyDeck`] (aborting the game) if the
    /// deck is empty.
    pub fn draw_starter(&self) -> Result<Card, GameError> {
        if self.state() != GameState::LayAway {
            return Err(GameError::InvalidState);
        }
        let order = self.order()?;

        let drawn = self.deck.lock().draw();
        let Ok(starter) = drawn else {
            return Err(self.out_of_cards());
        };
        *self.starter.lock() = Some(starter);
        self.set_state(GameState::StarterDrawn);

        log::debug!("starter is the {starter}");
        self.notify_all(Notification::new(
            NotificationKind::StarterCard,
            Some(order.turn()),
            starter.to_string(),
        ));

        if starter.rank() == JACK {
            self.add_points(order.dealer(), 2, "His Heels");
        }
        Ok(starter)
    }
}

/// Lists the cards in a hand for notifications.
pub(super) fn describe_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
