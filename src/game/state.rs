//! Game state types.

use crate::error::GameError;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    NewGame,
    /// Players have cut for deal; waiting for the first deal.
    CutForDeal,
    /// Six cards dealt to each player.
    Dealt,
    /// The crib is complete.
    LayAway,
    /// The starter card is on the deck.
    StarterDrawn,
    /// Players are pegging.
    Pegging,
    /// Every card is pegged; hands and crib are waiting to be counted.
    Scoring,
    /// Hands counted and the deal passed on; waiting for the next deal.
    RoundOver,
    /// Somebody reached the winning score.
    GameOver,
    /// A player broke its contract or the deck ran out.
    Aborted,
}

impl GameState {
    /// Returns whether no game is in progress.
    #[must_use]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::NewGame | Self::GameOver | Self::Aborted)
    }

    /// Returns whether the next step is a deal.
    #[must_use]
    pub const fn awaits_deal(self) -> bool {
        matches!(self, Self::CutForDeal | Self::RoundOver)
    }

    /// Returns whether pegging turns can be taken.
    #[must_use]
    pub const fn is_pegging(self) -> bool {
        matches!(self, Self::StarterDrawn | Self::Pegging)
    }
}

/// Seating order: who deals and whose turn it is.
///
/// After a deal or a change of dealer, the turn always belongs to the player
/// after the dealer. Both cursors wrap around the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    players: usize,
    whose_deal: usize,
    whose_turn: usize,
}

impl TurnOrder {
    /// Creates the order for `players` seats with seat 0 dealing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] for fewer than two seats.
    pub const fn new(players: usize) -> Result<Self, GameError> {
        if players < 2 {
            return Err(GameError::PlayerCount);
        }
        Ok(Self {
            players,
            whose_deal: 0,
            whose_turn: 1,
        })
    }

    /// Number of seats.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.players
    }

    /// Always false: a table has at least two seats.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Seat of the dealer.
    #[must_use]
    pub const fn dealer(&self) -> usize {
        self.whose_deal
    }

    /// Seat of the player to act.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.whose_turn
    }

    /// Seat after `seat`.
    #[must_use]
    pub const fn next(&self, seat: usize) -> usize {
        (seat + 1) % self.players
    }

    /// Passes the turn to the next seat.
    pub const fn rotate_turn(&mut self) {
        self.whose_turn = self.next(self.whose_turn);
    }

    /// Passes the deal to the next seat; the seat after the new dealer acts
    /// first.
    pub const fn rotate_dealer(&mut self) {
        self.whose_deal = self.next(self.whose_deal);
        self.whose_turn = self.next(self.whose_deal);
    }

    /// Makes `seat` the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if the seat does not exist.
    pub const fn set_dealer(&mut self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players {
            return Err(GameError::PlayerNotFound);
        }
        self.whose_deal = seat;
        self.whose_turn = self.next(seat);
        Ok(())
    }

    /// Hands the turn to `seat` without touching the deal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if the seat does not exist.
    pub const fn set_turn(&mut self, seat: usize) -> Result<(), GameError> {
        if seat >= self.players {
            return Err(GameError::PlayerNotFound);
        }
        self.whose_turn = seat;
        Ok(())
    }

    /// Seats starting with the one after the dealer and ending with the
    /// dealer.
    pub fn from_pone(&self) -> impl Iterator<Item = usize> + use<> {
        let dealer = self.whose_deal;
        let players = self.players;
        (1..=players).map(move |offset| (dealer + offset) % players)
    }
}
