//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, must be between 1 and 13")]
    InvalidRank(u8),
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    Empty,
}

/// Errors that can occur when moving cards within a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The card is not among the unplayed cards.
    #[error("card not found in hand")]
    CardNotFound,
    /// A hand can only be reset once every card has been played.
    #[error("hand still has unplayed cards")]
    CardsUnplayed,
}

/// Errors that can occur when adding to the pegging pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Playing the card would take the pile past 31.
    #[error("can't exceed 31 on the discard pile (sum {sum}, card worth {points})")]
    Overflow {
        /// Current pile sum.
        sum: u8,
        /// Points of the rejected card.
        points: u8,
    },
}

/// Ways a [`Player`](crate::player::Player) can break its contract with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    /// A lay-away card is not in the player's hand.
    #[error("lay-away card not in hand")]
    LayAwayNotInHand,
    /// Both lay-away selections name the same card.
    #[error("the same card was laid away twice")]
    DuplicateLayAway,
    /// The selected play is not among the player's unplayed cards.
    #[error("played card not in hand")]
    PlayNotInHand,
    /// The selected play would take the pile past 31.
    #[error("played card would exceed 31")]
    PlayExceeds31,
    /// The crib did not end up with four cards.
    #[error("crib doesn't have 4 cards")]
    CribSize,
    /// A hand did not end up with four unplayed cards after the lay-away.
    #[error("hand doesn't have 4 unplayed cards")]
    HandSize,
}

/// Errors returned by the [`Game`](crate::game::Game) step API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Invalid game state for this operation.
    #[error("invalid game state for this operation")]
    InvalidState,
    /// A game needs exactly two players.
    #[error("a game needs exactly two players")]
    PlayerCount,
    /// Seat index out of range.
    #[error("player not found")]
    PlayerNotFound,
    /// Ran out of cards while dealing or drawing the starter.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// A player broke its contract; the game is aborted.
    #[error("player {player} violated the engine contract: {violation}")]
    ContractViolation {
        /// Seat index of the offending player.
        player: usize,
        /// What went wrong.
        violation: ContractViolation,
    },
}

impl From<DeckError> for GameError {
    fn from(_: DeckError) -> Self {
        Self::EmptyDeck
    }
}
