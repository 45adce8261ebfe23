//! Result types for turns, rounds, games and matches.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::pegging::PeggingScore;
use crate::score::HandValue;

/// What happened on a single pegging turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player had no cards left.
    Skipped,
    /// The player pegged a card.
    Played {
        /// The card played.
        card: Card,
        /// What the play scored.
        score: PeggingScore,
        /// Whether the player also took the point for last card.
        last_card: bool,
    },
    /// The player could not play and said "go".
    Go {
        /// Seat credited with the go point, if nobody else could play.
        awarded: Option<usize>,
    },
}

/// Count of a single hand or crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Seat of the player the count belongs to.
    pub player: usize,
    /// The full count.
    pub value: HandValue,
    /// Points actually credited (less than the count if the game ended).
    pub credited: u8,
}

/// Result of counting the hands at the end of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Seat of the dealer for the round.
    pub dealer: usize,
    /// The starter card.
    pub starter: Card,
    /// Hands in counting order. Hands after a win are not counted.
    pub hands: Vec<HandResult>,
    /// The crib count, unless the game ended first.
    pub crib: Option<HandResult>,
}

/// Result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    /// Seat of the winner.
    pub winner: usize,
    /// Final scores by seat.
    pub scores: Vec<u8>,
    /// Whether every loser finished at or below the skunk line.
    pub skunk: bool,
}

/// Result of a match of several games between the same players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of games played.
    pub games: u32,
    /// Games won by seat.
    pub wins: Vec<u32>,
    /// Match points by seat: a win counts 1, a skunk counts 2.
    pub points: Vec<u32>,
}
