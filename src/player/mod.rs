//! The player contract and automated players.
//!
//! The engine only ever talks to players through [`Player`]. Each call blocks
//! until the player returns its decision; the engine validates every decision
//! and aborts the game with a
//! [`ContractViolation`](crate::error::ContractViolation) if it is illegal.

use alloc::boxed::Box;

use crate::card::Card;
use crate::discards::Discards;
use crate::hand::Hand;
use crate::notification::Notification;
use crate::pegging;

mod advanced;
mod beginner;
mod intermediate;

pub use advanced::AdvancedPlayer;
pub use beginner::BeginnerPlayer;
pub use intermediate::IntermediatePlayer;

/// A cribbage player: human, scripted or automated.
pub trait Player {
    /// Display name.
    fn name(&self) -> &str;

    /// Chooses two distinct cards from the six-card `hand` to lay away to the
    /// crib. `is_dealer` tells whether the crib is the player's own.
    fn select_lay_aways(&mut self, hand: &Hand, is_dealer: bool) -> (Card, Card);

    /// Chooses an unplayed card to peg.
    ///
    /// Only called when at least one card in `hand` fits on `discards`; the
    /// returned card must keep the count at or below 31.
    fn select_play(&mut self, hand: &Hand, starter: Card, discards: &Discards) -> Card;

    /// Observes a game event. The engine waits for this call to return.
    fn notify(&mut self, notification: &Notification) {
        let _ = notification;
    }
}

/// A player the game can own.
pub type BoxedPlayer = Box<dyn Player + Send>;

/// The two highest cards of `hand` by rank, highest first.
///
/// Returns `None` if the hand holds fewer than two cards.
fn two_highest(hand: &Hand) -> Option<(Card, Card)> {
    let mut cards = hand.cards().to_vec();
    cards.sort_unstable();
    let high = cards.pop()?;
    let next = cards.pop()?;
    Some((high, next))
}

/// The playable card that pegs the most points right now, preferring the
/// highest card on ties.
fn best_peg(hand: &Hand, discards: &Discards) -> Option<Card> {
    let mut cards = hand.cards().to_vec();
    cards.sort_unstable();

    let mut best: Option<(u8, Card)> = None;
    for &card in cards.iter().rev() {
        let Some(score) = pegging::preview(card, discards) else {
            continue;
        };
        if best.is_none_or(|(points, _)| score.points() > points) {
            best = Some((score.points(), card));
        }
    }
    best.map(|(_, card)| card)
}
