extern crate alloc;

use alloc::string::String;

use crate::card::Card;
use crate::discards::Discards;
use crate::hand::Hand;

use super::{Player, two_highest};

/// Simple-minded automated player.
///
/// Always lays away its two highest cards and pegs its lowest playable card.
#[derive(Debug, Clone)]
pub struct BeginnerPlayer {
    name: String,
}

impl BeginnerPlayer {
    /// Creates a beginner player called "Beginner".
    #[must_use]
    pub fn new() -> Self {
        Self::named("Beginner")
    }

    /// Creates a beginner player with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for BeginnerPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for BeginnerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_lay_aways(&mut self, hand: &Hand, _is_dealer: bool) -> (Card, Card) {
        // SAFETY: the engine only asks for lay-aways from a freshly dealt six-card hand.
        two_highest(hand).expect("lay-aways are chosen from six cards")
    }

    fn select_play(&mut self, hand: &Hand, _starter: Card, discards: &Discards) -> Card {
        // SAFETY: the engine only asks for a play when some card fits.
        hand.cards()
            .iter()
            .copied()
            .filter(|&card| discards.accepts(card))
            .min()
            .expect("select_play is only called with a playable card")
    }
}
