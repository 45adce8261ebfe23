extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, JACK};
use crate::discards::Discards;
use crate::hand::Hand;
use crate::score::{count_fifteens, count_pairs, find_run};

use super::{Player, best_peg, two_highest};

/// Chance that the starter matches a given suit, less the card itself.
const KNOBS_CHANCE: f64 = 0.235;
/// Four-card flush plus the chance of the starter matching.
const FLUSH_EXPECTATION: f64 = 4.18;

/// Automated player that looks only at immediate points.
///
/// Lays away the two cards that maximise the expected value of the kept hand
/// plus (or minus, for the opponent's crib) the expected value of the laid
/// away pair, without knowing the starter. Pegs the card scoring the most
/// right now, preferring the highest card on ties.
#[derive(Debug, Clone)]
pub struct IntermediatePlayer {
    name: String,
}

impl IntermediatePlayer {
    /// Creates an intermediate player called "Intermediate".
    #[must_use]
    pub fn new() -> Self {
        Self::named("Intermediate")
    }

    /// Creates an intermediate player with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Expected count of some cards before the starter is known.
    #[must_use]
    pub fn expected_value(cards: &[Card]) -> f64 {
        let mut value = 0.0;

        for card in cards {
            if card.rank() == JACK {
                value += KNOBS_CHANCE;
            }
        }

        if let [first, rest @ ..] = cards {
            if cards.len() == 4 && rest.iter().all(|card| card.suit() == first.suit()) {
                value += FLUSH_EXPECTATION;
            }
        }

        let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
        ranks.sort_unstable();
        let mut points: Vec<u8> = cards.iter().map(Card::points).collect();
        points.sort_unstable();

        let fifteens = count_fifteens(&points);
        let pairs = count_pairs(&ranks);
        let run = find_run(&ranks).map_or(0, |run| run.points());

        #[expect(
            clippy::cast_precision_loss,
            reason = "counts of a few cards are exact in f64"
        )]
        let counted = (2 * fifteens + 2 * pairs) as f64;
        value + counted + f64::from(run)
    }

    /// Picks the lay-away pair with the best expected net value.
    ///
    /// Returns `None` if the hand holds fewer than two cards.
    #[must_use]
    pub fn find_lay_aways(hand: &Hand, is_dealer: bool) -> Option<(Card, Card)> {
        let cards = hand.cards();
        let mut best: Option<(f64, Card, Card)> = None;

        for i in 0..cards.len() {
            for j in i + 1..cards.len() {
                let crib = [cards[i], cards[j]];
                let kept: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|&(k, _)| k != i && k != j)
                    .map(|(_, &card)| card)
                    .collect();

                let hand_value = Self::expected_value(&kept);
                let crib_value = Self::expected_value(&crib);
                let net = if is_dealer {
                    hand_value + crib_value
                } else {
                    hand_value - crib_value
                };

                if net > best.map_or(0.0, |(value, _, _)| value) {
                    best = Some((net, cards[i], cards[j]));
                }
            }
        }

        // Nothing scores: throw the high cards.
        best.map_or_else(|| two_highest(hand), |(_, first, second)| Some((first, second)))
    }
}

impl Default for IntermediatePlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for IntermediatePlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_lay_aways(&mut self, hand: &Hand, is_dealer: bool) -> (Card, Card) {
        // SAFETY: the engine only asks for lay-aways from a freshly dealt six-card hand.
        Self::find_lay_aways(hand, is_dealer).expect("lay-aways are chosen from six cards")
    }

    fn select_play(&mut self, hand: &Hand, _starter: Card, discards: &Discards) -> Card {
        // SAFETY: the engine only asks for a play when some card fits.
        best_peg(hand, discards).expect("select_play is only called with a playable card")
    }
}
