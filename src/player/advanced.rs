extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{ACE, Card, DECK_SIZE, JACK, KING, Suit};
use crate::discards::Discards;
use crate::hand::Hand;
use crate::score::{count_fifteens, count_pairs, find_run};

use super::{Player, best_peg};

/// Cards of each rank in a full deck.
const PER_RANK: usize = 4;
/// Cards of each suit in a full deck.
const PER_SUIT: usize = 13;

/// Automated player that weighs every possible starter.
///
/// Lays away the pair that maximises the kept hand's value plus (or minus,
/// for the opponent's crib) the laid away pair's value, averaged over the
/// starter ranks still unseen. Flushes and knobs are weighted by the suits
/// still unseen. Pegs like [`IntermediatePlayer`](super::IntermediatePlayer).
#[derive(Debug, Clone)]
pub struct AdvancedPlayer {
    name: String,
}

impl AdvancedPlayer {
    /// Creates an advanced player called "Advanced".
    #[must_use]
    pub fn new() -> Self {
        Self::named("Advanced")
    }

    /// Creates an advanced player with the given name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Expected net value of keeping `kept` and laying away `crib`.
    ///
    /// The starter is drawn from the cards not in either slice. The crib
    /// value is added when `is_dealer` and subtracted otherwise.
    #[must_use]
    pub fn expected_value(kept: &[Card], crib: &[Card], is_dealer: bool) -> f64 {
        let unseen = Unseen::new(kept, crib);
        let hand_value = unseen.value(kept, false);
        let crib_value = unseen.value(crib, true);
        if is_dealer {
            hand_value + crib_value
        } else {
            hand_value - crib_value
        }
    }

    /// Picks the lay-away pair with the best expected net value. Later pairs
    /// win ties.
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

                let net = Self::expected_value(&kept, &crib, is_dealer);
                if best.is_none_or(|(value, _, _)| net >= value) {
                    best = Some((net, cards[i], cards[j]));
                }
            }
        }

        best.map(|(_, first, second)| (first, second))
    }
}

impl Default for AdvancedPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AdvancedPlayer {
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

/// The cards a player has not seen, from which the starter is drawn.
struct Unseen {
    known: Vec<Card>,
    total: f64,
}

impl Unseen {
    fn new(kept: &[Card], crib: &[Card]) -> Self {
        let known: Vec<Card> = kept.iter().chain(crib).copied().collect();
        let total = to_f64(DECK_SIZE.saturating_sub(known.len()));
        Self { known, total }
    }

    fn of_rank(&self, rank: u8) -> f64 {
        let seen = self.known.iter().filter(|card| card.rank() == rank).count();
        to_f64(PER_RANK.saturating_sub(seen))
    }

    fn of_suit(&self, suit: Suit) -> f64 {
        let seen = self.known.iter().filter(|card| card.suit() == suit).count();
        to_f64(PER_SUIT.saturating_sub(seen))
    }

    /// Expected count of `cards` once the starter is added.
    fn value(&self, cards: &[Card], is_crib: bool) -> f64 {
        if self.total < 3.0 {
            return 0.0;
        }
        let mut value = 0.0;

        if let [first, rest @ ..] = cards {
            let suited = rest.iter().all(|card| card.suit() == first.suit());
            let left = self.of_suit(first.suit());
            if suited && !is_crib && cards.len() == 4 {
                value += 4.0 + left / self.total;
            } else if suited && is_crib && cards.len() == 2 {
                // The other two crib cards and the starter must all follow suit.
                value += 5.0 * left / self.total * (left - 1.0) / (self.total - 1.0)
                    * (left - 2.0).max(0.0)
                    / (self.total - 2.0);
            }
        }

        for card in cards.iter().filter(|card| card.rank() == JACK) {
            value += self.of_suit(card.suit()) / self.total;
        }

        for starter in ACE..=KING {
            let chance = self.of_rank(starter) / self.total;
            if chance > 0.0 {
                value += chance * unsuited_value(cards, starter);
            }
        }
        value
    }
}

/// Fifteens, pairs and runs of `cards` plus a starter of the given rank.
fn unsuited_value(cards: &[Card], starter: u8) -> f64 {
    let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
    ranks.push(starter);
    ranks.sort_unstable();
    let mut points: Vec<u8> = ranks.iter().map(|&rank| rank.min(10)).collect();
    points.sort_unstable();

    let counted = 2 * count_fifteens(&points) + 2 * count_pairs(&ranks);
    let run = find_run(&ranks).map_or(0, |run| run.points());
    to_f64(counted) + f64::from(run)
}

#[expect(
    clippy::cast_precision_loss,
    reason = "card counts are exact in f64"
)]
fn to_f64(count: usize) -> f64 {
    count as f64
}
