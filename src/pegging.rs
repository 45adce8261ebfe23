//! Scoring cards as they are pegged onto the pile.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::discards::{Discards, MAX_COUNT};
use crate::score::FIFTEEN;

/// Points earned by a single play to the pegging pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeggingScore {
    /// The count reached exactly 15.
    pub fifteen: bool,
    /// The count reached exactly 31.
    pub thirty_one: bool,
    /// Length of the trailing streak of cards sharing the played card's
    /// rank, the played card included.
    pub same_rank: u8,
    /// Length of the longest trailing run ending at the played card, or 0.
    pub run: u8,
}

impl PeggingScore {
    /// Points for the pair, pair royal or double pair royal.
    #[must_use]
    pub const fn pair_points(&self) -> u8 {
        let n = self.same_rank;
        if n < 2 { 0 } else { n * (n - 1) }
    }

    /// Total points for the play.
    #[must_use]
    pub const fn points(&self) -> u8 {
        let mut points = self.pair_points() + self.run;
        if self.fifteen {
            points += 2;
        }
        if self.thirty_one {
            points += 2;
        }
        points
    }
}

impl fmt::Display for PeggingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<&str> = Vec::new();
        if self.thirty_one {
            lines.push("31 for 2");
        }
        if self.fifteen {
            lines.push("Fifteen for 2");
        }
        match self.same_rank {
            2 => lines.push("Pair for 2"),
            3 => lines.push("Three of a kind for 6"),
            4 => lines.push("Four of a kind for 12"),
            _ => {}
        }
        f.write_str(&lines.join("\n"))?;
        if self.run > 0 {
            if !lines.is_empty() {
                f.write_str("\n")?;
            }
            write!(f, "Run of {0} for {0}", self.run)?;
        }
        Ok(())
    }
}

/// Scores the most recent card on a pile.
///
/// `pile` is the current pile with the just-played card last. An empty pile
/// scores nothing.
#[must_use]
pub fn score_play(pile: &[Card]) -> PeggingScore {
    let Some(played) = pile.last() else {
        return PeggingScore::default();
    };
    let sum: u8 = pile.iter().map(Card::points).sum();

    let same_rank = pile
        .iter()
        .rev()
        .take_while(|card| card.rank() == played.rank())
        .count() as u8;

    PeggingScore {
        fifteen: sum == FIFTEEN,
        thirty_one: sum == MAX_COUNT,
        same_rank,
        run: trailing_run(pile),
    }
}

/// Scores what playing `card` on `discards` would earn, without playing it.
///
/// Returns `None` if the card would take the count past 31.
#[must_use]
pub fn preview(card: Card, discards: &Discards) -> Option<PeggingScore> {
    if !discards.accepts(card) {
        return None;
    }
    let mut pile = discards.cards().to_vec();
    pile.push(card);
    Some(score_play(&pile))
}

/// Length of the longest window of three or more trailing cards whose ranks
/// form a consecutive sequence in any order.
fn trailing_run(pile: &[Card]) -> u8 {
    let mut ranks: Vec<u8> = Vec::with_capacity(pile.len());
    for size in (3..=pile.len()).rev() {
        ranks.clear();
        ranks.extend(pile[pile.len() - size..].iter().map(Card::rank));
        ranks.sort_unstable();
        if ranks.windows(2).all(|pair| pair[1] == pair[0] + 1) {
            return size as u8;
        }
    }
    0
}
