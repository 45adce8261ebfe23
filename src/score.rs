//! Counting a hand or crib together with the starter card.
//!
//! [`hand_value`] is a pure function: it scores fifteens, pairs, runs,
//! flushes and knobs independently and returns a [`HandValue`] breakdown
//! rather than a bare total, so callers can explain the count.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, JACK};

/// The fifteen every subset is counted against.
pub const FIFTEEN: u8 = 15;

/// Scoring categories of a counted hand, in the order the engine credits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    /// Jack matching the starter's suit.
    Knobs,
    /// Four or five cards of one suit.
    Flush,
    /// Subsets counting to fifteen.
    Fifteens,
    /// Cards of equal rank.
    Pairs,
    /// Consecutive ranks.
    Runs,
}

impl ScoreCategory {
    /// All categories in crediting order.
    pub const ALL: [Self; 5] = [
        Self::Knobs,
        Self::Flush,
        Self::Fifteens,
        Self::Pairs,
        Self::Runs,
    ];
}

/// A scoring run: its length and how many distinct ways it can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Number of consecutive ranks.
    pub len: u8,
    /// Product of the multiplicities of the ranks in the run.
    pub multiplier: u8,
}

impl Run {
    /// Points scored by the run.
    #[must_use]
    pub const fn points(&self) -> u8 {
        self.len * self.multiplier
    }
}

/// The count of a hand or crib with the starter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    /// 1 for knobs, otherwise 0.
    pub knobs: u8,
    /// Flush points: 0, 4 or 5.
    pub flush: u8,
    /// Number of distinct subsets counting to fifteen.
    pub fifteens: u8,
    /// Number of pairs of equal rank.
    pub pairs: u8,
    /// The scoring run, if any.
    pub run: Option<Run>,
}

impl HandValue {
    /// Points scored in one category.
    #[must_use]
    pub fn points(&self, category: ScoreCategory) -> u8 {
        match category {
            ScoreCategory::Knobs => self.knobs,
            ScoreCategory::Flush => self.flush,
            ScoreCategory::Fifteens => self.fifteens * 2,
            ScoreCategory::Pairs => self.pairs * 2,
            ScoreCategory::Runs => self.run.map_or(0, |run| run.points()),
        }
    }

    /// Points per category, in crediting order.
    #[must_use]
    pub fn breakdown(&self) -> [(ScoreCategory, u8); 5] {
        ScoreCategory::ALL.map(|category| (category, self.points(category)))
    }

    /// Total points.
    #[must_use]
    pub fn total(&self) -> u8 {
        ScoreCategory::ALL
            .iter()
            .map(|&category| self.points(category))
            .sum()
    }

    /// Writes the explanation line for one category. Writes nothing if the
    /// category scored zero.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    pub fn describe(&self, category: ScoreCategory, f: &mut impl fmt::Write) -> fmt::Result {
        let points = self.points(category);
        if points == 0 {
            return Ok(());
        }
        match category {
            ScoreCategory::Knobs => f.write_str("Knobs for 1"),
            ScoreCategory::Flush => write!(f, "A flush for {points}"),
            ScoreCategory::Fifteens => match self.fifteens {
                1 => f.write_str("Fifteen for 2"),
                n => write!(f, "{n} fifteens for {points}"),
            },
            ScoreCategory::Pairs => {
                match self.pairs {
                    1 => f.write_str("A pair")?,
                    2 => f.write_str("Two pair")?,
                    3 => f.write_str("Three of a kind")?,
                    4 => f.write_str("A pair and three of a kind")?,
                    6 => f.write_str("Four of a kind")?,
                    n => write!(f, "{n} pairs")?,
                }
                write!(f, " for {points}")
            }
            ScoreCategory::Runs => match self.run {
                Some(Run { len, multiplier: 1 }) => write!(f, "A run of {len} for {points}"),
                Some(Run { len, multiplier }) => {
                    write!(f, "{multiplier} runs of {len} for {points}")
                }
                None => Ok(()),
            },
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for category in ScoreCategory::ALL {
            if self.points(category) == 0 {
                continue;
            }
            if !first {
                f.write_str("\n")?;
            }
            first = false;
            self.describe(category, f)?;
        }
        Ok(())
    }
}

/// Counts a hand (or crib) together with the starter card.
///
/// `cards` are the dealt cards, normally four. The result does not depend on
/// their order.
#[must_use]
pub fn hand_value(cards: &[Card], starter: Card, is_crib: bool) -> HandValue {
    let knobs = u8::from(
        cards
            .iter()
            .any(|card| card.rank() == JACK && card.suit() == starter.suit()),
    );

    let mut ranks: Vec<u8> = cards.iter().map(Card::rank).collect();
    ranks.push(starter.rank());
    ranks.sort_unstable();

    let mut points: Vec<u8> = cards.iter().map(Card::points).collect();
    points.push(starter.points());
    points.sort_unstable();

    HandValue {
        knobs,
        flush: flush_points(cards, starter, is_crib),
        fifteens: count_fifteens(&points) as u8,
        pairs: count_pairs(&ranks) as u8,
        run: find_run(&ranks),
    }
}

fn flush_points(cards: &[Card], starter: Card, is_crib: bool) -> u8 {
    let Some(first) = cards.first() else {
        return 0;
    };
    if cards.len() < 4 || cards.iter().any(|card| card.suit() != first.suit()) {
        return 0;
    }
    let starter_matches = starter.suit() == first.suit();
    match (starter_matches, is_crib) {
        (true, _) => 5,
        (false, false) => 4,
        (false, true) => 0,
    }
}

/// Number of subsets of `points` that sum to fifteen.
///
/// `points` must be sorted ascending.
#[must_use]
pub fn count_fifteens(points: &[u8]) -> usize {
    count_sums(FIFTEEN, points)
}

/// Number of subsets of the ascending `points` that sum to `target`.
fn count_sums(target: u8, points: &[u8]) -> usize {
    let mut ways = 0;
    for (i, &value) in points.iter().enumerate() {
        if value > target {
            break;
        }
        if value == target {
            ways += 1;
            continue;
        }
        ways += count_sums(target - value, &points[i + 1..]);
    }
    ways
}

/// Number of unordered pairs of equal rank.
#[must_use]
pub fn count_pairs(ranks: &[u8]) -> usize {
    let mut pairs = 0;
    for (i, rank) in ranks.iter().enumerate() {
        pairs += ranks[i + 1..].iter().filter(|&other| other == rank).count();
    }
    pairs
}

/// Finds the longest run of three or more consecutive ranks.
///
/// `ranks` must be sorted ascending. Duplicated ranks inside the run multiply
/// it: one pair doubles, a triple triples, two pairs quadruple.
#[must_use]
pub fn find_run(ranks: &[u8]) -> Option<Run> {
    let mut best: Option<Run> = None;
    let mut len = 0u8;
    let mut multiplier = 1u8;
    let mut previous: Option<u8> = None;

    let mut i = 0;
    while i < ranks.len() {
        let rank = ranks[i];
        let count = ranks[i..].iter().take_while(|&&r| r == rank).count();

        if previous.is_some_and(|p| p + 1 == rank) {
            len += 1;
            multiplier *= count as u8;
        } else {
            len = 1;
            multiplier = count as u8;
        }
        if len >= 3 && best.is_none_or(|run| len > run.len) {
            best = Some(Run { len, multiplier });
        }

        previous = Some(rank);
        i += count;
    }
    best
}
