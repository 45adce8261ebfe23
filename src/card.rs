//! Card types.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;

/// Card suit.
///
/// Suits are declared in their canonical deck order, which is also the
/// secondary sort key when ordering cards by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;
/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a king.
pub const KING: u8 = 13;

/// How cards are ordered when a hand is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardOrder {
    /// Rank first, suit breaks ties.
    #[default]
    RankFirst,
    /// Suit first, rank breaks ties.
    SuitFirst,
}

/// A playing card.
///
/// Cards are immutable values identified by suit and rank. The natural
/// ordering (`Ord`) is rank first, then suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank < ACE || rank > KING {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Counting value of the card: face cards count 10, aces count 1.
    #[must_use]
    pub const fn points(&self) -> u8 {
        if self.rank < 10 { self.rank } else { 10 }
    }

    /// Compares two cards under the given ordering.
    #[must_use]
    pub fn cmp_by(&self, other: &Self, order: CardOrder) -> Ordering {
        match order {
            CardOrder::RankFirst => self
                .rank
                .cmp(&other.rank)
                .then_with(|| self.suit.cmp(&other.suit)),
            CardOrder::SuitFirst => self
                .suit
                .cmp(&other.suit)
                .then_with(|| self.rank.cmp(&other.rank)),
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_by(other, CardOrder::RankFirst)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("ace")?,
            11 => f.write_str("jack")?,
            12 => f.write_str("queen")?,
            13 => f.write_str("king")?,
            n => write!(f, "{n}")?,
        }
        write!(f, " of {}", self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
