//! Game configuration options.

use crate::card::CardOrder;

/// Configuration options for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribrs::{CardOrder, GameOptions};
///
/// let options = GameOptions::default()
///     .with_winning_score(61)
///     .with_skunk_line(30)
///     .with_card_order(CardOrder::SuitFirst);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Score that wins the game. Scores never go past it.
    pub winning_score: u8,
    /// A loser finishing at or below this score is skunked.
    pub skunk_line: u8,
    /// Ordering used when the engine sorts dealt hands.
    pub card_order: CardOrder,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 121,
            skunk_line: 90,
            card_order: CardOrder::RankFirst,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(61);
    /// assert_eq!(options.winning_score, 61);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: u8) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets the skunk line.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_skunk_line(60);
    /// assert_eq!(options.skunk_line, 60);
    /// ```
    #[must_use]
    pub const fn with_skunk_line(mut self, score: u8) -> Self {
        self.skunk_line = score;
        self
    }

    /// Sets how dealt hands are sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use cribrs::{CardOrder, GameOptions};
    ///
    /// let options = GameOptions::default().with_card_order(CardOrder::SuitFirst);
    /// assert_eq!(options.card_order, CardOrder::SuitFirst);
    /// ```
    #[must_use]
    pub const fn with_card_order(mut self, order: CardOrder) -> Self {
        self.card_order = order;
        self
    }
}
