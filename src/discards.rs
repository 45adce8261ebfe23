//! The pegging pile.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PileError;

/// Highest count a pegging pile may reach.
pub const MAX_COUNT: u8 = 31;

/// Cards played to the current pegging pile, plus the piles already closed
/// out this round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discards {
    /// Current pile, oldest first.
    pile: Vec<Card>,
    /// Cards from earlier piles this round. Display only.
    older: Vec<Card>,
    /// Sum of the points on the current pile.
    sum: u8,
}

impl Discards {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pile: Vec::new(),
            older: Vec::new(),
            sum: 0,
        }
    }

    /// Returns whether the card can go on the pile without passing 31.
    #[must_use]
    pub const fn accepts(&self, card: Card) -> bool {
        self.sum + card.points() <= MAX_COUNT
    }

    /// Adds a card to the current pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::Overflow`] if the pile would pass 31. The pile is
    /// left untouched.
    pub fn add_card(&mut self, card: Card) -> Result<(), PileError> {
        if !self.accepts(card) {
            return Err(PileError::Overflow {
                sum: self.sum,
                points: card.points(),
            });
        }
        self.pile.push(card);
        self.sum += card.points();
        Ok(())
    }

    /// Closes out the current pile and starts counting from zero.
    pub fn start_new_pile(&mut self) {
        self.older.append(&mut self.pile);
        self.sum = 0;
    }

    /// Current count.
    #[must_use]
    pub const fn sum(&self) -> u8 {
        self.sum
    }

    /// Cards on the current pile, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.pile
    }

    /// Cards from piles already closed out this round.
    #[must_use]
    pub fn older_discards(&self) -> &[Card] {
        &self.older
    }

    /// The card most recently played to the current pile.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.pile.last().copied()
    }

    /// Returns the number of cards on the current pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pile.len()
    }

    /// Returns whether the current pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }
}
