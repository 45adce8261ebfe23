//! Player hand and crib representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, CardOrder};
use crate::error::HandError;

/// A player's hand.
///
/// Cards are split into those still to be played and those already pegged
/// this round. Played cards are kept so the hand can be counted after
/// pegging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards not yet played.
    cards: Vec<Card>,
    /// Cards pegged this round, in play order.
    played: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            played: Vec::new(),
        }
    }

    /// Adds a card to the unplayed cards.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns whether the card is among the unplayed cards.
    #[must_use]
    pub fn find_card(&self, card: Card) -> Option<Card> {
        self.cards.iter().copied().find(|&c| c == card)
    }

    /// Moves a card from the unplayed cards to the played cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not unplayed.
    pub fn play_card(&mut self, card: Card) -> Result<Card, HandError> {
        let card = self.remove(card)?;
        self.played.push(card);
        Ok(card)
    }

    /// Removes a card from the hand without recording it as played.
    ///
    /// Used for cards laid away to the crib.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardNotFound`] if the card is not unplayed.
    pub fn lay_away(&mut self, card: Card) -> Result<Card, HandError> {
        self.remove(card)
    }

    fn remove(&mut self, card: Card) -> Result<Card, HandError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(HandError::CardNotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Sorts the unplayed cards by rank, then suit.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Sorts the unplayed cards under the given ordering.
    pub fn sort_by(&mut self, order: CardOrder) {
        self.cards.sort_by(|a, b| a.cmp_by(b, order));
    }

    /// Brings the played cards back into the hand and sorts them.
    ///
    /// Used to lay the hand down for counting once pegging is finished.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::CardsUnplayed`] if any card is still unplayed.
    pub fn reset(&mut self) -> Result<(), HandError> {
        if !self.cards.is_empty() {
            return Err(HandError::CardsUnplayed);
        }
        self.cards = core::mem::take(&mut self.played);
        self.cards.sort();
        Ok(())
    }

    /// Returns the unplayed cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards played this round.
    #[must_use]
    pub fn played_cards(&self) -> &[Card] {
        &self.played
    }

    /// Returns the smallest counting value among the unplayed cards.
    #[must_use]
    pub fn lowest_points(&self) -> Option<u8> {
        self.cards.iter().map(Card::points).min()
    }

    /// Returns whether any unplayed card can go on a pile with the given sum.
    #[must_use]
    pub fn can_play_on(&self, sum: u8) -> bool {
        self.lowest_points().is_some_and(|points| sum + points <= 31)
    }

    /// Returns the number of unplayed cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Number of cards in a complete crib.
pub const CRIB_SIZE: usize = 4;

/// The dealer's crib, built from the cards each player lays away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crib {
    cards: Vec<Card>,
}

impl Crib {
    /// Creates a new empty crib.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a laid-away card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the crib.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sorts the crib by rank, then suit.
    pub fn sort(&mut self) {
        self.cards.sort();
    }

    /// Returns whether the crib holds exactly four cards.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == CRIB_SIZE
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the crib is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the crib for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
