//! The 52-card deck.

extern crate alloc;

use alloc::vec::Vec;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, KING, Suit};
use crate::error::DeckError;

/// An ordered deck of distinct cards.
///
/// Cards are drawn from the front. The deck only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck of 52 cards: clubs, diamonds, hearts,
    /// spades, each from ace to king.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=KING {
                if let Ok(card) = Card::new(suit, rank) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    /// Creates a freshly shuffled deck.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck that will be drawn in the given order.
    ///
    /// Duplicate cards are dropped, keeping the first occurrence.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut unique: Vec<Card> = Vec::with_capacity(cards.len());
        for &card in cards {
            if !unique.contains(&card) {
                unique.push(card);
            }
        }
        Self { cards: unique }
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(self.cards.remove(0))
    }

    /// Returns a random card from the deck without removing it.
    ///
    /// Used when cutting for deal; callers re-cut on ties.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn cut_a_card<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.random_range(0..self.cards.len());
        Ok(self.cards[index])
    }

    /// Remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
