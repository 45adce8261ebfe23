//! A cribbage rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the full round flow: cutting
//! for deal, dealing, laying away to the crib, cutting the starter, pegging
//! and counting hands, until somebody pegs out. Decisions are delegated to
//! [`Player`] implementations; scoring is available on its own through
//! [`hand_value`] and [`pegging::score_play`].
//!
//! # Example
//!
//! ```
//! use cribrs::{BeginnerPlayer, Game, GameOptions, IntermediatePlayer};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.join(Box::new(BeginnerPlayer::new())).unwrap();
//! game.join(Box::new(IntermediatePlayer::new())).unwrap();
//!
//! let result = game.play().unwrap();
//! assert_eq!(result.scores[result.winner], 121);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod discards;
pub mod error;
pub mod game;
pub mod hand;
pub mod notification;
pub mod options;
pub mod pegging;
pub mod player;
pub mod result;
pub mod score;
mod sync;

// Re-export main types
pub use card::{Card, CardOrder, DECK_SIZE, Suit};
pub use deck::Deck;
pub use discards::Discards;
pub use error::{CardError, ContractViolation, DeckError, GameError, HandError, PileError};
pub use game::{Game, GameState, TurnOrder};
pub use hand::{Crib, Hand};
pub use notification::{Notification, NotificationKind};
pub use options::GameOptions;
pub use pegging::PeggingScore;
pub use player::{AdvancedPlayer, BeginnerPlayer, BoxedPlayer, IntermediatePlayer, Player};
pub use result::{GameResult, HandResult, MatchResult, RoundResult, TurnOutcome};
pub use score::{HandValue, Run, ScoreCategory, hand_value};
