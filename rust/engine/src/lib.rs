//! # studpoker-engine: Five-Card Stud Table Core
//!
//! Builds a standard 52-card deck, shuffles it with a reproducible
//! Fisher-Yates shuffle, deals five-card hands to up to ten players,
//! classifies each hand into one of the nine poker categories and picks the
//! winner(s) by category alone.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Rank, Suit, Card) and deck construction
//! - [`deck`] - Deck state, the Fisher-Yates shuffler and block dealing
//! - [`hand`] - Five-card hands and the hand classifier
//! - [`showdown`] - Winner resolution across all hands, ties included
//! - [`table`] - Table aggregate owning the deck, the hands and the seeded RNG
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use studpoker_engine::cards::{Card, Rank, Suit};
//! use studpoker_engine::hand::{rank_cards, HandRank};
//!
//! let cards = [
//!     Card::new(Rank::Two, Suit::Diamonds),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Hearts),
//! ];
//! assert_eq!(rank_cards(&cards), Ok(HandRank::FourOfAKind));
//! ```
//!
//! ## Deterministic Dealing
//!
//! The shuffle takes any [`deck::IndexSource`]; every `rand::Rng` is one.
//! A [`table::Table`] seeds a ChaCha20 RNG, so the same seed reproduces the
//! same shuffle and the same deal:
//!
//! ```rust
//! use studpoker_engine::table::Table;
//!
//! let mut t1 = Table::new(Some(42));
//! let mut t2 = Table::new(Some(42));
//! t1.shuffle();
//! t2.shuffle();
//! assert_eq!(t1.deal(3).unwrap(), t2.deal(3).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod showdown;
pub mod table;
