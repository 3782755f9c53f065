// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "KD".parse::<Card>().unwrap();
//! assert_eq!(kd.rank(), Rank::King);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! Card tokens are two characters, a rank in `23456789TJQKA` followed by a suit
//! in `CDHS`, any other token fails with a [ParseCardError]:
//!
//! ```
//! # use showdown_cards::{Card, ParseCardError};
//! assert_eq!("1H".parse::<Card>(), Err(ParseCardError::Rank('1')));
//! assert_eq!("ah".parse::<Card>(), Err(ParseCardError::Rank('a')));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating hands in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit};
