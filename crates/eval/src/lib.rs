// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown poker hand evaluator.
//!
//! Ranks 5 cards poker hands and compares two hands. To use the evaluator
//! create a hand and use [HandValue] to evaluate the hand and get its rank:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = ["2H", "3D", "5S", "9C", "KD", "2C", "3H", "4S", "8C", "AH"]
//!     .iter()
//!     .map(|t| t.parse::<Card>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert_eq!(v1.rank(), HandRank::HighCard);
//! assert!(v2 > v1);
//! ```
//!
//! A [Showdown] parses a line with two hands, the first 5 cards are the
//! Black hand and the last 5 the White hand, and computes the [Verdict]:
//!
//! ```
//! # use showdown_eval::*;
//! let showdown = "2H 4S 4C 2D 4H 2C 5C 7D 8S 5H".parse::<Showdown>().unwrap();
//! assert_eq!(showdown.verdict(), Verdict::Black);
//! assert_eq!(showdown.verdict().to_string(), "Black");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HAND_SIZE, HandRank, HandValue};

pub mod showdown;
pub use showdown::{ParseLineError, Showdown, Verdict, compare};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};
