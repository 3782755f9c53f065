// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Two hands showdown.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

use showdown_cards::{Card, ParseCardError, Rank, Suit};

use crate::eval::{HAND_SIZE, HandValue};

/// The showdown result for the Black hand against the White hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The Black hand wins.
    Black,
    /// The White hand wins.
    White,
    /// The hands have the same value.
    Tie,
}

impl Verdict {
    /// The verdict with the hands swapped.
    pub fn reverse(self) -> Verdict {
        match self {
            Verdict::Black => Verdict::White,
            Verdict::White => Verdict::Black,
            Verdict::Tie => Verdict::Tie,
        }
    }
}

impl From<Ordering> for Verdict {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Verdict::Black,
            Ordering::Less => Verdict::White,
            Ordering::Equal => Verdict::Tie,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = match self {
            Verdict::Black => "Black",
            Verdict::White => "White",
            Verdict::Tie => "Tie",
        };

        write!(f, "{verdict}")
    }
}

/// Compares a Black hand against a White hand.
///
/// Panics if a hand doesn't have 5 cards.
pub fn compare(black: &[Card], white: &[Card]) -> Verdict {
    Verdict::from(HandValue::eval(black).cmp(&HandValue::eval(white)))
}

/// Error returned when a showdown line cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLineError {
    /// The line doesn't have two hands worth of cards.
    #[error("expected 10 cards, found {0}")]
    TokenCount(usize),
    /// A card token is invalid, `index` is the 0-based token position.
    #[error("invalid card token at position {}", .index + 1)]
    Card {
        /// The token position in the line.
        index: usize,
        /// The card error.
        #[source]
        source: ParseCardError,
    },
}

/// The Black and White hands to compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Showdown {
    black: [Card; HAND_SIZE],
    white: [Card; HAND_SIZE],
}

impl Showdown {
    /// Creates a showdown for the given hands.
    pub fn new(black: [Card; HAND_SIZE], white: [Card; HAND_SIZE]) -> Self {
        Self { black, white }
    }

    /// The Black hand.
    pub fn black(&self) -> &[Card; HAND_SIZE] {
        &self.black
    }

    /// The White hand.
    pub fn white(&self) -> &[Card; HAND_SIZE] {
        &self.white
    }

    /// The showdown with the Black and White hands swapped.
    pub fn swapped(&self) -> Showdown {
        Self::new(self.white, self.black)
    }

    /// Evaluates the Black and White hands.
    pub fn values(&self) -> (HandValue, HandValue) {
        (HandValue::eval(&self.black), HandValue::eval(&self.white))
    }

    /// Compares the Black hand against the White hand.
    pub fn verdict(&self) -> Verdict {
        compare(&self.black, &self.white)
    }
}

impl FromStr for Showdown {
    type Err = ParseLineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != 2 * HAND_SIZE {
            return Err(ParseLineError::TokenCount(tokens.len()));
        }

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); 2 * HAND_SIZE];
        for (index, (card, token)) in cards.iter_mut().zip(tokens).enumerate() {
            *card = token
                .parse()
                .map_err(|source| ParseLineError::Card { index, source })?;
        }

        let mut black = [cards[0]; HAND_SIZE];
        let mut white = [cards[0]; HAND_SIZE];
        black.copy_from_slice(&cards[..HAND_SIZE]);
        white.copy_from_slice(&cards[HAND_SIZE..]);

        Ok(Self::new(black, white))
    }
}

impl fmt::Display for Showdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.black.iter().chain(&self.white).enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}
