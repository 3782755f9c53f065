// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is classified into one of the nine poker hand categories, the
//! resulting [HandValue] carries the ranks that break ties between two hands
//! of the same category, so that two hand values compare first by category and
//! then by their kickers, most significant first.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Rank};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all categories from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a 5 cards hand.
///
/// Each variant carries only the kickers that break ties for its category, in
/// order of significance. Variants are declared from the weakest to the
/// strongest category so that the derived ordering compares the category
/// first and then the kickers lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandValue {
    /// All five ranks in descending order.
    HighCard([Rank; 5]),
    /// The pair rank followed by the other three ranks in descending order.
    OnePair([Rank; 4]),
    /// The high pair, the low pair, and the fifth card rank.
    TwoPair([Rank; 3]),
    /// The rank of the three cards.
    ThreeOfAKind(Rank),
    /// The highest rank in the straight, a five for A-2-3-4-5.
    Straight(Rank),
    /// All five ranks in descending order.
    Flush([Rank; 5]),
    /// The rank of the three cards.
    FullHouse(Rank),
    /// The rank of the four cards.
    FourOfAKind(Rank),
    /// The highest rank in the straight, a five for A-2-3-4-5.
    StraightFlush(Rank),
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// Panics if `cards` doesn't have 5 cards.
    pub fn eval(cards: &[Card]) -> HandValue {
        assert_eq!(cards.len(), HAND_SIZE, "a hand must have 5 cards");

        let mut hand = cards.to_vec();
        hand.sort_by_key(Card::rank);

        let straight = straight_high(&hand);
        let flush = hand.iter().all(|c| c.suit() == hand[0].suit());

        // Ranks grouped by count, most frequent and highest first.
        let mut counts = AHashMap::<Rank, usize>::with_capacity(HAND_SIZE);
        for card in &hand {
            *counts.entry(card.rank()).or_default() += 1;
        }

        let mut groups = counts
            .into_iter()
            .map(|(rank, count)| (count, rank))
            .collect::<Vec<_>>();
        groups.sort_unstable_by(|a, b| b.cmp(a));

        let (top_count, top_rank) = groups[0];
        let group = |idx: usize| groups[idx].1;

        let descending = [
            hand[4].rank(),
            hand[3].rank(),
            hand[2].rank(),
            hand[1].rank(),
            hand[0].rank(),
        ];

        match (straight, flush, groups.len(), top_count) {
            (Some(high), true, _, _) => HandValue::StraightFlush(high),
            (_, _, 2, 4) => HandValue::FourOfAKind(top_rank),
            (_, _, 2, 3) => HandValue::FullHouse(top_rank),
            (_, true, _, _) => HandValue::Flush(descending),
            (Some(high), _, _, _) => HandValue::Straight(high),
            (_, _, 3, 3) => HandValue::ThreeOfAKind(top_rank),
            (_, _, 3, 2) => HandValue::TwoPair([group(0), group(1), group(2)]),
            (_, _, 4, 2) => HandValue::OnePair([group(0), group(1), group(2), group(3)]),
            _ => HandValue::HighCard(descending),
        }
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        match self {
            HandValue::HighCard(_) => HandRank::HighCard,
            HandValue::OnePair(_) => HandRank::OnePair,
            HandValue::TwoPair(_) => HandRank::TwoPair,
            HandValue::ThreeOfAKind(_) => HandRank::ThreeOfAKind,
            HandValue::Straight(_) => HandRank::Straight,
            HandValue::Flush(_) => HandRank::Flush,
            HandValue::FullHouse(_) => HandRank::FullHouse,
            HandValue::FourOfAKind(_) => HandRank::FourOfAKind,
            HandValue::StraightFlush(_) => HandRank::StraightFlush,
        }
    }

    /// Returns the kickers that break ties within the hand category, the most
    /// significant first.
    pub fn kickers(&self) -> &[Rank] {
        match self {
            HandValue::HighCard(ranks) | HandValue::Flush(ranks) => &ranks[..],
            HandValue::OnePair(ranks) => &ranks[..],
            HandValue::TwoPair(ranks) => &ranks[..],
            HandValue::ThreeOfAKind(rank)
            | HandValue::Straight(rank)
            | HandValue::FullHouse(rank)
            | HandValue::FourOfAKind(rank)
            | HandValue::StraightFlush(rank) => std::slice::from_ref(rank),
        }
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.rank())?;
        for (idx, rank) in self.kickers().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{rank}")?;
        }
        write!(f, ")")
    }
}

/// Returns the straight highest rank if the rank sorted hand is a straight.
fn straight_high(hand: &[Card]) -> Option<Rank> {
    let is_run = |cards: &[Card]| {
        cards
            .windows(2)
            .all(|w| w[0].rank().is_followed_by(w[1].rank()))
    };

    let (low, high) = (hand[0].rank(), hand[HAND_SIZE - 1].rank());
    if low == Rank::Deuce && high == Rank::Ace {
        // The ace plays low, the five is the top of the straight.
        let wheel = &hand[..HAND_SIZE - 1];
        is_run(wheel).then(|| wheel[HAND_SIZE - 2].rank())
    } else {
        is_run(hand).then_some(high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use showdown_cards::{Deck, Rank::*};
    use std::cmp::Ordering;

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|t| t.parse().unwrap()).collect()
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&hand(s))
    }

    #[test]
    fn categories() {
        assert_eq!(eval("TH JH QH KH AH"), HandValue::StraightFlush(Ace));
        assert_eq!(eval("9C 5C 8C 6C 7C"), HandValue::StraightFlush(Nine));
        assert_eq!(eval("7S 7H 7D 7C 2S"), HandValue::FourOfAKind(Seven));
        assert_eq!(eval("2H 4S 4C 2D 4H"), HandValue::FullHouse(Four));
        assert_eq!(
            eval("2D 9D KD 5D JD"),
            HandValue::Flush([King, Jack, Nine, Five, Deuce])
        );
        assert_eq!(eval("6H 7D 8C 9S TD"), HandValue::Straight(Ten));
        assert_eq!(eval("QS QD 3C QH 8S"), HandValue::ThreeOfAKind(Queen));
        assert_eq!(eval("2C 3H 2S 5C 3D"), HandValue::TwoPair([Trey, Deuce, Five]));
        assert_eq!(
            eval("KD 4S 8C KS AH"),
            HandValue::OnePair([King, Ace, Eight, Four])
        );
        assert_eq!(
            eval("2H 3D 5S 9C KD"),
            HandValue::HighCard([King, Nine, Five, Trey, Deuce])
        );
    }

    #[test]
    fn hand_ranks() {
        let cases = [
            ("2H 3D 5S 9C KD", HandRank::HighCard),
            ("2H 2D 5S 9C KD", HandRank::OnePair),
            ("2H 2D 5S 5C KD", HandRank::TwoPair),
            ("2H 2D 2S 9C KD", HandRank::ThreeOfAKind),
            ("2H 3D 4S 5C 6D", HandRank::Straight),
            ("2H 3H 5H 9H KH", HandRank::Flush),
            ("2H 2D 2S 9C 9D", HandRank::FullHouse),
            ("2H 2D 2S 2C KD", HandRank::FourOfAKind),
            ("2H 3H 4H 5H 6H", HandRank::StraightFlush),
        ];

        for (cards, rank) in cases {
            assert_eq!(eval(cards).rank(), rank, "{cards}");
        }
    }

    #[test]
    fn low_ace_straight() {
        let wheel = eval("2H 3D 4C 5S AH");
        assert_eq!(wheel, HandValue::Straight(Five));
        assert_eq!(wheel.kickers(), &[Five]);

        // Order of the cards doesn't matter.
        assert_eq!(eval("AH 5S 4C 3D 2H"), HandValue::Straight(Five));

        // The wheel is the lowest straight.
        assert!(eval("2H 3D 4C 5S 6H") > wheel);
        assert!(eval("TH JD QC KS AH") > wheel);

        let steel_wheel = eval("AD 2D 3D 4D 5D");
        assert_eq!(steel_wheel, HandValue::StraightFlush(Five));
        assert!(eval("2C 3C 4C 5C 6C") > steel_wheel);
    }

    #[test]
    fn no_wrap_around_straight() {
        assert_eq!(eval("QH KD AC 2S 3H").rank(), HandRank::HighCard);
        assert_eq!(eval("KH AD 2C 3S 4H").rank(), HandRank::HighCard);
        assert_eq!(eval("2H 3D 4C 6S AH").rank(), HandRank::HighCard);
    }

    #[test]
    fn kickers() {
        assert_eq!(eval("7S 7H 7D 7C 2S").kickers(), &[Seven]);
        assert_eq!(eval("KH KD 3C 3S 9H").kickers(), &[King, Trey, Nine]);
        assert_eq!(eval("4H 4D JC 8S 2H").kickers(), &[Four, Jack, Eight, Deuce]);
        assert_eq!(eval("4H 6D JC 8S 2H").kickers().len(), 5);
    }

    #[test]
    fn kicker_tie_breaking() {
        // Pair with the same rank, decided by the third kicker.
        assert!(eval("KH KD 9C 7S 3H") > eval("KS KC 9D 6H 5C"));

        // Two pair, same high pair decided by the low pair then the kicker.
        assert!(eval("KH KD 9C 9S 3H") > eval("KS KC 8D 8H AC"));
        assert!(eval("KH KD 9C 9S 4H") > eval("KS KC 9D 9H 3C"));
        assert_eq!(
            eval("KH KD 9C 9S 4H").cmp(&eval("KS KC 9D 9H 4C")),
            Ordering::Equal
        );

        // Higher category wins regardless of kickers.
        assert!(eval("2H 2D 3C 3S 4H") > eval("AH AD KC QS JH"));

        // Full house decided by the three cards.
        assert!(eval("3H 3D 3C 2S 2H") > eval("2D 2C 2S AH AD"));
    }

    #[test]
    fn flush_tie_breaking() {
        let a = eval("AH QH 9H 5H 3H");
        let b = eval("AS QS 9S 5S 2S");
        assert!(a > b);

        let c = eval("AD KD 3D 4D 2D");
        assert!(c > a);

        // Same ranks in different suits tie.
        assert_eq!(eval("AC QC 9C 5C 3C").cmp(&a), Ordering::Equal);
    }

    #[test]
    fn high_card_uses_all_ranks() {
        // Same top four ranks, decided by the lowest card.
        let a = eval("AH KD 9C 7S 4H");
        let b = eval("AS KC 9D 7H 3C");
        assert!(a > b);
        assert!(b < a);

        let c = eval("AS KC 9D 7H 4C");
        assert_eq!(a.cmp(&c), Ordering::Equal);

        // Same highest three and lowest ranks, decided by the fourth.
        assert!(eval("AH KD 9C 7S 2H") > eval("AS KC 9D 6H 2C"));
    }

    #[test]
    fn duplicate_cards() {
        // Duplicates are not validated, classification is still total.
        assert_eq!(eval("AH AH AH AH AH"), HandValue::Flush([Ace; 5]));
        assert_eq!(eval("2H 2D 2C 2S 2H"), HandValue::HighCard([Deuce; 5]));
        assert_eq!(eval("2H 2H 3H 4H 5H").rank(), HandRank::Flush);
    }

    #[test]
    #[should_panic(expected = "a hand must have 5 cards")]
    fn wrong_hand_size() {
        eval("2H 3D 5S 9C");
    }

    #[test]
    fn category_dominance() {
        // The strongest and weakest hand for each category.
        let bounds = [
            ("AH KD QC JS 9H", "2H 3D 4C 5S 7H"),
            ("AH AD KC QS JH", "2H 2D 3C 4S 5H"),
            ("AH AD KC KS QH", "2H 2D 3C 3S 4H"),
            ("AH AD AC KS QH", "2H 2D 2C 3S 4H"),
            ("TH JD QC KS AH", "AH 2D 3C 4S 5H"),
            ("AH KH QH JH 9H", "2H 3H 4H 5H 7H"),
            ("AH AD AC KS KH", "2H 2D 2C 3S 3H"),
            ("AH AD AC AS KH", "2H 2D 2C 2S 3H"),
            ("TH JH QH KH AH", "AH 2H 3H 4H 5H"),
        ];

        for ((strongest, weakest), rank) in bounds.iter().zip(HandRank::ranks()) {
            assert_eq!(eval(strongest).rank(), rank, "{strongest}");
            assert_eq!(eval(weakest).rank(), rank, "{weakest}");
            assert!(eval(strongest) >= eval(weakest));
        }

        for pair in bounds.windows(2) {
            let (lower_strongest, _) = pair[0];
            let (_, upper_weakest) = pair[1];
            assert!(eval(upper_weakest) > eval(lower_strongest));
        }
    }

    #[test]
    fn random_hands_order() {
        let mut rng = StdRng::seed_from_u64(1971);
        let values = (0..300)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                let cards = (0..HAND_SIZE)
                    .map(|_| deck.deal().unwrap())
                    .collect::<Vec<_>>();

                // Deterministic given the same cards.
                let value = HandValue::eval(&cards);
                assert_eq!(value, HandValue::eval(&cards));

                let mut reversed = cards.clone();
                reversed.reverse();
                assert_eq!(value, HandValue::eval(&reversed));

                value
            })
            .collect::<Vec<_>>();

        for a in &values {
            assert_eq!(a.cmp(a), Ordering::Equal);

            for b in &values {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());

                if a.rank() > b.rank() {
                    assert_eq!(a.cmp(b), Ordering::Greater);
                }

                for c in values.iter().take(30) {
                    if a <= b && b <= c {
                        assert!(a <= c);
                    }
                }
            }
        }
    }

    #[test]
    fn all_hands() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(HAND_SIZE, |cards| {
            let value = HandValue::eval(cards);
            assert!(value.rank() as usize <= HandRank::StraightFlush as usize);
            counts[value.rank() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPair as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfAKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn display() {
        assert_eq!(HandRank::FullHouse.to_string(), "Full House");
        assert_eq!(eval("2H 4S 4C 2D 4H").to_string(), "Full House (4)");
        assert_eq!(eval("KH KD 3C 3S 9H").to_string(), "Two Pair (K 3 9)");
        assert_eq!(
            eval("2H 3D 5S 9C KD").to_string(),
            "High Card (K 9 5 3 2)"
        );
    }
}
