// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand rank classifier.
//!
//! A hand is classified by testing the category predicates from the highest
//! category to the lowest and returning the first that matches, a hand that
//! matches none of them is a [HandRank::HighCard].
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Card, Hand, ParseError, Rank};

/// The poker hand categories, from the lowest to the highest.
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
    /// Straight flush with an ace.
    RoyalFlush,
}

impl HandRank {
    /// Returns all categories from the highest to the lowest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            RoyalFlush,
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighCard,
        ]
        .into_iter()
    }

    /// The category label.
    pub fn label(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The hand properties the category predicates are computed from.
#[derive(Debug)]
struct Shape {
    /// Number of cards for each distinct rank, highest count first and padded
    /// with zeros, e.g. `[3, 2, 0, 0, 0]` for a full house.
    counts: [u8; Hand::SIZE],
    /// All cards have the same suit.
    flush: bool,
    /// The ranks form a run of five, with the ace playing high or low.
    straight: bool,
    /// The highest rank in the hand, an ace counts high even in the wheel.
    high: Rank,
}

type Predicate = fn(&Shape) -> bool;

/// Category predicates in priority order.
const PREDICATES: [(Predicate, HandRank); 9] = [
    (Shape::is_royal_flush, HandRank::RoyalFlush),
    (Shape::is_straight_flush, HandRank::StraightFlush),
    (Shape::is_four_of_a_kind, HandRank::FourOfAKind),
    (Shape::is_full_house, HandRank::FullHouse),
    (Shape::is_flush, HandRank::Flush),
    (Shape::is_straight, HandRank::Straight),
    (Shape::is_three_of_a_kind, HandRank::ThreeOfAKind),
    (Shape::is_two_pair, HandRank::TwoPair),
    (Shape::is_one_pair, HandRank::OnePair),
];

impl Shape {
    fn new(cards: &[Card]) -> Self {
        let mut rank_counts = [0u8; Rank::Ace as usize + 1];
        for card in cards {
            rank_counts[card.rank().value() as usize] += 1;
        }

        let mut counts = [0u8; Hand::SIZE];
        for (slot, count) in counts
            .iter_mut()
            .zip(rank_counts.iter().filter(|&&n| n > 0))
        {
            *slot = *count;
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.windows(2).all(|w| w[0].suit() == w[1].suit());
        let high = cards
            .iter()
            .map(|c| c.rank())
            .max()
            .unwrap_or(Rank::Deuce);

        // A rank can't repeat in a straight.
        let distinct = counts[0] == 1;
        let straight = distinct && {
            let mut values = [0u8; Hand::SIZE];
            for (value, card) in values.iter_mut().zip(cards) {
                *value = card.rank().value();
            }

            consecutive(&mut values) || {
                // Wheel, the ace plays as 1.
                for v in values.iter_mut().filter(|v| **v == Rank::Ace.value()) {
                    *v = 1;
                }
                consecutive(&mut values)
            }
        };

        Self {
            counts,
            flush,
            straight,
            high,
        }
    }

    fn has_count(&self, n: u8) -> bool {
        self.counts.contains(&n)
    }

    fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.high == Rank::Ace
    }

    fn is_straight_flush(&self) -> bool {
        self.is_flush() && self.is_straight()
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.has_count(4)
    }

    fn is_full_house(&self) -> bool {
        self.has_count(3) && self.has_count(2)
    }

    fn is_flush(&self) -> bool {
        self.flush
    }

    fn is_straight(&self) -> bool {
        self.straight
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.has_count(3)
    }

    fn is_two_pair(&self) -> bool {
        self.counts.iter().filter(|&&n| n == 2).count() == 2
    }

    fn is_one_pair(&self) -> bool {
        self.has_count(2)
    }
}

/// Sorts the values and checks they form a consecutive run.
fn consecutive(values: &mut [u8]) -> bool {
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Classifies a hand.
pub fn classify(hand: &Hand) -> HandRank {
    let shape = Shape::new(hand.cards());
    let rank = PREDICATES
        .iter()
        .find(|(predicate, _)| predicate(&shape))
        .map_or(HandRank::HighCard, |(_, rank)| *rank);

    log::trace!("{hand} {shape:?} => {rank}");
    rank
}

/// Parses a hand string, see [Hand::parse].
pub fn parse(hand: &str) -> Result<Hand, ParseError> {
    Hand::parse(hand)
}

/// Parses and classifies a hand string.
///
/// ```
/// # use pokerhand_eval::*;
/// assert_eq!(evaluate("As Ks Qs Js 10s"), Ok(HandRank::RoyalFlush));
/// assert_eq!(evaluate("As 2h 3c 4d 5s").unwrap().label(), "Straight");
/// assert_eq!(evaluate("As 2h 3c 4d"), Err(ParseError::InvalidHandSize(4)));
/// ```
pub fn evaluate(hand: &str) -> Result<HandRank, ParseError> {
    parse(hand).map(|hand| classify(&hand))
}

/// A hand with its category.
///
/// The hand is validated and classified once on construction, a hand that
/// fails validation never gets a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandEvaluator {
    hand: Hand,
    rank: HandRank,
}

impl HandEvaluator {
    /// Creates an evaluator for the given hand string.
    pub fn new(hand: &str) -> Result<Self, ParseError> {
        let hand = parse(hand)?;
        Ok(Self::from(hand))
    }

    /// The evaluated hand.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }
}

impl From<Hand> for HandEvaluator {
    fn from(hand: Hand) -> Self {
        let rank = classify(&hand);
        Self { hand, rank }
    }
}
