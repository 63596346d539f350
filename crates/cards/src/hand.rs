// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand and its parser.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::Card;

/// Errors returned when a hand fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input doesn't have exactly five cards.
    #[error("hand must contain exactly 5 cards, found {0}")]
    InvalidHandSize(usize),
    /// A token is not a rank followed by a suit.
    #[error("invalid card format: {0:?}")]
    InvalidCardFormat(String),
    /// The same card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// A validated five cards hand.
///
/// The cards are kept in input order and no two cards are the same, this also
/// holds for deserialized hands that are validated like any other hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Card; 5]", into = "[Card; 5]")]
pub struct Hand {
    cards: [Card; Hand::SIZE],
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand from five cards.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, ParseError> {
        let mut seen = AHashSet::with_capacity(Self::SIZE);
        if let Some(card) = cards.iter().find(|c| !seen.insert(**c)) {
            log::debug!("Rejected hand with duplicate card {card}");
            return Err(ParseError::DuplicateCard(*card));
        }

        Ok(Self { cards })
    }

    /// Parses a hand of five space separated cards, e.g. `As Ks Qs Js 10s`.
    ///
    /// The tokens are separated by a single space, the hand size is checked
    /// first, then each token in order, then duplicates.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let tokens = s.split(' ').collect::<Vec<_>>();
        if tokens.len() != Self::SIZE {
            log::debug!("Rejected hand {s:?} with {} tokens", tokens.len());
            return Err(ParseError::InvalidHandSize(tokens.len()));
        }

        let cards = tokens
            .iter()
            .map(|t| t.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;

        Self::try_from(cards.as_slice())
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ParseError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards)
            .map_err(|_| ParseError::InvalidHandSize(cards.len()))?;
        Self::new(cards)
    }
}

impl TryFrom<[Card; Hand::SIZE]> for Hand {
    type Error = ParseError;

    fn try_from(cards: [Card; Hand::SIZE]) -> Result<Self, Self::Error> {
        Self::new(cards)
    }
}

impl From<Hand> for [Card; Hand::SIZE] {
    fn from(hand: Hand) -> Self {
        hand.cards
    }
}

impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn parse_hand() {
        let hand = Hand::parse("As Ks Qs Js 10s").unwrap();
        let ranks = hand.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        assert_eq!(
            ranks,
            [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
        );
        assert!(hand.cards().iter().all(|c| c.suit() == Suit::Spades));
        assert_eq!(hand.to_string(), "As Ks Qs Js 10s");
        assert_eq!("As Ks Qs Js 10s".parse::<Hand>().unwrap(), hand);
    }

    #[test]
    fn invalid_hand_size() {
        assert_eq!(
            Hand::parse("As 2h 3c 4d"),
            Err(ParseError::InvalidHandSize(4))
        );
        assert_eq!(
            Hand::parse("As 2h 3c 4d 5s 6s"),
            Err(ParseError::InvalidHandSize(6))
        );
        assert_eq!(Hand::parse(""), Err(ParseError::InvalidHandSize(1)));

        // Tokens are split on single spaces.
        assert_eq!(
            Hand::parse("As  2h 3c 4d 5s"),
            Err(ParseError::InvalidHandSize(6))
        );
        assert_eq!(
            Hand::parse("As 2h 3c 4d 5s "),
            Err(ParseError::InvalidHandSize(6))
        );
    }

    #[test]
    fn invalid_card_format() {
        assert_eq!(
            Hand::parse("X1 2h 3c 4d 5s"),
            Err(ParseError::InvalidCardFormat("X1".to_string()))
        );
        assert_eq!(
            Hand::parse("Ax 2h 3c 4d 5s"),
            Err(ParseError::InvalidCardFormat("Ax".to_string()))
        );
        assert_eq!(
            Hand::parse("As 2h 3c 4d 5S"),
            Err(ParseError::InvalidCardFormat("5S".to_string()))
        );

        // Leading space yields an empty first token.
        assert_eq!(
            Hand::parse(" 2h 3c 4d 5s"),
            Err(ParseError::InvalidCardFormat("".to_string()))
        );

        // The first invalid token is reported, format wins over duplicates.
        assert_eq!(
            Hand::parse("As As Zc 4d 1s"),
            Err(ParseError::InvalidCardFormat("Zc".to_string()))
        );
    }

    #[test]
    fn duplicate_card() {
        let err = Hand::parse("As As 3c 4d 5s").unwrap_err();
        assert_eq!(err, ParseError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(err.to_string(), "duplicate card: As");

        // Same rank different suit is fine.
        assert!(Hand::parse("As Ah 3c 4d 5s").is_ok());
    }

    #[test]
    fn hand_from_cards() {
        let cards = Card::all().take(6).collect::<Vec<_>>();
        assert!(Hand::try_from(&cards[..5]).is_ok());
        assert_eq!(
            Hand::try_from(&cards[..]),
            Err(ParseError::InvalidHandSize(6))
        );

        let dup = [cards[0], cards[1], cards[2], cards[3], cards[1]];
        assert_eq!(Hand::new(dup), Err(ParseError::DuplicateCard(cards[1])));
    }

    #[test]
    fn hand_serde() {
        let hand = Hand::parse("As Ks Qs Js 10s").unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand);

        // Deserialized cards go through the same duplicate check.
        let ace = r#"{"rank":"Ace","suit":"Spades"}"#;
        let json = format!("[{ace},{ace},{ace},{ace},{ace}]");
        let err = serde_json::from_str::<Hand>(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate card: As"), "{err}");

        // So does the number of cards.
        let json = format!("[{ace}]");
        assert!(serde_json::from_str::<Hand>(&json).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::InvalidHandSize(4).to_string(),
            "hand must contain exactly 5 cards, found 4"
        );
        assert_eq!(
            ParseError::InvalidCardFormat("X1".to_string()).to_string(),
            "invalid card format: \"X1\""
        );
    }
}
