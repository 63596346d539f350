// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand rank classifier.
//!
//! Classifies a five cards poker hand into one of the ten standard categories,
//! from a Royal Flush down to a High Card. A hand is given as five space
//! separated cards, each card is a rank (`2`..`10`, `J`, `Q`, `K`, `A`)
//! followed by a lowercase suit (`s`, `h`, `d`, `c`):
//!
//! ```
//! # use pokerhand_eval::*;
//! let rank = evaluate("9s 9c 9h 2d 2s").unwrap();
//! assert_eq!(rank, HandRank::FullHouse);
//! assert_eq!(rank.to_string(), "Full House");
//! ```
//!
//! Parsing and classification can also be done separately:
//!
//! ```
//! # use pokerhand_eval::*;
//! let hand = parse("Kh Kc 3s 7h 2d").unwrap();
//! assert_eq!(classify(&hand), HandRank::OnePair);
//!
//! let err = parse("As As 3c 4d 5s").unwrap_err();
//! assert!(matches!(err, ParseError::DuplicateCard(_)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandEvaluator, HandRank, classify, evaluate, parse};

// Reexport cards types.
pub use pokerhand_cards::{Card, Hand, ParseError, Rank, Suit};
