// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokerhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Hand] type that parses and validates five cards hands:
//!
//! ```
//! # use pokerhand_cards::{Hand, ParseError};
//! let hand = Hand::parse("As Ks Qs Js 10s").unwrap();
//! assert_eq!(hand.cards().len(), 5);
//!
//! let err = Hand::parse("As As 3c 4d 5s").unwrap_err();
//! assert!(matches!(err, ParseError::DuplicateCard(_)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod hand;
pub use hand::{Hand, ParseError};
