// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation reports printed by the CLI.
use anyhow::Result;
use serde::Serialize;
use std::fmt;

use pokerhand_eval::{HandEvaluator, HandRank};

/// The outcome of evaluating one input hand.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    hand: &'a str,
    #[serde(flatten)]
    outcome: Outcome,
}

/// A hand category or the reason the hand is invalid.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Outcome {
    Rank { rank: HandRank, label: &'static str },
    Error { error: String },
}

impl<'a> Report<'a> {
    /// Evaluates a hand string.
    pub fn new(hand: &'a str) -> Self {
        let outcome = match HandEvaluator::new(hand) {
            Ok(eval) => Outcome::Rank {
                rank: eval.rank(),
                label: eval.rank().label(),
            },
            Err(e) => {
                log::warn!("Invalid hand {hand:?}: {e}");
                Outcome::Error {
                    error: e.to_string(),
                }
            }
        };

        Self { hand, outcome }
    }

    /// Checks if the hand was valid.
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Rank { .. })
    }

    /// The report as a JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Rank { label, .. } => write!(f, "{}: {label}", self.hand),
            Outcome::Error { error } => write!(f, "{}: error: {error}", self.hand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_hand() {
        let report = Report::new("As Ks Qs Js 10s");
        assert!(report.is_valid());
        assert_eq!(report.to_string(), "As Ks Qs Js 10s: Royal Flush");
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"hand":"As Ks Qs Js 10s","rank":"RoyalFlush","label":"Royal Flush"}"#
        );
    }

    #[test]
    fn invalid_hand() {
        let report = Report::new("As 2h 3c 4d");
        assert!(!report.is_valid());
        assert_eq!(
            report.to_string(),
            "As 2h 3c 4d: error: hand must contain exactly 5 cards, found 4"
        );
        assert_eq!(
            report.to_json().unwrap(),
            r#"{"hand":"As 2h 3c 4d","error":"hand must contain exactly 5 cards, found 4"}"#
        );

        let report = Report::new("As As 3c 4d 5s");
        assert_eq!(report.to_string(), "As As 3c 4d 5s: error: duplicate card: As");
    }
}
