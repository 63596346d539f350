// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand rank CLI.
//!
//! Prints the category of each hand given on the command line, or of each
//! line read from stdin when no hand is given:
//!
//! ```text
//! $ pokerhand "As Ks Qs Js 10s" "As 2h 3c 4d 5s"
//! As Ks Qs Js 10s: Royal Flush
//! As 2h 3c 4d 5s: Straight
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::error;
use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
};

mod report;
use report::Report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hands to evaluate, e.g. "As Ks Qs Js 10s", read from stdin if none.
    hands: Vec<String>,
    /// Prints a JSON object for each hand.
    #[clap(long, short)]
    json: bool,
    /// Enables debug logging.
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut out = io::stdout().lock();
    match run(&cli, io::stdin().lock(), &mut out) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Evaluates all the input hands, returns false if any hand was invalid.
///
/// The hands are read from `input` only if none was given on the command line.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> Result<bool> {
    let hands = if cli.hands.is_empty() {
        read_hands(input)?
    } else {
        cli.hands.clone()
    };

    let mut all_valid = true;

    for hand in &hands {
        let report = Report::new(hand);
        all_valid &= report.is_valid();

        if cli.json {
            writeln!(out, "{}", report.to_json()?)?;
        } else {
            writeln!(out, "{report}")?;
        }
    }

    Ok(all_valid)
}

/// Reads one hand per line skipping blank lines.
fn read_hands<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut hands = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            hands.push(line.to_string());
        }
    }

    Ok(hands)
}
