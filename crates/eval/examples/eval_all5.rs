// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands      2598960
// ...
//
// Royal Flush:     8
// Straight Flush:  32
// Four of a Kind:  624
// Full House:      3744
// Flush:           5108
// Straight:        10200
// Three of a Kind: 54912
// Two Pair:        123552
// One Pair:        1098240
// High Card:       1302540
// ```

use std::time::Instant;

use pokerhand_eval::*;

fn main() {
    // Evaluate all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 10];

    let cards = Card::all().collect::<Vec<_>>();
    let n = cards.len();

    for c1 in 0..n {
        for c2 in (c1 + 1)..n {
            for c3 in (c2 + 1)..n {
                for c4 in (c3 + 1)..n {
                    for c5 in (c4 + 1)..n {
                        let hand = [cards[c1], cards[c2], cards[c3], cards[c4], cards[c5]];
                        if let Ok(hand) = Hand::new(hand) {
                            counts[classify(&hand) as usize] += 1;
                        }
                    }
                }
            }
        }
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank as usize]);
    }
}
