// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result ordering.
//!
//! Distance dominates, then name, then source order. The fuzzer builds small
//! indexes with colliding names and aliases and verifies the ranking never
//! breaks that order or the result cap.

#![no_main]

use arbitrary::Arbitrary;
use docql_search::{rank_scored, EditDistance, IndexEntry, NO_MATCH};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzEntry {
    name: String,
    aliases: Vec<String>,
}

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    entries: Vec<FuzzEntry>,
    limit: u8,
}

fuzz_target!(|input: RankInput| {
    let entries: Vec<IndexEntry> = input
        .entries
        .into_iter()
        .take(64)
        .map(|e| {
            let aliases: Vec<String> = e.aliases.into_iter().take(4).collect();
            IndexEntry::new(aliases, e.name, "field")
        })
        .collect();
    let limit = input.limit as usize;

    let mut metric = EditDistance::new();
    let results = rank_scored(&mut metric, &input.query, &entries, limit);

    // INVARIANT 1: capped
    assert_eq!(results.len(), entries.len().min(limit));

    // INVARIANT 2: (distance, name) ascending; equal pairs keep source order
    let position = |entry: &IndexEntry| {
        entries
            .iter()
            .position(|e| std::ptr::eq(e, entry))
            .unwrap_or(usize::MAX)
    };
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let key_a = (a.distance, a.entry.name.as_str());
        let key_b = (b.distance, b.entry.name.as_str());
        assert!(key_a <= key_b, "out of order: {:?} before {:?}", key_a, key_b);
        if key_a == key_b {
            assert!(position(a.entry) < position(b.entry));
        }
    }

    // INVARIANT 3: only alias-less entries are unscored
    for scored in &results {
        assert_eq!(scored.distance == NO_MATCH, scored.entry.aliases.is_empty());
    }
});
