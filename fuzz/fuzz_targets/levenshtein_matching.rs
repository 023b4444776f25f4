// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit distance kernel.
//!
//! Checks the metric laws on arbitrary UTF-8, including the scratch-row reuse
//! path the ranker takes on every keystroke. A wrong distance here means a
//! wrong result order everywhere.

#![no_main]

use arbitrary::Arbitrary;
use docql_search::{levenshtein, EditDistance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    third: String,
}

fn capped(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query = capped(&input.query, 64);
    let target = capped(&input.target, 128);
    let third = capped(&input.third, 64);

    let d = levenshtein(&query, &target);
    let (lq, lt) = (query.chars().count(), target.chars().count());

    // INVARIANT 1: bounded by the lengths
    assert!(lq.abs_diff(lt) <= d, "d={} below length difference for {:?}/{:?}", d, query, target);
    assert!(d <= lq.max(lt), "d={} above longer length for {:?}/{:?}", d, query, target);

    // INVARIANT 2: zero exactly on equality
    assert_eq!(d == 0, query == target);

    // INVARIANT 3: symmetric
    assert_eq!(d, levenshtein(&target, &query));

    // INVARIANT 4: triangle inequality through a third string
    assert!(d <= levenshtein(&query, &third) + levenshtein(&third, &target));

    // INVARIANT 5: a reused buffer agrees with a fresh one, whatever came before
    let mut metric = EditDistance::new();
    metric.distance(&third, &query);
    assert_eq!(metric.distance(&query, &target), d);
});
