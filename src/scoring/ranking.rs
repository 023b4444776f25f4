// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: score everything, sort, keep the top K.
//!
//! There's no index structure here (no trie, no BK-tree). Documentation sites
//! have thousands of symbols, not millions, and a full scan per keystroke is
//! well under a frame. What matters is that the order is exact and
//! deterministic.
//!
//! Sort order:
//! 1. **Distance** ascending
//! 2. **Name** ascending (ordinal, `str::cmp`)
//! 3. **Source order** for exactly equal (distance, name) pairs, via a stable sort

use crate::fuzzy::EditDistance;
use crate::scoring::score_or_unmatched;
use crate::types::{IndexEntry, ScoredEntry};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How many results a search returns by default.
pub const DEFAULT_LIMIT: usize = 20;

/// Compare two scored entries for ranking.
///
/// A full three-way comparison. Equal names compare `Equal`, which is what
/// lets the stable sort preserve source order for duplicates.
///
/// Names compare by Unicode code point (`str::cmp`), not by UTF-16 code unit
/// as JavaScript's `<` does. The two orders disagree only where a character
/// above U+FFFF is compared against one in U+E000..=U+FFFF: here `"\u{FF61}"`
/// sorts before `"\u{1F600}"`, in JavaScript after.
pub fn compare_scored(a: &ScoredEntry<'_>, b: &ScoredEntry<'_>) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| a.entry.name.cmp(&b.entry.name))
}

/// Score, sort, and truncate using a caller-owned metric.
pub fn rank_scored<'a>(
    metric: &mut EditDistance,
    query: &str,
    entries: &'a [IndexEntry],
    limit: usize,
) -> Vec<ScoredEntry<'a>> {
    let mut scored: Vec<ScoredEntry<'a>> = entries
        .iter()
        .map(|entry| score_or_unmatched(metric, query, entry))
        .collect();

    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}

/// The top [`DEFAULT_LIMIT`] entries for `query`, best first.
pub fn rank<'a>(query: &str, entries: &'a [IndexEntry]) -> Vec<&'a IndexEntry> {
    let mut metric = EditDistance::new();
    rank_scored(&mut metric, query, entries, DEFAULT_LIMIT)
        .into_iter()
        .map(|scored| scored.entry)
        .collect()
}

/// Same result as [`rank_scored`], with scoring spread across the rayon pool.
///
/// Each worker gets its own [`EditDistance`]; scratch rows are never shared
/// between threads.
#[cfg(feature = "parallel")]
pub fn rank_parallel<'a>(
    query: &str,
    entries: &'a [IndexEntry],
    limit: usize,
) -> Vec<ScoredEntry<'a>> {
    let mut scored: Vec<ScoredEntry<'a>> = entries
        .par_iter()
        .map_init(EditDistance::new, |metric, entry| {
            score_or_unmatched(metric, query, entry)
        })
        .collect();

    // par_sort_by is stable, same tie behavior as the sequential path
    scored.par_sort_by(compare_scored);
    scored.truncate(limit);
    scored
}

// =============================================================================
// RANKER
// =============================================================================

/// Something that turns a query and an index into an ordered result list.
///
/// The session drives ranking through this trait so it can be swapped or
/// observed in tests.
pub trait Ranker {
    fn rank<'a>(&mut self, query: &str, entries: &'a [IndexEntry]) -> Vec<ScoredEntry<'a>>;
}

/// The default ranker: edit distance over aliases, top K.
///
/// Owns the metric's scratch buffer, so one ranker per session means one
/// buffer per session.
#[derive(Debug, Clone)]
pub struct FuzzyRanker {
    metric: EditDistance,
    limit: usize,
}

impl FuzzyRanker {
    pub fn new(limit: usize) -> Self {
        Self {
            metric: EditDistance::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for FuzzyRanker {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl Ranker for FuzzyRanker {
    fn rank<'a>(&mut self, query: &str, entries: &'a [IndexEntry]) -> Vec<ScoredEntry<'a>> {
        rank_scored(&mut self.metric, query, entries, self.limit)
    }
}
