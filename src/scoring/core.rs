// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-entry scoring: many aliases in, one distance out.
//!
//! An entry matches the query as well as its best alias does. "superadmin" and
//! "super_admin" are both keys for `SUPER_ADMIN`; whichever is closer to what
//! the user typed is the entry's score.
//!
//! # Empty alias sets
//!
//! The minimum over zero aliases is undefined. [`score_entry`] reports it as
//! [`SearchError::EmptyAliasSet`]; [`score_or_unmatched`] (what the ranker
//! uses) turns that into [`NO_MATCH`] so the entry sinks to the bottom instead
//! of aborting the whole search.

use crate::error::{Result, SearchError};
use crate::fuzzy::EditDistance;
use crate::types::{IndexEntry, ScoredEntry};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Distance assigned to entries that can't be scored. Sorts after every real
/// distance.
pub const NO_MATCH: usize = usize::MAX;

/// Best distance from `query` to any alias of `entry`.
///
/// Every alias is evaluated; the only shortcut is stopping at an exact hit,
/// since nothing beats 0.
pub fn score_entry<'a>(
    metric: &mut EditDistance,
    query: &str,
    entry: &'a IndexEntry,
) -> Result<ScoredEntry<'a>> {
    let mut best: Option<usize> = None;

    for alias in &entry.aliases {
        let distance = metric.distance(query, alias);
        if best.map_or(true, |b| distance < b) {
            best = Some(distance);
        }
        if distance == 0 {
            break;
        }
    }

    match best {
        Some(distance) => Ok(ScoredEntry { distance, entry }),
        None => Err(SearchError::EmptyAliasSet {
            name: entry.name.clone(),
        }),
    }
}

/// [`score_entry`], with an empty alias set scored as [`NO_MATCH`].
pub fn score_or_unmatched<'a>(
    metric: &mut EditDistance,
    query: &str,
    entry: &'a IndexEntry,
) -> ScoredEntry<'a> {
    score_entry(metric, query, entry).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "scoring entry as unmatched");
        ScoredEntry {
            distance: NO_MATCH,
            entry,
        }
    })
}
