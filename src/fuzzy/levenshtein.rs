// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-row Levenshtein distance with a reusable scratch buffer.
//!
//! The DP only ever needs the previous row, so one row of `|a|` cells is
//! overwritten in place as each character of `b` is consumed: O(|a|) space,
//! O(|a|·|b|) time. Ranking calls this once per alias per entry per keystroke,
//! so the row is kept alive in an [`EditDistance`] value and reused instead of
//! allocated per call.
//!
//! Distances count Unicode scalar values (`char`), not bytes and not grapheme
//! clusters. No case folding, no locale rules.
//!
//! # Concurrency
//!
//! `distance` takes `&mut self`, so the borrow checker already guarantees a
//! buffer is never shared between two in-progress computations. Parallel
//! callers each own an `EditDistance` (see `rank_parallel`).

/// Levenshtein metric that owns its scratch row.
///
/// Nothing in the buffers survives meaningfully between calls; they are
/// capacity, not state.
#[derive(Debug, Default, Clone)]
pub struct EditDistance {
    row: Vec<usize>,
    a_chars: Vec<char>,
}

impl EditDistance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of single-character insertions, deletions, or
    /// substitutions turning `a` into `b`.
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        if a == b {
            return 0;
        }

        self.a_chars.clear();
        self.a_chars.extend(a.chars());
        let a_len = self.a_chars.len();

        if a_len == 0 {
            return b.chars().count();
        }
        if b.is_empty() {
            return a_len;
        }

        // row[i] = distance(a[..=i], b[..j]) after consuming j chars of b
        self.row.clear();
        self.row.extend(1..=a_len);

        for (j, bc) in b.chars().enumerate() {
            let mut diag = j;
            let mut left = j + 1;
            for (i, &ac) in self.a_chars.iter().enumerate() {
                let above = self.row[i];
                let cost = usize::from(ac != bc);
                left = (left + 1).min(above + 1).min(diag + cost);
                diag = above;
                self.row[i] = left;
            }
        }

        self.row[a_len - 1]
    }
}

/// One-off edit distance. Allocates a fresh buffer; prefer [`EditDistance`]
/// in loops.
pub fn levenshtein(a: &str, b: &str) -> usize {
    EditDistance::new().distance(a, b)
}
