// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Insert, delete, substitute. No transpositions, no phonetics.

mod levenshtein;

pub use levenshtein::*;
