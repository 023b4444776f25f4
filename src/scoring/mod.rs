// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how index entries get ordered for a query.
//!
//! Lower is better. An entry's score is its closest alias's edit distance;
//! ranking sorts by that distance, breaks ties by name, and keeps the top K.

mod core;
pub mod ranking;

pub use core::*;
