// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental fuzzy search for generated GraphQL documentation.
//!
//! A documentation site ships a static `search-index.json`: one record per
//! type, field, enum value, and input field. This crate ranks that index by
//! edit distance as the user types, entirely client-side. No server round
//! trip per keystroke.
//!
//! # Architecture
//!
//! ```text
//! input event
//!     │
//!     ▼
//! ┌──────────────┐  await  ┌──────────────┐
//! │ session.rs   │────────▶│ index/       │  fetch + decode once, cache forever
//! │ SearchSession│         │ IndexStore   │
//! └──────────────┘         └──────────────┘
//!     │ rank(query, entries)
//!     ▼
//! ┌──────────────┐  per entry  ┌──────────────┐  per alias  ┌──────────────┐
//! │ ranking.rs   │────────────▶│ scoring/core │────────────▶│ fuzzy/       │
//! │ sort + top K │             │ min distance │             │ EditDistance │
//! └──────────────┘             └──────────────┘             └──────────────┘
//!     │
//!     ▼
//! ResultSink (DOM callback in wasm.rs, terminal in the CLI)
//! ```
//!
//! | Module    | Responsibility                                         |
//! |-----------|--------------------------------------------------------|
//! | `types`   | `IndexEntry` and its fixed-position JSON wire format   |
//! | `fuzzy`   | Levenshtein distance with a reusable scratch row       |
//! | `scoring` | Best-alias reduction, sort/tie-break, top-K            |
//! | `index`   | Single-fetch, cache-forever `IndexStore`               |
//! | `session` | `Main`/`Search` state machine with stale-result guard  |
//! | `wasm`    | Browser bindings (`--features wasm`)                   |
//!
//! # Usage
//!
//! ```
//! use docql_search::{rank, IndexEntry};
//!
//! let entries = vec![
//!     IndexEntry::new(["map"], "map", "function"),
//!     IndexEntry::new(["filter"], "filter", "function"),
//!     IndexEntry::new(["reduce"], "reduce", "function"),
//! ];
//!
//! let results = rank("mpa", &entries);
//! assert_eq!(results[0].name, "map");
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod session;
pub mod testing;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{SearchConfig, DEFAULT_INDEX_URL};
pub use error::{IndexFetchError, SearchError};
pub use fuzzy::{levenshtein, EditDistance};
pub use index::{
    decode_index, Entries, FileSource, IndexSource, IndexStatus, IndexStore, StaticSource,
};
#[cfg(feature = "parallel")]
pub use scoring::ranking::rank_parallel;
pub use scoring::ranking::{
    compare_scored, rank, rank_scored, FuzzyRanker, Ranker, DEFAULT_LIMIT,
};
pub use scoring::{score_entry, score_or_unmatched, NO_MATCH};
pub use session::{InputOutcome, ResultSink, SearchSession};
pub use types::{DisplayMode, IndexEntry, ParentRef, RenderedEntry, ScoredEntry};

#[cfg(feature = "wasm")]
pub use wasm::{DocSearch, HttpSource};
