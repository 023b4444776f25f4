// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search-as-you-type state machine.
//!
//! Two display modes. `Main` shows the regular documentation body; `Search`
//! shows ranked results. Every input event re-ranks from scratch; nothing is
//! cached between keystrokes except the index itself.
//!
//! ```text
//!            trimmed input empty            trimmed input non-empty
//!   ┌──────┐ ◀───────────────────── ┌────────┐ ◀──────┐
//!   │ Main │                        │ Search │        │ re-rank, replace results
//!   └──────┘ ─────────────────────▶ └────────┘ ───────┘
//!            trimmed input non-empty
//! ```
//!
//! # Superseded searches
//!
//! Input events overlap: the first keystroke may still be waiting on the index
//! fetch when the second arrives. Each event takes a generation number, and a
//! search only renders if its generation is still the latest when ranking
//! would start. Older completions are dropped, so the screen always reflects
//! the most recent input, including an input that cleared the box.

use crate::error::{IndexFetchError, Result};
use crate::index::{IndexSource, IndexStore};
use crate::scoring::ranking::{FuzzyRanker, Ranker};
use crate::types::{DisplayMode, ScoredEntry};
use std::cell::{Cell, RefCell};

/// Receives what the session wants on screen.
///
/// The session calls these in order: `set_mode` first, then exactly one of
/// `clear_results`, `replace_results`, or `show_error` for inputs that
/// aren't superseded.
pub trait ResultSink {
    fn set_mode(&self, mode: DisplayMode);

    /// Drop whatever results are rendered.
    fn clear_results(&self);

    /// Discard the previous results and render these, in order.
    fn replace_results(&self, results: &[ScoredEntry<'_>]);

    /// The index couldn't be loaded. Default: keep the page as it is.
    fn show_error(&self, _error: &IndexFetchError) {}
}

/// What happened to one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Input was blank; back to `Main` with no results.
    Cleared,
    /// Results were ranked and handed to the sink.
    Rendered { count: usize },
    /// A newer input arrived first; nothing was rendered.
    Superseded,
}

/// One search box's worth of state.
pub struct SearchSession<S, K, R = FuzzyRanker> {
    store: IndexStore<S>,
    ranker: RefCell<R>,
    sink: K,
    mode: Cell<DisplayMode>,
    generation: Cell<u64>,
}

impl<S, K> SearchSession<S, K, FuzzyRanker>
where
    S: IndexSource,
    K: ResultSink,
{
    pub fn new(store: IndexStore<S>, sink: K) -> Self {
        Self::with_ranker(store, FuzzyRanker::default(), sink)
    }
}

impl<S, K, R> SearchSession<S, K, R>
where
    S: IndexSource,
    K: ResultSink,
    R: Ranker,
{
    pub fn with_ranker(store: IndexStore<S>, ranker: R, sink: K) -> Self {
        Self {
            store,
            ranker: RefCell::new(ranker),
            sink,
            mode: Cell::new(DisplayMode::Main),
            generation: Cell::new(0),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode.get()
    }

    pub fn store(&self) -> &IndexStore<S> {
        &self.store
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn ranker(&self) -> std::cell::Ref<'_, R> {
        self.ranker.borrow()
    }

    /// Handle one change of the search box's contents.
    ///
    /// A failed index fetch resolves every search, pending or future, to
    /// `Err(SearchError::IndexFetch)`.
    pub async fn on_input(&self, raw: &str) -> Result<InputOutcome> {
        let query = raw.trim();
        let generation = self.next_generation();

        if query.is_empty() {
            self.enter(DisplayMode::Main);
            self.sink.clear_results();
            return Ok(InputOutcome::Cleared);
        }

        self.enter(DisplayMode::Search);

        let entries = match self.store.get().await {
            Ok(entries) => entries,
            Err(err) => {
                if self.is_current(generation) {
                    self.sink.show_error(&err);
                }
                return Err(err.into());
            }
        };

        if !self.is_current(generation) {
            tracing::debug!(query, generation, "dropping superseded search");
            return Ok(InputOutcome::Superseded);
        }

        // Ranking is synchronous: the borrow can't be held across a suspension
        let mut ranker = self.ranker.borrow_mut();
        let results = ranker.rank(query, &entries);
        self.sink.replace_results(&results);

        Ok(InputOutcome::Rendered {
            count: results.len(),
        })
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    fn enter(&self, mode: DisplayMode) {
        self.mode.set(mode);
        self.sink.set_mode(mode);
    }
}
