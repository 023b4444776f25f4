//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docql_search::{
    DisplayMode, FuzzyRanker, IndexEntry, IndexFetchError, IndexSource, Ranker, RenderedEntry,
    ResultSink, ScoredEntry,
};
use futures::channel::oneshot;
use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// Re-export canonical test utilities from docql_search::testing
pub use docql_search::testing::{index_json, make_entry, make_member, sample_index};

// ============================================================================
// INDEX SOURCES
// ============================================================================

/// An index source whose single fetch stays pending until the test releases it.
///
/// Counts how many times `fetch` was called so tests can prove the store
/// only ever asks once.
pub struct GatedSource {
    calls: Rc<Cell<usize>>,
    gate: RefCell<Option<oneshot::Receiver<Result<String, IndexFetchError>>>>,
}

/// The test's half of a [`GatedSource`].
pub struct Gate {
    pub calls: Rc<Cell<usize>>,
    sender: oneshot::Sender<Result<String, IndexFetchError>>,
}

impl Gate {
    /// Complete the pending fetch with an index body.
    pub fn release(self, json: impl Into<String>) {
        let _ = self.sender.send(Ok(json.into()));
    }

    /// Complete the pending fetch with an error.
    pub fn fail(self, error: IndexFetchError) {
        let _ = self.sender.send(Err(error));
    }
}

pub fn gated_source() -> (GatedSource, Gate) {
    let (sender, receiver) = oneshot::channel();
    let calls = Rc::new(Cell::new(0));
    let source = GatedSource {
        calls: Rc::clone(&calls),
        gate: RefCell::new(Some(receiver)),
    };
    (source, Gate { calls, sender })
}

impl IndexSource for GatedSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, IndexFetchError>> {
        self.calls.set(self.calls.get() + 1);
        let receiver = self.gate.borrow_mut().take();
        async move {
            match receiver {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(IndexFetchError::Network("gate dropped".into()))),
                None => Err(IndexFetchError::Network("fetched twice".into())),
            }
        }
        .boxed_local()
    }
}

// ============================================================================
// SINKS AND RANKERS
// ============================================================================

/// Records everything a session asks to display.
#[derive(Default)]
pub struct RecordingSink {
    pub modes: RefCell<Vec<DisplayMode>>,
    pub rendered: RefCell<Vec<RenderedEntry>>,
    pub renders: Cell<usize>,
    pub clears: Cell<usize>,
    pub errors: RefCell<Vec<IndexFetchError>>,
}

impl RecordingSink {
    pub fn rendered_names(&self) -> Vec<String> {
        self.rendered
            .borrow()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }
}

impl ResultSink for RecordingSink {
    fn set_mode(&self, mode: DisplayMode) {
        self.modes.borrow_mut().push(mode);
    }

    fn clear_results(&self) {
        self.clears.set(self.clears.get() + 1);
        self.rendered.borrow_mut().clear();
    }

    fn replace_results(&self, results: &[ScoredEntry<'_>]) {
        self.renders.set(self.renders.get() + 1);
        *self.rendered.borrow_mut() = results.iter().map(RenderedEntry::from).collect();
    }

    fn show_error(&self, error: &IndexFetchError) {
        self.errors.borrow_mut().push(error.clone());
    }
}

/// Wraps the default ranker and counts invocations.
#[derive(Default)]
pub struct CountingRanker {
    pub inner: FuzzyRanker,
    pub calls: usize,
}

impl Ranker for CountingRanker {
    fn rank<'a>(&mut self, query: &str, entries: &'a [IndexEntry]) -> Vec<ScoredEntry<'a>> {
        self.calls += 1;
        self.inner.rank(query, entries)
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert the ranking order holds: distance ascending, then name ascending.
pub fn assert_ranked(results: &[ScoredEntry<'_>]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            (a.distance, a.entry.name.as_str()) <= (b.distance, b.entry.name.as_str()),
            "out of order: ({}, {}) before ({}, {})",
            a.distance,
            a.entry.name,
            b.distance,
            b.entry.name
        );
    }
}

/// Names of ranked results, in order.
pub fn names(results: &[ScoredEntry<'_>]) -> Vec<String> {
    results.iter().map(|r| r.entry.name.clone()).collect()
}
