// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index loading: fetch once, decode once, share forever.
//!
//! An [`IndexStore`] moves through four states and never goes back:
//!
//! ```text
//! Unfetched ──get()──▶ Pending ──ok──▶ Ready(entries)
//!                         │
//!                         └──err─▶ Failed(error)
//! ```
//!
//! The first `get()` starts the one and only fetch. Every other caller,
//! whether it arrives while the fetch is in flight or long after, awaits the
//! same shared future and sees the same entries or the same error. There is
//! no retry, no freshness check, and no invalidation.
//!
//! Everything here is single-threaded (`Rc`, `RefCell`, `LocalBoxFuture`):
//! in the browser the fetch future is a JS promise, which can't cross
//! threads anyway.

mod source;

pub use source::*;

use crate::error::IndexFetchError;
use crate::types::IndexEntry;
use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::rc::Rc;

/// Decoded index, shared by every search.
pub type Entries = Rc<[IndexEntry]>;

type FetchResult = Result<Entries, IndexFetchError>;

/// Where the raw JSON index comes from.
///
/// `fetch` is called at most once per store. The returned future owns
/// everything it needs (`'static`) because the store keeps it around as a
/// shared future.
pub trait IndexSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, IndexFetchError>>;
}

/// Decode the JSON wire format into entries.
pub fn decode_index(json: &str) -> Result<Vec<IndexEntry>, IndexFetchError> {
    Ok(serde_json::from_str(json)?)
}

/// Observable lifecycle of an [`IndexStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStatus {
    Unfetched,
    Pending,
    Ready { entries: usize },
    Failed(IndexFetchError),
}

/// Lazily fetched, cached-forever search index.
pub struct IndexStore<S> {
    source: S,
    fetch: RefCell<Option<Shared<LocalBoxFuture<'static, FetchResult>>>>,
}

impl<S: IndexSource> IndexStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            fetch: RefCell::new(None),
        }
    }

    /// The index entries, fetching them on first use.
    pub async fn get(&self) -> FetchResult {
        let pending = self
            .fetch
            .borrow_mut()
            .get_or_insert_with(|| self.start_fetch())
            .clone();
        pending.await
    }

    pub fn status(&self) -> IndexStatus {
        match self.fetch.borrow().as_ref() {
            None => IndexStatus::Unfetched,
            Some(pending) => match pending.peek() {
                None => IndexStatus::Pending,
                Some(Ok(entries)) => IndexStatus::Ready {
                    entries: entries.len(),
                },
                Some(Err(err)) => IndexStatus::Failed(err.clone()),
            },
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn start_fetch(&self) -> Shared<LocalBoxFuture<'static, FetchResult>> {
        tracing::debug!("fetching search index");
        let body = self.source.fetch();

        async move {
            let result = match body.await {
                Ok(json) => decode_index(&json).map(Entries::from),
                Err(err) => Err(err),
            };
            match &result {
                Ok(entries) => tracing::debug!(entries = entries.len(), "search index ready"),
                Err(err) => tracing::warn!(error = %err, "search index unavailable"),
            }
            result
        }
        .boxed_local()
        .shared()
    }
}
