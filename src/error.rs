// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error kinds for loading the index and running searches.
//!
//! Only two things can go wrong. The index can fail to arrive (network, status,
//! file, or JSON decode), and an entry can carry no aliases at all. Everything
//! else in the engine is a total function over well-formed input.

/// Failure while loading the search index.
///
/// `Clone` because one failed fetch is observed by every caller that awaited
/// it, now or later. The store never retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexFetchError {
    /// The request never produced a response.
    #[error("failed to fetch search index: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("search index request returned HTTP {0}")]
    Status(u16),

    /// Reading a local index file failed.
    #[error("failed to read search index: {0}")]
    Io(String),

    /// The body was not a JSON array of index records.
    #[error("failed to decode search index: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for IndexFetchError {
    fn from(err: serde_json::Error) -> Self {
        IndexFetchError::Decode(err.to_string())
    }
}

impl From<std::io::Error> for IndexFetchError {
    fn from(err: std::io::Error) -> Self {
        IndexFetchError::Io(err.to_string())
    }
}

/// Errors surfaced by scoring and by [`SearchSession`](crate::SearchSession).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The index could not be loaded. Sticky for the lifetime of the store.
    #[error(transparent)]
    IndexFetch(#[from] IndexFetchError),

    /// An entry has no aliases, so it has no minimum distance.
    #[error("index entry '{name}' has no aliases")]
    EmptyAliasSet { name: String },
}

/// Alias for a `Result` with the error type [`SearchError`].
pub type Result<T, E = SearchError> = std::result::Result<T, E>;
