// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options, as passed from JavaScript or built by the CLI.
//!
//! Every field is optional on the wire; missing fields take the defaults.

use crate::scoring::ranking::DEFAULT_LIMIT;
use serde::Deserialize;

/// Where the browser binding fetches the index from when no URL is given.
pub const DEFAULT_INDEX_URL: &str = "search-index.json";

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Maximum number of results to return (default: 20)
    pub limit: usize,
    /// URL of the JSON index, relative to the page (default: `search-index.json`)
    pub index_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
