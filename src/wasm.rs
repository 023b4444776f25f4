// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the documentation search box.
//!
//! This is the browser-facing API. The page wires its search input to
//! `DocSearch.input()` and renders whatever the `onUpdate` callback receives.
//! The index is fetched with `window.fetch` on the first non-blank input and
//! cached for the life of the page.
//!
//! # Callback API
//!
//! ```js
//! const search = new DocSearch(update => {
//!     bodyWrapper.dataset.state = update.mode;   // "main" | "search"
//!     if (update.results) {
//!         renderResults(update.results);         // [{ name, kind, href, parentName?, ... }]
//!     }
//! }, { indexUrl: 'search-index.json', limit: 20 });
//!
//! input.addEventListener('input', () => search.input(input.value));
//! ```

use crate::config::SearchConfig;
use crate::error::IndexFetchError;
use crate::fuzzy::EditDistance;
use crate::index::{decode_index, IndexSource, IndexStore};
use crate::scoring::ranking::{rank_scored, FuzzyRanker};
use crate::session::{InputOutcome, ResultSink, SearchSession};
use crate::types::{DisplayMode, RenderedEntry, ScoredEntry};
use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Function, Promise};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// Install the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// =============================================================================
// FETCH-BACKED INDEX SOURCE
// =============================================================================

/// Index fetched over HTTP with `window.fetch`.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl IndexSource for HttpSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, IndexFetchError>> {
        let url = self.url.clone();
        async move {
            let result = fetch_text(&url).await;
            if let Err(err) = &result {
                web_sys::console::error_1(&JsValue::from_str(&format!("[docql-search] {}", err)));
            }
            result
        }
        .boxed_local()
    }
}

async fn fetch_text(url: &str) -> Result<String, IndexFetchError> {
    let window =
        web_sys::window().ok_or_else(|| IndexFetchError::Network("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network_error)?;
    let response: web_sys::Response = response.dyn_into().map_err(network_error)?;

    if !response.ok() {
        return Err(IndexFetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    body.as_string()
        .ok_or_else(|| IndexFetchError::Decode("response body is not text".to_string()))
}

fn network_error(value: JsValue) -> IndexFetchError {
    IndexFetchError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

// =============================================================================
// CALLBACK SINK
// =============================================================================

/// Payload handed to the page's `onUpdate` callback.
///
/// `results` is omitted on a mode-only update: the page switches panels
/// and keeps whatever list it already shows.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsUpdate<'a> {
    mode: DisplayMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<&'a [RenderedEntry]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Forwards session updates to a JS function.
struct CallbackSink {
    on_update: Function,
    mode: Cell<DisplayMode>,
}

impl CallbackSink {
    fn emit(&self, results: Option<&[RenderedEntry]>, error: Option<String>) {
        let update = JsUpdate {
            mode: self.mode.get(),
            results,
            error,
        };
        match to_value(&update) {
            Ok(value) => {
                if let Err(err) = self.on_update.call1(&JsValue::NULL, &value) {
                    web_sys::console::error_2(
                        &JsValue::from_str("[docql-search] onUpdate threw"),
                        &err,
                    );
                }
            }
            Err(err) => web_sys::console::error_1(&JsValue::from_str(&format!(
                "[docql-search] failed to serialize results: {}",
                err
            ))),
        }
    }
}

impl ResultSink for CallbackSink {
    // Sent before the index is awaited, so the panel switches while it loads
    fn set_mode(&self, mode: DisplayMode) {
        self.mode.set(mode);
        self.emit(None, None);
    }

    fn clear_results(&self) {
        self.emit(Some(&[][..]), None);
    }

    fn replace_results(&self, results: &[ScoredEntry<'_>]) {
        let rendered: Vec<RenderedEntry> = results.iter().map(RenderedEntry::from).collect();
        self.emit(Some(rendered.as_slice()), None);
    }

    fn show_error(&self, error: &IndexFetchError) {
        self.emit(Some(&[][..]), Some(error.to_string()));
    }
}

// =============================================================================
// DOC SEARCH
// =============================================================================

type BrowserSession = SearchSession<HttpSource, CallbackSink>;

/// WASM-accessible search box controller.
#[wasm_bindgen]
pub struct DocSearch {
    session: Rc<BrowserSession>,
}

#[wasm_bindgen]
impl DocSearch {
    /// Create a controller. The index isn't fetched until the first
    /// non-blank input.
    ///
    /// Options (all optional):
    /// - `indexUrl`: where to fetch the index (default: "search-index.json")
    /// - `limit`: maximum results (default: 20)
    #[wasm_bindgen(constructor)]
    pub fn new(on_update: Function, options: Option<JsValue>) -> Result<DocSearch, JsValue> {
        let config: SearchConfig = match options {
            Some(opts) if !opts.is_undefined() && !opts.is_null() => {
                from_value(opts).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            _ => SearchConfig::default(),
        };

        let store = IndexStore::new(HttpSource::new(config.index_url));
        let sink = CallbackSink {
            on_update,
            mode: Cell::new(DisplayMode::Main),
        };
        let session = SearchSession::with_ranker(store, FuzzyRanker::new(config.limit), sink);

        Ok(DocSearch {
            session: Rc::new(session),
        })
    }

    /// Feed the search box's current value.
    ///
    /// Resolves to "cleared", "rendered", or "superseded". Rejects with the
    /// error message if the index couldn't be loaded.
    #[wasm_bindgen]
    pub fn input(&self, raw: String) -> Promise {
        let session = Rc::clone(&self.session);
        future_to_promise(async move {
            match session.on_input(&raw).await {
                Ok(InputOutcome::Cleared) => Ok(JsValue::from_str("cleared")),
                Ok(InputOutcome::Rendered { .. }) => Ok(JsValue::from_str("rendered")),
                Ok(InputOutcome::Superseded) => Ok(JsValue::from_str("superseded")),
                Err(err) => Err(JsValue::from_str(&err.to_string())),
            }
        })
    }

    /// Current display mode: "main" or "search".
    #[wasm_bindgen]
    pub fn mode(&self) -> String {
        self.session.mode().as_str().to_string()
    }
}

/// Rank an index that's already in hand, without a session.
///
/// `index_json` is the raw `search-index.json` text. Returns the same result
/// objects `onUpdate` receives.
#[wasm_bindgen(js_name = rankIndex)]
pub fn rank_index(index_json: &str, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
    let entries = decode_index(index_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let limit = limit.unwrap_or(SearchConfig::default().limit);

    let mut metric = EditDistance::new();
    let rendered: Vec<RenderedEntry> = rank_scored(&mut metric, query.trim(), &entries, limit)
        .iter()
        .map(RenderedEntry::from)
        .collect();

    to_value(&rendered).map_err(|e| e.to_string().into())
}
