// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Native index sources. The browser's `fetch`-backed source lives in `wasm.rs`.

use super::IndexSource;
use crate::error::IndexFetchError;
use futures::future::{self, FutureExt, LocalBoxFuture};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// An index that is already in memory (embedded, or read ahead of time).
#[derive(Debug, Clone)]
pub struct StaticSource {
    json: Rc<str>,
}

impl StaticSource {
    pub fn new(json: impl Into<Rc<str>>) -> Self {
        Self { json: json.into() }
    }
}

impl IndexSource for StaticSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, IndexFetchError>> {
        future::ready(Ok(self.json.to_string())).boxed_local()
    }
}

/// An index file on the local filesystem, e.g. a generated docs directory.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IndexSource for FileSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<String, IndexFetchError>> {
        let path = self.path.clone();
        async move {
            std::fs::read_to_string(&path)
                .map_err(|e| IndexFetchError::Io(format!("{}: {}", path.display(), e)))
        }
        .boxed_local()
    }
}
