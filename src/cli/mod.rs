// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docql-search command-line interface.
//!
//! Three subcommands against a generated `search-index.json`: `search` for a
//! one-shot ranked query, `repl` to drive a live search session from stdin
//! the way the search box does, and `inspect` to summarize what's in an index.

pub mod display;

use clap::{Parser, Subcommand};
use docql_search::DEFAULT_LIMIT;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docql-search",
    about = "Fuzzy search over generated GraphQL documentation indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank an index against a single query
    Search {
        /// Path to search-index.json
        index: PathBuf,

        /// Search query (surrounding whitespace is ignored)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line, and re-rank on each
    Repl {
        /// Path to search-index.json
        index: PathBuf,

        /// Maximum number of results to return
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Summarize the entries in an index
    Inspect {
        /// Path to search-index.json
        index: PathBuf,
    },
}
