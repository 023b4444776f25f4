// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use docql_search::{
    DisplayMode, Entries, FileSource, FuzzyRanker, IndexEntry, IndexStore, RenderedEntry,
    ResultSink, ScoredEntry, SearchSession,
};
use futures::executor::block_on;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, themed, BOLD, DIM, GRAY, GREEN, RED};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            json,
        } => run_search(&index, &query, limit, json),
        Commands::Repl { index, limit } => run_repl(&index, limit),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load(path: &Path) -> Result<Entries> {
    let store = IndexStore::new(FileSource::new(path));
    block_on(store.get()).with_context(|| format!("loading {}", path.display()))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(path: &Path, query: &str, limit: usize, json: bool) -> Result<()> {
    let entries = load(path)?;
    let query = query.trim();
    let results = rank(query, &entries, limit);

    if json {
        let rendered: Vec<RenderedEntry> = results.iter().map(RenderedEntry::from).collect();
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        display::print_results(query, &results);
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn rank<'a>(query: &str, entries: &'a [IndexEntry], limit: usize) -> Vec<ScoredEntry<'a>> {
    docql_search::rank_parallel(query, entries, limit)
}

#[cfg(not(feature = "parallel"))]
fn rank<'a>(query: &str, entries: &'a [IndexEntry], limit: usize) -> Vec<ScoredEntry<'a>> {
    let mut metric = docql_search::EditDistance::new();
    docql_search::rank_scored(&mut metric, query, entries, limit)
}

// ═══════════════════════════════════════════════════════════════════════════
// REPL
// ═══════════════════════════════════════════════════════════════════════════

/// Prints each render to the terminal, remembering the last query for the header.
struct TerminalSink {
    query: RefCell<String>,
}

impl ResultSink for TerminalSink {
    fn set_mode(&self, mode: DisplayMode) {
        if mode == DisplayMode::Main {
            println!("{}", themed(GRAY, &[DIM], "(main)"));
        }
    }

    fn clear_results(&self) {}

    fn replace_results(&self, results: &[ScoredEntry<'_>]) {
        display::print_results(&self.query.borrow(), results);
    }

    fn show_error(&self, error: &docql_search::IndexFetchError) {
        eprintln!("{}", themed(RED, &[BOLD], &error.to_string()));
    }
}

fn run_repl(path: &Path, limit: usize) -> Result<()> {
    let store = IndexStore::new(FileSource::new(path));
    let sink = TerminalSink {
        query: RefCell::new(String::new()),
    };
    let session = SearchSession::with_ranker(store, FuzzyRanker::new(limit), sink);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        print!("{} ", themed(GREEN, &[BOLD], "›"));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        *session.sink().query.borrow_mut() = line.trim().to_string();
        block_on(session.on_input(&line))
            .with_context(|| format!("loading {}", path.display()))?;
    }
    println!();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default, PartialEq)]
struct IndexSummary {
    entries: usize,
    members: usize,
    by_kind: BTreeMap<String, usize>,
    aliases: usize,
    max_aliases: usize,
    without_aliases: usize,
    duplicate_names: usize,
}

fn summarize(entries: &[IndexEntry]) -> IndexSummary {
    let mut summary = IndexSummary {
        entries: entries.len(),
        ..IndexSummary::default()
    };
    let mut names: BTreeMap<&str, usize> = BTreeMap::new();

    for entry in entries {
        *summary.by_kind.entry(entry.kind.clone()).or_insert(0) += 1;
        *names.entry(entry.name.as_str()).or_insert(0) += 1;
        if entry.is_member() {
            summary.members += 1;
        }
        summary.aliases += entry.aliases.len();
        summary.max_aliases = summary.max_aliases.max(entry.aliases.len());
        if entry.aliases.is_empty() {
            summary.without_aliases += 1;
        }
    }

    summary.duplicate_names = names.values().filter(|&&count| count > 1).count();
    summary
}

fn run_inspect(path: &Path) -> Result<()> {
    let entries = load(path)?;
    let summary = summarize(&entries);

    display::section_top(&path.display().to_string());
    display::row(&format!(
        " entries: {}   top-level: {}   members: {}",
        summary.entries,
        summary.entries - summary.members,
        summary.members
    ));
    let avg = if summary.entries == 0 {
        0.0
    } else {
        summary.aliases as f64 / summary.entries as f64
    };
    display::row(&format!(
        " aliases: {}   avg/entry: {:.2}   max/entry: {}",
        summary.aliases, avg, summary.max_aliases
    ));
    display::row(&format!(
        " names shared by several entries: {}",
        summary.duplicate_names
    ));
    if summary.without_aliases > 0 {
        display::row(&themed(
            RED,
            &[BOLD],
            &format!(" entries with no aliases: {}", summary.without_aliases),
        ));
    }
    display::row("");
    for (kind, count) in &summary.by_kind {
        display::row(&format!(
            " {} {}",
            display::pad_right(&display::kind_badge(kind), 16),
            count
        ));
    }
    display::section_bot();
    Ok(())
}
