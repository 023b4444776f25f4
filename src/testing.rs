//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::IndexEntry;

/// Create a top-level test entry whose only alias is its name.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(name: &str) -> IndexEntry {
    IndexEntry::new([name], name, "object")
}

/// Create a top-level entry with an explicit kind.
pub fn make_entry_with_kind(name: &str, kind: &str) -> IndexEntry {
    IndexEntry::new([name.to_lowercase()], name, kind)
}

/// Create a member entry the way the index generator does: lowercased alias,
/// plus an underscore-free variant for enum values.
pub fn make_member(name: &str, kind: &str, parent_name: &str, parent_kind: &str) -> IndexEntry {
    let lower = name.to_lowercase();
    let mut aliases = vec![lower.clone()];
    if kind == "enum_value" && lower.contains('_') {
        aliases.push(lower.replace('_', ""));
    }
    IndexEntry::new(aliases, name, kind).with_parent(parent_name, parent_kind)
}

/// Serialize entries to the JSON wire format.
///
/// Panics if serialization fails; a broken fixture should fail the test.
pub fn index_json(entries: &[IndexEntry]) -> String {
    serde_json::to_string(entries).expect("index fixtures serialize to JSON")
}

/// A small schema-shaped index: a few types, their fields, and enum values.
pub fn sample_index() -> Vec<IndexEntry> {
    vec![
        make_entry_with_kind("Query", "object"),
        make_member("user", "field", "Query", "object"),
        make_member("users", "field", "Query", "object"),
        make_entry_with_kind("User", "object"),
        make_member("id", "field", "User", "object"),
        make_member("name", "field", "User", "object"),
        make_member("accountType", "field", "User", "object"),
        make_entry_with_kind("AccountType", "enum"),
        make_member("SUPER_ADMIN", "enum_value", "AccountType", "enum"),
        make_member("MEMBER", "enum_value", "AccountType", "enum"),
        make_entry_with_kind("CreateUserInput", "input_object"),
        make_member("name", "input_field", "CreateUserInput", "input_object"),
        make_entry_with_kind("DateTime", "scalar"),
        make_entry_with_kind("Node", "interface"),
        make_entry_with_kind("SearchResult", "union"),
    ]
}
