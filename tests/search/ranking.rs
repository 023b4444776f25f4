//! Ranking against a schema-shaped index.

use super::common::{assert_ranked, make_entry, make_member, names, sample_index};
use docql_search::{rank, rank_scored, EditDistance, IndexEntry, RenderedEntry, DEFAULT_LIMIT};

fn ranked(query: &str, entries: &[IndexEntry]) -> Vec<RenderedEntry> {
    let mut metric = EditDistance::new();
    rank_scored(&mut metric, query, entries, DEFAULT_LIMIT)
        .iter()
        .map(RenderedEntry::from)
        .collect()
}

#[test]
fn test_type_and_field_with_same_alias() {
    let index = sample_index();
    let results = ranked("user", &index);

    // Both "User" and Query.user have the alias "user"; uppercase sorts first
    assert_eq!(results[0].name, "User");
    assert_eq!(results[0].distance, Some(0));
    assert_eq!(results[0].href, "object.User.html");
    assert_eq!(results[0].parent_name, None);

    assert_eq!(results[1].name, "user");
    assert_eq!(results[1].distance, Some(0));
    assert_eq!(results[1].href, "object.Query.html#field.user");
    assert_eq!(results[1].parent_name.as_deref(), Some("Query"));
    assert_eq!(results[1].parent_href.as_deref(), Some("object.Query.html"));
}

#[test]
fn test_enum_value_found_without_underscore() {
    let index = sample_index();
    let results = ranked("superadmin", &index);

    assert_eq!(results[0].name, "SUPER_ADMIN");
    assert_eq!(results[0].distance, Some(0));
    assert_eq!(results[0].href, "enum.AccountType.html#enum_value.SUPER_ADMIN");
}

#[test]
fn test_typo_still_finds_type() {
    let index = sample_index();
    let results = ranked("datetme", &index);

    assert_eq!(results[0].name, "DateTime");
    assert_eq!(results[0].distance, Some(1));
}

#[test]
fn test_every_entry_returned_when_under_limit() {
    let index = sample_index();
    assert!(index.len() < DEFAULT_LIMIT);

    let results = ranked("zzzzzzzz", &index);
    assert_eq!(results.len(), index.len());
}

#[test]
fn test_limit_applies_after_sort() {
    // The best match sits at the end of a long index
    let mut index: Vec<IndexEntry> = (0..100)
        .map(|i| make_entry(&format!("unrelated{i:03}")))
        .collect();
    index.push(make_entry("needle"));

    let results = rank("needle", &index);
    assert_eq!(results.len(), DEFAULT_LIMIT);
    assert_eq!(results[0].name, "needle");
}

#[test]
fn test_sample_index_ordering_holds_for_many_queries() {
    let index = sample_index();
    let mut metric = EditDistance::new();

    for query in ["q", "usr", "account", "name", "node", "search result", "é"] {
        let results = rank_scored(&mut metric, query, &index, DEFAULT_LIMIT);
        assert_ranked(&results);
    }
}

#[test]
fn test_same_name_on_different_parents() {
    let index = sample_index();
    let mut metric = EditDistance::new();
    let results = rank_scored(&mut metric, "name", &index, 2);

    assert_eq!(names(&results), vec!["name", "name"]);
    // Source order: User.name is listed before CreateUserInput.name
    assert_eq!(results[0].entry.parent_name(), Some("User"));
    assert_eq!(results[1].entry.parent_name(), Some("CreateUserInput"));
}

#[test]
fn test_member_link_fragment_uses_member_kind() {
    let entry = make_member("email", "input_field", "CreateUserInput", "input_object");
    let index = vec![entry];
    let results = ranked("email", &index);

    assert_eq!(
        results[0].href,
        "input_object.CreateUserInput.html#input_field.email"
    );
}
