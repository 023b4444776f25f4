//! IndexStore: one fetch, shared by every caller, cached forever.

use super::common::{gated_source, index_json, sample_index};
use docql_search::{
    Entries, FileSource, IndexFetchError, IndexStatus, IndexStore, StaticSource,
};
use futures::executor::{block_on, LocalPool};
use futures::task::LocalSpawnExt;
use std::cell::RefCell;
use std::rc::Rc;

type Outcomes = Rc<RefCell<Vec<Result<Entries, IndexFetchError>>>>;

#[test]
fn test_concurrent_gets_share_one_fetch() {
    let (source, gate) = gated_source();
    let store = Rc::new(IndexStore::new(source));
    let outcomes: Outcomes = Rc::default();

    let mut pool = LocalPool::new();
    for _ in 0..3 {
        let store = Rc::clone(&store);
        let outcomes = Rc::clone(&outcomes);
        pool.spawner()
            .spawn_local(async move {
                let result = store.get().await;
                outcomes.borrow_mut().push(result);
            })
            .unwrap();
    }

    pool.run_until_stalled();
    assert_eq!(gate.calls.get(), 1);
    assert_eq!(store.status(), IndexStatus::Pending);
    assert!(outcomes.borrow().is_empty());

    let calls = Rc::clone(&gate.calls);
    gate.release(index_json(&sample_index()));
    pool.run_until_stalled();

    let outcomes = outcomes.borrow();
    assert_eq!(outcomes.len(), 3);
    let first = outcomes[0].as_ref().unwrap();
    for outcome in outcomes.iter() {
        assert!(Rc::ptr_eq(first, outcome.as_ref().unwrap()));
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_get_after_ready_does_not_refetch() {
    let (source, gate) = gated_source();
    let calls = Rc::clone(&gate.calls);
    let store = IndexStore::new(source);

    gate.release(index_json(&sample_index()));
    let first = block_on(store.get()).unwrap();
    let second = block_on(store.get()).unwrap();

    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_fetch_failure_reaches_every_waiter_and_sticks() {
    let (source, gate) = gated_source();
    let calls = Rc::clone(&gate.calls);
    let store = Rc::new(IndexStore::new(source));
    let outcomes: Outcomes = Rc::default();

    let mut pool = LocalPool::new();
    for _ in 0..2 {
        let store = Rc::clone(&store);
        let outcomes = Rc::clone(&outcomes);
        pool.spawner()
            .spawn_local(async move {
                let result = store.get().await;
                outcomes.borrow_mut().push(result);
            })
            .unwrap();
    }
    pool.run_until_stalled();

    gate.fail(IndexFetchError::Status(404));
    pool.run_until_stalled();

    for outcome in outcomes.borrow().iter() {
        assert_eq!(outcome.as_ref().unwrap_err(), &IndexFetchError::Status(404));
    }

    // No retry: a later call gets the same error without touching the source
    let later = block_on(store.get()).unwrap_err();
    assert_eq!(later, IndexFetchError::Status(404));
    assert_eq!(calls.get(), 1);
    assert_eq!(
        store.status(),
        IndexStatus::Failed(IndexFetchError::Status(404))
    );
}

#[test]
fn test_status_is_unfetched_until_first_get() {
    let store = IndexStore::new(StaticSource::new("[]"));
    assert_eq!(store.status(), IndexStatus::Unfetched);

    block_on(store.get()).unwrap();
    assert_eq!(store.status(), IndexStatus::Ready { entries: 0 });
}

#[test]
fn test_wire_format_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search-index.json");
    std::fs::write(
        &path,
        r#"[
            [["user"], "User", "object"],
            [["id"], "id", "field", "User", "object"],
            [["super_admin", "superadmin"], "SUPER_ADMIN", "enum_value", "AccountType", "enum"]
        ]"#,
    )
    .unwrap();

    let store = IndexStore::new(FileSource::new(&path));
    let entries = block_on(store.get()).unwrap();

    assert_eq!(entries.len(), 3);
    assert!(!entries[0].is_member());
    assert_eq!(entries[1].parent_name(), Some("User"));
    assert_eq!(entries[2].aliases, vec!["super_admin", "superadmin"]);
}

#[test]
fn test_half_present_parent_is_a_decode_error() {
    let store = IndexStore::new(StaticSource::new(r#"[[["id"], "id", "field", "User"]]"#));

    let err = block_on(store.get()).unwrap_err();
    assert!(matches!(err, IndexFetchError::Decode(_)));
}

#[test]
fn test_empty_parent_strings_decode_as_top_level() {
    let store = IndexStore::new(StaticSource::new(r#"[[["id"], "id", "field", "", ""]]"#));

    let entries = block_on(store.get()).unwrap();
    assert!(!entries[0].is_member());
    assert_eq!(entries[0].href(), "field.id.html");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = IndexStore::new(FileSource::new(dir.path().join("missing.json")));

    let err = block_on(store.get()).unwrap_err();
    assert!(matches!(err, IndexFetchError::Io(_)));
}
