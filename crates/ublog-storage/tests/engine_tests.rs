//! StorageEngine integration tests: CRUD, ordering, snapshot reads.

use chrono::{TimeZone, Utc};

use ublog_core::models::{Cursor, Post, User};
use ublog_core::traits::{PostStore, UserStore};
use ublog_storage::StorageEngine;

fn seed_user(engine: &StorageEngine, id: &str) {
    let user = User {
        id: id.to_string(),
        username: format!("user-{id}"),
        email: format!("{id}@example.com"),
        created_at: Utc::now(),
    };
    engine.create_user(&user).unwrap();
}

fn post_at(author: &str, millis: i64, id: &str) -> Post {
    let ts = Utc.timestamp_millis_opt(millis).unwrap();
    Post {
        id: id.to_string(),
        author_id: author.to_string(),
        title: format!("title {id}"),
        body: format!("body {id}"),
        created_at: ts,
        updated_at: ts,
    }
}

/// Engine with one author and posts at millisecond offsets 1..=n
/// (ids "p1".."pn", so display order is pn..p1).
fn seeded_engine(n: i64) -> StorageEngine {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_user(&engine, "a1");
    for i in 1..=n {
        engine.create(&post_at("a1", i, &format!("p{i}"))).unwrap();
    }
    engine
}

fn window_ids(engine: &StorageEngine, limit: u32, cursor: Option<&Cursor>) -> Vec<String> {
    engine
        .snapshot_page(limit, cursor)
        .unwrap()
        .items
        .into_iter()
        .map(|p| p.id)
        .collect()
}

#[test]
fn create_then_get_round_trips() {
    let engine = seeded_engine(0);
    let post = post_at("a1", 1_700_000_000_123, "x");
    engine.create(&post).unwrap();

    let fetched = engine.get("x").unwrap().unwrap();
    assert_eq!(fetched.title, "title x");
    assert_eq!(fetched.body, "body x");
    assert_eq!(fetched.author_id, "a1");
    assert_eq!(fetched.created_at, post.created_at);
}

#[test]
fn get_missing_post_is_none() {
    let engine = seeded_engine(0);
    assert!(engine.get("nope").unwrap().is_none());
}

#[test]
fn update_rewrites_mutable_fields_only() {
    let engine = seeded_engine(1);
    let mut post = engine.get("p1").unwrap().unwrap();
    let original_created = post.created_at;

    post.title = "renamed".to_string();
    post.updated_at = Utc.timestamp_millis_opt(9_999).unwrap();
    engine.update(&post).unwrap();

    let fetched = engine.get("p1").unwrap().unwrap();
    assert_eq!(fetched.title, "renamed");
    assert_eq!(fetched.created_at, original_created);
    assert_eq!(fetched.updated_at, post.updated_at);
}

#[test]
fn delete_removes_the_row() {
    let engine = seeded_engine(2);
    engine.delete("p1").unwrap();
    assert!(engine.get("p1").unwrap().is_none());
    assert_eq!(engine.count().unwrap(), 1);
}

#[test]
fn window_is_descending_by_created_at() {
    let engine = seeded_engine(5);
    assert_eq!(window_ids(&engine, 3, None), vec!["p5", "p4", "p3"]);
}

#[test]
fn window_with_cursor_is_strictly_below_it() {
    let engine = seeded_engine(5);
    let cursor = engine.get("p3").unwrap().unwrap().cursor();
    assert_eq!(window_ids(&engine, 10, Some(&cursor)), vec!["p2", "p1"]);
}

#[test]
fn equal_timestamps_order_by_id_descending() {
    let engine = seeded_engine(0);
    engine.create(&post_at("a1", 7, "a")).unwrap();
    engine.create(&post_at("a1", 7, "b")).unwrap();
    engine.create(&post_at("a1", 7, "c")).unwrap();

    assert_eq!(window_ids(&engine, 10, None), vec!["c", "b", "a"]);

    // A cursor inside the tie continues below it in the total order.
    let cursor = engine.get("b").unwrap().unwrap().cursor();
    assert_eq!(window_ids(&engine, 10, Some(&cursor)), vec!["a"]);
}

#[test]
fn snapshot_reports_oldest_and_count() {
    let engine = seeded_engine(4);
    let snapshot = engine.snapshot_page(2, None).unwrap();
    assert_eq!(snapshot.total_count, 4);
    assert_eq!(snapshot.oldest.unwrap().id, "p1");
}

#[test]
fn empty_store_snapshot_is_empty() {
    let engine = seeded_engine(0);
    let snapshot = engine.snapshot_page(5, None).unwrap();
    assert!(snapshot.items.is_empty());
    assert!(snapshot.oldest.is_none());
    assert_eq!(snapshot.total_count, 0);
}

#[test]
fn user_round_trip_and_missing_lookup() {
    let engine = StorageEngine::open_in_memory().unwrap();
    seed_user(&engine, "u7");
    let user = engine.get_user("u7").unwrap().unwrap();
    assert_eq!(user.username, "user-u7");
    assert!(engine.get_user("ghost").unwrap().is_none());
}

#[test]
fn file_backed_engine_reads_through_the_pool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ublog.db");
    let engine = StorageEngine::open(&path, 2).unwrap();

    seed_user(&engine, "a1");
    engine.create(&post_at("a1", 42, "p42")).unwrap();

    // Reads route through the read pool in file-backed mode.
    assert_eq!(engine.get("p42").unwrap().unwrap().id, "p42");
    assert_eq!(engine.count().unwrap(), 1);
}

#[test]
fn file_backed_engine_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ublog.db");
    let engine = StorageEngine::open(&path, 1).unwrap();

    let wal = engine
        .pool()
        .writer
        .with_conn_sync(ublog_storage::pool::pragmas::verify_wal_mode)
        .unwrap();
    assert!(wal);
}
