use readlist_core::db::open_db_in_memory;
use readlist_core::{ArticleStore, Filter, SqliteSnapshotRepository};
use rusqlite::Connection;
use std::collections::HashSet;

fn store(conn: &Connection) -> ArticleStore<SqliteSnapshotRepository<'_>> {
    ArticleStore::open(SqliteSnapshotRepository::new(conn)).unwrap()
}

#[test]
fn stats_counts_partition_the_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let a = store.add("A", "", "").unwrap().unwrap();
    let _b = store.add("B", "", "").unwrap().unwrap();
    let c = store.add("C", "", "").unwrap().unwrap();
    store.toggle_read(a).unwrap();
    store.toggle_read(c).unwrap();

    let stats = store.stats();
    assert_eq!(stats.total, store.articles().len());
    assert_eq!(stats.unread + stats.read, stats.total);
    assert_eq!(stats.read, 2);
    assert_eq!(stats.unread, 1);
}

#[test]
fn read_and_unread_views_are_disjoint_and_cover_all() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    for n in 0..6 {
        let id = store.add(&format!("Article {n}"), "", "").unwrap().unwrap();
        if n % 2 == 0 {
            store.toggle_read(id).unwrap();
        }
    }

    let unread: HashSet<_> = store.filtered(Filter::Unread).iter().map(|a| a.id).collect();
    let read: HashSet<_> = store.filtered(Filter::Read).iter().map(|a| a.id).collect();
    let all: HashSet<_> = store.filtered(Filter::All).iter().map(|a| a.id).collect();

    assert!(unread.is_disjoint(&read));
    let union: HashSet<_> = unread.union(&read).copied().collect();
    assert_eq!(union, all);
    assert_eq!(all.len(), 6);
}

#[test]
fn filtered_views_preserve_collection_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    for n in 0..4 {
        store.add(&format!("Article {n}"), "", "").unwrap().unwrap();
    }

    let all_order: Vec<_> = store.articles().iter().map(|a| a.id).collect();
    let view_order: Vec<_> = store.filtered(Filter::All).iter().map(|a| a.id).collect();
    assert_eq!(view_order, all_order);

    let unread_order: Vec<_> = store.filtered(Filter::Unread).iter().map(|a| a.id).collect();
    assert_eq!(unread_order, all_order);
}

#[test]
fn filter_parses_case_insensitive_names() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!(" Unread ".parse::<Filter>().unwrap(), Filter::Unread);
    assert_eq!("READ".parse::<Filter>().unwrap(), Filter::Read);

    let err = "starred".parse::<Filter>().unwrap_err();
    assert!(err.to_string().contains("starred"));
}

#[test]
fn add_toggle_scenario_matches_expected_views() {
    let conn = open_db_in_memory().unwrap();
    let mut store = store(&conn);

    let id = store
        .add("Article A", "https://example.com", "")
        .unwrap()
        .unwrap();

    assert_eq!(store.articles().len(), 1);
    assert_eq!(store.articles()[0].title, "Article A");
    assert!(!store.articles()[0].read);
    let stats = store.stats();
    assert_eq!((stats.total, stats.unread, stats.read), (1, 1, 0));

    store.toggle_read(id).unwrap();

    let stats = store.stats();
    assert_eq!((stats.total, stats.unread, stats.read), (1, 0, 1));
    let read_view = store.filtered(Filter::Read);
    assert_eq!(read_view.len(), 1);
    assert_eq!(read_view[0].id, id);
    assert!(store.filtered(Filter::Unread).is_empty());
}
