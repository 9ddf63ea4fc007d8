use readlist_core::db::{open_db, open_db_in_memory};
use readlist_core::{
    Article, ArticleStore, SnapshotRepository, SqliteSnapshotRepository, READING_LIST_SLOT,
};
use rusqlite::params;

#[test]
fn save_then_load_round_trips_fields_and_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let mut newest = Article::new("Newest", "https://example.com/a", "first in line");
    newest.read = true;
    let oldest = Article::new("Oldest", "", "");
    let articles = vec![newest, oldest];

    repo.save(&articles).unwrap();
    let loaded = SqliteSnapshotRepository::new(&conn).load().unwrap();

    assert_eq!(loaded, articles);
}

#[test]
fn absent_slot_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn corrupted_slot_value_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO slots (key, value) VALUES (?1, ?2);",
        params![READING_LIST_SLOT, "{not json"],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load().unwrap().is_empty());

    // A store opened over the corrupt slot starts empty and can mutate.
    let mut store = ArticleStore::open(SqliteSnapshotRepository::new(&conn)).unwrap();
    store.add("Fresh start", "", "").unwrap().unwrap();
    assert_eq!(store.articles().len(), 1);
}

#[test]
fn slot_value_with_wrong_shape_loads_as_empty_collection() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO slots (key, value) VALUES (?1, ?2);",
        params![READING_LIST_SLOT, r#"{"id": "not-an-array"}"#],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn mutations_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("readlist.db");

    let (a, b) = {
        let conn = open_db(&path).unwrap();
        let mut store = ArticleStore::open(SqliteSnapshotRepository::new(&conn)).unwrap();

        let a = store.add("A", "https://example.com/a", "").unwrap().unwrap();
        let b = store.add("B", "", "note b").unwrap().unwrap();
        store.toggle_read(a).unwrap();
        (a, b)
    };

    let conn = open_db(&path).unwrap();
    let store = ArticleStore::open(SqliteSnapshotRepository::new(&conn)).unwrap();

    let ids: Vec<_> = store.articles().iter().map(|x| x.id).collect();
    assert_eq!(ids, vec![b, a]);
    assert!(store.articles()[1].read);
    assert_eq!(store.articles()[0].notes, "note b");
}

#[test]
fn every_mutation_rewrites_the_slot() {
    let conn = open_db_in_memory().unwrap();
    let mut store = ArticleStore::open(SqliteSnapshotRepository::new(&conn)).unwrap();

    let id = store.add("A", "", "").unwrap().unwrap();
    assert_eq!(slot_article_count(&conn), 1);

    store.delete(id).unwrap();
    assert_eq!(slot_article_count(&conn), 0);
}

#[test]
fn repositories_with_distinct_slot_keys_do_not_interfere() {
    let conn = open_db_in_memory().unwrap();

    let main = SqliteSnapshotRepository::new(&conn);
    let other = SqliteSnapshotRepository::with_slot_key(&conn, "archiveList");

    main.save(&[Article::new("Main", "", "")]).unwrap();
    other.save(&[]).unwrap();

    assert_eq!(main.load().unwrap().len(), 1);
    assert!(other.load().unwrap().is_empty());
}

fn slot_article_count(conn: &rusqlite::Connection) -> usize {
    let raw: String = conn
        .query_row(
            "SELECT value FROM slots WHERE key = ?1;",
            [READING_LIST_SLOT],
            |row| row.get(0),
        )
        .unwrap();
    serde_json::from_str::<Vec<Article>>(&raw).unwrap().len()
}
