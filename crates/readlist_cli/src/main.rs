//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `readlist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use readlist_core::db::open_db_in_memory;
use readlist_core::{ArticleStore, SqliteSnapshotRepository};
use std::error::Error;

fn main() {
    println!("readlist_core version={}", readlist_core::core_version());
    match smoke() {
        Ok(summary) => println!("{summary}"),
        Err(err) => {
            eprintln!("readlist_core smoke failed: {err}");
            std::process::exit(1);
        }
    }
}

// End-to-end probe against a throwaway in-memory store.
fn smoke() -> Result<String, Box<dyn Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteSnapshotRepository::new(&conn);
    let mut store = ArticleStore::open(repo)?;

    store.add("Smoke test article", "https://example.com/post", "")?;
    let stats = store.stats();

    Ok(format!(
        "readlist_core smoke total={} unread={} read={}",
        stats.total, stats.unread, stats.read
    ))
}
