//! Core domain logic for the readlist reading-list manager.
//! This crate is the single source of truth for business invariants.

pub mod connectivity;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use connectivity::{ConnectivityMonitor, ConnectivityState};
pub use logging::{default_log_level, init_logging};
pub use model::article::{Article, ArticleId};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, READING_LIST_SLOT,
};
pub use store::article_store::{ArticlePatch, ArticleStore, Filter, ParseFilterError, Stats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
