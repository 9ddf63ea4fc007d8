//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical reading-list record and its wire shape.
//! - Derive display metadata (hostname) without failing on bad input.
//!
//! # Invariants
//! - `id` is stable and never reused for another article.
//! - `added_at` never changes after creation.
//! - Serialized field names match the persisted snapshot layout
//!   (`addedAt` stays camelCase for snapshot compatibility).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for a reading-list article.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ArticleId = Uuid;

// Scheme, optional userinfo, then the host up to port/path/query/fragment.
static URL_HOST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*://(?:[^/@?#]*@)?([^/:?#]+)")
        .expect("URL host pattern is valid")
});

/// A single saved reading-list entry.
///
/// `url` and `notes` are optional in meaning; the empty string stands for
/// "not set" so the record round-trips through the snapshot layout without
/// null handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Stable global ID used for toggle/update/delete addressing.
    pub id: ArticleId,
    /// Display title; non-empty after trimming for records created via `new`.
    pub title: String,
    /// Absolute URL of the article, or empty when none was given.
    pub url: String,
    /// Free-form notes, or empty when none were given.
    pub notes: String,
    /// Creation time in unix epoch milliseconds. Immutable.
    #[serde(rename = "addedAt")]
    pub added_at: i64,
    /// Read/unread flag; starts as `false`.
    pub read: bool,
}

impl Article {
    /// Creates a new article with a generated stable ID and `added_at = now`.
    ///
    /// All text fields are trimmed. This constructor does not validate the
    /// title; callers that require a non-empty title check before creating.
    pub fn new(
        title: impl AsRef<str>,
        url: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, url, notes)
    }

    /// Creates an article with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: ArticleId,
        title: impl AsRef<str>,
        url: impl AsRef<str>,
        notes: impl AsRef<str>,
    ) -> Self {
        Self {
            id,
            title: title.as_ref().trim().to_string(),
            url: url.as_ref().trim().to_string(),
            notes: notes.as_ref().trim().to_string(),
            added_at: now_epoch_ms(),
            read: false,
        }
    }

    /// Returns whether this article carries a URL.
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// Derives the hostname of `url` for display.
    ///
    /// Returns `None` when the URL is empty or cannot be parsed; malformed
    /// values degrade to "no hostname line" instead of an error.
    pub fn display_host(&self) -> Option<&str> {
        URL_HOST
            .captures(&self.url)
            .and_then(|captures| captures.get(1))
            .map(|host| host.as_str())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
