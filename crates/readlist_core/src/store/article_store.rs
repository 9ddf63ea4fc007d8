//! Article store: collection ownership, mutations, derived views.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for boundary callers.
//! - Rewrite the persistent slot after every successful in-memory mutation.
//!
//! # Invariants
//! - Ids are unique across the collection.
//! - Insertion order is newest-first; update/toggle never reorder and
//!   delete removes exactly one element.
//! - Operations on unknown ids are silent no-ops that skip the slot write.

use crate::model::article::{Article, ArticleId};
use crate::repo::snapshot_repo::{RepoResult, SnapshotRepository};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// View selector over the collection; never mutates underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Unread,
    Read,
}

/// Error returned when parsing a filter name fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFilterError(String);

impl Display for ParseFilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown filter `{}`; expected all|unread|read",
            self.0
        )
    }
}

impl Error for ParseFilterError {}

impl FromStr for Filter {
    type Err = ParseFilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "unread" => Ok(Self::Unread),
            "read" => Ok(Self::Read),
            other => Err(ParseFilterError(other.to_string())),
        }
    }
}

/// Summary counts derived from the current collection.
///
/// `unread + read == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub unread: usize,
    pub read: usize,
}

/// Partial field patch for `ArticleStore::update`.
///
/// `None` fields are left untouched. A `title` that trims to empty is
/// ignored so a record can never lose its title; `url` and `notes` accept
/// empty strings (clearing them is legitimate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

/// Owns the in-memory article collection and mirrors it to the slot.
///
/// Constructed once at startup via [`ArticleStore::open`]; the collection in
/// memory is the source of truth and every mutation rewrites the slot in
/// full before returning.
pub struct ArticleStore<R: SnapshotRepository> {
    articles: Vec<Article>,
    repo: R,
}

impl<R: SnapshotRepository> ArticleStore<R> {
    /// Opens the store, performing the one-time snapshot load.
    ///
    /// An absent or corrupt snapshot yields an empty collection; only a
    /// transport failure (slot unreadable) is an error.
    pub fn open(repo: R) -> RepoResult<Self> {
        let articles = repo.load()?;
        info!(
            "event=store_open module=store status=ok count={}",
            articles.len()
        );
        Ok(Self { articles, repo })
    }

    /// Adds a new article at the front of the collection.
    ///
    /// Returns `Ok(None)` without touching the collection when the trimmed
    /// title is empty. Otherwise the new record gets a fresh id,
    /// `added_at = now` and `read = false`, and its id is returned.
    pub fn add(&mut self, title: &str, url: &str, notes: &str) -> RepoResult<Option<ArticleId>> {
        if title.trim().is_empty() {
            debug!("event=article_add module=store status=rejected reason=empty_title");
            return Ok(None);
        }

        let article = Article::new(title, url, notes);
        let id = article.id;
        self.articles.insert(0, article);
        self.persist("article_add")?;

        Ok(Some(id))
    }

    /// Flips the read flag of the article with the given id.
    ///
    /// Returns `Ok(false)` when no such article exists.
    pub fn toggle_read(&mut self, id: ArticleId) -> RepoResult<bool> {
        let Some(article) = self.articles.iter_mut().find(|article| article.id == id) else {
            return Ok(false);
        };

        article.read = !article.read;
        self.persist("article_toggle")?;
        Ok(true)
    }

    /// Applies a partial field patch to the article with the given id.
    ///
    /// Returns `Ok(false)` when no such article exists. Patch fields are
    /// trimmed; an empty patched title is ignored (see [`ArticlePatch`]).
    pub fn update(&mut self, id: ArticleId, patch: &ArticlePatch) -> RepoResult<bool> {
        let Some(article) = self.articles.iter_mut().find(|article| article.id == id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title.as_deref() {
            let trimmed = title.trim();
            if !trimmed.is_empty() {
                article.title = trimmed.to_string();
            }
        }
        if let Some(url) = patch.url.as_deref() {
            article.url = url.trim().to_string();
        }
        if let Some(notes) = patch.notes.as_deref() {
            article.notes = notes.trim().to_string();
        }

        self.persist("article_update")?;
        Ok(true)
    }

    /// Removes the article with the given id.
    ///
    /// Returns `Ok(false)` when no such article exists.
    pub fn delete(&mut self, id: ArticleId) -> RepoResult<bool> {
        let before = self.articles.len();
        self.articles.retain(|article| article.id != id);
        if self.articles.len() == before {
            return Ok(false);
        }

        self.persist("article_delete")?;
        Ok(true)
    }

    /// Pure projection of the collection under a filter, order preserved.
    pub fn filtered(&self, filter: Filter) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| match filter {
                Filter::All => true,
                Filter::Unread => !article.read,
                Filter::Read => article.read,
            })
            .collect()
    }

    /// Summary counts over the current collection.
    pub fn stats(&self) -> Stats {
        let total = self.articles.len();
        let read = self.articles.iter().filter(|article| article.read).count();
        Stats {
            total,
            unread: total - read,
            read,
        }
    }

    /// Read-only view of the full ordered collection for rendering.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn persist(&self, op: &str) -> RepoResult<()> {
        if let Err(err) = self.repo.save(&self.articles) {
            error!(
                "event={op} module=store status=error count={} error={err}",
                self.articles.len()
            );
            return Err(err);
        }

        debug!(
            "event={op} module=store status=ok count={}",
            self.articles.len()
        );
        Ok(())
    }
}
