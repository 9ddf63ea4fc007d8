//! Domain model for reading-list records.
//!
//! # Responsibility
//! - Define the canonical article record owned by the store.
//! - Keep display/derivation helpers close to the data they read.
//!
//! # Invariants
//! - Every article is identified by a stable `ArticleId`.
//! - `added_at` is immutable after creation.

pub mod article;
