//! Store orchestration over the in-memory collection.
//!
//! # Responsibility
//! - Own the ordered article collection and keep it mirrored to the
//!   persistent slot on every mutation.
//! - Derive filtered views and summary counts without mutating state.

pub mod article_store;
