//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot data-access contract the store depends on.
//! - Isolate SQLite and serialization details from store orchestration.
//!
//! # Invariants
//! - `save` overwrites the slot in full; there is no partial write path.
//! - A malformed persisted snapshot loads as empty, never as an error.

pub mod snapshot_repo;
