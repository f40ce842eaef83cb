//! SQLite backend for the Folio portfolio store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! pool without blocking the async runtime. Documents are stored as JSON
//! bodies keyed by `(collection, id)` — the thinnest idiomatic stand-in for
//! the document database the hosted site uses.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
