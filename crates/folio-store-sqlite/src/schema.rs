//! SQL schema for the Folio SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// One table holds every document. `rowid` preserves insertion order; the
/// upsert keeps the original rowid so editing a project does not move it
/// within its gallery.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS documents (
    collection  TEXT NOT NULL,   -- 'about' | 'projects' | ... | 'messages'
    id          TEXT NOT NULL,   -- client-generated string id
    body        TEXT NOT NULL,   -- JSON document, camelCase keys
    PRIMARY KEY (collection, id)
);

CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents(collection);

PRAGMA user_version = 1;
";
