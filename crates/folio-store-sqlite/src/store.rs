//! [`SqliteStore`] — the SQLite implementation of [`PortfolioStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use folio_core::{
  entity::{Collection, Entity},
  message::MessageStatus,
  portfolio::PortfolioData,
  store::PortfolioStore,
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A portfolio document store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one raw document body, if present.
  async fn get_body(&self, collection: Collection, id: String) -> Result<Option<String>> {
    let key = collection.as_str();
    let body = self
      .conn
      .call(move |conn| {
        let body: Option<String> = conn
          .query_row(
            "SELECT body FROM documents WHERE collection = ?1 AND id = ?2",
            rusqlite::params![key, id],
            |r| r.get(0),
          )
          .optional()?;
        Ok(body)
      })
      .await?;
    Ok(body)
  }

  /// Write one raw document body, keyed by `(collection, id)`.
  ///
  /// The upsert updates in place so `rowid` (and therefore display order)
  /// is preserved across edits.
  async fn put_body(&self, collection: Collection, id: String, body: String) -> Result<()> {
    let key = collection.as_str();
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO documents (collection, id, body) VALUES (?1, ?2, ?3)
           ON CONFLICT (collection, id) DO UPDATE SET body = excluded.body",
          rusqlite::params![key, id, body],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── PortfolioStore impl ─────────────────────────────────────────────────────

impl PortfolioStore for SqliteStore {
  type Error = Error;

  async fn portfolio(&self) -> Result<PortfolioData> {
    let rows: Vec<(String, String)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare("SELECT collection, body FROM documents ORDER BY rowid ASC")?;
        let rows = stmt
          .query_map([], |r| Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?)))?
          .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rows)
      })
      .await?;

    let mut data = PortfolioData::default();
    for (collection, body) in rows {
      match collection.as_str() {
        "about" => data.about = serde_json::from_str(&body)?,
        "projects" => data.projects.push(serde_json::from_str(&body)?),
        "experiences" => data.experiences.push(serde_json::from_str(&body)?),
        "courses" => data.courses.push(serde_json::from_str(&body)?),
        "mentorship" => data.mentorship.push(serde_json::from_str(&body)?),
        "slots" => data.slots.push(serde_json::from_str(&body)?),
        "bookings" => data.bookings.push(serde_json::from_str(&body)?),
        "registrations" => data.registrations.push(serde_json::from_str(&body)?),
        "messages" => data.messages.push(serde_json::from_str(&body)?),
        // Unknown collections are ignored rather than failing the aggregate.
        _ => {}
      }
    }

    // Inbox-style collections read newest-first.
    data.bookings.reverse();
    data.registrations.reverse();
    data.messages.reverse();

    Ok(data)
  }

  async fn upsert(&self, entity: Entity) -> Result<()> {
    let body = entity.to_json()?.to_string();
    self
      .put_body(entity.collection(), entity.id().to_owned(), body)
      .await
  }

  async fn delete<'a>(&'a self, collection: Collection, id: &'a str) -> Result<bool> {
    let key = collection.as_str();
    let id = id.to_owned();
    let changed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM documents WHERE collection = ?1 AND id = ?2",
          rusqlite::params![key, id],
        )?;
        Ok(n)
      })
      .await?;
    Ok(changed > 0)
  }

  async fn mark_message_read<'a>(&'a self, id: &'a str) -> Result<bool> {
    let Some(body) = self
      .get_body(Collection::Messages, id.to_owned())
      .await?
    else {
      return Ok(false);
    };

    let mut message: folio_core::message::ContactMessage = serde_json::from_str(&body)?;
    message.status = MessageStatus::Read;

    let body = serde_json::to_string(&message)?;
    self
      .put_body(Collection::Messages, id.to_owned(), body)
      .await?;
    Ok(true)
  }
}
