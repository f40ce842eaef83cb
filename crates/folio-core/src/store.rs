//! The `PortfolioStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `folio-store-sqlite`).
//! Higher layers (`folio-api`) depend on this abstraction, not on any
//! concrete backend. The contract is deliberately thin — the backend is a
//! document store with upsert-by-id semantics and no further guarantees.

use std::future::Future;

use crate::{
  entity::{Collection, Entity},
  portfolio::PortfolioData,
};

/// Abstraction over a portfolio document-store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PortfolioStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Assemble the full aggregate snapshot: the about singleton plus every
  /// collection. Content collections keep insertion order; bookings,
  /// registrations and messages come back newest-first.
  fn portfolio(
    &self,
  ) -> impl Future<Output = Result<PortfolioData, Self::Error>> + Send + '_;

  /// Insert or replace one document, keyed by `(collection, id)`.
  /// Last write to the same id wins; there is no conflict resolution.
  fn upsert(
    &self,
    entity: Entity,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Delete one document. Returns `false` if it did not exist.
  fn delete<'a>(
    &'a self,
    collection: Collection,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Flip a contact message's status to `read`. Returns `false` if the
  /// message does not exist.
  fn mark_message_read<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}
