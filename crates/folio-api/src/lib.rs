//! JSON REST API for the Folio portfolio platform.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::PortfolioStore`]. The surface is a thin CRUD
//! gateway over the document store: one bulk aggregate read, per-collection
//! upserts keyed by the body's `id`, and deletes by path id.
//!
//! No authentication is applied here — the admin login on the client gates
//! navigation only. That is a deliberate, documented property of the
//! platform, not an omission.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod messages;
pub mod portfolio;
pub mod resources;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, patch, post},
};
use folio_core::store::PortfolioStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. `GET /portfolio` also answers `HEAD`, which the
/// client uses as its connectivity probe.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PortfolioStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Aggregate + probe
    .route("/portfolio", get(portfolio::get_aggregate::<S>))
    .route("/health", get(portfolio::health))
    // Content upserts (by body id)
    .route("/about", post(resources::upsert_about::<S>))
    .route("/projects", post(resources::upsert_project::<S>))
    .route("/experiences", post(resources::upsert_experience::<S>))
    .route("/courses", post(resources::upsert_course::<S>))
    .route("/mentorship", post(resources::upsert_mentorship::<S>))
    .route("/slots", post(resources::upsert_slot::<S>))
    // Visitor-submitted records
    .route("/bookings", post(resources::upsert_booking::<S>))
    .route("/registrations", post(resources::upsert_registration::<S>))
    .route("/messages", post(resources::upsert_message::<S>))
    // Deletes (content collections only)
    .route("/projects/{id}", delete(resources::delete_project::<S>))
    .route("/experiences/{id}", delete(resources::delete_experience::<S>))
    .route("/courses/{id}", delete(resources::delete_course::<S>))
    .route("/mentorship/{id}", delete(resources::delete_mentorship::<S>))
    .route("/slots/{id}", delete(resources::delete_slot::<S>))
    // Message lifecycle
    .route("/messages/{id}/read", patch(messages::mark_read::<S>))
    .route("/messages/{id}", delete(messages::remove::<S>))
    .with_state(store)
}
