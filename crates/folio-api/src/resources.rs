//! Upsert and delete handlers for the document collections.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/about` | Replace the singleton |
//! | `POST` | `/{collection}` | Upsert by the body's `id` |
//! | `DELETE` | `/{collection}/:id` | Content collections only |
//!
//! Every `POST` echoes the stored document back, matching the behavior the
//! client relied on against the hosted backend.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use folio_core::{
  about::About,
  course::{Course, Registration},
  entity::{Collection, Entity},
  experience::Experience,
  mentorship::{Booking, MentorshipSession, MentorshipSlot, SlotStatus},
  message::ContactMessage,
  project::Project,
  store::PortfolioStore,
};
use serde_json::{Value, json};

use crate::error::ApiError;

// ─── Shared plumbing ─────────────────────────────────────────────────────────

async fn store_upsert<S>(store: &Arc<S>, entity: Entity) -> Result<(), ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if entity.id().is_empty() {
    return Err(ApiError::BadRequest("document id must not be empty".into()));
  }
  store
    .upsert(entity)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))
}

async fn store_delete<S>(
  store: &Arc<S>,
  collection: Collection,
  id: &str,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete(collection, id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  // The hosted backend reports success whether or not the id existed.
  Ok(Json(json!({ "success": true })))
}

// ─── Upserts ─────────────────────────────────────────────────────────────────

/// `POST /about` — replace the biography singleton.
pub async fn upsert_about<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<About>,
) -> Result<Json<About>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::About(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /projects`
pub async fn upsert_project<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Project>,
) -> Result<Json<Project>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Project(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /experiences`
pub async fn upsert_experience<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Experience>,
) -> Result<Json<Experience>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Experience(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /courses`
pub async fn upsert_course<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Course>,
) -> Result<Json<Course>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Course(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /mentorship`
pub async fn upsert_mentorship<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<MentorshipSession>,
) -> Result<Json<MentorshipSession>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Mentorship(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /slots`
pub async fn upsert_slot<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<MentorshipSlot>,
) -> Result<Json<MentorshipSlot>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Slot(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /bookings` — store the booking and mark the referenced slot
/// booked so it is never offered twice.
pub async fn upsert_booking<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Booking>,
) -> Result<Json<Booking>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Booking(body.clone())).await?;

  let data = store
    .portfolio()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if let Some(mut slot) = data.slots.into_iter().find(|s| s.id == body.slot_id) {
    slot.status = SlotStatus::Booked;
    store_upsert(&store, Entity::Slot(slot)).await?;
  }
  Ok(Json(body))
}

/// `POST /registrations`
pub async fn upsert_registration<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Registration>,
) -> Result<Json<Registration>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Registration(body.clone())).await?;
  Ok(Json(body))
}

/// `POST /messages`
pub async fn upsert_message<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactMessage>,
) -> Result<Json<ContactMessage>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_upsert(&store, Entity::Message(body.clone())).await?;
  Ok(Json(body))
}

// ─── Deletes ─────────────────────────────────────────────────────────────────

/// `DELETE /projects/:id`
pub async fn delete_project<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_delete(&store, Collection::Projects, &id).await
}

/// `DELETE /experiences/:id`
pub async fn delete_experience<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_delete(&store, Collection::Experiences, &id).await
}

/// `DELETE /courses/:id`
pub async fn delete_course<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_delete(&store, Collection::Courses, &id).await
}

/// `DELETE /mentorship/:id`
pub async fn delete_mentorship<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_delete(&store, Collection::Mentorship, &id).await
}

/// `DELETE /slots/:id`
pub async fn delete_slot<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store_delete(&store, Collection::Slots, &id).await
}
