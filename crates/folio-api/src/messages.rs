//! Message lifecycle handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `PATCH`  | `/messages/:id/read` | 404 if the message does not exist |
//! | `DELETE` | `/messages/:id` | Always reports success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use folio_core::{entity::Collection, store::PortfolioStore};
use serde_json::{Value, json};

use crate::error::ApiError;

/// `PATCH /messages/:id/read`
pub async fn mark_read<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let found = store
    .mark_message_read(&id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !found {
    return Err(ApiError::NotFound(format!("message {id} not found")));
  }
  Ok(Json(json!({ "success": true })))
}

/// `DELETE /messages/:id`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .delete(Collection::Messages, &id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(json!({ "success": true })))
}
