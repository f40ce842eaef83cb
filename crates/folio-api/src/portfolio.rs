//! Handlers for the aggregate read and the health probe.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/portfolio` | Full [`PortfolioData`] aggregate; also answers `HEAD` |
//! | `GET`  | `/health` | Liveness probe, no store access |

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::Utc;
use folio_core::{portfolio::PortfolioData, store::PortfolioStore};
use serde_json::{Value, json};

use crate::error::ApiError;

/// `GET /portfolio` — assemble and return the whole snapshot.
pub async fn get_aggregate<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<PortfolioData>, ApiError>
where
  S: PortfolioStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let data = store
    .portfolio()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(data))
}

/// `GET /health` — cheap reachability check for the client's
/// online/offline indicator.
pub async fn health() -> Json<Value> {
  Json(json!({
    "status": "ok",
    "timestamp": Utc::now().to_rfc3339(),
  }))
}
