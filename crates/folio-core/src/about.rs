//! The `About` singleton — bio headline, summary, and design philosophy.

use serde::{Deserialize, Serialize};

/// Singleton biography record. There is exactly one per site; upserts
/// replace it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
  pub title:      String,
  pub summary:    String,
  pub philosophy: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image:      Option<String>,
}
