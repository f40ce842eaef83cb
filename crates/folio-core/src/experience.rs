//! Career timeline entries.

use serde::{Deserialize, Serialize};

/// One role on the career timeline. `description` is a list of bullet
/// lines, not a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
  pub id:          String,
  pub role:        String,
  pub company:     String,
  pub period:      String,
  #[serde(default)]
  pub description: Vec<String>,
}
