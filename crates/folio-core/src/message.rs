//! Contact-form messages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
  #[default]
  New,
  Read,
  Archived,
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
  pub id:      String,
  pub name:    String,
  pub email:   String,
  pub message: String,
  pub date:    String,
  #[serde(default)]
  pub status:  MessageStatus,
}
