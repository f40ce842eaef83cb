//! Courses and course registrations.

use serde::{Deserialize, Serialize};

/// How a course is delivered: a link out to an external platform, or a
/// live session with a date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
  #[default]
  External,
  Session,
}

/// A single module of a course curriculum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumItem {
  pub title:       String,
  pub description: String,
}

/// A course offered through the academy section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  pub id:               String,
  pub title:            String,
  pub description:      String,
  #[serde(default)]
  pub full_description: String,
  #[serde(rename = "type", default)]
  pub kind:             CourseKind,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url:              Option<String>,
  /// 0 means free.
  #[serde(default)]
  pub price:            f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price_egp:        Option<f64>,
  #[serde(default)]
  pub currency:         String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date:             Option<String>,
  #[serde(default)]
  pub duration:         String,
  #[serde(default)]
  pub image:            String,
  #[serde(default)]
  pub skills:           Vec<String>,
  #[serde(default)]
  pub instructor:       String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub curriculum:       Vec<CurriculumItem>,
}

impl Course {
  /// Free courses skip the payment-proof step entirely.
  pub fn is_free(&self) -> bool {
    self.price == 0.0
  }
}

/// Status of a course registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
  Pending,
  #[default]
  Confirmed,
}

/// A learner's registration for a course. Created client-side, confirmed
/// manually by the admin when a payment receipt is involved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
  pub id:                String,
  pub course_id:         String,
  pub course_title:      String,
  pub user_name:         String,
  pub user_email:        String,
  #[serde(default)]
  pub user_phone:        String,
  pub date:              String,
  #[serde(default)]
  pub status:            RegistrationStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub selected_currency: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub paid_amount:       Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_receipt:   Option<String>,
}
