//! Mentorship offerings, bookable slots, and bookings.

use serde::{Deserialize, Serialize};

/// A mentorship offering (e.g. "High-Impact Portfolio Audit, 60 mins").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipSession {
  pub id:          String,
  pub title:       String,
  pub duration:    String,
  pub description: String,
  #[serde(default)]
  pub topics:      Vec<String>,
  #[serde(default)]
  pub price:       f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price_egp:   Option<f64>,
}

/// Lifecycle of a bookable time slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
  #[default]
  Available,
  Locked,
  Booked,
}

/// A concrete bookable time window for one mentorship offering.
/// `session_id` is the only cross-entity reference in the model besides
/// `Booking::{slot_id, session_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipSlot {
  pub id:         String,
  pub session_id: String,
  /// ISO 8601 start of the slot.
  pub date_time:  String,
  #[serde(default)]
  pub end_time:   String,
  #[serde(default)]
  pub status:     SlotStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price:      Option<f64>,
}

/// Currency the user chose at checkout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
  #[default]
  #[serde(rename = "USD")]
  Usd,
  #[serde(rename = "EGP")]
  Egp,
}

/// Whether a booking's manual payment verification has completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
  #[default]
  Paid,
  Pending,
}

/// A confirmed mentorship booking. The payment receipt is a user-uploaded
/// image, verified by a human on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
  pub id:              String,
  pub slot_id:         String,
  pub session_id:      String,
  pub user_name:       String,
  pub user_email:      String,
  #[serde(default)]
  pub user_phone:      String,
  #[serde(default)]
  pub amount:          f64,
  #[serde(default)]
  pub currency:        Currency,
  #[serde(default)]
  pub payment_ref:     String,
  #[serde(default)]
  pub payment_status:  PaymentStatus,
  /// ISO 8601 creation time, client-assigned.
  pub timestamp:       String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub payment_receipt: Option<String>,
}
