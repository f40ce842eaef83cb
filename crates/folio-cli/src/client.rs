//! The remote data Gateway — all HTTP traffic to the portfolio backend.
//!
//! Reads never fail: any transport or decode error on the aggregate fetch
//! is logged and replaced with the bundled fallback dataset, so the UI
//! always has renderable content even fully offline.
//!
//! Writes are fire-and-forget: failures are logged and swallowed, and the
//! "data changed" broadcast fires after every attempt regardless — the
//! data store reloads the whole snapshot either way. This mirrors the
//! hosted site's behavior and is a documented data-loss risk under network
//! failure.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use folio_core::{
  entity::{Collection, Entity},
  fallback::fallback_data,
  mentorship::{MentorshipSlot, SlotStatus},
  portfolio::PortfolioData,
};
use reqwest::Client;
use tokio::sync::mpsc;
use tracing::warn;

/// Timeout for the connectivity probe; kept short so the online/offline
/// indicator stays responsive.
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Create the "data changed" channel. The Gateway owns the sender; the
/// client-side data store owns the single receiver for the lifetime of the
/// application root.
pub fn change_channel() -> (mpsc::UnboundedSender<()>, mpsc::UnboundedReceiver<()>) {
  mpsc::unbounded_channel()
}

/// Async HTTP client for the portfolio JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct Gateway {
  client:     Client,
  base_url:   String,
  changed_tx: mpsc::UnboundedSender<()>,
}

impl Gateway {
  pub fn new(base_url: String, changed_tx: mpsc::UnboundedSender<()>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url, changed_tx })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  /// Fire the process-wide "data changed" signal. This is the only cache
  /// invalidation mechanism; there is no per-entity diffing.
  fn broadcast(&self) {
    let _ = self.changed_tx.send(());
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  /// `GET /api/portfolio` — the whole aggregate.
  ///
  /// Never fails: on any error the bundled fallback dataset is returned and
  /// the failure is only logged.
  pub async fn fetch(&self) -> PortfolioData {
    let result = async {
      let resp = self
        .client
        .get(self.url("/portfolio"))
        .send()
        .await
        .context("GET /portfolio failed")?;
      if !resp.status().is_success() {
        anyhow::bail!("GET /portfolio → {}", resp.status());
      }
      resp
        .json::<PortfolioData>()
        .await
        .context("deserialising portfolio")
    }
    .await;

    match result {
      Ok(data) => data,
      Err(e) => {
        warn!("backend unreachable, serving bundled fallback: {e:#}");
        fallback_data()
      }
    }
  }

  /// `HEAD /api/portfolio` with a short timeout. Best-effort; never errors.
  pub async fn check_connection(&self) -> bool {
    self
      .client
      .head(self.url("/portfolio"))
      .timeout(PROBE_TIMEOUT)
      .send()
      .await
      .map(|r| r.status().is_success())
      .unwrap_or(false)
  }

  /// Available future slots for one mentorship offering.
  ///
  /// Derived from the aggregate, like the hosted client does; empty on any
  /// failure.
  pub async fn available_slots(&self, session_id: &str, now: DateTime<Utc>) -> Vec<MentorshipSlot> {
    let data = self.fetch().await;
    upcoming_slots(data.slots, session_id, now)
  }

  // ── Writes (fire-and-forget) ──────────────────────────────────────────────

  /// `POST /api/{collection}` — upsert one document by its body id.
  pub async fn upsert(&self, entity: &Entity) {
    let path = entity.endpoint();
    let body = match entity.to_json() {
      Ok(v) => v,
      Err(e) => {
        warn!("failed to serialise {path}: {e}");
        self.broadcast();
        return;
      }
    };

    let result = self.client.post(self.url(&path)).json(&body).send().await;
    match result {
      Ok(resp) if !resp.status().is_success() => {
        warn!("POST {path} → {}", resp.status());
      }
      Err(e) => warn!("POST {path} failed: {e}"),
      Ok(_) => {}
    }
    self.broadcast();
  }

  /// `DELETE /api/{collection}/{id}`.
  pub async fn remove(&self, collection: Collection, id: &str) {
    let path = format!("/{collection}/{id}");
    if let Err(e) = self.client.delete(self.url(&path)).send().await {
      warn!("DELETE {path} failed: {e}");
    }
    self.broadcast();
  }

  /// `PATCH /api/messages/{id}/read`.
  pub async fn mark_message_read(&self, id: &str) {
    let path = format!("/messages/{id}/read");
    if let Err(e) = self.client.patch(self.url(&path)).send().await {
      warn!("PATCH {path} failed: {e}");
    }
    self.broadcast();
  }
}

/// Future `available` slots for one offering. Start times are compared as
/// parsed RFC 3339 instants, never as strings — offsets would misorder a
/// lexicographic comparison. Unparsable starts are excluded rather than
/// offered.
fn upcoming_slots(
  slots: Vec<MentorshipSlot>,
  session_id: &str,
  now: DateTime<Utc>,
) -> Vec<MentorshipSlot> {
  slots
    .into_iter()
    .filter(|s| {
      s.session_id == session_id
        && s.status == SlotStatus::Available
        && DateTime::parse_from_rfc3339(&s.date_time).is_ok_and(|start| start > now)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_core::message::ContactMessage;

  // Port 9 (discard) refuses connections immediately on loopback, which
  // makes these tests deterministic without a running backend.
  fn offline_gateway() -> (Gateway, mpsc::UnboundedReceiver<()>) {
    let (tx, rx) = change_channel();
    let gw = Gateway::new("http://127.0.0.1:9".into(), tx).unwrap();
    (gw, rx)
  }

  #[tokio::test]
  async fn fetch_resolves_with_fallback_when_unreachable() {
    let (gw, _rx) = offline_gateway();
    let data = gw.fetch().await;
    assert!(!data.is_bootstrap_empty());
    assert_eq!(data, fallback_data());
  }

  #[tokio::test]
  async fn fetch_is_idempotent_between_mutations() {
    let (gw, _rx) = offline_gateway();
    let first = gw.fetch().await;
    let second = gw.fetch().await;
    assert_eq!(first, second);
  }

  #[tokio::test]
  async fn probe_reports_offline_without_erroring() {
    let (gw, _rx) = offline_gateway();
    assert!(!gw.check_connection().await);
  }

  #[tokio::test]
  async fn failed_write_still_broadcasts() {
    let (gw, mut rx) = offline_gateway();
    gw.upsert(&Entity::Message(ContactMessage::default())).await;
    assert!(rx.try_recv().is_ok());
  }

  #[tokio::test]
  async fn failed_delete_still_broadcasts() {
    let (gw, mut rx) = offline_gateway();
    gw.remove(Collection::Projects, "proj-1").await;
    assert!(rx.try_recv().is_ok());
  }

  #[tokio::test]
  async fn available_slots_empty_when_offline() {
    let (gw, _rx) = offline_gateway();
    let slots = gw.available_slots("portfolio-audit", Utc::now()).await;
    assert!(slots.is_empty());
  }

  fn slot(id: &str, date_time: &str) -> MentorshipSlot {
    MentorshipSlot {
      id: id.into(),
      session_id: "portfolio-audit".into(),
      date_time: date_time.into(),
      ..Default::default()
    }
  }

  #[test]
  fn upcoming_slots_compare_instants_not_strings() {
    let now = DateTime::parse_from_rfc3339("2026-01-15T22:00:00Z")
      .unwrap()
      .with_timezone(&Utc);

    let slots = vec![
      // 20:00 UTC, already past, though the raw string sorts above `now`.
      slot("past-offset", "2026-01-15T23:00:00+03:00"),
      // 23:00 UTC on the 15th, expressed with a +03:00 offset.
      slot("future-offset", "2026-01-16T02:00:00+03:00"),
      slot("future-utc", "2026-01-15T22:30:00Z"),
      slot("unparsable", "next tuesday"),
    ];

    let ids: Vec<String> = upcoming_slots(slots, "portfolio-audit", now)
      .into_iter()
      .map(|s| s.id)
      .collect();
    assert_eq!(ids, ["future-offset", "future-utc"]);
  }

  #[test]
  fn upcoming_slots_exclude_taken_and_foreign_slots() {
    let now = DateTime::parse_from_rfc3339("2026-01-15T22:00:00Z")
      .unwrap()
      .with_timezone(&Utc);

    let mut booked = slot("booked", "2026-01-16T10:00:00Z");
    booked.status = SlotStatus::Booked;
    let mut other = slot("other-session", "2026-01-16T10:00:00Z");
    other.session_id = "cv-review".into();

    let upcoming = upcoming_slots(vec![booked, other], "portfolio-audit", now);
    assert!(upcoming.is_empty());
  }
}
