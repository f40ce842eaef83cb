//! The `PortfolioData` aggregate and the `AsyncState` wrapper.
//!
//! The aggregate is the single client-side snapshot of all site content.
//! It is fetched wholesale, replaced wholesale after every mutation, and
//! never patched in place.

use serde::{Deserialize, Serialize};

use crate::{
  about::About,
  course::{Course, Registration},
  experience::Experience,
  mentorship::{Booking, MentorshipSession, MentorshipSlot},
  message::ContactMessage,
  project::Project,
};

// ─── Aggregate ───────────────────────────────────────────────────────────────

/// Everything the site renders, in one snapshot.
///
/// Content collections keep insertion order; bookings, registrations and
/// messages are ordered newest-first by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
  #[serde(default)]
  pub about:         About,
  #[serde(default)]
  pub projects:      Vec<Project>,
  #[serde(default)]
  pub experiences:   Vec<Experience>,
  #[serde(default)]
  pub courses:       Vec<Course>,
  #[serde(default)]
  pub mentorship:    Vec<MentorshipSession>,
  #[serde(default)]
  pub slots:         Vec<MentorshipSlot>,
  #[serde(default)]
  pub bookings:      Vec<Booking>,
  #[serde(default)]
  pub registrations: Vec<Registration>,
  #[serde(default)]
  pub messages:      Vec<ContactMessage>,
}

impl PortfolioData {
  /// True when there is nothing to present: no projects, no courses and no
  /// mentorship offerings. The router renders a single "not ready" screen
  /// in this state regardless of the requested view.
  pub fn is_bootstrap_empty(&self) -> bool {
    self.projects.is_empty() && self.courses.is_empty() && self.mentorship.is_empty()
  }
}

// ─── Async state ─────────────────────────────────────────────────────────────

/// Lifecycle wrapper for a fetched aggregate.
///
/// Invariant: `loading` implies no data and no error. Terminal states are
/// `(Some(data), false, None)` on success and `(None, false, Some(msg))`
/// on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncState<T> {
  data:    Option<T>,
  loading: bool,
  error:   Option<String>,
}

impl<T> Default for AsyncState<T> {
  fn default() -> Self {
    Self { data: None, loading: false, error: None }
  }
}

impl<T> AsyncState<T> {
  /// Fresh state with a load in flight.
  pub fn loading() -> Self {
    Self { data: None, loading: true, error: None }
  }

  /// Enter the loading state, discarding any previous error.
  ///
  /// An already-loaded snapshot is kept visible while the refresh runs;
  /// the `loading` flag only gates the initial full-screen loader.
  pub fn begin(&mut self) {
    self.error = None;
    if self.data.is_none() {
      self.loading = true;
    }
  }

  /// Terminal success: replace the value wholesale.
  pub fn succeed(&mut self, value: T) {
    self.data = Some(value);
    self.loading = false;
    self.error = None;
  }

  /// Terminal failure.
  pub fn fail(&mut self, message: impl Into<String>) {
    self.data = None;
    self.loading = false;
    self.error = Some(message.into());
  }

  pub fn data(&self) -> Option<&T> {
    self.data.as_ref()
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn loading_state_holds_nothing_else() {
    let state: AsyncState<PortfolioData> = AsyncState::loading();
    assert!(state.is_loading());
    assert!(state.data().is_none());
    assert!(state.error().is_none());
  }

  #[test]
  fn succeed_is_terminal() {
    let mut state = AsyncState::loading();
    state.succeed(PortfolioData::default());
    assert!(!state.is_loading());
    assert!(state.data().is_some());
    assert!(state.error().is_none());
  }

  #[test]
  fn fail_is_terminal() {
    let mut state: AsyncState<PortfolioData> = AsyncState::loading();
    state.fail("initialization failure");
    assert!(!state.is_loading());
    assert!(state.data().is_none());
    assert_eq!(state.error(), Some("initialization failure"));
  }

  #[test]
  fn begin_keeps_existing_snapshot_visible() {
    let mut state = AsyncState::loading();
    state.succeed(PortfolioData::default());
    state.begin();
    assert!(!state.is_loading());
    assert!(state.data().is_some());
  }

  #[test]
  fn bootstrap_empty_requires_all_three_collections_empty() {
    let mut data = PortfolioData::default();
    assert!(data.is_bootstrap_empty());

    data.courses.push(crate::course::Course {
      id: "c1".into(),
      title: "One course".into(),
      ..Default::default()
    });
    assert!(!data.is_bootstrap_empty());
  }
}
