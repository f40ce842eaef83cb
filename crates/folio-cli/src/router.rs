//! The view router: which screen is logically active, and how we get from
//! one to the next.
//!
//! Navigation is not instantaneous. Each `navigate` call enqueues the
//! target with a deadline one dwell ahead; the event loop calls [`Router::tick`]
//! every frame and commits transitions whose deadline has passed. The
//! dwell exists to synchronise with the exit/enter visual, so the visible
//! view lags the logical navigation call by `DWELL` — assertions about the
//! current view belong after the dwell, not after the call.

use std::{
  collections::VecDeque,
  time::{Duration, Instant},
};

use folio_core::{
  course::Course,
  mentorship::MentorshipSession,
  project::Project,
};

/// Fixed delay between requesting a navigation and committing it; matches
/// the exit-animation duration of the hosted site.
pub const DWELL: Duration = Duration::from_millis(700);

// ─── View ─────────────────────────────────────────────────────────────────────

/// Where the user currently is.
///
/// Payload-carrying variants hold a fully-populated entity — the caller
/// resolves it before constructing the `View`; a bare id is never enough.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
  Home { anchor: Option<String> },
  Project { data: Project },
  CourseDetail { data: Course },
  About,
  Mentorship,
  MentorshipBooking { session: MentorshipSession },
  Login,
  Dashboard,
  Gallery,
  Courses,
}

impl View {
  pub fn home() -> Self {
    View::Home { anchor: None }
  }

  /// Stable tag name, used for history entries.
  pub fn tag(&self) -> &'static str {
    match self {
      View::Home { .. } => "home",
      View::Project { .. } => "project",
      View::CourseDetail { .. } => "course_detail",
      View::About => "about",
      View::Mentorship => "mentorship",
      View::MentorshipBooking { .. } => "mentorship_booking",
      View::Login => "login",
      View::Dashboard => "dashboard",
      View::Gallery => "gallery",
      View::Courses => "courses",
    }
  }
}

// ─── Scroll target ────────────────────────────────────────────────────────────

/// Where the document should scroll once a transition commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget {
  Top,
  /// A named section of the home page (`projects`, `academy`, ...).
  Anchor(String),
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Single-owner register of the current view plus the in-flight
/// transitions. All navigation goes through [`Router::navigate`].
pub struct Router {
  current: View,
  pending: VecDeque<(View, Instant)>,
  /// Tags of committed views, newest last. Enough to distinguish `login`
  /// for back-navigation and deep-link restoration.
  history: Vec<&'static str>,
  scroll:  Option<ScrollTarget>,
}

impl Router {
  /// Start at `initial` with no transition in flight. `initial` is
  /// committed immediately (deep links restore without a dwell).
  pub fn new(initial: View) -> Self {
    let history = vec![initial.tag()];
    Self {
      current: initial,
      pending: VecDeque::new(),
      history,
      scroll: None,
    }
  }

  pub fn current(&self) -> &View {
    &self.current
  }

  /// True while any transition is awaiting its dwell deadline. Drives the
  /// exit/enter visual.
  pub fn is_transitioning(&self) -> bool {
    !self.pending.is_empty()
  }

  /// Request a transition to `next`, committing after [`DWELL`].
  ///
  /// Calls made while a transition is already in flight are queued, not
  /// dropped: every `navigate` commits exactly once, in call order. The
  /// last commit wins the visible view.
  pub fn navigate(&mut self, next: View, now: Instant) {
    self.pending.push_back((next, now + DWELL));
  }

  /// Commit every queued transition whose deadline has passed. Returns
  /// the number of commits applied this tick.
  pub fn tick(&mut self, now: Instant) -> usize {
    let mut committed = 0;
    while let Some((_, deadline)) = self.pending.front() {
      if *deadline > now {
        break;
      }
      let (next, _) = self.pending.pop_front().expect("checked front");
      self.commit(next);
      committed += 1;
    }
    committed
  }

  fn commit(&mut self, next: View) {
    self.scroll = Some(match &next {
      View::Home { anchor: Some(anchor) } => ScrollTarget::Anchor(anchor.clone()),
      _ => ScrollTarget::Top,
    });
    self.history.push(next.tag());
    self.current = next;
  }

  /// Take the scroll target produced by the most recent commit, if any.
  /// Consumed by the active screen on its next frame.
  pub fn take_scroll(&mut self) -> Option<ScrollTarget> {
    self.scroll.take()
  }

  /// Navigate to the restoration of the previous history entry.
  ///
  /// Payload views cannot be restored from a tag alone, so anything but
  /// `login` resolves to `home` — the same degradation a hard browser
  /// reload gives the hosted site.
  pub fn back(&mut self, now: Instant) {
    // Drop the current entry, then read the one beneath it.
    self.history.pop();
    let target = match self.history.last().copied() {
      Some("login") => View::Login,
      _ => View::home(),
    };
    self.navigate(target, now);
  }

  /// Resolve a startup deep link (the `/login` / `#login` contract): only
  /// `login` is restorable, everything else lands on `home`.
  pub fn deep_link(fragment: &str) -> View {
    match fragment.trim().trim_start_matches(['/', '#']) {
      "login" => View::Login,
      _ => View::home(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t0() -> Instant {
    Instant::now()
  }

  #[test]
  fn view_is_not_committed_before_the_dwell() {
    let mut router = Router::new(View::home());
    let now = t0();

    router.navigate(View::Gallery, now);
    assert!(router.is_transitioning());
    assert_eq!(router.current().tag(), "home");

    // Just before the deadline: still the old view.
    router.tick(now + DWELL - Duration::from_millis(1));
    assert_eq!(router.current().tag(), "home");

    // At the deadline: committed.
    router.tick(now + DWELL);
    assert_eq!(router.current().tag(), "gallery");
    assert!(!router.is_transitioning());
  }

  #[test]
  fn navigate_during_transition_commits_both_exactly_once() {
    let mut router = Router::new(View::home());
    let now = t0();

    router.navigate(View::Gallery, now);
    router.navigate(View::Courses, now + Duration::from_millis(100));

    // First deadline passes: only the first commit lands.
    let committed = router.tick(now + DWELL);
    assert_eq!(committed, 1);
    assert_eq!(router.current().tag(), "gallery");

    // Second deadline passes: the later call wins the visible view.
    let committed = router.tick(now + DWELL + Duration::from_millis(100));
    assert_eq!(committed, 1);
    assert_eq!(router.current().tag(), "courses");

    // Nothing further is pending — no duplicated commits.
    assert_eq!(router.tick(now + Duration::from_secs(10)), 0);
  }

  #[test]
  fn home_anchor_produces_a_named_scroll_target() {
    let mut router = Router::new(View::home());
    let now = t0();

    router.navigate(
      View::Home { anchor: Some("projects".into()) },
      now,
    );
    router.tick(now + DWELL);

    assert_eq!(
      router.take_scroll(),
      Some(ScrollTarget::Anchor("projects".into()))
    );
    // The target is consumed once.
    assert_eq!(router.take_scroll(), None);
  }

  #[test]
  fn non_anchor_commits_scroll_to_top() {
    let mut router = Router::new(View::home());
    let now = t0();

    router.navigate(View::About, now);
    router.tick(now + DWELL);
    assert_eq!(router.take_scroll(), Some(ScrollTarget::Top));
  }

  #[test]
  fn payload_views_carry_full_entities() {
    let course = Course {
      id: "b2b-mastery".into(),
      title: "B2B Design Mastery".into(),
      ..Default::default()
    };
    let view = View::CourseDetail { data: course.clone() };
    // The payload is the entity itself, not an id needing a lookup.
    match view {
      View::CourseDetail { data } => assert_eq!(data, course),
      _ => unreachable!(),
    }
  }

  #[test]
  fn back_restores_login_but_degrades_payload_views_to_home() {
    let mut router = Router::new(View::home());
    let mut now = t0();

    router.navigate(View::Login, now);
    now += DWELL;
    router.tick(now);
    router.navigate(View::Dashboard, now);
    now += DWELL;
    router.tick(now);

    // Back from dashboard lands on login.
    router.back(now);
    now += DWELL;
    router.tick(now);
    assert_eq!(router.current().tag(), "login");

    // Back again: home is the catch-all restoration.
    router.back(now);
    now += DWELL;
    router.tick(now);
    assert_eq!(router.current().tag(), "home");
  }

  #[test]
  fn deep_link_restores_only_login() {
    assert_eq!(Router::deep_link("/login").tag(), "login");
    assert_eq!(Router::deep_link("#login").tag(), "login");
    assert_eq!(Router::deep_link("login").tag(), "login");
    assert_eq!(Router::deep_link("/dashboard").tag(), "home");
    assert_eq!(Router::deep_link("").tag(), "home");
  }
}
