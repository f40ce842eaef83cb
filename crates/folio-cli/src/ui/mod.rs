//! TUI rendering — orchestrates all screens.

pub mod about;
pub mod booking;
pub mod chat;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod gallery;
pub mod home;
pub mod login;
pub mod mentorship;
pub mod project;

use std::time::Instant;

use chrono::Local;
use folio_core::{AsyncState, PortfolioData};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::{app::App, router::View};

// ─── Top-level gate ───────────────────────────────────────────────────────────

/// What the root renderer shows before any feature screen gets a chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
  /// First load still in flight, nothing to show yet.
  Loading,
  /// A load failed with no snapshot to fall back on; offer a manual
  /// reload.
  Offline,
  /// The backend answered with an entirely empty dataset; the site is not
  /// ready rather than broken.
  NotReady,
  /// Render the active view.
  Ready,
}

/// Decide the gate from the snapshot state alone. A reload that is in
/// flight over an existing snapshot stays `Ready` so the old content
/// remains visible.
pub fn gate_for(state: &AsyncState<PortfolioData>) -> Gate {
  if state.error().is_some() {
    return Gate::Offline;
  }
  match state.data() {
    None => Gate::Loading,
    Some(data) if data.is_bootstrap_empty() => Gate::NotReady,
    Some(_) => Gate::Ready,
  }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app, now);
  draw_status(f, rows[2], app);

  if app.chat.open {
    chat::draw(f, area, app);
  }
}

fn draw_body(f: &mut Frame, area: Rect, app: &App, now: Instant) {
  match gate_for(app.store.state()) {
    Gate::Loading => {
      draw_notice(f, area, "Loading portfolio…", Color::DarkGray);
      return;
    }
    Gate::Offline => {
      draw_notice(
        f,
        area,
        "System offline. Press r to reload.",
        Color::Red,
      );
      return;
    }
    Gate::NotReady => {
      draw_notice(
        f,
        area,
        "The portfolio is not ready yet. Check back soon.",
        Color::Yellow,
      );
      return;
    }
    Gate::Ready => {}
  }

  match app.router.current() {
    View::Home { .. } => home::draw(f, area, app),
    View::Gallery => gallery::draw(f, area, app),
    View::Courses => courses::draw(f, area, app),
    View::Project { data } => project::draw(f, area, app, data),
    View::CourseDetail { data } => course_detail::draw(f, area, app, data),
    View::About => about::draw(f, area, app),
    View::Mentorship => mentorship::draw(f, area, app),
    View::MentorshipBooking { session } => booking::draw(f, area, app, session),
    View::Login => login::draw(f, area, app, now),
    View::Dashboard => dashboard::draw(f, area, app),
  }
}

fn draw_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
  let vertical = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage(45),
      Constraint::Length(1),
      Constraint::Min(0),
    ])
    .split(area);
  let line = Line::from(Span::styled(
    text.to_string(),
    Style::default().fg(color).add_modifier(Modifier::BOLD),
  ))
  .centered();
  f.render_widget(Paragraph::new(line), vertical[1]);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();
  let online = if app.online { "● online" } else { "○ offline" };

  let left = Span::styled(
    " folio  [g] work  [c] courses  [m] mentorship  [a] about  [i] ask",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{online}  {date} "),
    Style::default().fg(if app.online {
      Color::Green
    } else {
      Color::DarkGray
    }),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let transitioning = app.router.is_transitioning();
  let (mode_label, hints): (&str, &str) = if app.chat.open {
    ("ASK", "Type a question  Enter send  Esc close")
  } else if transitioning {
    ("…", "")
  } else {
    match app.router.current() {
      View::Home { .. } if app.contact_active => {
        ("CONTACT", "Tab next field  Enter send  Esc done")
      }
      View::Home { .. } => ("HOME", "↑↓/jk sections  Enter contact  q quit"),
      View::Gallery | View::Courses => {
        ("LIST", "↑↓/jk navigate  / filter  Enter open  Esc back")
      }
      View::Project { .. } | View::About | View::CourseDetail { .. } => {
        ("READ", "↑↓/jk scroll  e enroll (courses)  Esc back")
      }
      View::Mentorship => ("LIST", "↑↓/jk navigate  Enter book  Esc back"),
      View::MentorshipBooking { .. } => {
        ("BOOK", "Enter continue  Tab field/currency  Esc cancel")
      }
      View::Login => ("LOGIN", "Type passphrase  Enter unlock  Esc back"),
      View::Dashboard => (
        "ADMIN",
        "Tab sections  jk rows  n new  e edit  d delete  m read  Esc back",
      ),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_core::fallback::fallback_data;

  #[test]
  fn gate_shows_loading_before_the_first_snapshot() {
    let mut state: AsyncState<PortfolioData> = AsyncState::default();
    assert_eq!(gate_for(&state), Gate::Loading);
    state.begin();
    assert_eq!(gate_for(&state), Gate::Loading);
  }

  #[test]
  fn gate_keeps_showing_content_during_a_reload() {
    let mut state = AsyncState::default();
    state.succeed(fallback_data());
    state.begin();
    assert_eq!(gate_for(&state), Gate::Ready);
  }

  #[test]
  fn gate_flags_an_empty_bootstrap_dataset() {
    let mut state = AsyncState::default();
    state.succeed(PortfolioData::default());
    assert_eq!(gate_for(&state), Gate::NotReady);
  }

  #[test]
  fn gate_offers_reload_on_error() {
    let mut state: AsyncState<PortfolioData> = AsyncState::default();
    state.fail("boom");
    assert_eq!(gate_for(&state), Gate::Offline);
  }
}
