//! Login screen — the client-side dashboard gate.

use std::time::Instant;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App, now: Instant) {
  let error = app.login.error_active(now);

  let vertical = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage(35),
      Constraint::Length(5),
      Constraint::Min(0),
    ])
    .split(area);
  let horizontal = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage(30),
      Constraint::Percentage(40),
      Constraint::Percentage(30),
    ])
    .split(vertical[1]);
  let card: Rect = horizontal[1];

  let border = if error { Color::Red } else { Color::DarkGray };
  let block = Block::default()
    .title(" Restricted Access ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));
  let inner = block.inner(card);
  f.render_widget(block, card);

  let masked = "•".repeat(app.login.password.chars().count());
  let mut lines = vec![Line::from(format!("Passphrase: {masked}_"))];
  if error {
    lines.push(Line::from(Span::styled(
      "Authentication Failed",
      Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
  } else {
    lines.push(Line::from(Span::styled(
      "Enter unlock  Esc back",
      Style::default().fg(Color::DarkGray),
    )));
  }
  f.render_widget(Paragraph::new(lines), inner);
}
