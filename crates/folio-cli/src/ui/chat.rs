//! The assistant chat overlay.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{app::App, assist::ChatRole};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let popup = popup_area(area, 70, 70);
  f.render_widget(Clear, popup);

  let block = Block::default()
    .title(" Ask about Amgad's work ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(0), Constraint::Length(1)])
    .split(inner);

  let mut lines: Vec<Line> = Vec::new();
  if app.chat.history.is_empty() {
    lines.push(Line::from(Span::styled(
      "Ask anything about projects, courses or mentorship.",
      Style::default().fg(Color::DarkGray),
    )));
  }
  for entry in &app.chat.history {
    let (prefix, style) = match entry.role {
      ChatRole::Visitor => (
        "you  ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      ChatRole::Assistant => ("amgad", Style::default().fg(Color::Green)),
    };
    lines.push(Line::from(vec![
      Span::styled(format!("{prefix}  "), style),
      Span::raw(entry.text.clone()),
    ]));
    lines.push(Line::from(""));
  }
  if app.chat.busy {
    lines.push(Line::from(Span::styled(
      "thinking…",
      Style::default().fg(Color::DarkGray),
    )));
  }

  // Keep the tail of the conversation in view.
  let visible = rows[0].height as usize;
  let scroll = lines.len().saturating_sub(visible) as u16;
  f.render_widget(
    Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
    rows[0],
  );

  f.render_widget(
    Paragraph::new(format!("> {}_", app.chat.input))
      .style(Style::default().fg(Color::White)),
    rows[1],
  );
}

fn popup_area(area: Rect, pct_x: u16, pct_y: u16) -> Rect {
  let vertical = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage((100 - pct_y) / 2),
      Constraint::Percentage(pct_y),
      Constraint::Percentage((100 - pct_y) / 2),
    ])
    .split(area);
  let horizontal = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Percentage((100 - pct_x) / 2),
      Constraint::Percentage(pct_x),
      Constraint::Percentage((100 - pct_x) / 2),
    ])
    .split(vertical[1]);
  horizontal[1]
}
