//! Admin dashboard — tabbed collection tables plus the field editor.

use folio_core::{course::RegistrationStatus, message::MessageStatus};
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{app::App, dashboard::DashTab};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0)])
    .split(area);

  draw_tabs(f, rows[0], app);
  draw_rows(f, rows[1], app);

  if app.editor.is_some() {
    draw_editor(f, area, app);
  }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
  let mut spans: Vec<Span> = Vec::new();
  for tab in DashTab::ALL {
    let style = if tab == app.dash_tab {
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    spans.push(Span::styled(format!(" {} ", tab.title()), style));
  }
  f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_rows(f: &mut Frame, area: Rect, app: &App) {
  let Some(data) = app.store.data() else {
    return;
  };

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows: Vec<Line> = match app.dash_tab {
    DashTab::Projects => data
      .projects
      .iter()
      .map(|p| {
        Line::from(format!(
          "{}  {}{}",
          p.id,
          p.title,
          if p.is_featured { "  ★" } else { "" }
        ))
      })
      .collect(),
    DashTab::Experiences => data
      .experiences
      .iter()
      .map(|e| Line::from(format!("{}  {} @ {}", e.id, e.role, e.company)))
      .collect(),
    DashTab::Courses => data
      .courses
      .iter()
      .map(|c| {
        let price = if c.is_free() {
          "FREE".to_owned()
        } else {
          format!("{} {}", c.currency, c.price)
        };
        Line::from(format!("{}  {}  {price}", c.id, c.title))
      })
      .collect(),
    DashTab::Mentorship => data
      .mentorship
      .iter()
      .map(|s| Line::from(format!("{}  {}  ${}", s.id, s.title, s.price)))
      .collect(),
    DashTab::Slots => data
      .slots
      .iter()
      .map(|s| {
        Line::from(format!(
          "{}  {}  {}  {:?}",
          s.id, s.session_id, s.date_time, s.status
        ))
      })
      .collect(),
    DashTab::Bookings => data
      .bookings
      .iter()
      .map(|b| {
        Line::from(format!(
          "{}  {}  {} <{}>  {:?}",
          b.id, b.session_id, b.user_name, b.user_email, b.payment_status
        ))
      })
      .collect(),
    DashTab::Registrations => data
      .registrations
      .iter()
      .map(|r| {
        let status = match r.status {
          RegistrationStatus::Pending => "pending",
          RegistrationStatus::Confirmed => "confirmed",
        };
        Line::from(format!(
          "{}  {}  {} <{}>  {status}",
          r.id, r.course_title, r.user_name, r.user_email
        ))
      })
      .collect(),
    DashTab::Messages => data
      .messages
      .iter()
      .map(|m| {
        let badge = match m.status {
          MessageStatus::New => Span::styled(
            "● ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
          ),
          MessageStatus::Read => Span::raw("  "),
          MessageStatus::Archived => Span::styled("▾ ", Style::default().fg(Color::DarkGray)),
        };
        Line::from(vec![
          badge,
          Span::raw(format!("{}  {} <{}>  ", m.date, m.name, m.email)),
          Span::styled(m.message.clone(), Style::default().fg(Color::DarkGray)),
        ])
      })
      .collect(),
    DashTab::About => vec![
      Line::from(format!("title       {}", data.about.title)),
      Line::from(format!("summary     {}", data.about.summary)),
      Line::from(format!("philosophy  {}", data.about.philosophy)),
    ],
  };

  if rows.is_empty() {
    f.render_widget(
      Paragraph::new("Nothing here yet.").style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = rows.into_iter().map(ListItem::new).collect();
  let mut state = ListState::default();
  state.select(Some(app.dash_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    inner,
    &mut state,
  );
}

fn draw_editor(f: &mut Frame, area: Rect, app: &App) {
  let Some(editor) = &app.editor else {
    return;
  };

  let popup = popup_area(area, 70, 70);
  f.render_widget(Clear, popup);
  let block = Block::default()
    .title(format!(" Edit {} ", editor.tab.title()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let mut lines: Vec<Line> = Vec::new();
  for (i, field) in editor.fields.iter().enumerate() {
    let focused = i == editor.active;
    let cursor = if focused { "_" } else { "" };
    let style = if focused {
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };
    lines.push(Line::from(Span::styled(
      format!("{:<26} {}{cursor}", field.label, field.value),
      style,
    )));
  }
  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Tab next field  Enter save  Esc cancel",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), inner);
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
