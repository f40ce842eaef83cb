//! Course detail plus the enrolment overlay.

use folio_core::course::Course;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{app::App, forms::RegistrationStep};

pub fn draw(f: &mut Frame, area: Rect, app: &App, course: &Course) {
  let block = Block::default()
    .title(format!(" {} ", course.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  let price = if course.is_free() {
    "FREE".to_owned()
  } else {
    format!("{} {}", course.currency, course.price)
  };
  lines.push(Line::from(vec![
    Span::styled(
      price,
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      format!("  {}  {}", course.duration, course.instructor),
      Style::default().fg(Color::DarkGray),
    ),
  ]));
  lines.push(Line::from(""));

  let body = if course.full_description.is_empty() {
    &course.description
  } else {
    &course.full_description
  };
  for wrapped in body.lines() {
    lines.push(Line::from(wrapped.to_string()));
  }
  lines.push(Line::from(""));

  if !course.skills.is_empty() {
    lines.push(Line::from(Span::styled(
      "Specialized competencies",
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for skill in &course.skills {
      lines.push(Line::from(format!("  • {skill}")));
    }
    lines.push(Line::from(""));
  }

  if !course.curriculum.is_empty() {
    lines.push(Line::from(Span::styled(
      "Curriculum overview",
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for (i, item) in course.curriculum.iter().enumerate() {
      lines.push(Line::from(format!("  {}. {}", i + 1, item.title)));
      if !item.description.is_empty() {
        lines.push(Line::from(Span::styled(
          format!("     {}", item.description),
          Style::default().fg(Color::DarkGray),
        )));
      }
    }
    lines.push(Line::from(""));
  }

  lines.push(Line::from(Span::styled(
    "Press e to enroll.",
    Style::default().fg(Color::DarkGray),
  )));

  let para = Paragraph::new(lines).scroll((app.detail_scroll as u16, 0));
  f.render_widget(para, inner);

  if app.registration.is_some() {
    draw_registration(f, area, app);
  }
}

fn draw_registration(f: &mut Frame, area: Rect, app: &App) {
  let Some(form) = &app.registration else {
    return;
  };

  let popup = popup_area(area, 60, 60);
  f.render_widget(Clear, popup);
  let block = Block::default()
    .title(" Enroll ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(popup);
  f.render_widget(block, popup);

  let mut lines: Vec<Line> = Vec::new();
  match form.step() {
    RegistrationStep::Details => {
      let no_error: Option<String> = None;
      let fields = [
        ("Full name", form.name.as_str(), &form.errors.name),
        ("Email", form.email.as_str(), &form.errors.email),
        ("Phone (optional)", form.phone.as_str(), &no_error),
      ];
      for (i, (label, value, error)) in fields.iter().enumerate() {
        let focused = app.reg_field == i;
        let cursor = if focused { "_" } else { "" };
        let style = if focused {
          Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
          Style::default()
        };
        lines.push(Line::from(Span::styled(
          format!("{label:<18} {value}{cursor}"),
          style,
        )));
        if let Some(error) = error {
          lines.push(Line::from(Span::styled(
            format!("{:<18} {error}", ""),
            Style::default().fg(Color::Red),
          )));
        }
      }
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        "Enter continue  Esc cancel",
        Style::default().fg(Color::DarkGray),
      )));
    }
    RegistrationStep::Payment => {
      lines.push(Line::from(vec![
        Span::raw("Total due  "),
        Span::styled(
          format!("{:.2}", form.price()),
          Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
      ]));
      lines.push(Line::from(""));
      lines.push(Line::from(format!(
        "Receipt reference: {}_",
        app.receipt_entry
      )));
      if let Some(error) = &form.errors.receipt {
        lines.push(Line::from(Span::styled(
          error.clone(),
          Style::default().fg(Color::Red),
        )));
      }
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        "Enter attach & submit  Esc cancel",
        Style::default().fg(Color::DarkGray),
      )));
    }
    RegistrationStep::Submitting => {
      lines.push(Line::from("Submitting…"));
    }
    RegistrationStep::Success => {
      lines.push(Line::from(Span::styled(
        "You're in. A confirmation is on its way.",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
      )));
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        "Enter close",
        Style::default().fg(Color::DarkGray),
      )));
    }
  }

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
