//! Home screen — stacked sections with a scroll cursor.

use folio_core::fallback::{OWNER_EMAIL, OWNER_NAME};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::{
  app::{App, HOME_SECTIONS},
  forms::ContactStatus,
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(data) = app.store.data() else {
    return;
  };

  let mut lines: Vec<Line> = Vec::new();

  for (i, section) in HOME_SECTIONS.iter().enumerate() {
    let active = i == app.home_section;
    let marker = if active { "▸ " } else { "  " };
    let title_style = if active {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::DarkGray)
    };

    match *section {
      "hero" => {
        lines.push(Line::from(Span::styled(
          format!("{marker}{OWNER_NAME}"),
          title_style,
        )));
        lines.push(Line::from(format!("    {}", data.about.title)));
        lines.push(Line::from(Span::styled(
          format!("    {OWNER_EMAIL}"),
          Style::default().fg(Color::DarkGray),
        )));
      }
      "projects" => {
        lines.push(Line::from(Span::styled(
          format!("{marker}Selected Work"),
          title_style,
        )));
        let featured: Vec<&str> = data
          .projects
          .iter()
          .filter(|p| p.is_featured)
          .map(|p| p.title.as_str())
          .collect();
        if featured.is_empty() {
          lines.push(Line::from(Span::styled(
            "    No case studies published yet.",
            Style::default().fg(Color::DarkGray),
          )));
        }
        for title in featured {
          lines.push(Line::from(format!("    • {title}")));
        }
      }
      "academy" => {
        lines.push(Line::from(Span::styled(
          format!("{marker}Academy"),
          title_style,
        )));
        for course in &data.courses {
          let price = if course.is_free() {
            "FREE".to_owned()
          } else {
            format!("{} {}", course.currency, course.price)
          };
          lines.push(Line::from(format!("    • {}  ({price})", course.title)));
        }
      }
      "mentorship" => {
        lines.push(Line::from(Span::styled(
          format!("{marker}Mentorship"),
          title_style,
        )));
        for session in &data.mentorship {
          lines.push(Line::from(format!(
            "    • {}  ({})",
            session.title, session.duration
          )));
        }
      }
      "contact" => {
        lines.push(Line::from(Span::styled(
          format!("{marker}Get In Touch"),
          title_style,
        )));
        draw_contact_lines(&mut lines, app);
      }
      _ => {}
    }
    lines.push(Line::from(""));
  }

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(lines), inner);
}

fn draw_contact_lines(lines: &mut Vec<Line>, app: &App) {
  if app.contact.status() == ContactStatus::Success {
    lines.push(Line::from(Span::styled(
      "    Message received. Amgad will get back to you shortly.",
      Style::default().fg(Color::Green),
    )));
    return;
  }

  let fields = [
    ("Name", app.contact.name.as_str(), &app.contact.errors.name),
    ("Email", app.contact.email.as_str(), &app.contact.errors.email),
    (
      "Message",
      app.contact.message.as_str(),
      &app.contact.errors.message,
    ),
  ];
  for (i, (label, value, error)) in fields.iter().enumerate() {
    let focused = app.contact_active && app.contact_field == i;
    let cursor = if focused { "_" } else { "" };
    let style = if focused {
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
      Style::default()
    };
    lines.push(Line::from(Span::styled(
      format!("    {label:<8} {value}{cursor}"),
      style,
    )));
    if let Some(error) = error {
      lines.push(Line::from(Span::styled(
        format!("             {error}"),
        Style::default().fg(Color::Red),
      )));
    }
  }
}
