//! Project detail — full case study, scrollable.

use folio_core::project::Project;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App, project: &Project) {
  let block = Block::default()
    .title(format!(" {} ", project.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  let label = |s: &str| {
    Span::styled(
      format!("{s:<12}"),
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )
  };

  if !project.role.is_empty() || !project.timeline.is_empty() {
    lines.push(Line::from(vec![
      label("role"),
      Span::raw(project.role.clone()),
      Span::styled(
        format!("  {}", project.timeline),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
    lines.push(Line::from(""));
  }

  for (heading, body) in [
    ("overview", &project.long_description),
    ("challenge", &project.challenge),
    ("solution", &project.solution),
    ("impact", &project.impact),
  ] {
    if body.is_empty() {
      continue;
    }
    lines.push(Line::from(label(heading)));
    for wrapped in body.lines() {
      lines.push(Line::from(format!("  {wrapped}")));
    }
    lines.push(Line::from(""));
  }

  if !project.process.is_empty() {
    lines.push(Line::from(label("process")));
    for (i, step) in project.process.iter().enumerate() {
      lines.push(Line::from(format!("  {}. {}", i + 1, step.step)));
      if !step.description.is_empty() {
        lines.push(Line::from(Span::styled(
          format!("     {}", step.description),
          Style::default().fg(Color::DarkGray),
        )));
      }
    }
    lines.push(Line::from(""));
  }

  if !project.outcomes.is_empty() {
    lines.push(Line::from(label("outcomes")));
    for outcome in &project.outcomes {
      lines.push(Line::from(vec![
        Span::styled(
          format!("  {} {}", outcome.value, outcome.label),
          Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
          format!("  {}", outcome.description),
          Style::default().fg(Color::DarkGray),
        ),
      ]));
    }
    lines.push(Line::from(""));
  }

  if !project.tools.is_empty() {
    lines.push(Line::from(vec![
      label("tools"),
      Span::styled(
        project.tools.join(", "),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
  }

  let para = Paragraph::new(lines).scroll((app.detail_scroll as u16, 0));
  f.render_widget(para, inner);
}
