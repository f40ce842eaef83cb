//! About screen — bio plus the experience timeline.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(data) = app.store.data() else {
    return;
  };

  let block = Block::default()
    .title(" About ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let mut lines: Vec<Line> = Vec::new();
  lines.push(Line::from(Span::styled(
    data.about.title.clone(),
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
  )));
  lines.push(Line::from(""));
  for wrapped in data.about.summary.lines() {
    lines.push(Line::from(wrapped.to_string()));
  }
  lines.push(Line::from(""));
  if !data.about.philosophy.is_empty() {
    lines.push(Line::from(Span::styled(
      format!("“{}”", data.about.philosophy),
      Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
  }

  lines.push(Line::from(Span::styled(
    "Experience",
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
  )));
  for exp in &data.experiences {
    lines.push(Line::from(vec![
      Span::styled(
        exp.role.clone(),
        Style::default().add_modifier(Modifier::BOLD),
      ),
      Span::raw(format!("  {}", exp.company)),
      Span::styled(
        format!("  {}", exp.period),
        Style::default().fg(Color::DarkGray),
      ),
    ]));
    for highlight in &exp.description {
      lines.push(Line::from(Span::styled(
        format!("  • {highlight}"),
        Style::default().fg(Color::DarkGray),
      )));
    }
    lines.push(Line::from(""));
  }

  let para = Paragraph::new(lines).scroll((app.detail_scroll as u16, 0));
  f.render_widget(para, inner);
}
