//! Mentorship list — bookable offerings.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let Some(data) = app.store.data() else {
    return;
  };

  let block = Block::default()
    .title(format!(" Mentorship ({}) ", data.mentorship.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);

  if data.mentorship.is_empty() {
    f.render_widget(
      Paragraph::new("Mentorship slots open up periodically. Check back soon.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  let items: Vec<ListItem> = data
    .mentorship
    .iter()
    .map(|session| {
      ListItem::new(vec![
        Line::from(vec![
          Span::styled(
            session.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
          ),
          Span::styled(
            format!("  {}  ${}", session.duration, session.price),
            Style::default().fg(Color::Yellow),
          ),
        ]),
        Line::from(Span::styled(
          format!("  {}", session.description),
          Style::default().fg(Color::DarkGray),
        )),
      ])
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.mentorship_cursor));

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
