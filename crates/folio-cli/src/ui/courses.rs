//! Courses gallery — filterable list of academy offerings.

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

  let titles: Vec<String> = data.courses.iter().map(|c| c.title.clone()).collect();
  let visible = app.courses.filtered_indices(&titles);

  let block = Block::default()
    .title(format!(" Academy ({}) ", data.courses.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(area);
  f.render_widget(block, area);

  if data.courses.is_empty() {
    f.render_widget(
      Paragraph::new("New programs are in the works. Check back soon.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  if (app.courses.filter_active || !app.courses.filter.is_empty()) && inner.height > 2 {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);

    let filter_text = if app.courses.filter_active {
      format!("/{}_", app.courses.filter)
    } else {
      format!("/{}", app.courses.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let items: Vec<ListItem> = visible
    .iter()
    .map(|&i| {
      let course = &data.courses[i];
      let price = if course.is_free() {
        Span::styled(
          "  FREE",
          Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
      } else {
        Span::styled(
          format!("  {} {}", course.currency, course.price),
          Style::default().fg(Color::Yellow),
        )
      };
      ListItem::new(Line::from(vec![
        Span::raw(course.title.clone()),
        price,
        Span::styled(
          format!("  {}", course.duration),
          Style::default().fg(Color::DarkGray),
        ),
      ]))
    })
    .collect();

  let mut state = ListState::default();
  state.select((!visible.is_empty()).then_some(app.courses.cursor));

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
