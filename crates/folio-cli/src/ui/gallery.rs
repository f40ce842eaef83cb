//! Project gallery — filterable list of all case studies.

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

  let titles: Vec<String> = data.projects.iter().map(|p| p.title.clone()).collect();
  let visible = app.gallery.filtered_indices(&titles);

  let title = if app.gallery.filter_active || !app.gallery.filter.is_empty() {
    format!(" Work ({}/{}) ", visible.len(), data.projects.len())
  } else {
    format!(" Work ({}) ", data.projects.len())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(area);
  f.render_widget(block, area);

  if data.projects.is_empty() {
    f.render_widget(
      Paragraph::new("No case studies published yet.")
        .style(Style::default().fg(Color::DarkGray)),
      inner,
    );
    return;
  }

  // Filter bar pinned to the bottom of the pane while filtering.
  if (app.gallery.filter_active || !app.gallery.filter.is_empty()) && inner.height > 2 {
    let filter_area = Rect {
      x:      inner.x,
      y:      inner.y + inner.height - 1,
      width:  inner.width,
      height: 1,
    };
    inner.height = inner.height.saturating_sub(1);

    let filter_text = if app.gallery.filter_active {
      format!("/{}_", app.gallery.filter)
    } else {
      format!("/{}", app.gallery.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  let items: Vec<ListItem> = visible
    .iter()
    .map(|&i| {
      let project = &data.projects[i];
      let mut spans = vec![Span::raw(project.title.clone())];
      if !project.tags.is_empty() {
        spans.push(Span::styled(
          format!("  [{}]", project.tags.join(", ")),
          Style::default().fg(Color::DarkGray),
        ));
      }
      if project.is_featured {
        spans.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
      }
      ListItem::new(Line::from(spans))
    })
    .collect();

  let mut state = ListState::default();
  state.select((!visible.is_empty()).then_some(app.gallery.cursor));

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
