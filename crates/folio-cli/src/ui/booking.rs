//! Booking wizard — slot selection through payment confirmation.

use folio_core::mentorship::{Currency, MentorshipSession};
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::{app::App, forms::BookingStep};

pub fn draw(f: &mut Frame, area: Rect, app: &App, session: &MentorshipSession) {
  let step_label = app
    .booking
    .as_ref()
    .map(|w| match w.step() {
      BookingStep::Slots => "1/3 pick a slot",
      BookingStep::Details => "2/3 your details",
      BookingStep::Payment => "3/3 payment",
      BookingStep::Submitting => "sending…",
      BookingStep::Success => "confirmed",
    })
    .unwrap_or("…");

  let block = Block::default()
    .title(format!(" Book: {}  [{step_label}] ", session.title))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(area);
  f.render_widget(block, area);

  let Some(wizard) = &app.booking else {
    return;
  };

  match wizard.step() {
    BookingStep::Slots => draw_slots(f, inner, app),
    BookingStep::Details => draw_details(f, inner, app),
    BookingStep::Payment => draw_payment(f, inner, app),
    BookingStep::Submitting => {
      f.render_widget(Paragraph::new("Submitting your booking…"), inner);
    }
    BookingStep::Success => {
      let lines = vec![
        Line::from(Span::styled(
          "Confirmed.",
          Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("A confirmation email with the meeting link is on its way."),
        Line::from(""),
        Line::from(Span::styled(
          "Enter to return",
          Style::default().fg(Color::DarkGray),
        )),
      ];
      f.render_widget(Paragraph::new(lines), inner);
    }
  }
}

fn draw_slots(f: &mut Frame, area: Rect, app: &App) {
  let Some(wizard) = &app.booking else {
    return;
  };

  if wizard.slots.is_empty() {
    f.render_widget(
      Paragraph::new("No upcoming availability for this offering.")
        .style(Style::default().fg(Color::DarkGray)),
      area,
    );
    return;
  }

  let items: Vec<ListItem> = wizard
    .slots
    .iter()
    .map(|slot| {
      let window = if slot.end_time.is_empty() {
        slot.date_time.clone()
      } else {
        format!("{} → {}", slot.date_time, slot.end_time)
      };
      ListItem::new(Line::from(window))
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.booking_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol(""),
    area,
    &mut state,
  );
}

fn draw_details(f: &mut Frame, area: Rect, app: &App) {
  let Some(wizard) = &app.booking else {
    return;
  };

  let fields = [
    ("Full name", wizard.name.as_str(), &wizard.errors.name),
    ("Email", wizard.email.as_str(), &wizard.errors.email),
    ("WhatsApp / phone", wizard.phone.as_str(), &wizard.errors.phone),
  ];

  let mut lines: Vec<Line> = Vec::new();
  for (i, (label, value, error)) in fields.iter().enumerate() {
    let focused = app.booking_field == i;
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
    "Enter continue  Tab next field  Esc cancel",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), area);
}

fn draw_payment(f: &mut Frame, area: Rect, app: &App) {
  let Some(wizard) = &app.booking else {
    return;
  };

  let currency = match wizard.currency {
    Currency::Usd => "USD",
    Currency::Egp => "EGP",
  };

  let mut lines: Vec<Line> = Vec::new();
  lines.push(Line::from(vec![
    Span::raw("Total due  "),
    Span::styled(
      format!("{currency} {:.2}", wizard.price()),
      Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      "  (Tab switches currency)",
      Style::default().fg(Color::DarkGray),
    ),
  ]));
  lines.push(Line::from(""));
  lines.push(Line::from(
    "Transfer the amount, then enter your receipt reference below.",
  ));
  lines.push(Line::from(format!("Receipt reference: {}_", app.receipt_entry)));
  if let Some(error) = &wizard.errors.receipt {
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

  f.render_widget(Paragraph::new(lines), area);
}
