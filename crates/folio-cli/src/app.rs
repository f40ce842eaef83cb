//! Application state machine and event dispatcher.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use folio_core::{entity::Entity, portfolio::PortfolioData};
use tokio::sync::mpsc;

use crate::{
  assist::{Assistant, ChatPanel},
  client::Gateway,
  dashboard::{DashTab, EditorForm},
  forms::{
    BookingStep, BookingWizard, ContactForm, LoginForm, RegistrationForm,
    RegistrationStep,
  },
  router::{Router, ScrollTarget, View},
  store::DataStore,
};

// ─── Background work ──────────────────────────────────────────────────────────

/// Completion of a spawned Gateway or assistant call, delivered through the
/// background channel and applied in [`App::tick`]. Submissions run off the
/// event loop so the terminal keeps drawing while they are in flight.
enum BgEvent {
  ChatReply(String),
  ContactDelivered,
  RegistrationDelivered,
  BookingDelivered,
}

// ─── List pane ────────────────────────────────────────────────────────────────

/// Cursor plus fuzzy filter over a titled list (gallery, courses).
#[derive(Default)]
pub struct ListPane {
  pub filter:        String,
  pub filter_active: bool,
  pub cursor:        usize,
}

impl ListPane {
  /// Indices into `titles` that match the current filter, in order.
  pub fn filtered_indices(&self, titles: &[String]) -> Vec<usize> {
    if self.filter.is_empty() {
      return (0..titles.len()).collect();
    }
    let matcher = SkimMatcherV2::default();
    titles
      .iter()
      .enumerate()
      .filter(|(_, t)| matcher.fuzzy_match(t, &self.filter).is_some())
      .map(|(i, _)| i)
      .collect()
  }

  fn reset(&mut self) {
    self.cursor = 0;
  }
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Which home-page section the scroll cursor sits on.
pub const HOME_SECTIONS: [&str; 5] = ["hero", "projects", "academy", "mentorship", "contact"];

/// Top-level application state.
pub struct App {
  pub router:    Router,
  pub gateway:   Gateway,
  pub store:     DataStore,
  pub assistant: Assistant,

  /// Last connectivity probe result; drives the status-bar indicator.
  pub online: bool,

  /// Set by a successful login; gates the dashboard view.
  pub authenticated: bool,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  // Per-view ephemeral state.
  pub gallery:           ListPane,
  pub courses:           ListPane,
  pub mentorship_cursor: usize,
  pub detail_scroll:     usize,
  pub home_section:      usize,
  pub contact_active:    bool,
  pub contact_field:     usize,
  pub contact:           ContactForm,
  pub login:             LoginForm,
  pub dash_tab:          DashTab,
  pub dash_cursor:       usize,
  pub editor:            Option<EditorForm>,
  pub booking:           Option<BookingWizard>,
  pub booking_cursor:    usize,
  pub booking_field:     usize,
  pub registration:      Option<RegistrationForm>,
  pub reg_field:         usize,
  /// Receipt reference being typed on a payment step.
  pub receipt_entry:     String,
  pub chat:              ChatPanel,

  reload_requested: bool,
  bg_tx:            mpsc::UnboundedSender<BgEvent>,
  bg_rx:            mpsc::UnboundedReceiver<BgEvent>,
}

impl App {
  pub fn new(
    gateway: Gateway,
    store: DataStore,
    assistant: Assistant,
    initial: View,
  ) -> Self {
    let (bg_tx, bg_rx) = mpsc::unbounded_channel();
    Self {
      router: Router::new(initial),
      gateway,
      store,
      assistant,
      online: false,
      authenticated: false,
      status_msg: String::new(),
      gallery: ListPane::default(),
      courses: ListPane::default(),
      mentorship_cursor: 0,
      detail_scroll: 0,
      home_section: 0,
      contact_active: false,
      contact_field: 0,
      contact: ContactForm::default(),
      login: LoginForm::default(),
      dash_tab: DashTab::Projects,
      dash_cursor: 0,
      editor: None,
      booking: None,
      booking_cursor: 0,
      booking_field: 0,
      registration: None,
      reg_field: 0,
      receipt_entry: String::new(),
      chat: ChatPanel::default(),
      reload_requested: false,
      bg_tx,
      bg_rx,
    }
  }

  // ── Data ──────────────────────────────────────────────────────────────────

  /// Replace the snapshot with a fresh aggregate fetch.
  pub async fn reload(&mut self) {
    self.store.load(&self.gateway).await;
  }

  /// Refresh the online indicator.
  pub async fn probe(&mut self) {
    self.online = self.gateway.check_connection().await;
  }

  fn data(&self) -> Option<&PortfolioData> {
    self.store.data()
  }

  // ── Frame tick ────────────────────────────────────────────────────────────

  /// Advance all time-based state: commit due view transitions, apply
  /// finished background work, expire the contact success banner, honor
  /// queued change signals.
  pub async fn tick(&mut self, now: Instant) {
    if self.router.tick(now) > 0 {
      if let Some(target) = self.router.take_scroll() {
        self.apply_scroll(target);
      }
    }
    while let Ok(event) = self.bg_rx.try_recv() {
      match event {
        BgEvent::ChatReply(reply) => self.chat.receive(reply),
        BgEvent::ContactDelivered => self.contact.complete(now),
        BgEvent::RegistrationDelivered => {
          if let Some(form) = &mut self.registration {
            form.succeed();
          }
        }
        BgEvent::BookingDelivered => {
          if let Some(wizard) = &mut self.booking {
            wizard.succeed();
          }
        }
      }
    }
    self.contact.tick(now);
    if self.store.take_change_signal() || std::mem::take(&mut self.reload_requested) {
      self.reload().await;
    }
  }

  /// Send one document without suspending the event loop. The completion
  /// event lands in [`tick`](Self::tick) through the background channel;
  /// until then the owning form stays in its submitting state.
  fn upsert_in_background(&self, entity: Entity, done: BgEvent) {
    let gateway = self.gateway.clone();
    let tx = self.bg_tx.clone();
    tokio::spawn(async move {
      gateway.upsert(&entity).await;
      let _ = tx.send(done);
    });
  }

  fn apply_scroll(&mut self, target: ScrollTarget) {
    self.detail_scroll = 0;
    self.home_section = match target {
      ScrollTarget::Top => 0,
      ScrollTarget::Anchor(anchor) => HOME_SECTIONS
        .iter()
        .position(|s| *s == anchor)
        .unwrap_or(0),
    };
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    // The chat overlay captures all input while open.
    if self.chat.open {
      self.handle_chat_key(key);
      return Ok(true);
    }

    let view = self.router.current().clone();
    match view {
      View::Home { .. } => self.handle_home_key(key, now),
      View::Gallery => self.handle_gallery_key(key, now),
      View::Courses => self.handle_courses_key(key, now),
      View::Project { .. } => Ok(self.handle_reader_key(key, now)),
      View::About => Ok(self.handle_reader_key(key, now)),
      View::CourseDetail { data } => self.handle_course_detail_key(key, now, data),
      View::Mentorship => self.handle_mentorship_key(key, now).await,
      View::MentorshipBooking { .. } => self.handle_booking_key(key, now),
      View::Login => self.handle_login_key(key, now),
      View::Dashboard => self.handle_dashboard_key(key, now).await,
    }
  }

  fn go(&mut self, view: View, now: Instant) {
    self.router.navigate(view, now);
  }

  fn back(&mut self, now: Instant) {
    self.router.back(now);
  }

  /// Shared navigation chords available on every browsing view.
  fn handle_nav_key(&mut self, key: KeyEvent, now: Instant) -> Option<bool> {
    match key.code {
      KeyCode::Char('q') => Some(false),
      KeyCode::Char('g') => {
        self.gallery.reset();
        self.go(View::Gallery, now);
        Some(true)
      }
      KeyCode::Char('c') => {
        self.courses.reset();
        self.go(View::Courses, now);
        Some(true)
      }
      KeyCode::Char('a') => {
        self.go(View::About, now);
        Some(true)
      }
      KeyCode::Char('m') => {
        self.mentorship_cursor = 0;
        self.go(View::Mentorship, now);
        Some(true)
      }
      KeyCode::Char('l') => {
        self.go(View::Login, now);
        Some(true)
      }
      KeyCode::Char('i') => {
        self.chat.toggle();
        Some(true)
      }
      KeyCode::Char('r') => {
        self.store.reset_error();
        self.reload_requested = true;
        Some(true)
      }
      _ => None,
    }
  }

  // ── Home ──────────────────────────────────────────────────────────────────

  fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if self.contact_active {
      self.handle_contact_key(key);
      return Ok(true);
    }

    if let Some(cont) = self.handle_nav_key(key, now) {
      return Ok(cont);
    }
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.home_section + 1 < HOME_SECTIONS.len() {
          self.home_section += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.home_section = self.home_section.saturating_sub(1);
      }
      KeyCode::Enter => {
        // The contact section is interactive; entering it starts typing.
        if HOME_SECTIONS[self.home_section] == "contact" {
          self.contact_active = true;
          self.contact_field = 0;
        }
      }
      _ => {}
    }
    Ok(true)
  }

  fn handle_contact_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.contact_active = false;
      }
      KeyCode::Tab | KeyCode::Down => {
        self.contact_field = (self.contact_field + 1) % 3;
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.contact_field = (self.contact_field + 2) % 3;
      }
      KeyCode::Enter => {
        if let Some(message) = self.contact.submit() {
          self.upsert_in_background(Entity::Message(message), BgEvent::ContactDelivered);
        }
      }
      KeyCode::Backspace => {
        self.contact_field_mut().pop();
      }
      KeyCode::Char(c) => {
        self.contact_field_mut().push(c);
      }
      _ => {}
    }
  }

  fn contact_field_mut(&mut self) -> &mut String {
    match self.contact_field {
      0 => &mut self.contact.name,
      1 => &mut self.contact.email,
      _ => &mut self.contact.message,
    }
  }

  // ── Gallery / courses lists ───────────────────────────────────────────────

  fn handle_gallery_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if self.gallery.filter_active {
      Self::handle_filter_key(&mut self.gallery, key);
      return Ok(true);
    }
    if key.code == KeyCode::Char('/') {
      self.gallery.filter_active = true;
      self.gallery.filter.clear();
      self.gallery.reset();
      return Ok(true);
    }
    if key.code == KeyCode::Esc {
      self.back(now);
      return Ok(true);
    }
    if let Some(cont) = self.handle_nav_key(key, now) {
      return Ok(cont);
    }

    let titles: Vec<String> = self
      .data()
      .map(|d| d.projects.iter().map(|p| p.title.clone()).collect())
      .unwrap_or_default();
    let visible = self.gallery.filtered_indices(&titles);
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.gallery.cursor + 1 < visible.len() {
          self.gallery.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.gallery.cursor = self.gallery.cursor.saturating_sub(1);
      }
      KeyCode::Enter => {
        let project = visible
          .get(self.gallery.cursor)
          .and_then(|&i| self.data().and_then(|d| d.projects.get(i)))
          .cloned();
        if let Some(data) = project {
          self.go(View::Project { data }, now);
        }
      }
      _ => {}
    }
    Ok(true)
  }

  fn handle_courses_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if self.courses.filter_active {
      Self::handle_filter_key(&mut self.courses, key);
      return Ok(true);
    }
    if key.code == KeyCode::Char('/') {
      self.courses.filter_active = true;
      self.courses.filter.clear();
      self.courses.reset();
      return Ok(true);
    }
    if key.code == KeyCode::Esc {
      self.back(now);
      return Ok(true);
    }
    if let Some(cont) = self.handle_nav_key(key, now) {
      return Ok(cont);
    }

    let titles: Vec<String> = self
      .data()
      .map(|d| d.courses.iter().map(|c| c.title.clone()).collect())
      .unwrap_or_default();
    let visible = self.courses.filtered_indices(&titles);
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.courses.cursor + 1 < visible.len() {
          self.courses.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.courses.cursor = self.courses.cursor.saturating_sub(1);
      }
      KeyCode::Enter => {
        let course = visible
          .get(self.courses.cursor)
          .and_then(|&i| self.data().and_then(|d| d.courses.get(i)))
          .cloned();
        if let Some(data) = course {
          self.go(View::CourseDetail { data }, now);
        }
      }
      _ => {}
    }
    Ok(true)
  }

  fn handle_filter_key(pane: &mut ListPane, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        pane.filter_active = false;
        pane.filter.clear();
        pane.reset();
      }
      KeyCode::Enter => {
        pane.filter_active = false;
        pane.reset();
      }
      KeyCode::Backspace => {
        pane.filter.pop();
        pane.reset();
      }
      KeyCode::Char(c) => {
        pane.filter.push(c);
        pane.reset();
      }
      _ => {}
    }
  }

  // ── Read-only detail views (project, about) ───────────────────────────────

  fn handle_reader_key(&mut self, key: KeyEvent, now: Instant) -> bool {
    if key.code == KeyCode::Esc {
      self.back(now);
      return true;
    }
    if let Some(cont) = self.handle_nav_key(key, now) {
      return cont;
    }
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => self.detail_scroll += 1,
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }
      _ => {}
    }
    true
  }

  // ── Course detail / registration ──────────────────────────────────────────

  fn handle_course_detail_key(
    &mut self,
    key: KeyEvent,
    now: Instant,
    course: folio_core::course::Course,
  ) -> anyhow::Result<bool> {
    if self.registration.is_some() {
      self.handle_registration_key(key);
      return Ok(true);
    }

    if key.code == KeyCode::Char('e') {
      self.registration = Some(RegistrationForm::new(course));
      self.reg_field = 0;
      self.receipt_entry.clear();
      return Ok(true);
    }
    Ok(self.handle_reader_key(key, now))
  }

  fn handle_registration_key(&mut self, key: KeyEvent) {
    let Some(mut form) = self.registration.take() else {
      return;
    };

    match (form.step(), key.code) {
      (_, KeyCode::Esc) => {
        // Abandon the enrolment; nothing was sent.
        return;
      }
      (RegistrationStep::Details, KeyCode::Tab | KeyCode::Down) => {
        self.reg_field = (self.reg_field + 1) % 3;
      }
      (RegistrationStep::Details, KeyCode::BackTab | KeyCode::Up) => {
        self.reg_field = (self.reg_field + 2) % 3;
      }
      (RegistrationStep::Details, KeyCode::Backspace) => {
        Self::reg_field_mut(&mut form, self.reg_field).pop();
      }
      (RegistrationStep::Details, KeyCode::Char(c)) => {
        Self::reg_field_mut(&mut form, self.reg_field).push(c);
      }
      (RegistrationStep::Details, KeyCode::Enter) => {
        if let Some(registration) = form.submit() {
          self.upsert_in_background(
            Entity::Registration(registration),
            BgEvent::RegistrationDelivered,
          );
        }
      }
      (RegistrationStep::Payment, KeyCode::Backspace) => {
        self.receipt_entry.pop();
      }
      (RegistrationStep::Payment, KeyCode::Char(c)) => {
        self.receipt_entry.push(c);
      }
      (RegistrationStep::Payment, KeyCode::Enter) => {
        if !self.receipt_entry.trim().is_empty() {
          form.attach_receipt(self.receipt_entry.trim().to_owned());
        }
        if let Some(registration) = form.submit() {
          self.upsert_in_background(
            Entity::Registration(registration),
            BgEvent::RegistrationDelivered,
          );
        }
      }
      (RegistrationStep::Success, KeyCode::Enter) => {
        // Done; close the enrolment panel.
        return;
      }
      _ => {}
    }
    self.registration = Some(form);
  }

  fn reg_field_mut(form: &mut RegistrationForm, index: usize) -> &mut String {
    match index {
      0 => &mut form.name,
      1 => &mut form.email,
      _ => &mut form.phone,
    }
  }

  // ── Mentorship / booking ──────────────────────────────────────────────────

  async fn handle_mentorship_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if key.code == KeyCode::Esc {
      self.back(now);
      return Ok(true);
    }
    if let Some(cont) = self.handle_nav_key(key, now) {
      return Ok(cont);
    }

    let count = self.data().map(|d| d.mentorship.len()).unwrap_or(0);
    match key.code {
      KeyCode::Down | KeyCode::Char('j') => {
        if self.mentorship_cursor + 1 < count {
          self.mentorship_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.mentorship_cursor = self.mentorship_cursor.saturating_sub(1);
      }
      KeyCode::Enter => {
        let session = self
          .data()
          .and_then(|d| d.mentorship.get(self.mentorship_cursor))
          .cloned();
        if let Some(session) = session {
          let slots = self
            .gateway
            .available_slots(&session.id, chrono::Utc::now())
            .await;
          let mut wizard = BookingWizard::new(session.clone());
          wizard.slots = slots;
          self.booking = Some(wizard);
          self.booking_cursor = 0;
          self.booking_field = 0;
          self.receipt_entry.clear();
          self.go(View::MentorshipBooking { session }, now);
        }
      }
      _ => {}
    }
    Ok(true)
  }

  fn handle_booking_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    let Some(mut wizard) = self.booking.take() else {
      self.back(now);
      return Ok(true);
    };

    if key.code == KeyCode::Esc {
      // Abandon checkout; the slot was never locked client-side.
      self.go(View::Mentorship, now);
      return Ok(true);
    }

    match (wizard.step(), key.code) {
      (BookingStep::Slots, KeyCode::Down | KeyCode::Char('j')) => {
        if self.booking_cursor + 1 < wizard.slots.len() {
          self.booking_cursor += 1;
        }
      }
      (BookingStep::Slots, KeyCode::Up | KeyCode::Char('k')) => {
        self.booking_cursor = self.booking_cursor.saturating_sub(1);
      }
      (BookingStep::Slots, KeyCode::Enter) => {
        wizard.choose_slot(self.booking_cursor);
      }
      (BookingStep::Details, KeyCode::Tab | KeyCode::Down) => {
        self.booking_field = (self.booking_field + 1) % 3;
      }
      (BookingStep::Details, KeyCode::BackTab | KeyCode::Up) => {
        self.booking_field = (self.booking_field + 2) % 3;
      }
      (BookingStep::Details, KeyCode::Backspace) => {
        Self::booking_field_mut(&mut wizard, self.booking_field).pop();
      }
      (BookingStep::Details, KeyCode::Char(c)) => {
        Self::booking_field_mut(&mut wizard, self.booking_field).push(c);
      }
      (BookingStep::Details, KeyCode::Enter) => {
        wizard.confirm_details();
      }
      (BookingStep::Payment, KeyCode::Tab) => {
        wizard.toggle_currency();
      }
      (BookingStep::Payment, KeyCode::Backspace) => {
        self.receipt_entry.pop();
      }
      (BookingStep::Payment, KeyCode::Char(c)) => {
        self.receipt_entry.push(c);
      }
      (BookingStep::Payment, KeyCode::Enter) => {
        if !self.receipt_entry.trim().is_empty() {
          wizard.attach_receipt(self.receipt_entry.trim().to_owned());
        }
        if let Some(booking) = wizard.submit() {
          self.upsert_in_background(Entity::Booking(booking), BgEvent::BookingDelivered);
        }
      }
      (BookingStep::Success, KeyCode::Enter) => {
        self.go(View::Mentorship, now);
        return Ok(true);
      }
      _ => {}
    }
    self.booking = Some(wizard);
    Ok(true)
  }

  fn booking_field_mut(wizard: &mut BookingWizard, index: usize) -> &mut String {
    match index {
      0 => &mut wizard.name,
      1 => &mut wizard.email,
      _ => &mut wizard.phone,
    }
  }

  // ── Login ─────────────────────────────────────────────────────────────────

  fn handle_login_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Esc => self.back(now),
      KeyCode::Enter => {
        if self.login.submit(now) {
          self.authenticated = true;
          self.login.password.clear();
          self.go(View::Dashboard, now);
        }
      }
      KeyCode::Backspace => {
        self.login.password.pop();
      }
      KeyCode::Char(c) => {
        self.login.password.push(c);
      }
      _ => {}
    }
    Ok(true)
  }

  // ── Dashboard ─────────────────────────────────────────────────────────────

  async fn handle_dashboard_key(&mut self, key: KeyEvent, now: Instant) -> anyhow::Result<bool> {
    if !self.authenticated {
      self.go(View::Login, now);
      return Ok(true);
    }

    if self.editor.is_some() {
      self.handle_editor_key(key).await;
      return Ok(true);
    }

    let row_count = self
      .data()
      .map(|d| self.dash_tab.row_count(d))
      .unwrap_or(0);
    match key.code {
      KeyCode::Char('q') => return Ok(false),
      KeyCode::Esc => self.back(now),
      KeyCode::Tab => {
        self.dash_tab = self.dash_tab.next();
        self.dash_cursor = 0;
      }
      KeyCode::BackTab => {
        self.dash_tab = self.dash_tab.prev();
        self.dash_cursor = 0;
      }
      KeyCode::Down | KeyCode::Char('j') => {
        if self.dash_cursor + 1 < row_count {
          self.dash_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.dash_cursor = self.dash_cursor.saturating_sub(1);
      }
      KeyCode::Char('n') => {
        self.editor = EditorForm::create(self.dash_tab);
      }
      KeyCode::Char('e') => {
        let data = self.data().cloned();
        if let Some(data) = data {
          self.editor = EditorForm::edit(self.dash_tab, &data, self.dash_cursor);
        }
      }
      KeyCode::Char('d') => {
        let collection = self.dash_tab.collection();
        if collection.is_deletable() {
          if let Some(id) = self.dash_row_id() {
            self.gateway.remove(collection, &id).await;
            self.status_msg = format!("Deleted {id}");
            self.dash_cursor = self.dash_cursor.saturating_sub(1);
          }
        }
      }
      KeyCode::Char('m') => {
        if self.dash_tab == DashTab::Messages {
          if let Some(id) = self.dash_row_id() {
            self.gateway.mark_message_read(&id).await;
          }
        }
      }
      KeyCode::Char('i') => self.chat.toggle(),
      _ => {}
    }
    Ok(true)
  }

  fn dash_row_id(&self) -> Option<String> {
    let data = self.data()?;
    let row = self.dash_cursor;
    let id = match self.dash_tab {
      DashTab::Projects => data.projects.get(row)?.id.clone(),
      DashTab::Experiences => data.experiences.get(row)?.id.clone(),
      DashTab::Courses => data.courses.get(row)?.id.clone(),
      DashTab::Mentorship => data.mentorship.get(row)?.id.clone(),
      DashTab::Slots => data.slots.get(row)?.id.clone(),
      DashTab::Bookings => data.bookings.get(row)?.id.clone(),
      DashTab::Registrations => data.registrations.get(row)?.id.clone(),
      DashTab::Messages => data.messages.get(row)?.id.clone(),
      DashTab::About => "about".to_owned(),
    };
    Some(id)
  }

  async fn handle_editor_key(&mut self, key: KeyEvent) {
    let Some(mut editor) = self.editor.take() else {
      return;
    };

    match key.code {
      KeyCode::Esc => return,
      KeyCode::Tab | KeyCode::Down => editor.next_field(),
      KeyCode::BackTab | KeyCode::Up => editor.prev_field(),
      KeyCode::Backspace => editor.backspace(),
      KeyCode::Enter => {
        if let Some(entity) = editor.entity() {
          self.gateway.upsert(&entity).await;
          self.status_msg = format!("Saved {}", entity.id());
          return;
        }
        self.status_msg = "Cannot save: required field is empty".into();
      }
      KeyCode::Char(c) => editor.input(c),
      _ => {}
    }
    self.editor = Some(editor);
  }

  // ── Chat overlay ──────────────────────────────────────────────────────────

  fn handle_chat_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => self.chat.open = false,
      KeyCode::Enter => {
        // The provider call can take seconds; run it off the event loop so
        // the busy indicator actually draws.
        if let Some(question) = self.chat.take_question() {
          let data = self.data().cloned().unwrap_or_default();
          let assistant = self.assistant.clone();
          let tx = self.bg_tx.clone();
          tokio::spawn(async move {
            let reply = assistant.ask(&question, &data).await;
            let _ = tx.send(BgEvent::ChatReply(reply));
          });
        }
      }
      KeyCode::Backspace => {
        self.chat.input.pop();
      }
      KeyCode::Char(c) => {
        self.chat.input.push(c);
      }
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  use crate::{
    client::change_channel,
    forms::{ADMIN_PASSWORD, ContactStatus},
    router::DWELL,
  };

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  /// Give spawned background work a bounded window to finish, ticking the
  /// app in between as the event loop would.
  /// `done` runs before each tick so it can observe pending change signals
  /// ahead of the tick that would consume them.
  async fn settle(app: &mut App, now: Instant, mut done: impl FnMut(&mut App) -> bool) {
    for _ in 0..200 {
      tokio::time::sleep(Duration::from_millis(5)).await;
      if done(app) {
        return;
      }
      app.tick(now).await;
    }
    panic!("background work did not finish in time");
  }

  fn offline_app() -> App {
    let (tx, rx) = change_channel();
    let gateway = Gateway::new("http://127.0.0.1:9".into(), tx).unwrap();
    let store = DataStore::new(rx);
    let assistant = Assistant::new(None).unwrap();
    App::new(gateway, store, assistant, View::home())
  }

  #[tokio::test]
  async fn navigation_commits_after_the_dwell() {
    let mut app = offline_app();
    let now = Instant::now();

    app.handle_key(key(KeyCode::Char('g')), now).await.unwrap();
    assert_eq!(app.router.current().tag(), "home");
    assert!(app.router.is_transitioning());

    app.tick(now + DWELL).await;
    assert_eq!(app.router.current().tag(), "gallery");
  }

  #[tokio::test]
  async fn wrong_password_stays_on_login() {
    let mut app = offline_app();
    let mut now = Instant::now();

    app.handle_key(key(KeyCode::Char('l')), now).await.unwrap();
    now += DWELL;
    app.tick(now).await;
    assert_eq!(app.router.current().tag(), "login");

    for c in "wrong".chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();
    assert!(!app.authenticated);
    assert!(app.login.error_active(now));
    // The typed credential is retained for correction.
    assert_eq!(app.login.password, "wrong");

    now += DWELL;
    app.tick(now).await;
    assert_eq!(app.router.current().tag(), "login");
  }

  #[tokio::test]
  async fn correct_password_unlocks_the_dashboard() {
    let mut app = offline_app();
    let mut now = Instant::now();

    app.handle_key(key(KeyCode::Char('l')), now).await.unwrap();
    now += DWELL;
    app.tick(now).await;

    for c in ADMIN_PASSWORD.chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();
    assert!(app.authenticated);

    now += DWELL;
    app.tick(now).await;
    assert_eq!(app.router.current().tag(), "dashboard");
  }

  #[tokio::test]
  async fn contact_submission_broadcasts_and_shows_success() {
    let mut app = offline_app();
    let now = Instant::now();
    app.reload().await;

    // Walk down to the contact section and start typing.
    for _ in 0..4 {
      app.handle_key(key(KeyCode::Char('j')), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();
    assert!(app.contact_active);

    for c in "Visitor".chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Tab), now).await.unwrap();
    for c in "v@example.com".chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Tab), now).await.unwrap();
    for c in "hello".chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();

    // The send runs in the background; the form disables itself while the
    // write is in flight, so the submitting state is actually observable.
    assert_eq!(app.contact.status(), ContactStatus::Submitting);

    let mut saw_broadcast = false;
    settle(&mut app, now, |app| {
      saw_broadcast |= app.store.take_change_signal();
      app.contact.status() == ContactStatus::Success
    })
    .await;

    // The swallowed-failure send still broadcast a change signal.
    assert!(saw_broadcast);
  }

  #[tokio::test]
  async fn invalid_contact_input_sends_nothing() {
    let mut app = offline_app();
    let now = Instant::now();
    app.reload().await;
    // reload itself does not broadcast
    assert!(!app.store.take_change_signal());

    app.contact_active = true;
    app.contact.name = "Visitor".into();
    app.contact.email = "broken".into();
    app.contact.message = "hello".into();
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();

    assert!(app.contact.errors.email.is_some());
    // No Gateway call happened: no change broadcast.
    assert!(!app.store.take_change_signal());
  }

  #[tokio::test]
  async fn unauthenticated_dashboard_redirects_to_login() {
    let mut app = offline_app();
    let mut now = Instant::now();
    // Force the view without logging in.
    app.router.navigate(View::Dashboard, now);
    now += DWELL;
    app.tick(now).await;

    app.handle_key(key(KeyCode::Char('j')), now).await.unwrap();
    now += DWELL;
    app.tick(now).await;
    assert_eq!(app.router.current().tag(), "login");
  }

  #[tokio::test]
  async fn dashboard_delete_fires_a_change_broadcast() {
    let mut app = offline_app();
    let now = Instant::now();
    app.reload().await;
    app.authenticated = true;
    app.router = Router::new(View::Dashboard);

    app.handle_key(key(KeyCode::Char('d')), now).await.unwrap();
    assert!(app.store.take_change_signal());
  }

  #[tokio::test]
  async fn chat_reply_arrives_without_blocking_the_key_handler() {
    let mut app = offline_app();
    let now = Instant::now();
    app.reload().await;
    app.chat.open = true;

    for c in "Who is Amgad?".chars() {
      app.handle_key(key(KeyCode::Char(c)), now).await.unwrap();
    }
    app.handle_key(key(KeyCode::Enter), now).await.unwrap();

    // The question is echoed immediately and the panel goes busy while the
    // assistant runs off the event loop.
    assert!(app.chat.busy);
    assert_eq!(app.chat.history.len(), 1);

    settle(&mut app, now, |app| !app.chat.busy).await;
    assert_eq!(app.chat.history.len(), 2);
    // No credential configured: the scripted reply lands through the
    // background channel.
    assert!(app.chat.history[1].text.contains("API key is missing"));
  }

  #[tokio::test]
  async fn registration_stays_submitting_until_the_send_completes() {
    let mut app = offline_app();
    let now = Instant::now();
    app.reload().await;

    let course = folio_core::course::Course {
      id: "mvp-fast-track".into(),
      title: "MVP Fast Track".into(),
      price: 0.0,
      ..Default::default()
    };
    app.router = Router::new(View::CourseDetail { data: course.clone() });
    app.registration = Some(RegistrationForm::new(course));
    {
      let form = app.registration.as_mut().unwrap();
      form.name = "Learner".into();
      form.email = "l@example.com".into();
    }

    app.handle_key(key(KeyCode::Enter), now).await.unwrap();
    assert_eq!(
      app.registration.as_ref().unwrap().step(),
      RegistrationStep::Submitting
    );

    settle(&mut app, now, |app| {
      app.registration.as_ref().unwrap().step() == RegistrationStep::Success
    })
    .await;
  }

  #[tokio::test]
  async fn gallery_filter_narrows_the_list() {
    let mut app = offline_app();
    app.reload().await;

    let titles: Vec<String> = app
      .data()
      .unwrap()
      .projects
      .iter()
      .map(|p| p.title.clone())
      .collect();
    assert!(titles.len() >= 2);

    app.gallery.filter = titles[0].clone();
    let visible = app.gallery.filtered_indices(&titles);
    assert_eq!(visible, vec![0]);
  }
}
