//! Form state machines for the interactive views.
//!
//! Each form validates locally and, on success, *produces* the payload to
//! send; the app layer owns the Gateway call. A form that fails validation
//! returns `None` and never reaches the network. Time-based states (the
//! contact success banner, the login error flash) take an injected
//! [`Instant`] so they are testable without sleeping.

use std::time::{Duration, Instant};

use folio_core::{
  course::{Course, Registration, RegistrationStatus},
  mentorship::{Booking, Currency, MentorshipSession, MentorshipSlot, PaymentStatus},
  message::{ContactMessage, MessageStatus},
  validate::{email_is_valid, is_present},
};
use uuid::Uuid;

/// Checkout conversion applied when an offering has no explicit EGP price.
pub const USD_TO_EGP: f64 = 50.0;

/// How long the contact form shows its success banner before resetting.
pub const CONTACT_SUCCESS_DWELL: Duration = Duration::from_secs(5);

/// How long the login error flash stays on screen.
pub const LOGIN_ERROR_DWELL: Duration = Duration::from_secs(2);

/// The dashboard gate credential. Client-side only; the API itself is
/// unauthenticated, matching the hosted deployment.
pub const ADMIN_PASSWORD: &str = "amgad2025";

fn now_millis() -> i64 {
  chrono::Utc::now().timestamp_millis()
}

fn today() -> String {
  chrono::Local::now().format("%m/%d/%Y").to_string()
}

// ─── Contact form ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
  Idle,
  Submitting,
  Success,
}

#[derive(Debug, Default)]
pub struct ContactErrors {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub message: Option<String>,
}

/// The home-page contact form: `Idle → Submitting → Success → Idle`.
pub struct ContactForm {
  pub name:    String,
  pub email:   String,
  pub message: String,
  pub errors:  ContactErrors,
  status:        ContactStatus,
  success_until: Option<Instant>,
}

impl Default for ContactForm {
  fn default() -> Self {
    Self {
      name:          String::new(),
      email:         String::new(),
      message:       String::new(),
      errors:        ContactErrors::default(),
      status:        ContactStatus::Idle,
      success_until: None,
    }
  }
}

impl ContactForm {
  pub fn status(&self) -> ContactStatus {
    self.status
  }

  fn validate(&mut self) -> bool {
    self.errors = ContactErrors::default();
    if !is_present(&self.name) {
      self.errors.name = Some("Name is required".into());
    }
    if !email_is_valid(&self.email) {
      self.errors.email = Some("A valid email is required".into());
    }
    if !is_present(&self.message) {
      self.errors.message = Some("Message is required".into());
    }
    self.errors.name.is_none()
      && self.errors.email.is_none()
      && self.errors.message.is_none()
  }

  /// Validate and, on success, enter `Submitting` and yield the message to
  /// send. Invalid input stays editable with field errors and yields
  /// nothing.
  pub fn submit(&mut self) -> Option<ContactMessage> {
    if self.status != ContactStatus::Idle || !self.validate() {
      return None;
    }
    self.status = ContactStatus::Submitting;
    Some(ContactMessage {
      id:      now_millis().to_string(),
      name:    self.name.trim().to_owned(),
      email:   self.email.trim().to_owned(),
      message: self.message.trim().to_owned(),
      date:    today(),
      status:  MessageStatus::New,
    })
  }

  /// The send completed (success or swallowed failure): show the banner.
  pub fn complete(&mut self, now: Instant) {
    self.status = ContactStatus::Success;
    self.success_until = Some(now + CONTACT_SUCCESS_DWELL);
  }

  /// Reset to `Idle` with cleared fields once the banner has run its
  /// course.
  pub fn tick(&mut self, now: Instant) {
    if let Some(until) = self.success_until {
      if now >= until {
        *self = Self::default();
      }
    }
  }
}

// ─── Login form ───────────────────────────────────────────────────────────────

/// Client-side dashboard gate. Failure flashes for a fixed window; the
/// typed input is retained so the user can correct it.
#[derive(Default)]
pub struct LoginForm {
  pub password: String,
  error_until:  Option<Instant>,
}

impl LoginForm {
  /// Check the credential. `true` unlocks the dashboard.
  pub fn submit(&mut self, now: Instant) -> bool {
    if self.password == ADMIN_PASSWORD {
      self.error_until = None;
      true
    } else {
      self.error_until = Some(now + LOGIN_ERROR_DWELL);
      false
    }
  }

  pub fn error_active(&self, now: Instant) -> bool {
    self.error_until.is_some_and(|until| now < until)
  }
}

// ─── Booking wizard ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
  Slots,
  Details,
  Payment,
  Submitting,
  Success,
}

#[derive(Debug, Default)]
pub struct BookingErrors {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub phone:   Option<String>,
  pub receipt: Option<String>,
}

/// The mentorship checkout: `Slots → Details → Payment → Submitting →
/// Success`. Each step gate re-validates; the `Booking` payload is only
/// produced once the payment step holds a receipt.
pub struct BookingWizard {
  pub session:  MentorshipSession,
  pub slots:    Vec<MentorshipSlot>,
  pub selected: Option<usize>,
  pub name:     String,
  pub email:    String,
  pub phone:    String,
  pub currency: Currency,
  pub receipt:  Option<String>,
  pub errors:   BookingErrors,
  step: BookingStep,
}

impl BookingWizard {
  pub fn new(session: MentorshipSession) -> Self {
    Self {
      session,
      slots: Vec::new(),
      selected: None,
      name: String::new(),
      email: String::new(),
      phone: String::new(),
      currency: Currency::Usd,
      receipt: None,
      errors: BookingErrors::default(),
      step: BookingStep::Slots,
    }
  }

  pub fn step(&self) -> BookingStep {
    self.step
  }

  /// Price in the chosen currency; explicit EGP price wins over the
  /// converted one.
  pub fn price(&self) -> f64 {
    match self.currency {
      Currency::Usd => self.session.price,
      Currency::Egp => self
        .session
        .price_egp
        .unwrap_or(self.session.price * USD_TO_EGP),
    }
  }

  pub fn toggle_currency(&mut self) {
    self.currency = match self.currency {
      Currency::Usd => Currency::Egp,
      Currency::Egp => Currency::Usd,
    };
  }

  /// Pick a slot and advance to the details step.
  pub fn choose_slot(&mut self, index: usize) {
    if self.step == BookingStep::Slots && index < self.slots.len() {
      self.selected = Some(index);
      self.step = BookingStep::Details;
    }
  }

  fn validate_details(&mut self) -> bool {
    self.errors = BookingErrors::default();
    if !is_present(&self.name) {
      self.errors.name = Some("Full name is required".into());
    }
    if !email_is_valid(&self.email) {
      self.errors.email = Some("A valid email is required".into());
    }
    if !is_present(&self.phone) {
      self.errors.phone = Some("Contact number is required".into());
    }
    self.errors.name.is_none()
      && self.errors.email.is_none()
      && self.errors.phone.is_none()
  }

  /// Validate the attendee details and advance to payment.
  pub fn confirm_details(&mut self) -> bool {
    if self.step != BookingStep::Details || !self.validate_details() {
      return false;
    }
    self.step = BookingStep::Payment;
    true
  }

  pub fn attach_receipt(&mut self, image: String) {
    self.receipt = Some(image);
    self.errors.receipt = None;
  }

  pub fn clear_receipt(&mut self) {
    self.receipt = None;
  }

  /// Produce the booking to send. Requires the payment step and an
  /// attached receipt; enters `Submitting` so the control disables itself.
  pub fn submit(&mut self) -> Option<Booking> {
    if self.step != BookingStep::Payment {
      return None;
    }
    let receipt = match &self.receipt {
      Some(r) => r.clone(),
      None => {
        self.errors.receipt = Some("Receipt upload required".into());
        return None;
      }
    };
    let slot = self.selected.and_then(|i| self.slots.get(i))?;

    self.step = BookingStep::Submitting;
    let reference = Uuid::new_v4().simple().to_string()[..8].to_uppercase();
    Some(Booking {
      id:              format!("book-{}", now_millis()),
      slot_id:         slot.id.clone(),
      session_id:      self.session.id.clone(),
      user_name:       self.name.trim().to_owned(),
      user_email:      self.email.trim().to_owned(),
      user_phone:      self.phone.trim().to_owned(),
      amount:          self.price(),
      currency:        self.currency,
      payment_ref:     format!("TRX-{reference}"),
      payment_status:  PaymentStatus::Paid,
      timestamp:       chrono::Utc::now().to_rfc3339(),
      payment_receipt: Some(receipt),
    })
  }

  pub fn succeed(&mut self) {
    if self.step == BookingStep::Submitting {
      self.step = BookingStep::Success;
    }
  }
}

// ─── Course registration ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStep {
  Details,
  Payment,
  Submitting,
  Success,
}

#[derive(Debug, Default)]
pub struct RegistrationErrors {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub receipt: Option<String>,
}

/// Course enrolment. Free courses go `Details → Submitting`; paid ones
/// insert a payment-proof step.
pub struct RegistrationForm {
  pub course:   Course,
  pub name:     String,
  pub email:    String,
  pub phone:    String,
  pub currency: Currency,
  pub receipt:  Option<String>,
  pub errors:   RegistrationErrors,
  step: RegistrationStep,
}

impl RegistrationForm {
  pub fn new(course: Course) -> Self {
    Self {
      course,
      name: String::new(),
      email: String::new(),
      phone: String::new(),
      currency: Currency::Usd,
      receipt: None,
      errors: RegistrationErrors::default(),
      step: RegistrationStep::Details,
    }
  }

  pub fn step(&self) -> RegistrationStep {
    self.step
  }

  pub fn price(&self) -> f64 {
    match self.currency {
      Currency::Usd => self.course.price,
      Currency::Egp => self
        .course
        .price_egp
        .unwrap_or(self.course.price * USD_TO_EGP),
    }
  }

  pub fn attach_receipt(&mut self, image: String) {
    self.receipt = Some(image);
    self.errors.receipt = None;
  }

  fn validate_details(&mut self) -> bool {
    self.errors = RegistrationErrors::default();
    let name = self.name.trim();
    if name.is_empty() {
      self.errors.name = Some("Full name is required".into());
    } else if name.chars().count() < 2 {
      self.errors.name = Some("Name is too short".into());
    }
    if !email_is_valid(&self.email) {
      self.errors.email = Some("Please enter a valid email address".into());
    }
    self.errors.name.is_none() && self.errors.email.is_none()
  }

  /// Drive the wizard forward. From `Details`, valid input either yields
  /// the payload (free course) or advances to the payment step; from
  /// `Payment`, a receipt is required before the payload is produced.
  pub fn submit(&mut self) -> Option<Registration> {
    match self.step {
      RegistrationStep::Details => {
        if !self.validate_details() {
          return None;
        }
        if self.course.is_free() {
          self.step = RegistrationStep::Submitting;
          Some(self.build(None))
        } else {
          self.step = RegistrationStep::Payment;
          None
        }
      }
      RegistrationStep::Payment => {
        let receipt = match &self.receipt {
          Some(r) => r.clone(),
          None => {
            self.errors.receipt = Some("Receipt upload required".into());
            return None;
          }
        };
        self.step = RegistrationStep::Submitting;
        Some(self.build(Some(receipt)))
      }
      _ => None,
    }
  }

  fn build(&self, receipt: Option<String>) -> Registration {
    let paid = !self.course.is_free();
    Registration {
      id:                format!("reg-{}", now_millis()),
      course_id:         self.course.id.clone(),
      course_title:      self.course.title.clone(),
      user_name:         self.name.trim().to_owned(),
      user_email:        self.email.trim().to_owned(),
      user_phone:        self.phone.trim().to_owned(),
      date:              today(),
      status:            RegistrationStatus::Confirmed,
      selected_currency: paid.then(|| match self.currency {
        Currency::Usd => "USD".to_owned(),
        Currency::Egp => "EGP".to_owned(),
      }),
      paid_amount:       paid.then(|| self.price()),
      payment_receipt:   receipt,
    }
  }

  pub fn succeed(&mut self) {
    if self.step == RegistrationStep::Submitting {
      self.step = RegistrationStep::Success;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t0() -> Instant {
    Instant::now()
  }

  fn paid_session() -> MentorshipSession {
    MentorshipSession {
      id: "portfolio-audit".into(),
      title: "High-Impact Portfolio Audit".into(),
      price: 10.0,
      ..Default::default()
    }
  }

  fn slot() -> MentorshipSlot {
    MentorshipSlot {
      id: "slot-1".into(),
      session_id: "portfolio-audit".into(),
      date_time: "2025-12-01T10:00:00Z".into(),
      ..Default::default()
    }
  }

  #[test]
  fn contact_invalid_input_produces_no_payload() {
    let mut form = ContactForm::default();
    form.name = "Visitor".into();
    form.email = "not-an-email".into();
    form.message = "hello".into();

    assert!(form.submit().is_none());
    assert_eq!(form.status(), ContactStatus::Idle);
    assert!(form.errors.email.is_some());
    // The typed input survives the failed attempt.
    assert_eq!(form.email, "not-an-email");
  }

  #[test]
  fn contact_success_banner_resets_after_the_dwell() {
    let mut form = ContactForm::default();
    form.name = "Visitor".into();
    form.email = "v@example.com".into();
    form.message = "hello".into();

    let payload = form.submit().unwrap();
    assert_eq!(payload.status, MessageStatus::New);
    assert_eq!(form.status(), ContactStatus::Submitting);
    // No double submission while in flight.
    assert!(form.submit().is_none());

    let now = t0();
    form.complete(now);
    assert_eq!(form.status(), ContactStatus::Success);

    form.tick(now + CONTACT_SUCCESS_DWELL - Duration::from_millis(1));
    assert_eq!(form.status(), ContactStatus::Success);

    form.tick(now + CONTACT_SUCCESS_DWELL);
    assert_eq!(form.status(), ContactStatus::Idle);
    assert!(form.name.is_empty());
  }

  #[test]
  fn login_failure_flashes_and_retains_input() {
    let mut form = LoginForm::default();
    form.password = "wrong".into();

    let now = t0();
    assert!(!form.submit(now));
    assert!(form.error_active(now));
    assert_eq!(form.password, "wrong");

    // The flash expires on its own.
    assert!(!form.error_active(now + LOGIN_ERROR_DWELL));

    form.password = ADMIN_PASSWORD.into();
    assert!(form.submit(now));
    assert!(!form.error_active(now));
  }

  #[test]
  fn booking_details_gate_blocks_invalid_input() {
    let mut wizard = BookingWizard::new(paid_session());
    wizard.slots = vec![slot()];
    wizard.choose_slot(0);
    assert_eq!(wizard.step(), BookingStep::Details);

    wizard.name = "Visitor".into();
    wizard.email = "v@example.com".into();
    // Missing phone.
    assert!(!wizard.confirm_details());
    assert_eq!(wizard.step(), BookingStep::Details);
    assert!(wizard.errors.phone.is_some());
  }

  #[test]
  fn booking_requires_a_receipt_before_producing_a_payload() {
    let mut wizard = BookingWizard::new(paid_session());
    wizard.slots = vec![slot()];
    wizard.choose_slot(0);
    wizard.name = "Visitor".into();
    wizard.email = "v@example.com".into();
    wizard.phone = "+20100000000".into();
    assert!(wizard.confirm_details());
    assert_eq!(wizard.step(), BookingStep::Payment);

    assert!(wizard.submit().is_none());
    assert!(wizard.errors.receipt.is_some());

    wizard.attach_receipt("data:image/png;base64,xxxx".into());
    let booking = wizard.submit().unwrap();
    assert_eq!(wizard.step(), BookingStep::Submitting);
    assert_eq!(booking.slot_id, "slot-1");
    assert_eq!(booking.payment_status, PaymentStatus::Paid);
    assert!(booking.id.starts_with("book-"));
    assert!(booking.payment_ref.starts_with("TRX-"));
    assert!(booking.payment_receipt.is_some());

    wizard.succeed();
    assert_eq!(wizard.step(), BookingStep::Success);
  }

  #[test]
  fn booking_egp_price_converts_when_no_explicit_egp_price() {
    let mut wizard = BookingWizard::new(paid_session());
    assert_eq!(wizard.price(), 10.0);
    wizard.toggle_currency();
    assert_eq!(wizard.price(), 500.0);

    wizard.session.price_egp = Some(480.0);
    assert_eq!(wizard.price(), 480.0);
  }

  #[test]
  fn free_course_registration_skips_the_payment_step() {
    let course = Course {
      id: "mvp-fast-track".into(),
      title: "MVP Fast Track".into(),
      price: 0.0,
      ..Default::default()
    };
    let mut form = RegistrationForm::new(course);
    form.name = "Learner".into();
    form.email = "l@example.com".into();

    let reg = form.submit().unwrap();
    assert_eq!(form.step(), RegistrationStep::Submitting);
    assert!(reg.id.starts_with("reg-"));
    assert_eq!(reg.status, RegistrationStatus::Confirmed);
    assert!(reg.paid_amount.is_none());
    assert!(reg.payment_receipt.is_none());
  }

  #[test]
  fn paid_course_registration_requires_a_receipt() {
    let course = Course {
      id: "b2b-mastery".into(),
      title: "B2B Design Mastery".into(),
      price: 49.0,
      ..Default::default()
    };
    let mut form = RegistrationForm::new(course);
    form.name = "Learner".into();
    form.email = "l@example.com".into();

    // Valid details on a paid course advance to payment without a payload.
    assert!(form.submit().is_none());
    assert_eq!(form.step(), RegistrationStep::Payment);

    assert!(form.submit().is_none());
    assert!(form.errors.receipt.is_some());

    form.attach_receipt("data:image/png;base64,xxxx".into());
    let reg = form.submit().unwrap();
    assert_eq!(reg.paid_amount, Some(49.0));
    assert_eq!(reg.selected_currency.as_deref(), Some("USD"));
    assert!(reg.payment_receipt.is_some());
  }

  #[test]
  fn short_name_blocks_registration() {
    let course = Course { id: "c".into(), price: 0.0, ..Default::default() };
    let mut form = RegistrationForm::new(course);
    form.name = "A".into();
    form.email = "l@example.com".into();

    assert!(form.submit().is_none());
    assert!(form.errors.name.is_some());
  }
}
