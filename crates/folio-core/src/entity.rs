//! The document taxonomy: which collections exist and what lives in them.
//!
//! The backend is a document store with upsert-by-id semantics; the
//! [`Entity`] union is the typed spine behind the client's
//! `mutate(entityKind, payload)` / `remove(entityKind, id)` contract.

use serde::Serialize;

use crate::{
  about::About,
  course::{Course, Registration},
  experience::Experience,
  mentorship::{Booking, MentorshipSession, MentorshipSlot},
  message::ContactMessage,
  project::Project,
};

// ─── Collections ─────────────────────────────────────────────────────────────

/// The nine document collections the platform stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  About,
  Projects,
  Experiences,
  Courses,
  Mentorship,
  Slots,
  Bookings,
  Registrations,
  Messages,
}

impl Collection {
  /// Storage key and URL path segment for the collection.
  pub fn as_str(self) -> &'static str {
    match self {
      Collection::About => "about",
      Collection::Projects => "projects",
      Collection::Experiences => "experiences",
      Collection::Courses => "courses",
      Collection::Mentorship => "mentorship",
      Collection::Slots => "slots",
      Collection::Bookings => "bookings",
      Collection::Registrations => "registrations",
      Collection::Messages => "messages",
    }
  }

  /// Collections the HTTP surface exposes `DELETE /:collection/:id` for.
  /// Bookings and registrations are append-only from the client's side,
  /// and the about singleton is never deleted.
  pub fn is_deletable(self) -> bool {
    matches!(
      self,
      Collection::Projects
        | Collection::Experiences
        | Collection::Courses
        | Collection::Mentorship
        | Collection::Slots
        | Collection::Messages
    )
  }
}

impl std::fmt::Display for Collection {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Entity union ────────────────────────────────────────────────────────────

/// One document of any kind, ready to be upserted.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
  About(About),
  Project(Project),
  Experience(Experience),
  Course(Course),
  Mentorship(MentorshipSession),
  Slot(MentorshipSlot),
  Booking(Booking),
  Registration(Registration),
  Message(ContactMessage),
}

impl Entity {
  /// The collection this document belongs to.
  pub fn collection(&self) -> Collection {
    match self {
      Entity::About(_) => Collection::About,
      Entity::Project(_) => Collection::Projects,
      Entity::Experience(_) => Collection::Experiences,
      Entity::Course(_) => Collection::Courses,
      Entity::Mentorship(_) => Collection::Mentorship,
      Entity::Slot(_) => Collection::Slots,
      Entity::Booking(_) => Collection::Bookings,
      Entity::Registration(_) => Collection::Registrations,
      Entity::Message(_) => Collection::Messages,
    }
  }

  /// The upsert key. The about singleton uses a fixed id.
  pub fn id(&self) -> &str {
    match self {
      Entity::About(_) => "about",
      Entity::Project(p) => &p.id,
      Entity::Experience(e) => &e.id,
      Entity::Course(c) => &c.id,
      Entity::Mentorship(m) => &m.id,
      Entity::Slot(s) => &s.id,
      Entity::Booking(b) => &b.id,
      Entity::Registration(r) => &r.id,
      Entity::Message(m) => &m.id,
    }
  }

  /// The `POST /api{endpoint}` path that upserts this document.
  pub fn endpoint(&self) -> String {
    format!("/{}", self.collection())
  }

  /// The JSON body sent over the wire and stored in the document table.
  pub fn to_json(&self) -> crate::Result<serde_json::Value> {
    fn ser<T: Serialize>(value: &T) -> crate::Result<serde_json::Value> {
      Ok(serde_json::to_value(value)?)
    }
    match self {
      Entity::About(v) => ser(v),
      Entity::Project(v) => ser(v),
      Entity::Experience(v) => ser(v),
      Entity::Course(v) => ser(v),
      Entity::Mentorship(v) => ser(v),
      Entity::Slot(v) => ser(v),
      Entity::Booking(v) => ser(v),
      Entity::Registration(v) => ser(v),
      Entity::Message(v) => ser(v),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collection_names_match_api_paths() {
    assert_eq!(Collection::Projects.as_str(), "projects");
    assert_eq!(Collection::Mentorship.as_str(), "mentorship");
    assert_eq!(
      Entity::Message(ContactMessage::default()).endpoint(),
      "/messages"
    );
  }

  #[test]
  fn deletable_set_excludes_append_only_collections() {
    assert!(Collection::Projects.is_deletable());
    assert!(Collection::Messages.is_deletable());
    assert!(!Collection::About.is_deletable());
    assert!(!Collection::Bookings.is_deletable());
    assert!(!Collection::Registrations.is_deletable());
  }

  #[test]
  fn about_singleton_has_fixed_id() {
    let entity = Entity::About(About::default());
    assert_eq!(entity.id(), "about");
    assert_eq!(entity.collection(), Collection::About);
  }

  #[test]
  fn entity_json_uses_camel_case_keys() {
    let project = Project {
      id: "proj-1".into(),
      long_description: "deep dive".into(),
      ..Default::default()
    };
    let json = Entity::Project(project).to_json().unwrap();
    assert_eq!(json["longDescription"], "deep dive");
    assert_eq!(json["id"], "proj-1");
  }
}
