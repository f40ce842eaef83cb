//! Integration tests for `SqliteStore` against an in-memory database.

use folio_core::{
  about::About,
  course::Course,
  entity::{Collection, Entity},
  message::{ContactMessage, MessageStatus},
  project::Project,
  store::PortfolioStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn project(id: &str, title: &str) -> Project {
  Project {
    id: id.into(),
    title: title.into(),
    ..Default::default()
  }
}

fn message(id: &str, name: &str) -> ContactMessage {
  ContactMessage {
    id: id.into(),
    name: name.into(),
    email: "a@b.co".into(),
    message: "hello".into(),
    date: "2025-10-01".into(),
    status: MessageStatus::New,
  }
}

// ─── Aggregate ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_yields_default_aggregate() {
  let s = store().await;
  let data = s.portfolio().await.unwrap();
  assert!(data.is_bootstrap_empty());
  assert_eq!(data.about, About::default());
}

#[tokio::test]
async fn upsert_then_aggregate_reflects_document() {
  let s = store().await;
  s.upsert(Entity::Project(project("proj-1", "Enterprise Ops")))
    .await
    .unwrap();

  let data = s.portfolio().await.unwrap();
  assert_eq!(data.projects.len(), 1);
  assert_eq!(data.projects[0].title, "Enterprise Ops");
}

#[tokio::test]
async fn aggregate_is_idempotent_without_mutations() {
  let s = store().await;
  s.upsert(Entity::Course(Course {
    id: "c-1".into(),
    title: "B2B Mastery".into(),
    ..Default::default()
  }))
  .await
  .unwrap();

  let first = s.portfolio().await.unwrap();
  let second = s.portfolio().await.unwrap();
  assert_eq!(first, second);
}

#[tokio::test]
async fn content_collections_keep_insertion_order_across_edits() {
  let s = store().await;
  s.upsert(Entity::Project(project("p1", "First")))
    .await
    .unwrap();
  s.upsert(Entity::Project(project("p2", "Second")))
    .await
    .unwrap();

  // Editing the first document must not move it behind the second.
  s.upsert(Entity::Project(project("p1", "First, revised")))
    .await
    .unwrap();

  let data = s.portfolio().await.unwrap();
  let titles: Vec<&str> = data.projects.iter().map(|p| p.title.as_str()).collect();
  assert_eq!(titles, ["First, revised", "Second"]);
}

#[tokio::test]
async fn inbox_collections_read_newest_first() {
  let s = store().await;
  s.upsert(Entity::Message(message("m1", "older")))
    .await
    .unwrap();
  s.upsert(Entity::Message(message("m2", "newer")))
    .await
    .unwrap();

  let data = s.portfolio().await.unwrap();
  let names: Vec<&str> = data.messages.iter().map(|m| m.name.as_str()).collect();
  assert_eq!(names, ["newer", "older"]);
}

// ─── Upsert semantics ────────────────────────────────────────────────────────

#[tokio::test]
async fn upsert_same_id_replaces_not_duplicates() {
  let s = store().await;
  s.upsert(Entity::Project(project("p1", "v1"))).await.unwrap();
  s.upsert(Entity::Project(project("p1", "v2"))).await.unwrap();

  let data = s.portfolio().await.unwrap();
  assert_eq!(data.projects.len(), 1);
  assert_eq!(data.projects[0].title, "v2");
}

#[tokio::test]
async fn about_singleton_round_trips() {
  let s = store().await;
  let about = About {
    title: "Strategic Product Designer".into(),
    summary: "summary".into(),
    philosophy: "Design with intent.".into(),
    image: None,
  };
  s.upsert(Entity::About(about.clone())).await.unwrap();

  let data = s.portfolio().await.unwrap();
  assert_eq!(data.about, about);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_document_and_reports_presence() {
  let s = store().await;
  s.upsert(Entity::Project(project("p1", "gone soon")))
    .await
    .unwrap();

  assert!(s.delete(Collection::Projects, "p1").await.unwrap());
  assert!(!s.delete(Collection::Projects, "p1").await.unwrap());

  let data = s.portfolio().await.unwrap();
  assert!(data.projects.is_empty());
}

// ─── Message lifecycle ───────────────────────────────────────────────────────

#[tokio::test]
async fn mark_message_read_flips_status_in_place() {
  let s = store().await;
  s.upsert(Entity::Message(message("m1", "visitor")))
    .await
    .unwrap();

  assert!(s.mark_message_read("m1").await.unwrap());

  let data = s.portfolio().await.unwrap();
  assert_eq!(data.messages[0].status, MessageStatus::Read);
  // Everything else is untouched.
  assert_eq!(data.messages[0].name, "visitor");
}

#[tokio::test]
async fn mark_message_read_missing_returns_false() {
  let s = store().await;
  assert!(!s.mark_message_read("nope").await.unwrap());
}
