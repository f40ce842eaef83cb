//! Admin dashboard state: tabbed collection lists and the field editor
//! used for create/edit.

use folio_core::{
  about::About,
  course::Course,
  entity::{Collection, Entity},
  experience::Experience,
  mentorship::{MentorshipSession, MentorshipSlot},
  portfolio::PortfolioData,
  project::Project,
};

fn now_millis() -> i64 {
  chrono::Utc::now().timestamp_millis()
}

// ─── Tabs ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTab {
  Projects,
  Experiences,
  Courses,
  Mentorship,
  Slots,
  Bookings,
  Registrations,
  Messages,
  About,
}

impl DashTab {
  pub const ALL: [DashTab; 9] = [
    DashTab::Projects,
    DashTab::Experiences,
    DashTab::Courses,
    DashTab::Mentorship,
    DashTab::Slots,
    DashTab::Bookings,
    DashTab::Registrations,
    DashTab::Messages,
    DashTab::About,
  ];

  pub fn title(self) -> &'static str {
    match self {
      DashTab::Projects => "Projects",
      DashTab::Experiences => "Experience",
      DashTab::Courses => "Courses",
      DashTab::Mentorship => "Mentorship",
      DashTab::Slots => "Slots",
      DashTab::Bookings => "Bookings",
      DashTab::Registrations => "Registrations",
      DashTab::Messages => "Inbox",
      DashTab::About => "About",
    }
  }

  pub fn collection(self) -> Collection {
    match self {
      DashTab::Projects => Collection::Projects,
      DashTab::Experiences => Collection::Experiences,
      DashTab::Courses => Collection::Courses,
      DashTab::Mentorship => Collection::Mentorship,
      DashTab::Slots => Collection::Slots,
      DashTab::Bookings => Collection::Bookings,
      DashTab::Registrations => Collection::Registrations,
      DashTab::Messages => Collection::Messages,
      DashTab::About => Collection::About,
    }
  }

  /// Tabs whose rows are created client-side only (no editor).
  pub fn is_read_only(self) -> bool {
    matches!(
      self,
      DashTab::Bookings | DashTab::Registrations | DashTab::Messages
    )
  }

  pub fn next(self) -> Self {
    let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
    Self::ALL[(i + 1) % Self::ALL.len()]
  }

  pub fn prev(self) -> Self {
    let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
    Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
  }

  /// Number of rows this tab shows for the given snapshot.
  pub fn row_count(self, data: &PortfolioData) -> usize {
    match self {
      DashTab::Projects => data.projects.len(),
      DashTab::Experiences => data.experiences.len(),
      DashTab::Courses => data.courses.len(),
      DashTab::Mentorship => data.mentorship.len(),
      DashTab::Slots => data.slots.len(),
      DashTab::Bookings => data.bookings.len(),
      DashTab::Registrations => data.registrations.len(),
      DashTab::Messages => data.messages.len(),
      DashTab::About => 1,
    }
  }
}

// ─── Editor ───────────────────────────────────────────────────────────────────

pub struct Field {
  pub name:  &'static str,
  pub label: &'static str,
  pub value: String,
}

impl Field {
  fn new(name: &'static str, label: &'static str, value: impl Into<String>) -> Self {
    Self { name, label, value: value.into() }
  }
}

/// A flat text-field editor over one entity. Lists are entered as
/// comma-separated values; numbers are parsed leniently with a zero
/// default, matching the hosted admin forms.
pub struct EditorForm {
  pub tab:    DashTab,
  pub fields: Vec<Field>,
  pub active: usize,
  /// `Some` when editing an existing row; its id is preserved on save.
  existing_id: Option<String>,
}

impl EditorForm {
  /// Editor for a new row on `tab`. Returns `None` for read-only tabs.
  pub fn create(tab: DashTab) -> Option<Self> {
    Self::build(tab, None, None)
  }

  /// Editor prefilled from the row under the cursor.
  pub fn edit(tab: DashTab, data: &PortfolioData, row: usize) -> Option<Self> {
    Self::build(tab, Some(data), Some(row))
  }

  fn build(tab: DashTab, data: Option<&PortfolioData>, row: Option<usize>) -> Option<Self> {
    if tab.is_read_only() {
      return None;
    }
    let (fields, existing_id) = match tab {
      DashTab::Projects => {
        let existing = data.zip(row).and_then(|(d, r)| d.projects.get(r));
        (project_fields(existing), existing.map(|p| p.id.clone()))
      }
      DashTab::Experiences => {
        let existing = data.zip(row).and_then(|(d, r)| d.experiences.get(r));
        (experience_fields(existing), existing.map(|e| e.id.clone()))
      }
      DashTab::Courses => {
        let existing = data.zip(row).and_then(|(d, r)| d.courses.get(r));
        (course_fields(existing), existing.map(|c| c.id.clone()))
      }
      DashTab::Mentorship => {
        let existing = data.zip(row).and_then(|(d, r)| d.mentorship.get(r));
        (session_fields(existing), existing.map(|s| s.id.clone()))
      }
      DashTab::Slots => {
        let existing = data.zip(row).and_then(|(d, r)| d.slots.get(r));
        (slot_fields(existing), existing.map(|s| s.id.clone()))
      }
      DashTab::About => {
        let existing = data.map(|d| &d.about);
        (about_fields(existing), None)
      }
      _ => return None,
    };
    Some(Self { tab, fields, active: 0, existing_id })
  }

  pub fn input(&mut self, c: char) {
    if let Some(field) = self.fields.get_mut(self.active) {
      field.value.push(c);
    }
  }

  pub fn backspace(&mut self) {
    if let Some(field) = self.fields.get_mut(self.active) {
      field.value.pop();
    }
  }

  pub fn next_field(&mut self) {
    if !self.fields.is_empty() {
      self.active = (self.active + 1) % self.fields.len();
    }
  }

  pub fn prev_field(&mut self) {
    if !self.fields.is_empty() {
      self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }
  }

  fn get(&self, name: &str) -> &str {
    self
      .fields
      .iter()
      .find(|f| f.name == name)
      .map(|f| f.value.as_str())
      .unwrap_or_default()
  }

  fn get_f64(&self, name: &str) -> f64 {
    self.get(name).trim().parse().unwrap_or(0.0)
  }

  fn get_list(&self, name: &str) -> Vec<String> {
    self
      .get(name)
      .split(',')
      .map(|s| s.trim().to_owned())
      .filter(|s| !s.is_empty())
      .collect()
  }

  fn id_or_new(&self, prefix: &str) -> String {
    match &self.existing_id {
      Some(id) => id.clone(),
      None => format!("{prefix}-{}", now_millis()),
    }
  }

  /// Assemble the entity to send. The title (or equivalent) must be
  /// non-empty; everything else defaults.
  pub fn entity(&self) -> Option<Entity> {
    match self.tab {
      DashTab::Projects => {
        let title = self.get("title").trim().to_owned();
        if title.is_empty() {
          return None;
        }
        Some(Entity::Project(Project {
          id: self.id_or_new("proj"),
          title,
          description: self.get("description").trim().to_owned(),
          long_description: self.get("long_description").trim().to_owned(),
          image: self.get("image").trim().to_owned(),
          role: self.get("role").trim().to_owned(),
          timeline: self.get("timeline").trim().to_owned(),
          tags: self.get_list("tags"),
          tools: self.get_list("tools"),
          is_featured: self.get("featured").trim().eq_ignore_ascii_case("yes"),
          ..Default::default()
        }))
      }
      DashTab::Experiences => {
        let role = self.get("role").trim().to_owned();
        if role.is_empty() {
          return None;
        }
        Some(Entity::Experience(Experience {
          id: self.id_or_new("exp"),
          role,
          company: self.get("company").trim().to_owned(),
          period: self.get("period").trim().to_owned(),
          description: self
            .get("description")
            .split(';')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect(),
        }))
      }
      DashTab::Courses => {
        let title = self.get("title").trim().to_owned();
        if title.is_empty() {
          return None;
        }
        Some(Entity::Course(Course {
          id: self.id_or_new("course"),
          title,
          description: self.get("description").trim().to_owned(),
          price: self.get_f64("price"),
          currency: self.get("currency").trim().to_owned(),
          duration: self.get("duration").trim().to_owned(),
          instructor: self.get("instructor").trim().to_owned(),
          skills: self.get_list("skills"),
          ..Default::default()
        }))
      }
      DashTab::Mentorship => {
        let title = self.get("title").trim().to_owned();
        if title.is_empty() {
          return None;
        }
        Some(Entity::Mentorship(MentorshipSession {
          id: self.id_or_new("ment"),
          title,
          duration: self.get("duration").trim().to_owned(),
          description: self.get("description").trim().to_owned(),
          topics: self.get_list("topics"),
          price: self.get_f64("price"),
          price_egp: None,
        }))
      }
      DashTab::Slots => {
        let session_id = self.get("session_id").trim().to_owned();
        let date_time = self.get("date_time").trim().to_owned();
        if session_id.is_empty() || date_time.is_empty() {
          return None;
        }
        Some(Entity::Slot(MentorshipSlot {
          id: self.id_or_new("slot"),
          session_id,
          date_time,
          end_time: self.get("end_time").trim().to_owned(),
          ..Default::default()
        }))
      }
      DashTab::About => {
        let title = self.get("title").trim().to_owned();
        if title.is_empty() {
          return None;
        }
        Some(Entity::About(About {
          title,
          summary: self.get("summary").trim().to_owned(),
          philosophy: self.get("philosophy").trim().to_owned(),
          image: {
            let image = self.get("image").trim().to_owned();
            (!image.is_empty()).then_some(image)
          },
        }))
      }
      _ => None,
    }
  }
}

fn project_fields(existing: Option<&Project>) -> Vec<Field> {
  let p = existing;
  vec![
    Field::new("title", "Title", p.map(|p| p.title.clone()).unwrap_or_default()),
    Field::new(
      "description",
      "Description",
      p.map(|p| p.description.clone()).unwrap_or_default(),
    ),
    Field::new(
      "long_description",
      "Long description",
      p.map(|p| p.long_description.clone()).unwrap_or_default(),
    ),
    Field::new("image", "Image URL", p.map(|p| p.image.clone()).unwrap_or_default()),
    Field::new("role", "Role", p.map(|p| p.role.clone()).unwrap_or_default()),
    Field::new(
      "timeline",
      "Timeline",
      p.map(|p| p.timeline.clone()).unwrap_or_default(),
    ),
    Field::new(
      "tags",
      "Tags (comma separated)",
      p.map(|p| p.tags.join(", ")).unwrap_or_default(),
    ),
    Field::new(
      "tools",
      "Tools (comma separated)",
      p.map(|p| p.tools.join(", ")).unwrap_or_default(),
    ),
    Field::new(
      "featured",
      "Featured (yes/no)",
      p.map(|p| if p.is_featured { "yes" } else { "no" }).unwrap_or("no"),
    ),
  ]
}

fn experience_fields(existing: Option<&Experience>) -> Vec<Field> {
  let e = existing;
  vec![
    Field::new("role", "Role", e.map(|e| e.role.clone()).unwrap_or_default()),
    Field::new("company", "Company", e.map(|e| e.company.clone()).unwrap_or_default()),
    Field::new("period", "Period", e.map(|e| e.period.clone()).unwrap_or_default()),
    Field::new(
      "description",
      "Highlights (separated by ;)",
      e.map(|e| e.description.join("; ")).unwrap_or_default(),
    ),
  ]
}

fn course_fields(existing: Option<&Course>) -> Vec<Field> {
  let c = existing;
  vec![
    Field::new("title", "Title", c.map(|c| c.title.clone()).unwrap_or_default()),
    Field::new(
      "description",
      "Description",
      c.map(|c| c.description.clone()).unwrap_or_default(),
    ),
    Field::new(
      "price",
      "Price (0 = free)",
      c.map(|c| c.price.to_string()).unwrap_or_default(),
    ),
    Field::new("currency", "Currency", c.map(|c| c.currency.clone()).unwrap_or_default()),
    Field::new("duration", "Duration", c.map(|c| c.duration.clone()).unwrap_or_default()),
    Field::new(
      "instructor",
      "Instructor",
      c.map(|c| c.instructor.clone()).unwrap_or_default(),
    ),
    Field::new(
      "skills",
      "Skills (comma separated)",
      c.map(|c| c.skills.join(", ")).unwrap_or_default(),
    ),
  ]
}

fn session_fields(existing: Option<&MentorshipSession>) -> Vec<Field> {
  let s = existing;
  vec![
    Field::new("title", "Title", s.map(|s| s.title.clone()).unwrap_or_default()),
    Field::new("duration", "Duration", s.map(|s| s.duration.clone()).unwrap_or_default()),
    Field::new(
      "description",
      "Description",
      s.map(|s| s.description.clone()).unwrap_or_default(),
    ),
    Field::new(
      "topics",
      "Topics (comma separated)",
      s.map(|s| s.topics.join(", ")).unwrap_or_default(),
    ),
    Field::new(
      "price",
      "Price (USD)",
      s.map(|s| s.price.to_string()).unwrap_or_default(),
    ),
  ]
}

fn slot_fields(existing: Option<&MentorshipSlot>) -> Vec<Field> {
  let s = existing;
  vec![
    Field::new(
      "session_id",
      "Session id",
      s.map(|s| s.session_id.clone()).unwrap_or_default(),
    ),
    Field::new(
      "date_time",
      "Start (ISO 8601)",
      s.map(|s| s.date_time.clone()).unwrap_or_default(),
    ),
    Field::new(
      "end_time",
      "End (ISO 8601)",
      s.map(|s| s.end_time.clone()).unwrap_or_default(),
    ),
  ]
}

fn about_fields(existing: Option<&About>) -> Vec<Field> {
  let a = existing;
  vec![
    Field::new("title", "Title", a.map(|a| a.title.clone()).unwrap_or_default()),
    Field::new("summary", "Summary", a.map(|a| a.summary.clone()).unwrap_or_default()),
    Field::new(
      "philosophy",
      "Philosophy",
      a.map(|a| a.philosophy.clone()).unwrap_or_default(),
    ),
    Field::new(
      "image",
      "Image URL",
      a.and_then(|a| a.image.clone()).unwrap_or_default(),
    ),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_core::fallback::fallback_data;

  #[test]
  fn tabs_cycle_in_both_directions() {
    let mut tab = DashTab::Projects;
    for _ in 0..DashTab::ALL.len() {
      tab = tab.next();
    }
    assert_eq!(tab, DashTab::Projects);
    assert_eq!(DashTab::Projects.prev(), DashTab::About);
  }

  #[test]
  fn read_only_tabs_have_no_editor() {
    assert!(EditorForm::create(DashTab::Bookings).is_none());
    assert!(EditorForm::create(DashTab::Messages).is_none());
    assert!(EditorForm::create(DashTab::Projects).is_some());
  }

  #[test]
  fn new_project_gets_a_generated_id_and_parsed_lists() {
    let mut editor = EditorForm::create(DashTab::Projects).unwrap();
    for c in "Enterprise Ops".chars() {
      editor.input(c);
    }
    editor.fields[6].value = "SaaS, B2B, ".into();

    let entity = editor.entity().unwrap();
    match entity {
      Entity::Project(p) => {
        assert!(p.id.starts_with("proj-"));
        assert_eq!(p.title, "Enterprise Ops");
        assert_eq!(p.tags, vec!["SaaS".to_owned(), "B2B".to_owned()]);
      }
      _ => unreachable!(),
    }
  }

  #[test]
  fn editing_preserves_the_existing_id() {
    let data = fallback_data();
    let editor = EditorForm::edit(DashTab::Projects, &data, 0).unwrap();
    let entity = editor.entity().unwrap();
    assert_eq!(entity.id(), data.projects[0].id);
  }

  #[test]
  fn empty_title_blocks_the_save() {
    let editor = EditorForm::create(DashTab::Courses).unwrap();
    assert!(editor.entity().is_none());
  }

  #[test]
  fn about_editor_prefills_the_singleton() {
    let data = fallback_data();
    let editor = EditorForm::edit(DashTab::About, &data, 0).unwrap();
    let entity = editor.entity().unwrap();
    assert_eq!(entity.id(), "about");
  }
}
