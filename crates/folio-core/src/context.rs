//! Assembles the AI assistant's system instruction from the live snapshot.
//!
//! The assistant answers questions about the portfolio owner; the prompt
//! context is rebuilt from the current `PortfolioData` on every question so
//! answers always reflect the latest content.

use std::fmt::Write as _;

use crate::{fallback, portfolio::PortfolioData};

/// Build the natural-language system instruction sent alongside every
/// user prompt.
pub fn system_instruction(data: &PortfolioData) -> String {
  let mut out = String::new();

  let _ = writeln!(
    out,
    "You are the personal AI assistant for {name}, a {role}.",
    name = fallback::OWNER_NAME,
    role = if data.about.title.is_empty() {
      "Senior Product Designer"
    } else {
      &data.about.title
    },
  );
  out.push_str(
    "Your goal is to answer questions about his professional background, \
     projects, and expertise using the provided data.\n\
     Keep your tone professional, creative, and helpful, as if you were his \
     chief of staff.\n\n",
  );

  let _ = writeln!(out, "CONTEXT:");
  let _ = writeln!(out, "Name: {}", fallback::OWNER_NAME);
  let _ = writeln!(out, "Role: {}", data.about.title);
  let _ = writeln!(out, "Summary: {}", data.about.summary);
  let _ = writeln!(out, "Philosophy: {}", data.about.philosophy);

  out.push_str("\nExperience Highlights:\n");
  for e in &data.experiences {
    let _ = writeln!(
      out,
      "- {} at {} ({}): {}",
      e.role,
      e.company,
      e.period,
      e.description.join(" "),
    );
  }

  out.push_str("\nKey Projects:\n");
  for p in &data.projects {
    let _ = writeln!(
      out,
      "- {}: {}. Role: {}. Impact: {}",
      p.title, p.description, p.role, p.impact,
    );
  }

  out.push_str("\nMentorship Offerings:\n");
  for m in &data.mentorship {
    let _ = writeln!(out, "- {} ({}): {}", m.title, m.duration, m.description);
  }

  out.push_str("\nCourses Available:\n");
  for c in &data.courses {
    let _ = writeln!(
      out,
      "- {} on {}: {}. Price: {} {}",
      c.title,
      c.platform.as_deref().unwrap_or("request"),
      c.description,
      c.price,
      c.currency,
    );
  }

  let _ = writeln!(
    out,
    "\nIf someone asks about hiring him, guide them to the contact section or \
     provide his email: {}.\n\
     If a question is unrelated to him, politely bring the conversation back \
     to his professional profile.",
    fallback::OWNER_EMAIL,
  );

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::experience::Experience;

  #[test]
  fn context_includes_experience_company() {
    let mut data = PortfolioData::default();
    data.experiences.push(Experience {
      id:          "exp-1".into(),
      role:        "Senior Product Designer".into(),
      company:     "Acme".into(),
      period:      "2021–Present".into(),
      description: vec!["Led X".into()],
    });

    let context = system_instruction(&data);
    assert!(context.contains("Acme"));
    assert!(
      context.contains("- Senior Product Designer at Acme (2021–Present): Led X")
    );
  }

  #[test]
  fn context_lists_every_section_header() {
    let context = system_instruction(&crate::fallback::fallback_data());
    for header in [
      "CONTEXT:",
      "Experience Highlights:",
      "Key Projects:",
      "Mentorship Offerings:",
      "Courses Available:",
    ] {
      assert!(context.contains(header), "missing {header}");
    }
  }

  #[test]
  fn context_tracks_live_snapshot_not_fallback() {
    let mut data = PortfolioData::default();
    data.about.title = "Fractional Design Lead".into();
    let context = system_instruction(&data);
    assert!(context.contains("Role: Fractional Design Lead"));
  }
}
