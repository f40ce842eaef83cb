//! The bundled fallback dataset.
//!
//! When the backend is unreachable the Gateway substitutes this snapshot,
//! so the site always has renderable content even fully offline. The
//! content mirrors the shipped static site.

use crate::{
  about::About,
  course::{Course, CourseKind, CurriculumItem},
  experience::Experience,
  mentorship::MentorshipSession,
  portfolio::PortfolioData,
  project::{CaseStudyOutcome, ProcessStep, Project},
};

pub const OWNER_NAME: &str = "Amgad Hassan";
pub const OWNER_EMAIL: &str = "amgedhassan@outlook.com";

/// Build the fallback snapshot from bundled constants.
///
/// Slots, bookings, registrations and messages are empty — they only ever
/// exist server-side.
pub fn fallback_data() -> PortfolioData {
  PortfolioData {
    about: About {
      title:      "Strategic Product Designer (UX/UI)".into(),
      summary:    "Architecting high-performance digital products for global \
                   enterprises and high-growth startups. Specializing in turning \
                   complex requirements into intuitive, revenue-driving B2B \
                   experiences and scalable design systems."
        .into(),
      philosophy: "Design with intent. Scale with logic.".into(),
      image:      None,
    },
    projects: fallback_projects(),
    experiences: fallback_experiences(),
    courses: fallback_courses(),
    mentorship: fallback_mentorship(),
    slots: Vec::new(),
    bookings: Vec::new(),
    registrations: Vec::new(),
    messages: Vec::new(),
  }
}

fn fallback_projects() -> Vec<Project> {
  vec![
    Project {
      id: "enterprise-ops".into(),
      title: "Enterprise Workflow Optimization".into(),
      description: "A global B2B ticket dispatching platform that cut technical \
                    labor costs by €1.2M annually."
        .into(),
      long_description: "Redesigning the core operational tool for internal teams \
                         across 12+ European markets, replacing fragmented legacy \
                         software with a high-density centralized monitoring system."
        .into(),
      challenge: "A 20% ticket duplication rate was causing service delays and \
                  wasting millions in operational overhead."
        .into(),
      solution: "Engineered a smart-priority dashboard and a comprehensive B2B \
                 design system optimized for high-intensity monitoring and rapid \
                 triage."
        .into(),
      impact: "Saved €1.2M/year and increased operator speed by 40%.".into(),
      tags: vec!["Enterprise".into(), "SaaS".into(), "B2B".into()],
      image: "https://images.unsplash.com/photo-1551288049-bbbda546697a".into(),
      role: "Lead Product Designer".into(),
      timeline: "12 Months".into(),
      tools: vec!["Figma".into(), "React".into(), "Agile".into()],
      is_featured: true,
      audience: Some(
        "Enterprises needing high-density data management and operational \
         efficiency."
          .into(),
      ),
      research_insights: vec![
        "Dispatchers wasted 40% of time deduplicating data.".into(),
        "Legacy tools had a 3-month learning curve, now reduced to 3 weeks.".into(),
      ],
      outcomes: vec![
        CaseStudyOutcome {
          label:       "Efficiency".into(),
          value:       "95%".into(),
          description: "Reduction in manual errors.".into(),
        },
        CaseStudyOutcome {
          label:       "Cost Savings".into(),
          value:       "€1.2M".into(),
          description: "Estimated annual ROI.".into(),
        },
        CaseStudyOutcome {
          label:       "Training".into(),
          value:       "-75%".into(),
          description: "Faster onboarding time.".into(),
        },
      ],
      lessons_learned: vec![
        "Enterprise design is about clarity over cleverness.".into(),
        "Design systems are the ultimate force-multiplier for large engineering \
         teams."
          .into(),
      ],
      process: vec![
        ProcessStep {
          step:        "Audit".into(),
          description: "Mapped the \"Chaos Path\" of 15 legacy tools.".into(),
        },
        ProcessStep {
          step:        "Logic".into(),
          description: "Created a priority-based triage system.".into(),
        },
        ProcessStep {
          step:        "Scale".into(),
          description: "Built a multi-brand design system.".into(),
        },
      ],
      ..Default::default()
    },
    Project {
      id: "startup-launch".into(),
      title: "SaaS MVP Velocity Launch".into(),
      description: "Transforming a complex fintech idea into a funding-ready SaaS \
                    MVP in under 8 weeks."
        .into(),
      long_description: "Worked with a stealth-mode startup to define product-market \
                         fit through rapid prototyping and high-fidelity UI design, \
                         focused on securing seed funding."
        .into(),
      challenge: "The founders had the backend logic but no interface to pitch to \
                  investors or early beta users."
        .into(),
      solution: "Designed a lean, iterative MVP focused on the core value \
                 proposition with a polished premium feel to secure investor trust."
        .into(),
      impact: "Helped secure $2.5M in seed funding through high-fidelity \
               interactive prototypes."
        .into(),
      tags: vec!["Startup".into(), "Fintech".into(), "Rapid MVP".into()],
      image: "https://images.unsplash.com/photo-1553877522-43269d4ea984".into(),
      role: "Fractional Head of Design".into(),
      timeline: "8 Weeks".into(),
      tools: vec!["Figma".into(), "Protopie".into(), "Webflow".into()],
      is_featured: true,
      ..Default::default()
    },
  ]
}

fn fallback_experiences() -> Vec<Experience> {
  vec![
    Experience {
      id: "exp-vois".into(),
      role: "Senior Product Designer".into(),
      company: "Vodafone Intelligent Solutions".into(),
      period: "2021–Present".into(),
      description: vec![
        "Leading design for the dispatch planner used across 12 EU markets.".into(),
        "Saving €1.2M annually through workflow consolidation and technical debt \
         reduction."
          .into(),
        "Consulting on internal design systems for 500+ developers.".into(),
      ],
    },
    Experience {
      id: "exp-freelance".into(),
      role: "Fractional Product Lead".into(),
      company: "Stealth SaaS & Fintechs".into(),
      period: "2019–2021".into(),
      description: vec![
        "Helped 5+ startups secure seed funding through high-fidelity UX \
         prototyping."
          .into(),
        "Audited legacy B2B dashboards to improve conversion by 30%.".into(),
      ],
    },
  ]
}

fn fallback_courses() -> Vec<Course> {
  vec![
    Course {
      id: "b2b-mastery".into(),
      title: "B2B Design Mastery".into(),
      description: "The blueprint for designing high-density data platforms and \
                    enterprise SaaS."
        .into(),
      full_description: "Learn how to handle complexity at scale: multi-persona \
                         workflows, design system governance for global products, \
                         and reducing cognitive load in data-heavy environments."
        .into(),
      kind: CourseKind::Session,
      platform: Some("Product Academy Live".into()),
      price: 249.0,
      currency: "USD".into(),
      date: Some("Oct 15, 2025".into()),
      duration: "4 Weeks".into(),
      image: "https://images.unsplash.com/photo-1551288049-bbbda546697a".into(),
      skills: vec!["B2B Logic".into(), "Data Viz".into(), "Design Ops".into()],
      instructor: OWNER_NAME.into(),
      curriculum: vec![
        CurriculumItem {
          title:       "The B2B Mindset".into(),
          description: "Why B2B UX differs from consumer products.".into(),
        },
        CurriculumItem {
          title:       "Information Architecture for Density".into(),
          description: "Handling 1000+ data points on one screen.".into(),
        },
        CurriculumItem {
          title:       "Design System Governance".into(),
          description: "Scaling components across multi-product suites.".into(),
        },
      ],
      ..Default::default()
    },
    Course {
      id: "mvp-fast-track".into(),
      title: "MVP Fast-Track for Founders".into(),
      description: "A 2-week intensive on building funding-ready prototypes.".into(),
      full_description: "For non-technical founders and solo designers: the exact \
                         workflow to go from napkin sketch to a high-fidelity \
                         investor prototype in record time."
        .into(),
      kind: CourseKind::External,
      platform: Some("On-Demand".into()),
      url: Some("https://behance.net/amgedhassan".into()),
      price: 0.0,
      currency: "USD".into(),
      duration: "10 Lessons".into(),
      image: "https://images.unsplash.com/photo-1553877522-43269d4ea984".into(),
      skills: vec![
        "Prototyping".into(),
        "Visual Storytelling".into(),
        "Lean UX".into(),
      ],
      instructor: OWNER_NAME.into(),
      ..Default::default()
    },
  ]
}

fn fallback_mentorship() -> Vec<MentorshipSession> {
  vec![
    MentorshipSession {
      id: "portfolio-audit".into(),
      title: "High-Impact Portfolio Audit".into(),
      duration: "60 Mins".into(),
      price: 150.0,
      description: "For mid-level designers who want to transition into \
                    high-paying B2B roles. We fix your case studies to focus on \
                    ROI and logic."
        .into(),
      topics: vec![
        "Case Study Narrative".into(),
        "Enterprise UX Presentation".into(),
        "Negotiating Rates".into(),
      ],
      ..Default::default()
    },
    MentorshipSession {
      id: "strategic-logic".into(),
      title: "Design Logic & ROI Strategy".into(),
      duration: "90 Mins".into(),
      price: 250.0,
      description: "Master the art of presenting design as a business value \
                    multiplier. Perfect for leads and seniors presenting to \
                    C-suite."
        .into(),
      topics: vec![
        "Stakeholder Alignment".into(),
        "ROI Frameworks".into(),
        "B2B Complexity Management".into(),
      ],
      ..Default::default()
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fallback_is_renderable() {
    let data = fallback_data();
    assert!(!data.is_bootstrap_empty());
    assert!(!data.projects.is_empty());
    assert!(!data.courses.is_empty());
    assert!(!data.mentorship.is_empty());
    assert!(!data.about.title.is_empty());
  }

  #[test]
  fn fallback_server_side_collections_are_empty() {
    let data = fallback_data();
    assert!(data.slots.is_empty());
    assert!(data.bookings.is_empty());
    assert!(data.registrations.is_empty());
    assert!(data.messages.is_empty());
  }

  #[test]
  fn fallback_ids_are_unique() {
    let data = fallback_data();
    let mut ids: Vec<&str> = data
      .projects
      .iter()
      .map(|p| p.id.as_str())
      .chain(data.courses.iter().map(|c| c.id.as_str()))
      .chain(data.mentorship.iter().map(|m| m.id.as_str()))
      .collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
  }
}
