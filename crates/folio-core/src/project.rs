//! Case-study projects.

use serde::{Deserialize, Serialize};

/// A measured result shown on a case-study page ("95% fewer manual errors").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyOutcome {
  pub label:       String,
  pub value:       String,
  pub description: String,
}

/// One step of the design process narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
  pub step:        String,
  pub description: String,
}

/// A portfolio project. Ids are client-generated strings (`proj-<millis>`)
/// and are the upsert key on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:               String,
  pub title:            String,
  pub description:      String,
  #[serde(default)]
  pub long_description: String,
  #[serde(default)]
  pub challenge:        String,
  #[serde(default)]
  pub solution:         String,
  #[serde(default)]
  pub impact:           String,
  #[serde(default)]
  pub image:            String,
  #[serde(default)]
  pub role:             String,
  #[serde(default)]
  pub timeline:         String,
  #[serde(default)]
  pub tools:            Vec<String>,
  #[serde(default)]
  pub tags:             Vec<String>,
  #[serde(default)]
  pub is_featured:      bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub audience:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub behance_url:      Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub research_insights: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub lessons_learned:  Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub process:          Vec<ProcessStep>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub outcomes:         Vec<CaseStudyOutcome>,
}
