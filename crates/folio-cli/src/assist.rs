//! The AI assistant: a thin Gemini `generateContent` client plus the chat
//! panel state.
//!
//! Every call is grounded in the current portfolio snapshot via a system
//! instruction, so answers stay on-topic. The assistant never surfaces an
//! error: a missing credential or a failed call each map to a fixed
//! in-character reply.

use std::time::Duration;

use anyhow::{Context, Result};
use folio_core::{context::system_instruction, portfolio::PortfolioData};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

const MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Shown when no API key is configured.
const MISSING_KEY_REPLY: &str = "I'm sorry, my neural link is offline because \
  the API key is missing. Amgad is likely working on a complex design system \
  right now - try emailing him!";

/// Shown when the provider call fails for any reason.
const PROVIDER_ERROR_REPLY: &str = "I'm sorry, I'm having trouble connecting \
  to Amgad's brain right now. Please try again or reach out to him directly \
  via email!";

#[derive(Deserialize)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
  content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
  #[serde(default)]
  parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
  #[serde(default)]
  text: String,
}

/// Gemini-backed question answering over the portfolio snapshot.
#[derive(Clone)]
pub struct Assistant {
  client:   Client,
  endpoint: String,
  api_key:  Option<String>,
}

impl Assistant {
  /// `api_key` comes from configuration or the `GEMINI_API_KEY`
  /// environment variable; `None` degrades to the scripted offline reply.
  pub fn new(api_key: Option<String>) -> Result<Self> {
    Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_owned())
  }

  pub fn with_endpoint(api_key: Option<String>, endpoint: String) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, endpoint, api_key })
  }

  /// Answer one visitor question. Infallible by contract: any failure maps
  /// to a fixed apologetic reply.
  pub async fn ask(&self, prompt: &str, data: &PortfolioData) -> String {
    let api_key = match &self.api_key {
      Some(key) => key.clone(),
      None => {
        warn!("assistant credential missing, serving scripted reply");
        return MISSING_KEY_REPLY.to_owned();
      }
    };

    match self.generate(&api_key, prompt, data).await {
      Ok(text) => text,
      Err(e) => {
        warn!("assistant call failed: {e:#}");
        PROVIDER_ERROR_REPLY.to_owned()
      }
    }
  }

  async fn generate(
    &self,
    api_key: &str,
    prompt: &str,
    data: &PortfolioData,
  ) -> Result<String> {
    let url = format!(
      "{}/models/{MODEL}:generateContent",
      self.endpoint.trim_end_matches('/')
    );
    let body = json!({
      "system_instruction": {
        "parts": [{ "text": system_instruction(data) }]
      },
      "contents": [{
        "parts": [{ "text": prompt }]
      }]
    });

    let response = self
      .client
      .post(url)
      .header("x-goog-api-key", api_key)
      .json(&body)
      .send()
      .await
      .context("generateContent request failed")?;

    if !response.status().is_success() {
      anyhow::bail!("generateContent → {}", response.status());
    }

    let parsed: GenerateResponse =
      response.json().await.context("decoding generateContent")?;
    let text = parsed
      .candidates
      .into_iter()
      .next()
      .map(|c| {
        c.content
          .parts
          .into_iter()
          .map(|p| p.text)
          .collect::<String>()
      })
      .unwrap_or_default();

    if text.is_empty() {
      anyhow::bail!("empty completion");
    }
    Ok(text)
  }
}

// ─── Chat panel ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
  Visitor,
  Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatLine {
  pub role: ChatRole,
  pub text: String,
}

/// Ephemeral state of the floating chat overlay.
#[derive(Default)]
pub struct ChatPanel {
  pub open:    bool,
  pub input:   String,
  pub history: Vec<ChatLine>,
  pub busy:    bool,
}

impl ChatPanel {
  pub fn toggle(&mut self) {
    self.open = !self.open;
  }

  /// Take the typed question, echo it into the history and mark the panel
  /// busy until the reply lands. Empty input is ignored.
  pub fn take_question(&mut self) -> Option<String> {
    if self.busy || self.input.trim().is_empty() {
      return None;
    }
    let question = std::mem::take(&mut self.input);
    self.history.push(ChatLine {
      role: ChatRole::Visitor,
      text: question.trim().to_owned(),
    });
    self.busy = true;
    Some(question)
  }

  pub fn receive(&mut self, reply: String) {
    self.history.push(ChatLine { role: ChatRole::Assistant, text: reply });
    self.busy = false;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use folio_core::fallback::fallback_data;

  #[tokio::test]
  async fn missing_key_yields_scripted_reply() {
    let assistant = Assistant::new(None).unwrap();
    let reply = assistant.ask("Who is Amgad?", &fallback_data()).await;
    assert!(reply.contains("API key is missing"));
  }

  #[tokio::test]
  async fn provider_failure_yields_apologetic_reply() {
    // Loopback port 9 refuses connections, so the call fails fast.
    let assistant = Assistant::with_endpoint(
      Some("test-key".into()),
      "http://127.0.0.1:9".into(),
    )
    .unwrap();
    let reply = assistant.ask("Who is Amgad?", &fallback_data()).await;
    assert!(reply.contains("having trouble connecting"));
  }

  #[test]
  fn chat_panel_ignores_empty_and_busy_input() {
    let mut panel = ChatPanel::default();
    panel.input = "   ".into();
    assert!(panel.take_question().is_none());

    panel.input = "What courses do you offer?".into();
    let question = panel.take_question().unwrap();
    assert_eq!(question, "What courses do you offer?");
    assert!(panel.busy);
    assert_eq!(panel.history.len(), 1);

    // Busy panel refuses a second question until the reply lands.
    panel.input = "another".into();
    assert!(panel.take_question().is_none());

    panel.receive("We offer two courses.".into());
    assert!(!panel.busy);
    assert_eq!(panel.history.len(), 2);
  }
}
