//! `folio` — terminal client for the portfolio platform.
//!
//! # Usage
//!
//! ```
//! folio --url http://localhost:4000
//! folio --config ~/.config/folio/config.toml
//! folio login            # deep link straight to the admin gate
//! ```

mod app;
mod assist;
mod client;
mod dashboard;
mod forms;
mod router;
mod store;
mod ui;

use std::{
  io,
  time::{Duration, Instant},
};

use anyhow::{Context, Result};
use app::App;
use assist::Assistant;
use clap::Parser;
use client::{Gateway, change_channel};
use crossterm::{
  event::{self, Event},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use router::Router;
use serde::Deserialize;
use store::DataStore;

/// How often the connectivity probe refreshes the online indicator.
const PROBE_INTERVAL: Duration = Duration::from_secs(30);

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Terminal client for the portfolio platform")]
struct Args {
  /// Path to a TOML config file (url, gemini_api_key).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the portfolio backend (default: http://localhost:4000).
  #[arg(long, env = "FOLIO_URL")]
  url: Option<String>,

  /// Gemini API key for the assistant chat.
  #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
  gemini_key: Option<String>,

  /// Optional startup view; only `login` is restorable.
  view: Option<String>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url:            String,
  #[serde(default)]
  gemini_api_key: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  // Log to a file when asked; stderr would fight the alternate screen.
  if let Ok(filter) = std::env::var("FOLIO_LOG") {
    let file = std::fs::File::create("folio.log").context("creating folio.log")?;
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(std::sync::Mutex::new(file))
      .with_ansi(false)
      .init();
  }

  // Load config file if provided.
  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let base_url = args
    .url
    .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
    .unwrap_or_else(|| "http://localhost:4000".to_string());
  let gemini_key = args
    .gemini_key
    .or_else(|| (!file_cfg.gemini_api_key.is_empty()).then(|| file_cfg.gemini_api_key.clone()));

  let (changed_tx, changed_rx) = change_channel();
  let gateway = Gateway::new(base_url, changed_tx)?;
  let store = DataStore::new(changed_rx);
  let assistant = Assistant::new(gemini_key)?;

  let initial = Router::deep_link(args.view.as_deref().unwrap_or(""));
  let mut app = App::new(gateway, store, assistant, initial);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Load initial data; the fetch falls back to bundled content on failure.
  app.reload().await;
  app.probe().await;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

// ─── Event loop ───────────────────────────────────────────────────────────────

async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
) -> Result<()> {
  let mut last_probe = Instant::now();

  loop {
    let now = Instant::now();
    terminal
      .draw(|f| ui::draw(f, app, now))
      .context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    let now = Instant::now();
    if let Some(evt) = maybe_event {
      match evt {
        Event::Key(key) => {
          let cont = app.handle_key(key, now).await?;
          if !cont {
            break;
          }
        }
        Event::Resize(_, _) => {
          // Terminal will redraw on next iteration.
        }
        _ => {}
      }
    }

    // Commit due transitions, expire banners, honor change broadcasts.
    app.tick(now).await;

    if now.duration_since(last_probe) >= PROBE_INTERVAL {
      app.probe().await;
      last_probe = now;
    }
  }

  Ok(())
}
