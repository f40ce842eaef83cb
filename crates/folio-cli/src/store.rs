//! Client-side portfolio cache.
//!
//! Holds the single [`AsyncState`]-wrapped snapshot and the receiving end
//! of the Gateway's "data changed" channel. The snapshot is replaced
//! wholesale on every reload; nothing is ever patched in place.

use folio_core::{AsyncState, PortfolioData};
use tokio::sync::mpsc;

use crate::client::Gateway;

/// The one shared mutable resource of the client: the latest aggregate
/// snapshot plus the change subscription.
///
/// Exactly one `DataStore` exists for the lifetime of the application
/// root; it owns the only receiver, so there is no subscription leak
/// across view changes.
pub struct DataStore {
  state:      AsyncState<PortfolioData>,
  changed_rx: mpsc::UnboundedReceiver<()>,
}

impl DataStore {
  pub fn new(changed_rx: mpsc::UnboundedReceiver<()>) -> Self {
    Self { state: AsyncState::default(), changed_rx }
  }

  /// Fetch the aggregate and replace the snapshot.
  ///
  /// Concurrent reloads are not deduplicated; the last response to resolve
  /// wins, which is fine because reads are idempotent.
  pub async fn load(&mut self, gateway: &Gateway) {
    self.state.begin();
    let data = gateway.fetch().await;
    self.state.succeed(data);
  }

  /// True if any change broadcasts arrived since the last call. Coalesces
  /// a burst of signals into one reload.
  pub fn take_change_signal(&mut self) -> bool {
    let mut changed = false;
    while self.changed_rx.try_recv().is_ok() {
      changed = true;
    }
    changed
  }

  pub fn state(&self) -> &AsyncState<PortfolioData> {
    &self.state
  }

  pub fn data(&self) -> Option<&PortfolioData> {
    self.state.data()
  }

  /// Manual-reload escape hatch for the top-level "system offline" screen.
  pub fn reset_error(&mut self) {
    if self.state.error().is_some() {
      self.state = AsyncState::default();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::{Gateway, change_channel};

  fn offline() -> (Gateway, DataStore) {
    let (tx, rx) = change_channel();
    let gateway = Gateway::new("http://127.0.0.1:9".into(), tx).unwrap();
    (gateway, DataStore::new(rx))
  }

  #[tokio::test]
  async fn load_terminates_with_data_even_offline() {
    let (gateway, mut store) = offline();
    store.load(&gateway).await;

    let state = store.state();
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert!(state.data().is_some());
  }

  #[tokio::test]
  async fn change_signals_coalesce_into_one_reload() {
    let (gateway, mut store) = offline();
    // Three rapid mutations → three broadcasts.
    gateway
      .remove(folio_core::entity::Collection::Projects, "a")
      .await;
    gateway
      .remove(folio_core::entity::Collection::Projects, "b")
      .await;
    gateway
      .remove(folio_core::entity::Collection::Projects, "c")
      .await;

    assert!(store.take_change_signal());
    // Signals were drained — no second reload is pending.
    assert!(!store.take_change_signal());
  }
}
