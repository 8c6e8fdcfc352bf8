// src/state.rs

use crate::history::HistoryStore;

/// Shared application state. `history` is `None` when the database could not
/// be opened at startup; the app then serves calculations statelessly.
#[derive(Clone)]
pub struct AppState {
    pub history: Option<HistoryStore>,
}

impl AppState {
    pub fn new(history: Option<HistoryStore>) -> Self {
        Self { history }
    }
}
