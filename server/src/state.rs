//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay is the only shared resource: every request is otherwise stateless
//! (datasets are static, no persistence, no session store).

use std::sync::Arc;

use crate::relay::ChatRelay;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional chat relay. `None` if relay env vars are not configured.
    pub relay: Option<Arc<dyn ChatRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn ChatRelay>>) -> Self {
        Self { relay }
    }
}
