//! Application context wiring both controllers together.
//!
//! One [`AppState`] is constructed at startup and passed by reference to
//! whatever layer wires up UI events. There is no module-level mutable
//! state anywhere in the crate.

use std::sync::Arc;

use crate::auth::SessionController;
use crate::charts::ChartRegistry;
use crate::config::Config;
use crate::error::AppResult;
use crate::render::{ChartRenderer, TracingRenderer};
use crate::store::{JsonFileStore, SessionStore};

/// Application state holding both controllers.
///
/// The controllers are independent leaves: they share no state and never
/// call each other.
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Session controller for the mock-auth widget.
    pub session: SessionController,
    /// Chart registry for the chart widget.
    pub charts: ChartRegistry,
}

impl AppState {
    /// Create application state with the default file-backed session store
    /// and the logging renderer.
    pub fn new(config: Config) -> AppResult<Self> {
        let store: Arc<dyn SessionStore> = Arc::new(JsonFileStore::new(&config.store.path));
        Self::with_parts(config, store, Box::new(TracingRenderer))
    }

    /// Create application state with explicit boundary implementations.
    pub fn with_parts(
        config: Config,
        store: Arc<dyn SessionStore>,
        renderer: Box<dyn ChartRenderer>,
    ) -> AppResult<Self> {
        let session = SessionController::new(store, &config.auth);
        let charts = ChartRegistry::new(&config.charts, renderer)?;
        Ok(Self {
            config,
            session,
            charts,
        })
    }
}

/// Shared application state handle
pub type SharedState = Arc<AppState>;
