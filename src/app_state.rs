//! Shared application state injected into all Axum handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::announce::PublicUrlAnnouncer;
use crate::config::RelayConfig;
use crate::domain::Broadcaster;
use crate::service::CommandRelay;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Command relay for all route logic.
    pub relay: Arc<CommandRelay>,
    /// Broadcaster that WebSocket listeners subscribe to.
    pub broadcaster: Broadcaster,
    /// One-shot public URL announcement.
    pub announcer: Arc<PublicUrlAnnouncer>,
    /// Location of the static OpenAPI manifest.
    pub manifest_path: Arc<PathBuf>,
}

impl AppState {
    /// Builds the state for the given configuration.
    #[must_use]
    pub fn new(config: &RelayConfig) -> Self {
        let broadcaster = Broadcaster::new(config.broadcast_capacity);
        Self {
            relay: Arc::new(CommandRelay::new(broadcaster.clone())),
            broadcaster,
            announcer: Arc::new(PublicUrlAnnouncer::new()),
            manifest_path: Arc::new(config.manifest_path.clone()),
        }
    }

    /// Returns the manifest path.
    #[must_use]
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }
}
