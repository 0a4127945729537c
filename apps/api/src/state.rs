use crate::config::Config;
use crate::preview::hub::PreviewHub;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Debounced live-preview sessions, held in memory only.
    pub previews: PreviewHub,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let previews = PreviewHub::new(
            config.preview_debounce(),
            config.max_preview_sessions,
            config.preview_idle_ttl(),
        );
        AppState { config, previews }
    }
}
