//! Shared, read-only per-process state handed to every route.

use std::sync::Arc;
use std::time::Duration;

use crate::github::UpstreamApi;
use crate::notify::Notifier;

/// Immutable settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub owner: String,
    pub show_private: bool,
    pub show_api_button: bool,
    pub default_lang: String,
    /// Minimum number of commits requested per repository
    pub per_repo_limit: usize,
    pub fetch_timeout: Duration,
}

pub struct AppState {
    pub upstream: Arc<dyn UpstreamApi>,
    pub notifier: Notifier,
    pub settings: Settings,
}

impl AppState {
    /// Visibility policy for one request. A request can narrow the
    /// configured policy but never widen it.
    pub fn include_private(&self, requested: Option<bool>) -> bool {
        self.settings.show_private && requested.unwrap_or(true)
    }
}

pub type SharedState = Arc<AppState>;
