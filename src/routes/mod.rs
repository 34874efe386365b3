//! API route handlers - maps HTTP endpoints to feed operations.
//!
//! Each submodule defines routes for a feature area:
//! - `account`: Account profile and repository statistics
//! - `config`: Presentation toggles
//! - `repos`: Repository listing and single-repository commits
//! - `changelog`: Aggregated, paginated, date-grouped feed
//! - `notify`: Webhook test delivery

pub mod account;
pub mod changelog;
pub mod config;
pub mod notify;
pub mod repos;

use axum::Router;

use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(account::routes(state.clone()))
        .merge(config::routes(state.clone()))
        .merge(repos::routes(state.clone()))
        .merge(changelog::routes(state.clone()))
        .merge(notify::routes(state))
}
