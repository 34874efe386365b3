use axum::{Json, Router, extract::State, routing::get};

use crate::models::ConfigResponse;
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/config", get(get_config))
        .with_state(state)
}

async fn get_config(State(state): State<SharedState>) -> Json<ConfigResponse> {
    let settings = &state.settings;
    Json(ConfigResponse {
        show_private_repos: settings.show_private,
        show_api_button: settings.show_api_button,
        default_lang: settings.default_lang.clone(),
        notifications_enabled: state.notifier.is_enabled(),
    })
}
