//! Notification test endpoint.
//!
//! POST /api/v1/notify/test
//!   Sends the newest commit in the feed to the configured webhook.
//!   400 when no webhook is configured, 404 when there is nothing to send,
//!   502 when the webhook rejects the message.

use axum::{Json, Router, extract::State, routing::post};

use crate::error::{AppError, Result};
use crate::feed;
use crate::models::NotifyResponse;
use crate::state::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/notify/test", post(send_test_notification))
        .with_state(state)
}

async fn send_test_notification(State(state): State<SharedState>) -> Result<Json<NotifyResponse>> {
    if !state.notifier.is_configured() {
        return Err(AppError::NotificationNotConfigured);
    }

    let latest = feed::latest_commits(&state, 1, state.include_private(None)).await?;
    let Some(commit) = latest.commits.into_iter().next() else {
        return Err(AppError::NotFound("no commit to send".to_string()));
    };

    let sha = commit.short_sha().to_string();
    let delivered = state
        .notifier
        .dispatch(commit)
        .await
        .map_err(|e| AppError::Internal(format!("notification task failed: {}", e)))?;

    if !delivered {
        return Err(AppError::NotificationFailed);
    }

    Ok(Json(NotifyResponse {
        success: true,
        message: format!("Notification sent for {}", sha),
    }))
}
