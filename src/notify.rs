//! Outbound commit notifications to a Discord-compatible webhook.
//!
//! The sink is optional. Without a webhook URL every call is a no-op that
//! reports `false`; delivery failures are logged and reported the same way.
//! Nothing here is retried and nothing raises into the feed pipeline.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::models::Commit;

const BOT_NAME: &str = "Commit Changelog";
const BOT_AVATAR: &str = "https://github.githubassets.com/images/modules/logos_page/GitHub-Mark.png";
const EMBED_COLOR: u32 = 0x5865F2;

#[derive(Debug, Clone, Serialize)]
pub struct WebhookMessage {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    /// Deep link to the commit; absent for private repositories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<EmbedField>,
    pub timestamp: DateTime<Utc>,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

fn field(name: &str, value: impl Into<String>) -> EmbedField {
    EmbedField {
        name: name.to_string(),
        value: value.into(),
        inline: true,
    }
}

pub fn build_message(commit: &Commit) -> WebhookMessage {
    let description = match commit.summary() {
        "" => "No commit message".to_string(),
        summary => summary.to_string(),
    };

    let url = if !commit.repo.is_private && !commit.commit_url.is_empty() {
        Some(commit.commit_url.clone())
    } else {
        None
    };

    WebhookMessage {
        username: BOT_NAME.to_string(),
        avatar_url: BOT_AVATAR.to_string(),
        embeds: vec![Embed {
            title: format!("New commit: {}", commit.repo.name),
            description,
            color: EMBED_COLOR,
            url,
            fields: vec![
                field("Author", commit.author_name.as_str()),
                field("Repository", commit.repo.name.as_str()),
                field("SHA", format!("`{}`", commit.short_sha())),
            ],
            timestamp: commit.author_date,
            footer: EmbedFooter {
                text: BOT_NAME.to_string(),
            },
        }],
    }
}

#[derive(Clone)]
pub struct Notifier {
    http: Client,
    webhook_url: Option<String>,
    enabled: bool,
}

impl Notifier {
    pub fn new(webhook_url: Option<String>, enabled: bool, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: Client::builder().timeout(timeout).build()?,
            webhook_url: webhook_url.filter(|u| !u.trim().is_empty()),
            enabled,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Whether automatic notifications were switched on in configuration.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.is_configured()
    }

    /// Deliver one commit event. Returns whether the sink accepted it.
    pub async fn notify(&self, commit: &Commit) -> bool {
        let Some(url) = &self.webhook_url else {
            tracing::info!("Webhook URL not configured, skipping notification");
            return false;
        };

        let message = build_message(commit);
        match self.http.post(url).json(&message).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Notification sent for {}", commit.short_sha());
                true
            }
            Ok(response) => {
                tracing::warn!(
                    "Notification for {} rejected: {}",
                    commit.short_sha(),
                    response.status()
                );
                false
            }
            Err(e) => {
                tracing::warn!("Notification for {} failed: {}", commit.short_sha(), e);
                false
            }
        }
    }

    /// Run `notify` on its own task so the caller never waits on the sink
    /// unless it awaits the handle.
    pub fn dispatch(&self, commit: Commit) -> JoinHandle<bool> {
        let notifier = self.clone();
        tokio::spawn(async move { notifier.notify(&commit).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{commit_at, repo_ref};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn public_commit_links_to_commit_page() {
        let commit = commit_at(&repo_ref("alpha", false), "abcdef1234", "2024-01-02T10:00:00Z");
        let json = serde_json::to_value(build_message(&commit)).expect("serializes");

        let embed = &json["embeds"][0];
        assert_eq!(embed["url"], "https://github.com/octo/alpha/commit/abcdef1234");
        assert_eq!(embed["title"], "New commit: alpha");
        assert_eq!(embed["description"], "Change abcdef1234");
        assert_eq!(embed["fields"][2]["value"], "`abcdef1`");
    }

    #[test]
    fn private_commit_has_no_deep_link() {
        let commit = commit_at(&repo_ref("vault", true), "abcdef1234", "2024-01-02T10:00:00Z");
        let json = serde_json::to_value(build_message(&commit)).expect("serializes");

        let embed = json["embeds"][0].as_object().expect("embed object");
        assert!(!embed.contains_key("url"));
        assert!(!json.to_string().contains("/commit/abcdef1234"));
    }

    #[test]
    fn empty_message_gets_placeholder() {
        let mut commit = commit_at(&repo_ref("alpha", false), "abc", "2024-01-02T10:00:00Z");
        commit.message = String::new();
        assert_eq!(build_message(&commit).embeds[0].description, "No commit message");
    }

    #[tokio::test]
    async fn missing_sink_is_a_no_op() {
        let notifier = Notifier::new(None, true, TIMEOUT).expect("notifier builds");
        let commit = commit_at(&repo_ref("alpha", false), "abc", "2024-01-02T10:00:00Z");

        assert!(!notifier.is_configured());
        assert!(!notifier.is_enabled());
        assert!(!notifier.notify(&commit).await);
    }

    #[tokio::test]
    async fn delivers_embed_to_webhook() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(body_partial_json(serde_json::json!({ "username": BOT_NAME })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = Notifier::new(Some(format!("{}/hook", server.uri())), false, TIMEOUT)
            .expect("notifier builds");
        let commit = commit_at(&repo_ref("alpha", false), "abc", "2024-01-02T10:00:00Z");

        assert!(notifier.dispatch(commit).await.unwrap_or(false));
    }

    #[tokio::test]
    async fn rejected_delivery_reports_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let notifier = Notifier::new(Some(server.uri()), false, TIMEOUT).expect("notifier builds");
        let commit = commit_at(&repo_ref("alpha", false), "abc", "2024-01-02T10:00:00Z");

        assert!(!notifier.notify(&commit).await);
    }
}
