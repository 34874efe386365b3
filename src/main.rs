//! Commit changelog - a live, date-grouped feed of every repository an
//! account owns
//!
//! # Usage
//! ```bash
//! changelog-feed --owner octocat                  # Public repositories only
//! GITHUB_TOKEN=... changelog-feed --owner octocat --show-private
//! changelog-feed --owner octocat --port 8080
//! ```
//!
//! Every request re-aggregates from the upstream API; nothing is cached or
//! persisted between requests.

mod config;
mod error;
mod feed;
mod github;
mod models;
mod notify;
mod routes;
mod state;

#[cfg(test)]
mod test_utils;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Cli;
use github::GitHubClient;
use notify::Notifier;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::load();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "changelog_feed=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = GitHubClient::new(&cli.api_url, cli.token.clone(), cli.timeout())?;
    if !client.has_token() {
        tracing::warn!("No API token configured; only public repositories are visible");
    }
    let notifier = Notifier::new(cli.webhook_url.clone(), cli.notifications, cli.timeout())?;

    let settings = cli.settings();
    let state = Arc::new(AppState {
        upstream: Arc::new(client),
        notifier,
        settings,
    });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    println!();
    println!("  ┌─────────────────────────────────────────────┐");
    println!("  │               Commit Changelog              │");
    println!("  └─────────────────────────────────────────────┘");
    println!();
    println!("  Account:        {}", state.settings.owner);
    println!("  Private repos:  {}", state.settings.show_private);
    println!("  Notifications:  {}", state.notifier.is_enabled());
    println!("  Server:         http://{}", addr);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
