//! HTTP API exposing the Sleeper lookups and the questionable-starter report.
//!
//! Every endpoint is reachable both at its bare path (`/health`,
//! `/sleeper/...`) and under the `/api` prefix.

pub mod response;
pub mod routes;

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::{config::Config, error::Result, sleeper::SleeperClient};

#[cfg(test)]
mod tests;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: SleeperClient,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(client: SleeperClient) -> Self {
        Self {
            client,
            started_at: Instant::now(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route("/api", get(routes::api_info));

    for prefix in ["", "/api"] {
        router = router
            .route(&format!("{prefix}/health"), get(routes::health))
            .route(
                &format!("{prefix}/sleeper/user/{{username}}"),
                get(routes::get_user),
            )
            .route(
                &format!("{prefix}/sleeper/user/{{username}}/leagues"),
                get(routes::get_leagues),
            )
            .route(
                &format!("{prefix}/sleeper/user/{{username}}/questionable"),
                get(routes::get_questionable),
            )
            .route(
                &format!("{prefix}/sleeper/league/{{league_id}}/roster/{{user_id}}"),
                get(routes::get_roster),
            )
            .route(
                &format!("{prefix}/sleeper/players/status"),
                post(routes::post_players_status),
            );
    }

    router
        .fallback(routes::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind to `config.port` on all interfaces and serve until Ctrl-C.
pub async fn serve(config: &Config) -> Result<()> {
    let client = SleeperClient::new(config)?;
    let app = router(AppState::new(client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, api_base = %config.api_base, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler, run until the process is killed.
            warn!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    }
}
