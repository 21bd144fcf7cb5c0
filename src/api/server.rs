use axum::{Router, middleware, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{auth, home};
use crate::config::Config;
use crate::identity::PrincipalResolver;
use crate::identity::github::GitHubResolver;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn PrincipalResolver>,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/", get(home::index))
        .route(
            "/home",
            get(home::home).route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth::resolve_principal,
            )),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        resolver: Arc::new(GitHubResolver::new(
            config.github_api_url.clone(),
            config.github_user_agent.clone(),
        )),
    });

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
