use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use shared::{
    error::{ApiError, ErrorCode},
    protocol::PlaceholderPayload,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let addr = settings.bind_addr()?;
    let app = build_router(Arc::new(AppState::default()), settings.cors_enabled);

    info!(%addr, cors = settings.cors_enabled, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, cors_enabled: bool) -> Router {
    let router = Router::new()
        .route("/", get(greeting).post(greeting))
        .route("/data", get(data))
        .route("/healthz", get(healthz))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn greeting(State(state): State<Arc<AppState>>) -> Json<PlaceholderPayload> {
    Json(state.greeting.clone())
}

async fn data(State(state): State<Arc<AppState>>) -> Json<PlaceholderPayload> {
    Json(state.data.clone())
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no route for {}", uri.path()),
        )),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
