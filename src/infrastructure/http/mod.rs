pub mod request_id;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, speech::SpeechController};
use crate::error::AppResult;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

/// Build the local gateway routes
pub fn build_router(speech_controller: Arc<SpeechController>) -> Router {
    let speech_routes = Router::new()
        .route("/speech", post(SpeechController::synthesize))
        .with_state(speech_controller);

    Router::new()
        .route("/health", get(health::health))
        .merge(speech_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the local HTTP gateway
pub async fn start_http_server(
    config: Arc<Config>,
    speech_controller: Arc<SpeechController>,
) -> AppResult<()> {
    let app = build_router(speech_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Local gateway listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
