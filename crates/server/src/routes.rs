use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Json, Router};
use configs::DecodeMode;
use service::registry::ServiceRepository;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::observability;

pub mod services;

/// Shared handler state: the registry plus the body decoding policy.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ServiceRepository>,
    pub decode_mode: DecodeMode,
}

impl AppState {
    pub fn new(registry: Arc<dyn ServiceRepository>, decode_mode: DecodeMode) -> Self {
        Self { registry, decode_mode }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn metrics() -> (StatusCode, String) {
    observability::encode_metrics()
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let registry_routes = Router::new()
        .route("/services", get(services::list_services))
        .route(
            "/services/service/:id",
            get(services::get_service)
                .post(services::create_service)
                .delete(services::delete_service)
                // create 读取任意大小的 body
                .layer(DefaultBodyLimit::disable()),
        );

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    registry_routes
        .merge(ops)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx 以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
