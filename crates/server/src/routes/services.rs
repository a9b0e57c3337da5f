use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::HeaderMap,
    Json,
};
use configs::DecodeMode;
use models::ServiceRecord;
use service::services;
use tracing::{trace, warn};

use super::AppState;
use crate::errors::ApiError;
use crate::observability::{LOOKUP_MISSES_TOTAL, SERVICES_CREATED_TOTAL, SERVICES_DELETED_TOTAL};

/// GET /services
pub async fn list_services(State(state): State<AppState>) -> Json<Vec<ServiceRecord>> {
    Json(services::list_services(state.registry.as_ref()).await)
}

/// GET /services/service/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceRecord>, ApiError> {
    services::get_service(state.registry.as_ref(), &id)
        .await
        .map(Json)
        .map_err(|e| {
            LOOKUP_MISSES_TOTAL.inc();
            ApiError::from(e)
        })
}

/// POST /services/service/:id
///
/// The body is read raw so that decoding leniency is decided by the
/// configured `DecodeMode`, not by the extractor. A body that cannot be read
/// is treated like an undecodable one.
pub async fn create_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ServiceRecord>, ApiError> {
    trace!(%id, ?headers, "create request headers");
    let body = match (body, state.decode_mode) {
        (Ok(body), _) => body,
        (Err(e), DecodeMode::Lenient) => {
            warn!(%id, error = %e, "ignoring unreadable body");
            Bytes::new()
        }
        (Err(e), DecodeMode::Strict) => {
            warn!(%id, error = %e, "rejecting unreadable body");
            return Err(ApiError::BadRequest(e.body_text()));
        }
    };
    let record = services::create_service(state.registry.as_ref(), &id, &body, state.decode_mode).await?;
    SERVICES_CREATED_TOTAL.inc();
    Ok(Json(record))
}

/// DELETE /services/service/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceRecord>, ApiError> {
    match services::delete_service(state.registry.as_ref(), &id).await {
        Ok(removed) => {
            SERVICES_DELETED_TOTAL.inc();
            Ok(Json(removed))
        }
        Err(e) => {
            LOOKUP_MISSES_TOTAL.inc();
            Err(ApiError::from_delete(e))
        }
    }
}
