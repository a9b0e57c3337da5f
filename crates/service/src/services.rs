//! Registry operations as exposed by the HTTP layer.

use configs::DecodeMode;
use models::{errors::ModelError, ServiceRecord};
use tracing::{debug, error, info, trace, warn};

use crate::{errors::ServiceError, registry::ServiceRepository};

/// All records in insertion order.
pub async fn list_services(repo: &dyn ServiceRepository) -> Vec<ServiceRecord> {
    let services = repo.list().await;
    debug!(count = services.len(), "listing services");
    services
}

/// First record whose id equals `id`.
pub async fn get_service(repo: &dyn ServiceRepository, id: &str) -> Result<ServiceRecord, ServiceError> {
    repo.get(id).await.ok_or_else(|| {
        debug!(%id, "service lookup missed");
        ServiceError::not_found(id)
    })
}

/// Decode `body` into a record, force its id to `id` and append it.
///
/// An existing record with the same id is left in place; the new one is
/// appended after it. A blank body always gives an empty record. Other
/// decode failures give an empty record in [`DecodeMode::Lenient`] and a
/// [`ServiceError::Validation`] in [`DecodeMode::Strict`].
pub async fn create_service(
    repo: &dyn ServiceRepository,
    id: &str,
    body: &[u8],
    mode: DecodeMode,
) -> Result<ServiceRecord, ServiceError> {
    info!(%id, "creating service");
    trace!(%id, body = %String::from_utf8_lossy(body), "create request body");

    let mut record = match ServiceRecord::from_json(body) {
        Ok(record) => record,
        Err(ModelError::EmptyBody) => ServiceRecord::default(),
        Err(e) => match mode {
            DecodeMode::Lenient => {
                warn!(%id, error = %e, "ignoring undecodable body");
                ServiceRecord::default()
            }
            DecodeMode::Strict => {
                warn!(%id, error = %e, "rejecting undecodable body");
                return Err(ServiceError::Validation(e.to_string()));
            }
        },
    };
    record.id = id.to_string();
    repo.append(record.clone()).await;
    Ok(record)
}

/// Remove and return the first record whose id equals `id`.
pub async fn delete_service(repo: &dyn ServiceRepository, id: &str) -> Result<ServiceRecord, ServiceError> {
    match repo.remove_first(id).await {
        Some(removed) => {
            info!(id = %removed.id, "deleting service");
            trace!(record = ?removed, "deleted record");
            Ok(removed)
        }
        None => {
            error!(%id, "{} Not found!", id);
            Err(ServiceError::not_found(id))
        }
    }
}
