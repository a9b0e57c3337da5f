use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static SERVICES_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "service_registry_services_created_total",
        "Total service records appended"
    )
    .expect("register services_created_total")
});

pub static SERVICES_DELETED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "service_registry_services_deleted_total",
        "Total service records removed"
    )
    .expect("register services_deleted_total")
});

pub static LOOKUP_MISSES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "service_registry_lookup_misses_total",
        "Get or delete requests for an unknown id"
    )
    .expect("register lookup_misses_total")
});

/// Force registration so `/metrics` lists every counter from the first scrape.
pub fn init_metrics() {
    Lazy::force(&SERVICES_CREATED_TOTAL);
    Lazy::force(&SERVICES_DELETED_TOTAL);
    Lazy::force(&LOOKUP_MISSES_TOTAL);
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
