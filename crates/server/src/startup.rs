use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::registry::MemoryRegistry;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::observability;
use crate::routes::{self, AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Registry and router for the given configuration.
pub fn build_app(cfg: &AppConfig) -> (Arc<MemoryRegistry>, Router) {
    let registry = MemoryRegistry::from_config(&cfg.registry);
    info!(
        seeded = cfg.registry.seed,
        people = registry.people().len(),
        decode_mode = ?cfg.registry.decode_mode,
        "registry initialized"
    );
    let state = AppState::new(registry.clone(), cfg.registry.decode_mode);
    (registry, routes::build_router(state, build_cors()))
}

/// Serve `app` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server.
/// A bind failure is returned to the caller; there is no retry.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    observability::init_metrics();
    let (_registry, app) = build_app(&cfg);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Starting REST Server on port {}...", addr.port());
    serve(listener, app).await
}
