//! Entry point for the Annual Leave Engine server.
//!
//! The bind address is read from `LEAVE_ENGINE_BIND_ADDR` (default
//! `127.0.0.1:3000`). When `LEAVE_ENGINE_RULES` names a YAML file, or a
//! directory holding `rules.yaml`, that catalog is served; otherwise the
//! built-in catalog is used. Log filtering follows `RUST_LOG`.

use leave_engine::api::{AppState, create_router};
use leave_engine::config::{ConfigLoader, RuleCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match std::env::var("LEAVE_ENGINE_RULES") {
        Ok(path) => ConfigLoader::load(&path)?.into_catalog(),
        Err(_) => {
            info!("LEAVE_ENGINE_RULES not set, serving built-in rule catalog");
            RuleCatalog::builtin().clone()
        }
    };

    let addr =
        std::env::var("LEAVE_ENGINE_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, rules = catalog.len(), "Annual Leave Engine listening");

    axum::serve(listener, create_router(AppState::new(catalog))).await?;
    Ok(())
}
