use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use crate::db::connection;
use crate::db::registry::DbRegistry;
use crate::error::CleanlyfeError;
use crate::router::{AppState, app_router};

/// Initialize the application: connect to MongoDB, populate the registry and
/// build the router around it.
///
/// Bootstrap failure is fatal; there is no degraded mode without a database
/// connection.
pub async fn app_init() -> Result<Router, CleanlyfeError> {
    info!("starting application initialization");

    let registry = Arc::new(DbRegistry::new());

    info!("initializing database connection");
    connection::init_db(&registry)
        .await
        .inspect_err(|e| error!(error = %e, "failed to initialize database"))?;

    let state = AppState::new(registry);

    info!("application initialized successfully");
    Ok(app_router(state))
}
