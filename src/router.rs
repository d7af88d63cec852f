use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::db::registry::DbRegistry;
use crate::handlers::health::health_handler;
use crate::handlers::pages::{index_handler, test_handler};

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<DbRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<DbRegistry>) -> Self {
        Self { registry }
    }
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/test", get(test_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
