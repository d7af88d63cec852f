use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::db::connection::test_connection;
use crate::error::CleanlyfeError;
use crate::router::AppState;

/// Liveness endpoint: resolve the client from the registry and ping it.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, CleanlyfeError> {
    let client = state.registry.client()?;
    test_connection(&client).await?;
    Ok(Json(json!({ "status": "ok" })))
}
