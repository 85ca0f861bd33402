use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Liveness probe: one round trip to the store.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    if let Err(e) = sqlx::query("SELECT 1").execute(&state.db).await {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "error", "database": e.to_string() })),
        );
    }
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
