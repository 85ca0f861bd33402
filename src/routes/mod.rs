pub mod activities;
pub mod health;
pub mod todos;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

use crate::models::response::{Envelope, ValidationError};

/// Every handler resolves to an envelope, or to the generic failure body
/// when the store itself errors.
pub(crate) type ApiResponse = Result<(StatusCode, Json<Envelope>), (StatusCode, Json<Value>)>;

pub(crate) fn store_error(err: anyhow::Error) -> (StatusCode, Json<Value>) {
    tracing::error!("store failure: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
}

pub(crate) fn bad_request(err: ValidationError) -> (StatusCode, Json<Envelope>) {
    (StatusCode::BAD_REQUEST, Json(Envelope::bad_request(&err)))
}
