use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    models::activity::{ActivityGroupPatch, CreateActivityRequest},
    models::patch::Patch,
    models::response::{Envelope, ValidationError},
    routes::{bad_request, store_error, ApiResponse},
    services::activities::ActivityService,
    AppState,
};

pub async fn list_activities(State(state): State<AppState>) -> ApiResponse {
    ActivityService::get_all(&state.db)
        .await
        .map(|groups| (StatusCode::OK, Json(Envelope::success_many(&groups))))
        .map_err(store_error)
}

pub async fn get_activity(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResponse {
    match ActivityService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
    {
        Some(group) => Ok((StatusCode::OK, Json(Envelope::success_one(&group)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(Envelope::not_found("Activity", id)),
        )),
    }
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(body): Json<CreateActivityRequest>,
) -> ApiResponse {
    let title = match body.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => return Ok(bad_request(ValidationError::EmptyTitle)),
    };
    let email = match body.email.as_deref() {
        Some(email) => email,
        None => return Ok(bad_request(ValidationError::MissingField("email"))),
    };

    ActivityService::insert(&state.db, title, email)
        .await
        .map(|group| (StatusCode::CREATED, Json(Envelope::success_one(&group))))
        .map_err(store_error)
}

pub async fn patch_activity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<ActivityGroupPatch>,
) -> ApiResponse {
    // Title is the only patchable field, so it must be supplied non-empty.
    match &patch.title {
        Patch::Value(title) if !title.is_empty() => {}
        _ => return Ok(bad_request(ValidationError::EmptyTitle)),
    }

    if ActivityService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
        .is_none()
    {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(Envelope::not_found("Activity", id)),
        ));
    }

    ActivityService::update_by_id(&state.db, id, &patch)
        .await
        .map_err(store_error)?;

    match ActivityService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
    {
        Some(group) => Ok((StatusCode::OK, Json(Envelope::success_one(&group)))),
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(Envelope::not_found("Activity", id)),
        )),
    }
}

pub async fn delete_activity(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResponse {
    if ActivityService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
        .is_none()
    {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(Envelope::not_found("Activity", id)),
        ));
    }

    ActivityService::delete_by_id(&state.db, id)
        .await
        .map(|_| (StatusCode::OK, Json(Envelope::success_empty())))
        .map_err(store_error)
}
