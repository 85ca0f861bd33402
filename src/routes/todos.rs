use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    models::patch::Patch,
    models::response::{Envelope, ValidationError},
    models::todo::{CreateTodoRequest, TodoItemPatch},
    routes::{bad_request, store_error, ApiResponse},
    services::todos::TodoService,
    AppState,
};

#[derive(Deserialize)]
pub struct TodoListQuery {
    pub activity_group_id: Option<i32>,
}

/// GET /todo-items?activity_group_id=N
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListQuery>,
) -> ApiResponse {
    let todos = match params.activity_group_id {
        Some(activity_group_id) => {
            TodoService::get_all_by_activity(&state.db, activity_group_id).await
        }
        None => TodoService::get_all(&state.db).await,
    };
    todos
        .map(|todos| (StatusCode::OK, Json(Envelope::success_many(&todos))))
        .map_err(store_error)
}

pub async fn get_todo(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResponse {
    match TodoService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
    {
        Some(todo) => Ok((StatusCode::OK, Json(Envelope::success_one(&todo)))),
        None => Ok((StatusCode::NOT_FOUND, Json(Envelope::not_found("Todo", id)))),
    }
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> ApiResponse {
    let title = match body.title.as_deref() {
        Some(title) if !title.is_empty() => title,
        _ => return Ok(bad_request(ValidationError::EmptyTitle)),
    };
    let activity_group_id = match body.activity_group_id {
        Some(activity_group_id) => activity_group_id,
        None => {
            return Ok(bad_request(ValidationError::MissingField(
                "activity_group_id",
            )))
        }
    };

    TodoService::insert(&state.db, activity_group_id, title)
        .await
        .map(|todo| (StatusCode::CREATED, Json(Envelope::success_one(&todo))))
        .map_err(store_error)
}

pub async fn patch_todo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<TodoItemPatch>,
) -> ApiResponse {
    // Title may be left out entirely, but a supplied title must be non-empty.
    match &patch.title {
        Patch::Absent => {}
        Patch::Value(title) if !title.is_empty() => {}
        _ => return Ok(bad_request(ValidationError::EmptyTitle)),
    }

    if TodoService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
        .is_none()
    {
        return Ok((StatusCode::NOT_FOUND, Json(Envelope::not_found("Todo", id))));
    }

    TodoService::update_by_id(&state.db, id, &patch)
        .await
        .map_err(store_error)?;

    match TodoService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
    {
        Some(todo) => Ok((StatusCode::OK, Json(Envelope::success_one(&todo)))),
        None => Ok((StatusCode::NOT_FOUND, Json(Envelope::not_found("Todo", id)))),
    }
}

pub async fn delete_todo(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResponse {
    if TodoService::get_by_id(&state.db, id)
        .await
        .map_err(store_error)?
        .is_none()
    {
        return Ok((StatusCode::NOT_FOUND, Json(Envelope::not_found("Todo", id))));
    }

    TodoService::delete_by_id(&state.db, id)
        .await
        .map(|_| (StatusCode::OK, Json(Envelope::success_empty())))
        .map_err(store_error)
}
