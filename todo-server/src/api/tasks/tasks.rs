//! Task REST API handlers
//!
//! Each handler validates its input, runs one round trip against the
//! persistence layer, and maps absence to 404.

use crate::{ApiError, ApiResult, AppState, CreateTaskRequest, DeleteResponse, EditTaskRequest};

use todo_core::{Task, TaskEdit};
use todo_db::TaskRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;

/// POST /tasks
///
/// Create a new task. The id is assigned by storage and returned in
/// the response.
pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let Json(req) = payload?;

    let task =
        TaskRepository::create(&state.pool, &req.title, &req.description, req.completed).await?;

    log::info!("Created task {}", task.id);

    Ok(Json(task))
}

/// GET /tasks
///
/// List every stored task, ascending id.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = TaskRepository::find_all(&state.pool).await?;

    Ok(Json(tasks))
}

/// GET /tasks/:id
///
/// Retrieve a single task by id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = TaskRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Task {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(task))
}

/// PATCH /tasks/:id
///
/// Overwrite exactly the fields present in the body; absent fields are
/// left untouched. An empty body is a legal no-op. The read and the
/// write share one transaction, so a 404 commits nothing.
pub async fn patch_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<EditTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    let Json(req) = payload?;
    let edit = TaskEdit::from(req);

    let mut tx = state.pool.begin().await?;

    let mut task = TaskRepository::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Item with id={} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    edit.apply(&mut task);
    TaskRepository::update(&mut *tx, &task).await?;
    tx.commit().await?;

    log::info!("Updated task {}", task.id);

    Ok(Json(task))
}

/// DELETE /tasks/:id
///
/// Remove a task permanently
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = TaskRepository::delete(&state.pool, id).await?;

    if !deleted {
        return Err(ApiError::NotFound {
            message: format!("Item with id={} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted task {}", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}
