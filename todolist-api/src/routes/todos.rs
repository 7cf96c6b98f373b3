/// Todo CRUD endpoints
///
/// All endpoints here sit behind the authentication layer: handlers read
/// the caller's identity from the [`AuthUser`] request extension and pass
/// it to every query, so a request can only ever touch the caller's own
/// rows. A todo that exists but belongs to someone else is a 404, the same
/// as one that doesn't exist at all.
///
/// # Endpoints
///
/// - `POST   /api/todos` - Create todo (returns the stored record, 200)
/// - `GET    /api/todos` - List caller's todos
/// - `GET    /api/todos/:id` - Get one todo
/// - `PUT    /api/todos/:id` - Update todo (partial)
/// - `DELETE /api/todos/:id` - Delete todo (returns the removed record)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{Json, Path},
};
use axum::{extract::State, Extension};
use serde::Deserialize;
use todolist_shared::{
    auth::middleware::AuthUser,
    models::todo::{CreateTodo, Todo, UpdateTodo},
};

/// Create todo request
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Free-text description
    pub todo: String,

    /// Completion flag, defaults to false when omitted
    #[serde(default)]
    pub completed: bool,
}

/// Update todo request
///
/// Both fields optional; omitted fields keep their stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// New description
    pub todo: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

/// Create todo endpoint
///
/// The owner is always the authenticated caller; any `owner_id` in the
/// request body is ignored.
///
/// # Endpoint
///
/// ```text
/// POST /api/todos
/// Authorization: <token>
/// Content-Type: application/json
///
/// { "todo": "Buy milk" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": 4, "todo": "Buy milk", "completed": false, "owner_id": 2 }
/// ```
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    if req.todo.is_empty() {
        return Err(ApiError::BadRequest("todo is required".to_string()));
    }

    let todo = Todo::create(
        &state.db,
        CreateTodo {
            owner_id: auth.id,
            todo: req.todo,
            completed: req.completed,
        },
    )
    .await?;

    Ok(Json(todo))
}

/// List todos endpoint
///
/// Returns the caller's todos in insertion order. A caller with no todos
/// gets an empty array, not an error.
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = Todo::list_by_owner(&state.db, auth.id).await?;

    Ok(Json(todos))
}

/// Get todo endpoint
///
/// # Errors
///
/// - `404 Not Found`: No such todo under the caller's account
pub async fn get_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Todo>> {
    let todo = Todo::find_by_id(&state.db, auth.id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

    Ok(Json(todo))
}

/// Update todo endpoint
///
/// Partial update: only the supplied fields change. Returns the full
/// record after the update.
///
/// # Errors
///
/// - `404 Not Found`: No such todo under the caller's account
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let todo = Todo::update(
        &state.db,
        auth.id,
        id,
        UpdateTodo {
            todo: req.todo,
            completed: req.completed,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

    Ok(Json(todo))
}

/// Delete todo endpoint
///
/// Returns the removed record so the client sees exactly what was deleted.
///
/// # Errors
///
/// - `404 Not Found`: No such todo under the caller's account
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Todo>> {
    let todo = Todo::delete(&state.db, auth.id, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Todo not found".to_string()))?;

    Ok(Json(todo))
}
