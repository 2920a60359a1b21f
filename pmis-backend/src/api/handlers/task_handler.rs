// pmis-backend/src/api/handlers/task_handler.rs
use crate::api::dto::task_dto::{CreateTaskDto, TaskDto};
use crate::api::handlers::project_handler::{ActorQuery, StatusQuery};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, patch, post},
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub async fn create_task_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
    Json(payload): Json<CreateTaskDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(project_id = %project_id, task_name = %payload.name, "Creating new task");

    let task = app_state
        .task_service
        .create(project_id, query.employee_id, payload)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(task)))
}

pub async fn list_tasks_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<TaskDto>>> {
    let tasks = app_state.task_service.get_by_project(project_id).await?;
    Ok(ApiResponse::success(tasks))
}

pub async fn update_task_status_handler(
    State(app_state): State<AppState>,
    Path((project_id, task_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<TaskDto>> {
    info!(
        project_id = %project_id,
        task_id = %task_id,
        status = %query.status,
        "Updating task status"
    );

    let task = app_state
        .task_service
        .update_status(project_id, task_id, query.employee_id, &query.status)
        .await?;

    Ok(ApiResponse::success(task))
}

pub async fn delete_task_handler(
    State(app_state): State<AppState>,
    Path((project_id, task_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ActorQuery>,
) -> AppResult<impl IntoResponse> {
    info!(project_id = %project_id, task_id = %task_id, "Deleting task");

    app_state
        .task_service
        .delete(project_id, task_id, query.employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn task_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects/{project_id}/tasks",
            post(create_task_handler).get(list_tasks_handler),
        )
        .route(
            "/api/projects/{project_id}/tasks/{task_id}/status",
            patch(update_task_status_handler),
        )
        .route(
            "/api/projects/{project_id}/tasks/{task_id}",
            delete(delete_task_handler),
        )
}
