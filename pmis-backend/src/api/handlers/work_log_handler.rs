// pmis-backend/src/api/handlers/work_log_handler.rs
use crate::api::dto::work_log_dto::{CreateWorkLogDto, WorkLogDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub async fn log_work_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<CreateWorkLogDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(
        task_id = %task_id,
        employee_id = %payload.employee_id,
        hours = %payload.hours,
        "Logging work time"
    );

    let work_log = app_state.work_log_service.log_work(task_id, payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(work_log)))
}

pub async fn list_work_logs_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<WorkLogDto>>> {
    let work_logs = app_state.work_log_service.get_by_task(task_id).await?;
    Ok(ApiResponse::success(work_logs))
}

pub fn work_log_router() -> Router<AppState> {
    Router::new().route(
        "/api/tasks/{task_id}/worklogs",
        post(log_work_handler).get(list_work_logs_handler),
    )
}
