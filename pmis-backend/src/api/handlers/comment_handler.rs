// pmis-backend/src/api/handlers/comment_handler.rs
use crate::api::dto::comment_dto::{CommentDto, CreateCommentDto};
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

pub async fn add_comment_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<CreateCommentDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(task_id = %task_id, employee_id = %payload.employee_id, "Adding task comment");

    let comment = app_state.comment_service.add(task_id, payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(comment)))
}

pub async fn list_comments_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<CommentDto>>> {
    let comments = app_state.comment_service.get_by_task(task_id).await?;
    Ok(ApiResponse::success(comments))
}

pub fn comment_router() -> Router<AppState> {
    Router::new().route(
        "/api/tasks/{task_id}/comments",
        post(add_comment_handler).get(list_comments_handler),
    )
}
