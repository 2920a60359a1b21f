// pmis-backend/src/api/handlers/milestone_handler.rs
use crate::api::dto::milestone_dto::{CreateMilestoneDto, MilestoneDto};
use crate::api::handlers::project_handler::ActorQuery;
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub async fn create_milestone_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
    Json(payload): Json<CreateMilestoneDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(project_id = %project_id, milestone_name = %payload.name, "Creating new milestone");

    let milestone = app_state
        .milestone_service
        .create(project_id, query.employee_id, payload)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(milestone)))
}

pub async fn list_milestones_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<MilestoneDto>>> {
    let milestones = app_state
        .milestone_service
        .get_by_project(project_id)
        .await?;
    Ok(ApiResponse::success(milestones))
}

pub async fn complete_milestone_handler(
    State(app_state): State<AppState>,
    Path((project_id, milestone_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ActorQuery>,
) -> AppResult<ApiResponse<MilestoneDto>> {
    info!(project_id = %project_id, milestone_id = %milestone_id, "Completing milestone");

    let milestone = app_state
        .milestone_service
        .complete(project_id, milestone_id, query.employee_id)
        .await?;

    Ok(ApiResponse::success(milestone))
}

pub fn milestone_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects/{project_id}/milestones",
            post(create_milestone_handler).get(list_milestones_handler),
        )
        .route(
            "/api/projects/{project_id}/milestones/{milestone_id}/complete",
            patch(complete_milestone_handler),
        )
}
