// pmis-backend/src/api/handlers/risk_handler.rs
use crate::api::dto::risk_dto::{CreateRiskDto, RiskDto};
use crate::api::handlers::project_handler::{ActorQuery, StatusQuery};
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

pub async fn create_risk_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
    Json(payload): Json<CreateRiskDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(project_id = %project_id, risk_title = %payload.title, "Creating new risk");

    let risk = app_state
        .risk_service
        .create(project_id, query.employee_id, payload)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(risk)))
}

pub async fn list_risks_handler(
    State(app_state): State<AppState>,
    Path(project_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<RiskDto>>> {
    let risks = app_state.risk_service.get_by_project(project_id).await?;
    Ok(ApiResponse::success(risks))
}

pub async fn update_risk_status_handler(
    State(app_state): State<AppState>,
    Path((project_id, risk_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<RiskDto>> {
    info!(
        project_id = %project_id,
        risk_id = %risk_id,
        status = %query.status,
        "Updating risk status"
    );

    let risk = app_state
        .risk_service
        .update_status(project_id, risk_id, query.employee_id, query.status)
        .await?;

    Ok(ApiResponse::success(risk))
}

pub fn risk_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects/{project_id}/risks",
            post(create_risk_handler).get(list_risks_handler),
        )
        .route(
            "/api/projects/{project_id}/risks/{risk_id}/status",
            patch(update_risk_status_handler),
        )
}
