// pmis-backend/src/api/handlers/project_handler.rs
use crate::api::dto::project_dto::{CreateProjectDto, ProjectDto, UpdateProjectDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// 変更系ルートの操作者を運ぶクエリパラメータ
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActorQuery {
    pub employee_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StatusQuery {
    pub status: String,
    pub employee_id: Option<Uuid>,
}

// --- CRUD Handlers ---

pub async fn create_project_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProjectDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(project_name = %payload.name, "Creating new project");

    let project = app_state.project_service.create(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(project)))
}

pub async fn list_projects_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<ProjectDto>>> {
    let projects = app_state.project_service.get_all().await?;
    Ok(ApiResponse::success(projects))
}

pub async fn get_project_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<ProjectDto>> {
    let project = app_state.project_service.get_by_id(id).await?;
    Ok(ApiResponse::success(project))
}

pub async fn update_project_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
    Json(payload): Json<UpdateProjectDto>,
) -> AppResult<ApiResponse<ProjectDto>> {
    payload.validate()?;

    info!(project_id = %id, "Updating project");

    let project = app_state
        .project_service
        .update(id, query.employee_id, payload)
        .await?;

    Ok(ApiResponse::success(project))
}

pub async fn update_project_status_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
) -> AppResult<ApiResponse<ProjectDto>> {
    info!(project_id = %id, status = %query.status, "Updating project status");

    let project = app_state
        .project_service
        .update_status(id, query.employee_id, &query.status)
        .await?;

    Ok(ApiResponse::success(project))
}

pub async fn add_project_department_handler(
    State(app_state): State<AppState>,
    Path((id, department_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<ActorQuery>,
) -> AppResult<impl IntoResponse> {
    info!(project_id = %id, department_id = %department_id, "Adding department to project");

    app_state
        .project_service
        .add_department(id, department_id, query.employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_project_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
) -> AppResult<impl IntoResponse> {
    info!(project_id = %id, "Deleting project");

    app_state
        .project_service
        .delete(id, query.employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// --- Router ---

pub fn project_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/projects",
            post(create_project_handler).get(list_projects_handler),
        )
        .route(
            "/api/projects/{id}",
            get(get_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route(
            "/api/projects/{id}/status",
            patch(update_project_status_handler),
        )
        .route(
            "/api/projects/{id}/departments/{department_id}",
            post(add_project_department_handler),
        )
}
