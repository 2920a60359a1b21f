// pmis-backend/src/api/handlers/dependency_handler.rs
use crate::api::dto::dependency_dto::{CreateDependencyDto, DependencyDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ActorQuery {
    pub employee_id: Option<Uuid>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDependencyQuery {
    pub predecessor_task_id: Uuid,
    pub employee_id: Option<Uuid>,
}

pub async fn add_dependency_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Query(query): Query<ActorQuery>,
    Json(payload): Json<CreateDependencyDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        successor_task_id = %task_id,
        predecessor_task_id = %payload.predecessor_task_id,
        "Adding task dependency"
    );

    let dependency = app_state
        .dependency_service
        .add(task_id, query.employee_id, payload)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(dependency)))
}

pub async fn list_dependencies_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<DependencyDto>>> {
    let dependencies = app_state
        .dependency_service
        .get_by_successor(task_id)
        .await?;
    Ok(ApiResponse::success(dependencies))
}

pub async fn delete_dependency_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Query(query): Query<DeleteDependencyQuery>,
) -> AppResult<impl IntoResponse> {
    info!(
        successor_task_id = %task_id,
        predecessor_task_id = %query.predecessor_task_id,
        "Deleting task dependency"
    );

    app_state
        .dependency_service
        .delete(task_id, query.predecessor_task_id, query.employee_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn dependency_router() -> Router<AppState> {
    Router::new().route(
        "/api/tasks/{task_id}/dependencies",
        post(add_dependency_handler)
            .get(list_dependencies_handler)
            .delete(delete_dependency_handler),
    )
}
