// pmis-backend/src/api/handlers/assignment_handler.rs
use crate::api::dto::assignment_dto::{
    AssignmentByEmployeeDto, AssignmentByTaskDto, CreateAssignmentDto,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveAssignmentQuery {
    pub employee_id: Uuid,
    pub role_id: Uuid,
}

pub async fn assign_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<CreateAssignmentDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        task_id = %task_id,
        employee_id = %payload.employee_id,
        role_id = %payload.role_id,
        "Assigning employee to task"
    );

    let assignment = app_state.assignment_service.assign(task_id, payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(assignment)))
}

pub async fn list_assignments_by_task_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<AssignmentByTaskDto>>> {
    let assignments = app_state.assignment_service.get_by_task(task_id).await?;
    Ok(ApiResponse::success(assignments))
}

pub async fn list_assignments_by_employee_handler(
    State(app_state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<AssignmentByEmployeeDto>>> {
    let assignments = app_state
        .assignment_service
        .get_by_employee(employee_id)
        .await?;
    Ok(ApiResponse::success(assignments))
}

pub async fn remove_assignment_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Query(query): Query<RemoveAssignmentQuery>,
) -> AppResult<impl IntoResponse> {
    info!(
        task_id = %task_id,
        employee_id = %query.employee_id,
        role_id = %query.role_id,
        "Removing task assignment"
    );

    app_state
        .assignment_service
        .remove(task_id, query.employee_id, query.role_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn assignment_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/tasks/{task_id}/assignments",
            post(assign_handler)
                .get(list_assignments_by_task_handler)
                .delete(remove_assignment_handler),
        )
        .route(
            "/api/employees/{employee_id}/assignments",
            get(list_assignments_by_employee_handler),
        )
}
