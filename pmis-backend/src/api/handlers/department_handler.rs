// pmis-backend/src/api/handlers/department_handler.rs
use crate::api::dto::department_dto::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto};
use crate::api::AppState;
use crate::error::AppResult;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDepartmentDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(department_name = %payload.name, "Creating new department");

    let department = app_state.department_service.create(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(department)))
}

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<DepartmentDto>>> {
    let departments = app_state.department_service.get_all().await?;
    Ok(ApiResponse::success(departments))
}

pub async fn get_department_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<DepartmentDto>> {
    let department = app_state.department_service.get_by_id(id).await?;
    Ok(ApiResponse::success(department))
}

pub async fn update_department_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDepartmentDto>,
) -> AppResult<ApiResponse<DepartmentDto>> {
    payload.validate()?;

    info!(department_id = %id, "Updating department");

    let department = app_state.department_service.update(id, payload).await?;

    Ok(ApiResponse::success(department))
}

pub async fn delete_department_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    info!(department_id = %id, "Deleting department");

    app_state.department_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn department_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/departments",
            post(create_department_handler).get(list_departments_handler),
        )
        .route(
            "/api/departments/{id}",
            get(get_department_handler)
                .put(update_department_handler)
                .delete(delete_department_handler),
        )
}
