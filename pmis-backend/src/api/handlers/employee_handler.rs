// pmis-backend/src/api/handlers/employee_handler.rs
use crate::api::dto::employee_dto::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto};
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

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateEmployeeDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(employee_name = %payload.name, "Creating new employee");

    let employee = app_state.employee_service.create(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(employee)))
}

pub async fn list_employees_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<EmployeeDto>>> {
    let employees = app_state.employee_service.get_all().await?;
    Ok(ApiResponse::success(employees))
}

pub async fn get_employee_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<EmployeeDto>> {
    let employee = app_state.employee_service.get_by_id(id).await?;
    Ok(ApiResponse::success(employee))
}

pub async fn list_employees_by_department_handler(
    State(app_state): State<AppState>,
    Path(department_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<EmployeeDto>>> {
    let employees = app_state
        .employee_service
        .get_by_department(department_id)
        .await?;
    Ok(ApiResponse::success(employees))
}

pub async fn update_employee_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateEmployeeDto>,
) -> AppResult<ApiResponse<EmployeeDto>> {
    payload.validate()?;

    info!(employee_id = %id, "Updating employee");

    let employee = app_state.employee_service.update(id, payload).await?;

    Ok(ApiResponse::success(employee))
}

pub async fn delete_employee_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    info!(employee_id = %id, "Deleting employee");

    app_state.employee_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn employee_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/api/employees/{id}",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route(
            "/api/employees/department/{department_id}",
            get(list_employees_by_department_handler),
        )
}
