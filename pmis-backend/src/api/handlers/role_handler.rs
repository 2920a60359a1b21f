// pmis-backend/src/api/handlers/role_handler.rs
use crate::api::dto::role_dto::{CreateRoleDto, RoleDto, UpdateRoleDto};
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

pub async fn create_role_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateRoleDto>,
) -> AppResult<impl IntoResponse> {
    info!(role_name = %payload.name, "Creating new role");

    let role = app_state.role_service.create(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(role)))
}

pub async fn list_roles_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<RoleDto>>> {
    let roles = app_state.role_service.get_all().await?;
    Ok(ApiResponse::success(roles))
}

pub async fn get_role_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<RoleDto>> {
    let role = app_state.role_service.get_by_id(id).await?;
    Ok(ApiResponse::success(role))
}

pub async fn update_role_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleDto>,
) -> AppResult<ApiResponse<RoleDto>> {
    info!(role_id = %id, "Updating role");

    let role = app_state.role_service.update(id, payload).await?;

    Ok(ApiResponse::success(role))
}

pub async fn delete_role_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    info!(role_id = %id, "Deleting role");

    app_state.role_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn role_router() -> Router<AppState> {
    Router::new()
        .route("/api/roles", post(create_role_handler).get(list_roles_handler))
        .route(
            "/api/roles/{id}",
            get(get_role_handler)
                .put(update_role_handler)
                .delete(delete_role_handler),
        )
}
