// pmis-backend/src/api/handlers/resource_handler.rs
use crate::api::dto::resource_dto::{
    AllocationDto, CreateAllocationDto, CreateResourceDto, ResourceDto, UpdateResourceDto,
};
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

pub async fn create_resource_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateResourceDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    info!(resource_name = %payload.name, "Creating new resource");

    let resource = app_state.resource_service.create(payload).await?;

    Ok((StatusCode::CREATED, ApiResponse::success(resource)))
}

pub async fn list_resources_handler(
    State(app_state): State<AppState>,
) -> AppResult<ApiResponse<Vec<ResourceDto>>> {
    let resources = app_state.resource_service.get_all().await?;
    Ok(ApiResponse::success(resources))
}

pub async fn get_resource_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<ApiResponse<ResourceDto>> {
    let resource = app_state.resource_service.get_by_id(id).await?;
    Ok(ApiResponse::success(resource))
}

pub async fn update_resource_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateResourceDto>,
) -> AppResult<ApiResponse<ResourceDto>> {
    payload.validate()?;

    info!(resource_id = %id, "Updating resource");

    let resource = app_state.resource_service.update(id, payload).await?;

    Ok(ApiResponse::success(resource))
}

pub async fn delete_resource_handler(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    info!(resource_id = %id, "Deleting resource");

    app_state.resource_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// --- 資源割当 ---

pub async fn allocate_resource_handler(
    State(app_state): State<AppState>,
    Path(resource_id): Path<Uuid>,
    Json(payload): Json<CreateAllocationDto>,
) -> AppResult<impl IntoResponse> {
    info!(
        resource_id = %resource_id,
        task_id = %payload.task_id,
        amount_used = %payload.amount_used,
        "Allocating resource to task"
    );

    let allocation = app_state
        .resource_service
        .allocate_to_task(resource_id, payload)
        .await?;

    Ok((StatusCode::CREATED, ApiResponse::success(allocation)))
}

pub async fn list_allocations_by_task_handler(
    State(app_state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<ApiResponse<Vec<AllocationDto>>> {
    let allocations = app_state
        .resource_service
        .get_allocations_by_task(task_id)
        .await?;
    Ok(ApiResponse::success(allocations))
}

pub fn resource_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/resources",
            post(create_resource_handler).get(list_resources_handler),
        )
        .route(
            "/api/resources/{id}",
            get(get_resource_handler)
                .put(update_resource_handler)
                .delete(delete_resource_handler),
        )
        .route(
            "/api/resources/{resource_id}/allocate",
            post(allocate_resource_handler),
        )
        .route(
            "/api/tasks/{task_id}/allocations",
            get(list_allocations_by_task_handler),
        )
}
