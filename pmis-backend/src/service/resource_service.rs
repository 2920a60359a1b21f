// pmis-backend/src/service/resource_service.rs

use crate::api::dto::resource_dto::{
    AllocationDto, CreateAllocationDto, CreateResourceDto, ResourceDto, UpdateResourceDto,
};
use crate::domain::resource_allocation_model::Model as ResourceAllocation;
use crate::domain::resource_model::{Model as Resource, ResourceType};
use crate::error::{AppError, AppResult};
use crate::repository::allocation_repository::AllocationRepository;
use crate::repository::resource_repository::ResourceRepository;
use crate::repository::task_repository::TaskRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct ResourceService {
    resources: Arc<dyn ResourceRepository>,
    allocations: Arc<dyn AllocationRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl ResourceService {
    pub fn new(
        resources: Arc<dyn ResourceRepository>,
        allocations: Arc<dyn AllocationRepository>,
        tasks: Arc<dyn TaskRepository>,
    ) -> Self {
        Self {
            resources,
            allocations,
            tasks,
        }
    }

    pub async fn create(&self, payload: CreateResourceDto) -> AppResult<ResourceDto> {
        let resource_type = parse_type(&payload.resource_type)?;

        let resource = Resource {
            id: Uuid::new_v4(),
            name: payload.name,
            resource_type: resource_type.as_str().to_string(),
            quantity: payload.quantity,
        };

        let created = self.resources.insert(resource).await?;
        Ok(created.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<ResourceDto>> {
        let resources = self.resources.find_all().await?;
        Ok(resources.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ResourceDto> {
        let resource = self.find_resource(id).await?;
        Ok(resource.into())
    }

    pub async fn update(&self, id: Uuid, payload: UpdateResourceDto) -> AppResult<ResourceDto> {
        let resource_type = parse_type(&payload.resource_type)?;
        let mut resource = self.find_resource(id).await?;

        resource.name = payload.name;
        resource.resource_type = resource_type.as_str().to_string();
        resource.quantity = payload.quantity;

        let updated = self.resources.update(resource).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find_resource(id).await?;
        self.resources.delete(id).await
    }

    // --- 資源割当 ---

    /// 資源をタスクに割り当てる。使用量の上限チェックはこの層では行わない
    pub async fn allocate_to_task(
        &self,
        resource_id: Uuid,
        payload: CreateAllocationDto,
    ) -> AppResult<AllocationDto> {
        let task = self
            .tasks
            .find_by_id(payload.task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let resource = self.find_resource(resource_id).await?;

        let created = self
            .allocations
            .insert(ResourceAllocation {
                task_id: task.id,
                resource_id: resource.id,
                amount_used: payload.amount_used,
            })
            .await?;

        Ok(AllocationDto {
            task_id: created.task_id,
            resource_id: created.resource_id,
            resource_name: resource.name,
            amount_used: created.amount_used,
        })
    }

    pub async fn get_allocations_by_task(&self, task_id: Uuid) -> AppResult<Vec<AllocationDto>> {
        let allocations = self.allocations.find_by_task_id(task_id).await?;

        let mut result = Vec::with_capacity(allocations.len());
        for allocation in allocations {
            let resource = self.find_resource(allocation.resource_id).await?;
            result.push(AllocationDto {
                task_id: allocation.task_id,
                resource_id: resource.id,
                resource_name: resource.name,
                amount_used: allocation.amount_used,
            });
        }
        Ok(result)
    }

    async fn find_resource(&self, id: Uuid) -> AppResult<Resource> {
        self.resources
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resource with id {} not found", id)))
    }
}

fn parse_type(s: &str) -> AppResult<ResourceType> {
    ResourceType::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid resource type: '{}'", s)))
}
