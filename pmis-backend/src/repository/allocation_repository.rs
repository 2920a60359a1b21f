// pmis-backend/src/repository/allocation_repository.rs

use crate::domain::resource_allocation_model::{
    ActiveModel as AllocationActiveModel, Column as AllocationColumn, Entity as AllocationEntity,
    Model as ResourceAllocation,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// 資源割当の永続化境界
#[async_trait]
pub trait AllocationRepository: Send + Sync {
    async fn insert(&self, allocation: ResourceAllocation) -> AppResult<ResourceAllocation>;
    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<ResourceAllocation>>;
}

pub struct SeaOrmAllocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmAllocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AllocationRepository for SeaOrmAllocationRepository {
    async fn insert(&self, allocation: ResourceAllocation) -> AppResult<ResourceAllocation> {
        let active_model = AllocationActiveModel {
            task_id: Set(allocation.task_id),
            resource_id: Set(allocation.resource_id),
            amount_used: Set(allocation.amount_used),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<ResourceAllocation>> {
        let models = AllocationEntity::find()
            .filter(AllocationColumn::TaskId.eq(task_id))
            .all(&self.db)
            .await?;
        Ok(models)
    }
}
