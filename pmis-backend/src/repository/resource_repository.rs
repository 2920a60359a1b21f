// pmis-backend/src/repository/resource_repository.rs

use crate::domain::resource_model::{
    ActiveModel as ResourceActiveModel, Column as ResourceColumn, Entity as ResourceEntity,
    Model as Resource,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

/// 資源の永続化境界
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>>;
    async fn find_all(&self) -> AppResult<Vec<Resource>>;
    async fn insert(&self, resource: Resource) -> AppResult<Resource>;
    async fn update(&self, resource: Resource) -> AppResult<Resource>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmResourceRepository {
    db: DatabaseConnection,
}

impl SeaOrmResourceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(resource: &Resource) -> ResourceActiveModel {
        ResourceActiveModel {
            id: Set(resource.id),
            name: Set(resource.name.clone()),
            resource_type: Set(resource.resource_type.clone()),
            quantity: Set(resource.quantity),
        }
    }
}

#[async_trait]
impl ResourceRepository for SeaOrmResourceRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        let model = ResourceEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        let models = ResourceEntity::find()
            .order_by_asc(ResourceColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, resource: Resource) -> AppResult<Resource> {
        let model = Self::to_active_model(&resource).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, resource: Resource) -> AppResult<Resource> {
        let model = Self::to_active_model(&resource).update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        ResourceEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
