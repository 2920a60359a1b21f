// pmis-backend/src/repository/role_repository.rs

use crate::domain::role_model::{
    ActiveModel as RoleActiveModel, Column as RoleColumn, Entity as RoleEntity, Model as Role,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

/// ロールの永続化境界
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>>;
    async fn find_all(&self) -> AppResult<Vec<Role>>;
    async fn insert(&self, role: Role) -> AppResult<Role>;
    async fn update(&self, role: Role) -> AppResult<Role>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmRoleRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(role: &Role) -> RoleActiveModel {
        RoleActiveModel {
            id: Set(role.id),
            name: Set(role.name.clone()),
            can_read: Set(role.can_read),
            can_write: Set(role.can_write),
            can_delete: Set(role.can_delete),
        }
    }
}

#[async_trait]
impl RoleRepository for SeaOrmRoleRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        let model = RoleEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let models = RoleEntity::find()
            .order_by_asc(RoleColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, role: Role) -> AppResult<Role> {
        let model = Self::to_active_model(&role).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let model = Self::to_active_model(&role).update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        RoleEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
