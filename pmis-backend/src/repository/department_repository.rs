// pmis-backend/src/repository/department_repository.rs

use crate::domain::department_model::{
    ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity, Model as Department,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

/// 部署の永続化境界
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>>;
    async fn find_all(&self) -> AppResult<Vec<Department>>;
    async fn insert(&self, department: Department) -> AppResult<Department>;
    async fn update(&self, department: Department) -> AppResult<Department>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmDepartmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        let model = DepartmentEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Department>> {
        let models = DepartmentEntity::find()
            .order_by_asc(crate::domain::department_model::Column::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, department: Department) -> AppResult<Department> {
        let active_model = DepartmentActiveModel {
            id: Set(department.id),
            name: Set(department.name.clone()),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, department: Department) -> AppResult<Department> {
        let active_model = DepartmentActiveModel {
            id: Set(department.id),
            name: Set(department.name.clone()),
        };
        let model = active_model.update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        DepartmentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
