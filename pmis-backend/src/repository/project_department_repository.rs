// pmis-backend/src/repository/project_department_repository.rs

use crate::domain::project_department_model::{
    ActiveModel as ProjectDepartmentActiveModel, Column as ProjectDepartmentColumn,
    Entity as ProjectDepartmentEntity, Model as ProjectDepartment,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// プロジェクト参加部署の永続化境界
#[async_trait]
pub trait ProjectDepartmentRepository: Send + Sync {
    async fn insert(&self, link: ProjectDepartment) -> AppResult<ProjectDepartment>;
    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectDepartment>>;
}

pub struct SeaOrmProjectDepartmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmProjectDepartmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectDepartmentRepository for SeaOrmProjectDepartmentRepository {
    async fn insert(&self, link: ProjectDepartment) -> AppResult<ProjectDepartment> {
        let active_model = ProjectDepartmentActiveModel {
            project_id: Set(link.project_id),
            department_id: Set(link.department_id),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectDepartment>> {
        let models = ProjectDepartmentEntity::find()
            .filter(ProjectDepartmentColumn::ProjectId.eq(project_id))
            .all(&self.db)
            .await?;
        Ok(models)
    }
}
