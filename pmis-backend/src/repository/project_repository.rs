// pmis-backend/src/repository/project_repository.rs

use crate::domain::project_model::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as Project,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

/// プロジェクトの永続化境界
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>>;
    async fn find_all(&self) -> AppResult<Vec<Project>>;
    async fn insert(&self, project: Project) -> AppResult<Project>;
    async fn update(&self, project: Project) -> AppResult<Project>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmProjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmProjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(project: &Project) -> ProjectActiveModel {
        ProjectActiveModel {
            id: Set(project.id),
            name: Set(project.name.clone()),
            start_date: Set(project.start_date),
            end_date: Set(project.end_date),
            status: Set(project.status.clone()),
            manager_id: Set(project.manager_id),
        }
    }
}

#[async_trait]
impl ProjectRepository for SeaOrmProjectRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Project>> {
        let model = ProjectEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Project>> {
        let models = ProjectEntity::find()
            .order_by_asc(ProjectColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, project: Project) -> AppResult<Project> {
        let model = Self::to_active_model(&project).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, project: Project) -> AppResult<Project> {
        let model = Self::to_active_model(&project).update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        ProjectEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
