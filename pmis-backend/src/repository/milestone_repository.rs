// pmis-backend/src/repository/milestone_repository.rs

use crate::domain::project_milestone_model::{
    ActiveModel as MilestoneActiveModel, Column as MilestoneColumn, Entity as MilestoneEntity,
    Model as ProjectMilestone,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// マイルストーンの永続化境界
#[async_trait]
pub trait MilestoneRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectMilestone>>;
    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectMilestone>>;
    async fn insert(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone>;
    async fn update(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone>;
}

pub struct SeaOrmMilestoneRepository {
    db: DatabaseConnection,
}

impl SeaOrmMilestoneRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(milestone: &ProjectMilestone) -> MilestoneActiveModel {
        MilestoneActiveModel {
            id: Set(milestone.id),
            project_id: Set(milestone.project_id),
            name: Set(milestone.name.clone()),
            due_date: Set(milestone.due_date),
            is_completed: Set(milestone.is_completed),
        }
    }
}

#[async_trait]
impl MilestoneRepository for SeaOrmMilestoneRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectMilestone>> {
        let model = MilestoneEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectMilestone>> {
        let models = MilestoneEntity::find()
            .filter(MilestoneColumn::ProjectId.eq(project_id))
            .order_by_asc(MilestoneColumn::DueDate)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone> {
        let model = Self::to_active_model(&milestone).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, milestone: ProjectMilestone) -> AppResult<ProjectMilestone> {
        let model = Self::to_active_model(&milestone).update(&self.db).await?;
        Ok(model)
    }
}
