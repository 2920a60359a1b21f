// pmis-backend/src/repository/task_repository.rs

use crate::domain::task_model::{
    ActiveModel as TaskActiveModel, Column as TaskColumn, Entity as TaskEntity, Model as Task,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// タスクの永続化境界
#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;
    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<Task>>;
    async fn insert(&self, task: Task) -> AppResult<Task>;
    async fn update(&self, task: Task) -> AppResult<Task>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmTaskRepository {
    db: DatabaseConnection,
}

impl SeaOrmTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(task: &Task) -> TaskActiveModel {
        TaskActiveModel {
            id: Set(task.id),
            name: Set(task.name.clone()),
            project_id: Set(task.project_id),
            start_date: Set(task.start_date),
            end_date: Set(task.end_date),
            status: Set(task.status.clone()),
            priority: Set(task.priority.clone()),
        }
    }
}

#[async_trait]
impl TaskRepository for SeaOrmTaskRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        let model = TaskEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    /// プロジェクト配下のタスク一覧を取得
    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(TaskColumn::ProjectId.eq(project_id))
            .order_by_asc(TaskColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, task: Task) -> AppResult<Task> {
        let model = Self::to_active_model(&task).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, task: Task) -> AppResult<Task> {
        let model = Self::to_active_model(&task).update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        TaskEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
