// pmis-backend/src/repository/dependency_repository.rs

use crate::domain::task_dependency_model::{
    ActiveModel as DependencyActiveModel, Column as DependencyColumn, Entity as DependencyEntity,
    Model as TaskDependency,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// タスク依存関係の永続化境界
///
/// 一覧取得は常に後続タスク側でスコープする。全件リストは提供しない
#[async_trait]
pub trait DependencyRepository: Send + Sync {
    async fn insert(&self, dependency: TaskDependency) -> AppResult<TaskDependency>;
    async fn find_by_successor_id(&self, successor_task_id: Uuid)
        -> AppResult<Vec<TaskDependency>>;
    async fn delete_by_key(
        &self,
        predecessor_task_id: Uuid,
        successor_task_id: Uuid,
    ) -> AppResult<()>;
}

pub struct SeaOrmDependencyRepository {
    db: DatabaseConnection,
}

impl SeaOrmDependencyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DependencyRepository for SeaOrmDependencyRepository {
    async fn insert(&self, dependency: TaskDependency) -> AppResult<TaskDependency> {
        let active_model = DependencyActiveModel {
            predecessor_task_id: Set(dependency.predecessor_task_id),
            successor_task_id: Set(dependency.successor_task_id),
            dependency_type: Set(dependency.dependency_type.clone()),
            lag_days: Set(dependency.lag_days),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn find_by_successor_id(
        &self,
        successor_task_id: Uuid,
    ) -> AppResult<Vec<TaskDependency>> {
        let models = DependencyEntity::find()
            .filter(DependencyColumn::SuccessorTaskId.eq(successor_task_id))
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn delete_by_key(
        &self,
        predecessor_task_id: Uuid,
        successor_task_id: Uuid,
    ) -> AppResult<()> {
        DependencyEntity::delete_by_id((predecessor_task_id, successor_task_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
