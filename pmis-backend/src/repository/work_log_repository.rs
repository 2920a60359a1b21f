// pmis-backend/src/repository/work_log_repository.rs

use crate::domain::task_work_log_model::{
    ActiveModel as WorkLogActiveModel, Column as WorkLogColumn, Entity as WorkLogEntity,
    Model as TaskWorkLog,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// 作業時間ログの永続化境界
#[async_trait]
pub trait WorkLogRepository: Send + Sync {
    async fn insert(&self, work_log: TaskWorkLog) -> AppResult<TaskWorkLog>;
    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskWorkLog>>;
}

pub struct SeaOrmWorkLogRepository {
    db: DatabaseConnection,
}

impl SeaOrmWorkLogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WorkLogRepository for SeaOrmWorkLogRepository {
    async fn insert(&self, work_log: TaskWorkLog) -> AppResult<TaskWorkLog> {
        let active_model = WorkLogActiveModel {
            id: Set(work_log.id),
            task_id: Set(work_log.task_id),
            employee_id: Set(work_log.employee_id),
            work_date: Set(work_log.work_date),
            hours: Set(work_log.hours),
            note: Set(work_log.note.clone()),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskWorkLog>> {
        let models = WorkLogEntity::find()
            .filter(WorkLogColumn::TaskId.eq(task_id))
            .order_by_asc(WorkLogColumn::WorkDate)
            .all(&self.db)
            .await?;
        Ok(models)
    }
}
