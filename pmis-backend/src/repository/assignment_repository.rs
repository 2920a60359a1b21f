// pmis-backend/src/repository/assignment_repository.rs

use crate::domain::task_assignment_model::{
    ActiveModel as AssignmentActiveModel, Column as AssignmentColumn, Entity as AssignmentEntity,
    Model as TaskAssignment,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// タスクアサインの永続化境界
///
/// 結合エンティティのため更新操作は存在しない。挿入とキータプル指定の削除のみ
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    async fn insert(&self, assignment: TaskAssignment) -> AppResult<TaskAssignment>;
    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskAssignment>>;
    async fn find_by_employee_id(&self, employee_id: Uuid) -> AppResult<Vec<TaskAssignment>>;
    async fn delete_by_key(
        &self,
        task_id: Uuid,
        employee_id: Uuid,
        role_id: Uuid,
    ) -> AppResult<()>;
}

pub struct SeaOrmAssignmentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAssignmentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AssignmentRepository for SeaOrmAssignmentRepository {
    async fn insert(&self, assignment: TaskAssignment) -> AppResult<TaskAssignment> {
        let active_model = AssignmentActiveModel {
            task_id: Set(assignment.task_id),
            employee_id: Set(assignment.employee_id),
            role_id: Set(assignment.role_id),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskAssignment>> {
        let models = AssignmentEntity::find()
            .filter(AssignmentColumn::TaskId.eq(task_id))
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn find_by_employee_id(&self, employee_id: Uuid) -> AppResult<Vec<TaskAssignment>> {
        let models = AssignmentEntity::find()
            .filter(AssignmentColumn::EmployeeId.eq(employee_id))
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn delete_by_key(
        &self,
        task_id: Uuid,
        employee_id: Uuid,
        role_id: Uuid,
    ) -> AppResult<()> {
        AssignmentEntity::delete_by_id((task_id, employee_id, role_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
