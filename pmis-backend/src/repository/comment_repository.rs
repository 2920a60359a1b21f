// pmis-backend/src/repository/comment_repository.rs

use crate::domain::task_comment_model::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as CommentEntity,
    Model as TaskComment,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// タスクコメントの永続化境界
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: TaskComment) -> AppResult<TaskComment>;
    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskComment>>;
}

pub struct SeaOrmCommentRepository {
    db: DatabaseConnection,
}

impl SeaOrmCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for SeaOrmCommentRepository {
    async fn insert(&self, comment: TaskComment) -> AppResult<TaskComment> {
        let active_model = CommentActiveModel {
            id: Set(comment.id),
            task_id: Set(comment.task_id),
            employee_id: Set(comment.employee_id),
            commented_at: Set(comment.commented_at),
            content: Set(comment.content.clone()),
        };
        let model = active_model.insert(&self.db).await?;
        Ok(model)
    }

    /// コメントを投稿順で取得
    async fn find_by_task_id(&self, task_id: Uuid) -> AppResult<Vec<TaskComment>> {
        let models = CommentEntity::find()
            .filter(CommentColumn::TaskId.eq(task_id))
            .order_by_asc(CommentColumn::CommentedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }
}
