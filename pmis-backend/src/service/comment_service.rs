// pmis-backend/src/service/comment_service.rs

use crate::api::dto::comment_dto::{CommentDto, CreateCommentDto};
use crate::domain::task_comment_model::Model as TaskComment;
use crate::error::{AppError, AppResult};
use crate::repository::comment_repository::CommentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::task_repository::TaskRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    tasks: Arc<dyn TaskRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        tasks: Arc<dyn TaskRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            comments,
            tasks,
            employees,
        }
    }

    /// コメントを追加。commented_at は現在時刻で保存する
    pub async fn add(&self, task_id: Uuid, payload: CreateCommentDto) -> AppResult<CommentDto> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let employee = self
            .employees
            .find_by_id(payload.employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        let comment = TaskComment {
            id: Uuid::new_v4(),
            task_id: task.id,
            employee_id: employee.id,
            commented_at: Utc::now(),
            content: payload.content,
        };

        let created = self.comments.insert(comment).await?;
        Ok(created.into())
    }

    /// タスクのコメントを投稿順で取得
    pub async fn get_by_task(&self, task_id: Uuid) -> AppResult<Vec<CommentDto>> {
        let comments = self.comments.find_by_task_id(task_id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
