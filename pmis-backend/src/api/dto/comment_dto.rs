// pmis-backend/src/api/dto/comment_dto.rs
use crate::domain::task_comment_model;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub employee_id: Uuid,

    #[validate(length(min = 1, message = "Comment content cannot be empty"))]
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: Uuid,
    pub task_id: Uuid,
    pub employee_id: Uuid,
    pub commented_at: DateTime<Utc>,
    pub content: String,
}

impl From<task_comment_model::Model> for CommentDto {
    fn from(model: task_comment_model::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            employee_id: model.employee_id,
            commented_at: model.commented_at,
            content: model.content,
        }
    }
}
