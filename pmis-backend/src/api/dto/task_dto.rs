// pmis-backend/src/api/dto/task_dto.rs
use crate::domain::task_model;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    #[validate(length(min = 1, max = 150, message = "Task name must be between 1 and 150 characters"))]
    pub name: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub status: Option<String>,   // 省略時はTODO
    pub priority: Option<String>, // 省略時はNORMAL
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Uuid,
    pub name: String,
    pub project_id: Uuid,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub priority: String,
}

impl From<task_model::Model> for TaskDto {
    fn from(model: task_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            project_id: model.project_id,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status,
            priority: model.priority,
        }
    }
}
