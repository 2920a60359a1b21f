// pmis-backend/src/api/dto/assignment_dto.rs
use crate::domain::task_assignment_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentDto {
    pub employee_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub task_id: Uuid,
    pub employee_id: Uuid,
    pub role_id: Uuid,
}

impl From<task_assignment_model::Model> for AssignmentDto {
    fn from(model: task_assignment_model::Model) -> Self {
        Self {
            task_id: model.task_id,
            employee_id: model.employee_id,
            role_id: model.role_id,
        }
    }
}

/// タスク側から見たアサイン一覧の1件
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentByTaskDto {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub role_id: Uuid,
}

/// 社員側から見たアサイン一覧の1件
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentByEmployeeDto {
    pub task_id: Uuid,
    pub task_name: String,
}
