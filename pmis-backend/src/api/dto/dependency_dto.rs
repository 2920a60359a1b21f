// pmis-backend/src/api/dto/dependency_dto.rs
use crate::domain::task_dependency_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateDependencyDto {
    pub predecessor_task_id: Uuid,

    #[serde(rename = "type")]
    pub dependency_type: String,

    pub lag_days: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDto {
    pub predecessor_task_id: Uuid,
    pub successor_task_id: Uuid,

    #[serde(rename = "type")]
    pub dependency_type: String,

    pub lag_days: Option<i32>,
}

impl From<task_dependency_model::Model> for DependencyDto {
    fn from(model: task_dependency_model::Model) -> Self {
        Self {
            predecessor_task_id: model.predecessor_task_id,
            successor_task_id: model.successor_task_id,
            dependency_type: model.dependency_type,
            lag_days: model.lag_days,
        }
    }
}
