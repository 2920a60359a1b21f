// pmis-backend/src/api/dto/resource_dto.rs
use crate::domain::resource_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceDto {
    #[validate(length(min = 1, max = 150, message = "Resource name must be between 1 and 150 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub resource_type: String,

    pub quantity: i32,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceDto {
    #[validate(length(min = 1, max = 150, message = "Resource name must be between 1 and 150 characters"))]
    pub name: String,

    #[serde(rename = "type")]
    pub resource_type: String,

    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDto {
    pub id: Uuid,
    pub name: String,

    #[serde(rename = "type")]
    pub resource_type: String,

    pub quantity: i32,
}

impl From<resource_model::Model> for ResourceDto {
    fn from(model: resource_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            resource_type: model.resource_type,
            quantity: model.quantity,
        }
    }
}

// --- 資源割当 ---

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateAllocationDto {
    pub task_id: Uuid,
    pub amount_used: i32,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AllocationDto {
    pub task_id: Uuid,
    pub resource_id: Uuid,
    pub resource_name: String,
    pub amount_used: i32,
}
