// pmis-backend/src/api/dto/department_dto.rs
use crate::domain::department_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, max = 100, message = "Department name must be between 1 and 100 characters"))]
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDepartmentDto {
    #[validate(length(min = 1, max = 100, message = "Department name must be between 1 and 100 characters"))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    pub id: Uuid,
    pub name: String,
}

impl From<department_model::Model> for DepartmentDto {
    fn from(model: department_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
