// pmis-backend/src/api/dto/employee_dto.rs
use crate::domain::employee_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeDto {
    #[validate(length(min = 1, max = 100, message = "Employee name must be between 1 and 100 characters"))]
    pub name: String,

    pub department_id: Uuid,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeDto {
    #[validate(length(min = 1, max = 100, message = "Employee name must be between 1 and 100 characters"))]
    pub name: String,

    pub department_id: Option<Uuid>, // 指定時のみ所属部署を変更する
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: Uuid,
    pub name: String,
    pub department_id: Uuid,
}

impl From<employee_model::Model> for EmployeeDto {
    fn from(model: employee_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            department_id: model.department_id,
        }
    }
}
