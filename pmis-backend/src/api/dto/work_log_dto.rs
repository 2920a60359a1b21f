// pmis-backend/src/api/dto/work_log_dto.rs
use crate::domain::task_work_log_model;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkLogDto {
    pub employee_id: Uuid,

    pub work_date: NaiveDate,

    pub hours: Decimal,

    #[validate(length(max = 1000, message = "Work log note must not exceed 1000 characters"))]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WorkLogDto {
    pub id: Uuid,
    pub task_id: Uuid,
    pub employee_id: Uuid,
    pub work_date: NaiveDate,
    pub hours: Decimal,
    pub note: Option<String>,
}

impl From<task_work_log_model::Model> for WorkLogDto {
    fn from(model: task_work_log_model::Model) -> Self {
        Self {
            id: model.id,
            task_id: model.task_id,
            employee_id: model.employee_id,
            work_date: model.work_date,
            hours: model.hours,
            note: model.note,
        }
    }
}
