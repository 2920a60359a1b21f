// pmis-backend/src/api/dto/milestone_dto.rs
use crate::domain::project_milestone_model;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneDto {
    #[validate(length(min = 1, max = 150, message = "Milestone name must be between 1 and 150 characters"))]
    pub name: String,

    pub due_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDto {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub due_date: NaiveDate,
    pub is_completed: bool,
}

impl From<project_milestone_model::Model> for MilestoneDto {
    fn from(model: project_milestone_model::Model) -> Self {
        Self {
            id: model.id,
            project_id: model.project_id,
            name: model.name,
            due_date: model.due_date,
            is_completed: model.is_completed,
        }
    }
}
