// pmis-backend/src/api/dto/project_dto.rs
use crate::domain::project_model;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 150, message = "Project name must be between 1 and 150 characters"))]
    pub name: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub status: Option<String>, // 省略時はPLANNED
    pub manager_id: Uuid,
}

#[derive(Deserialize, Serialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, max = 150, message = "Project name must be between 1 and 150 characters"))]
    pub name: String,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    pub status: String,
    pub manager_id: Option<Uuid>, // 指定時のみ責任者を差し替える
}

// --- Response DTO ---

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub manager_id: Uuid,
}

impl From<project_model::Model> for ProjectDto {
    fn from(model: project_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status,
            manager_id: model.manager_id,
        }
    }
}
