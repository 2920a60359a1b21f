// pmis-backend/src/service/risk_service.rs

use crate::api::dto::risk_dto::{CreateRiskDto, RiskDto};
use crate::domain::project_risk_model::{Model as ProjectRisk, RiskLevel};
use crate::error::{AppError, AppResult};
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::risk_repository::RiskRepository;
use crate::service::authorization::assert_manager;
use crate::service::hierarchy::assert_belongs_to_project;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct RiskService {
    risks: Arc<dyn RiskRepository>,
    projects: Arc<dyn ProjectRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl RiskService {
    pub fn new(
        risks: Arc<dyn RiskRepository>,
        projects: Arc<dyn ProjectRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            risks,
            projects,
            employees,
        }
    }

    /// リスクを登録。責任者本人のみ実行可能。
    /// status は呼び出し側の入力にかかわらず "OPEN"、created_at は現在時刻で保存する
    pub async fn create(
        &self,
        project_id: Uuid,
        acting_employee_id: Option<Uuid>,
        payload: CreateRiskDto,
    ) -> AppResult<RiskDto> {
        let level = parse_level(&payload.level)?;
        let project =
            assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        let owner_id = match payload.owner_id {
            Some(owner_id) => {
                let owner = self
                    .employees
                    .find_by_id(owner_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Owner not found".to_string()))?;
                Some(owner.id)
            }
            None => None,
        };

        let risk = ProjectRisk {
            id: Uuid::new_v4(),
            project_id: project.id,
            title: payload.title,
            description: payload.description,
            level: level.as_str().to_string(),
            status: "OPEN".to_string(),
            owner_id,
            created_at: Utc::now(),
            updated_at: None,
        };

        let created = self.risks.insert(risk).await?;
        Ok(created.into())
    }

    pub async fn get_by_project(&self, project_id: Uuid) -> AppResult<Vec<RiskDto>> {
        let risks = self.risks.find_by_project_id(project_id).await?;
        Ok(risks.into_iter().map(Into::into).collect())
    }

    /// リスクのステータスを変更し、updated_at を更新する
    ///
    /// ステータスは自由形式の文字列（慣例として OPEN / MITIGATED / CLOSED）
    pub async fn update_status(
        &self,
        project_id: Uuid,
        risk_id: Uuid,
        acting_employee_id: Option<Uuid>,
        status: String,
    ) -> AppResult<RiskDto> {
        let mut risk = self
            .risks
            .find_by_id(risk_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Risk with id {} not found", risk_id)))?;
        assert_belongs_to_project(risk.project_id, project_id, "Risk")?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        risk.status = status;
        risk.updated_at = Some(Utc::now());

        let updated = self.risks.update(risk).await?;
        Ok(updated.into())
    }
}

fn parse_level(s: &str) -> AppResult<RiskLevel> {
    RiskLevel::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid risk level: '{}'", s)))
}
