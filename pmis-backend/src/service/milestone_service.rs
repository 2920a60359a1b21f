// pmis-backend/src/service/milestone_service.rs

use crate::api::dto::milestone_dto::{CreateMilestoneDto, MilestoneDto};
use crate::domain::project_milestone_model::Model as ProjectMilestone;
use crate::error::{AppError, AppResult};
use crate::repository::milestone_repository::MilestoneRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::service::authorization::assert_manager;
use crate::service::hierarchy::assert_belongs_to_project;
use std::sync::Arc;
use uuid::Uuid;

pub struct MilestoneService {
    milestones: Arc<dyn MilestoneRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl MilestoneService {
    pub fn new(
        milestones: Arc<dyn MilestoneRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            milestones,
            projects,
        }
    }

    /// マイルストーンを作成。責任者本人のみ実行可能。is_completed は必ず false で保存する
    pub async fn create(
        &self,
        project_id: Uuid,
        acting_employee_id: Option<Uuid>,
        payload: CreateMilestoneDto,
    ) -> AppResult<MilestoneDto> {
        let project =
            assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        let milestone = ProjectMilestone {
            id: Uuid::new_v4(),
            project_id: project.id,
            name: payload.name,
            due_date: payload.due_date,
            is_completed: false,
        };

        let created = self.milestones.insert(milestone).await?;
        Ok(created.into())
    }

    pub async fn get_by_project(&self, project_id: Uuid) -> AppResult<Vec<MilestoneDto>> {
        let milestones = self.milestones.find_by_project_id(project_id).await?;
        Ok(milestones.into_iter().map(Into::into).collect())
    }

    /// マイルストーンを完了にする。is_completed を true にする唯一の操作
    pub async fn complete(
        &self,
        project_id: Uuid,
        milestone_id: Uuid,
        acting_employee_id: Option<Uuid>,
    ) -> AppResult<MilestoneDto> {
        let mut milestone = self
            .milestones
            .find_by_id(milestone_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Milestone with id {} not found", milestone_id))
            })?;
        assert_belongs_to_project(milestone.project_id, project_id, "Milestone")?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        milestone.is_completed = true;

        let updated = self.milestones.update(milestone).await?;
        Ok(updated.into())
    }
}
