// pmis-backend/src/service/project_service.rs

use crate::api::dto::project_dto::{CreateProjectDto, ProjectDto, UpdateProjectDto};
use crate::domain::project_department_model::Model as ProjectDepartment;
use crate::domain::project_model::{Model as Project, ProjectStatus};
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::project_department_repository::ProjectDepartmentRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::service::authorization::assert_manager;
use std::sync::Arc;
use uuid::Uuid;

pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
    project_departments: Arc<dyn ProjectDepartmentRepository>,
}

impl ProjectService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
        project_departments: Arc<dyn ProjectDepartmentRepository>,
    ) -> Self {
        Self {
            projects,
            employees,
            departments,
            project_departments,
        }
    }

    /// プロジェクトを作成。ステータス省略時はPLANNED
    pub async fn create(&self, payload: CreateProjectDto) -> AppResult<ProjectDto> {
        let manager = self
            .employees
            .find_by_id(payload.manager_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Manager not found".to_string()))?;

        let status = match payload.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => ProjectStatus::default(),
        };

        let project = Project {
            id: Uuid::new_v4(),
            name: payload.name,
            start_date: payload.start_date,
            end_date: payload.end_date,
            status: status.as_str().to_string(),
            manager_id: manager.id,
        };

        let created = self.projects.insert(project).await?;
        Ok(created.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<ProjectDto>> {
        let projects = self.projects.find_all().await?;
        Ok(projects.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ProjectDto> {
        let project = self
            .projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", id)))?;
        Ok(project.into())
    }

    /// プロジェクトを更新。責任者本人のみ実行可能
    pub async fn update(
        &self,
        id: Uuid,
        acting_employee_id: Option<Uuid>,
        payload: UpdateProjectDto,
    ) -> AppResult<ProjectDto> {
        let status = parse_status(&payload.status)?;
        let mut project = assert_manager(self.projects.as_ref(), id, acting_employee_id).await?;

        if let Some(manager_id) = payload.manager_id {
            let manager = self
                .employees
                .find_by_id(manager_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Manager not found".to_string()))?;
            project.manager_id = manager.id;
        }

        project.name = payload.name;
        project.start_date = payload.start_date;
        project.end_date = payload.end_date;
        project.status = status.as_str().to_string();

        let updated = self.projects.update(project).await?;
        Ok(updated.into())
    }

    /// プロジェクトのステータスを変更。責任者本人のみ実行可能
    pub async fn update_status(
        &self,
        id: Uuid,
        acting_employee_id: Option<Uuid>,
        status: &str,
    ) -> AppResult<ProjectDto> {
        let status = parse_status(status)?;
        let mut project = assert_manager(self.projects.as_ref(), id, acting_employee_id).await?;

        project.status = status.as_str().to_string();

        let updated = self.projects.update(project).await?;
        Ok(updated.into())
    }

    /// プロジェクトを削除。責任者本人のみ実行可能
    pub async fn delete(&self, id: Uuid, acting_employee_id: Option<Uuid>) -> AppResult<()> {
        assert_manager(self.projects.as_ref(), id, acting_employee_id).await?;
        self.projects.delete(id).await
    }

    /// 部署をプロジェクトの参加部署に加える。責任者本人のみ実行可能
    pub async fn add_department(
        &self,
        project_id: Uuid,
        department_id: Uuid,
        acting_employee_id: Option<Uuid>,
    ) -> AppResult<()> {
        let project =
            assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        let department = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        self.project_departments
            .insert(ProjectDepartment {
                project_id: project.id,
                department_id: department.id,
            })
            .await?;
        Ok(())
    }
}

fn parse_status(s: &str) -> AppResult<ProjectStatus> {
    ProjectStatus::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid project status: '{}'", s)))
}
