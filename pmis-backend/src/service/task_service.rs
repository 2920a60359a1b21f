// pmis-backend/src/service/task_service.rs

use crate::api::dto::task_dto::{CreateTaskDto, TaskDto};
use crate::domain::priority_level::PriorityLevel;
use crate::domain::task_model::Model as Task;
use crate::domain::task_status::TaskStatus;
use crate::error::{AppError, AppResult};
use crate::repository::project_repository::ProjectRepository;
use crate::repository::task_repository::TaskRepository;
use crate::service::authorization::assert_manager;
use crate::service::hierarchy::assert_belongs_to_project;
use std::sync::Arc;
use uuid::Uuid;

pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskRepository>, projects: Arc<dyn ProjectRepository>) -> Self {
        Self { tasks, projects }
    }

    /// タスクを作成。責任者本人のみ実行可能。
    /// ステータス省略時はTODO、優先度省略時はNORMAL
    pub async fn create(
        &self,
        project_id: Uuid,
        acting_employee_id: Option<Uuid>,
        payload: CreateTaskDto,
    ) -> AppResult<TaskDto> {
        let status = match payload.status.as_deref() {
            Some(s) => parse_status(s)?,
            None => TaskStatus::default(),
        };
        let priority = match payload.priority.as_deref() {
            Some(p) => parse_priority(p)?,
            None => PriorityLevel::default(),
        };

        let project =
            assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        let task = Task {
            id: Uuid::new_v4(),
            name: payload.name,
            project_id: project.id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            status: status.as_str().to_string(),
            priority: priority.as_str().to_string(),
        };

        let created = self.tasks.insert(task).await?;
        Ok(created.into())
    }

    pub async fn get_by_project(&self, project_id: Uuid) -> AppResult<Vec<TaskDto>> {
        let tasks = self.tasks.find_by_project_id(project_id).await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }

    /// タスクのステータスを変更。タスクの所属検証の後に認可判定を行う
    pub async fn update_status(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        acting_employee_id: Option<Uuid>,
        status: &str,
    ) -> AppResult<TaskDto> {
        let mut task = self.find_task_in_project(project_id, task_id).await?;
        let status = parse_status(status)?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        task.status = status.as_str().to_string();

        let updated = self.tasks.update(task).await?;
        Ok(updated.into())
    }

    /// タスクを削除。タスクの所属検証の後に認可判定を行う
    pub async fn delete(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        acting_employee_id: Option<Uuid>,
    ) -> AppResult<()> {
        self.find_task_in_project(project_id, task_id).await?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;
        self.tasks.delete(task_id).await
    }

    /// タスクを解決し、パスのプロジェクトに属することを検証する
    async fn find_task_in_project(&self, project_id: Uuid, task_id: Uuid) -> AppResult<Task> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task with id {} not found", task_id)))?;
        assert_belongs_to_project(task.project_id, project_id, "Task")?;
        Ok(task)
    }
}

fn parse_status(s: &str) -> AppResult<TaskStatus> {
    TaskStatus::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid task status: '{}'", s)))
}

fn parse_priority(s: &str) -> AppResult<PriorityLevel> {
    PriorityLevel::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid task priority: '{}'", s)))
}
