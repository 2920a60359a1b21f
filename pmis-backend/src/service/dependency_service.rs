// pmis-backend/src/service/dependency_service.rs

use crate::api::dto::dependency_dto::{CreateDependencyDto, DependencyDto};
use crate::domain::task_dependency_model::{DependencyType, Model as TaskDependency};
use crate::error::{AppError, AppResult};
use crate::repository::dependency_repository::DependencyRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::task_repository::TaskRepository;
use crate::service::authorization::assert_manager;
use crate::service::hierarchy::assert_same_project;
use std::sync::Arc;
use uuid::Uuid;

pub struct DependencyService {
    dependencies: Arc<dyn DependencyRepository>,
    tasks: Arc<dyn TaskRepository>,
    projects: Arc<dyn ProjectRepository>,
}

impl DependencyService {
    pub fn new(
        dependencies: Arc<dyn DependencyRepository>,
        tasks: Arc<dyn TaskRepository>,
        projects: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            dependencies,
            tasks,
            projects,
        }
    }

    /// 依存関係を追加。両タスクが同一プロジェクトに属することを検証してから、
    /// そのプロジェクトの責任者であることを確認する
    pub async fn add(
        &self,
        successor_task_id: Uuid,
        acting_employee_id: Option<Uuid>,
        payload: CreateDependencyDto,
    ) -> AppResult<DependencyDto> {
        let dependency_type = parse_type(&payload.dependency_type)?;

        let (predecessor, successor) = self
            .resolve_endpoints(payload.predecessor_task_id, successor_task_id)
            .await?;
        let project_id = assert_same_project(&predecessor, &successor)?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        let dependency = TaskDependency {
            predecessor_task_id: predecessor.id,
            successor_task_id: successor.id,
            dependency_type: dependency_type.as_str().to_string(),
            lag_days: payload.lag_days,
        };

        let created = self.dependencies.insert(dependency).await?;
        Ok(created.into())
    }

    /// 後続タスク側から依存関係の一覧を取得
    pub async fn get_by_successor(&self, successor_task_id: Uuid) -> AppResult<Vec<DependencyDto>> {
        let dependencies = self
            .dependencies
            .find_by_successor_id(successor_task_id)
            .await?;
        Ok(dependencies.into_iter().map(Into::into).collect())
    }

    /// 依存関係を削除。作成時と同じ検証と認可判定を通る
    pub async fn delete(
        &self,
        successor_task_id: Uuid,
        predecessor_task_id: Uuid,
        acting_employee_id: Option<Uuid>,
    ) -> AppResult<()> {
        let (predecessor, successor) = self
            .resolve_endpoints(predecessor_task_id, successor_task_id)
            .await?;
        let project_id = assert_same_project(&predecessor, &successor)?;
        assert_manager(self.projects.as_ref(), project_id, acting_employee_id).await?;

        self.dependencies
            .delete_by_key(predecessor.id, successor.id)
            .await
    }

    async fn resolve_endpoints(
        &self,
        predecessor_task_id: Uuid,
        successor_task_id: Uuid,
    ) -> AppResult<(
        crate::domain::task_model::Model,
        crate::domain::task_model::Model,
    )> {
        let predecessor = self
            .tasks
            .find_by_id(predecessor_task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Predecessor task not found".to_string()))?;
        let successor = self
            .tasks
            .find_by_id(successor_task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Successor task not found".to_string()))?;
        Ok((predecessor, successor))
    }
}

fn parse_type(s: &str) -> AppResult<DependencyType> {
    DependencyType::from_str(s)
        .ok_or_else(|| AppError::Validation(format!("Invalid dependency type: '{}'", s)))
}
