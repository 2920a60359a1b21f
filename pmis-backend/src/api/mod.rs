// pmis-backend/src/api/mod.rs
use crate::repository::allocation_repository::{AllocationRepository, SeaOrmAllocationRepository};
use crate::repository::assignment_repository::{AssignmentRepository, SeaOrmAssignmentRepository};
use crate::repository::comment_repository::{CommentRepository, SeaOrmCommentRepository};
use crate::repository::department_repository::{DepartmentRepository, SeaOrmDepartmentRepository};
use crate::repository::dependency_repository::{DependencyRepository, SeaOrmDependencyRepository};
use crate::repository::employee_repository::{EmployeeRepository, SeaOrmEmployeeRepository};
use crate::repository::milestone_repository::{MilestoneRepository, SeaOrmMilestoneRepository};
use crate::repository::project_department_repository::{
    ProjectDepartmentRepository, SeaOrmProjectDepartmentRepository,
};
use crate::repository::project_repository::{ProjectRepository, SeaOrmProjectRepository};
use crate::repository::resource_repository::{ResourceRepository, SeaOrmResourceRepository};
use crate::repository::risk_repository::{RiskRepository, SeaOrmRiskRepository};
use crate::repository::role_repository::{RoleRepository, SeaOrmRoleRepository};
use crate::repository::task_repository::{SeaOrmTaskRepository, TaskRepository};
use crate::repository::work_log_repository::{SeaOrmWorkLogRepository, WorkLogRepository};
use crate::service::assignment_service::AssignmentService;
use crate::service::comment_service::CommentService;
use crate::service::department_service::DepartmentService;
use crate::service::dependency_service::DependencyService;
use crate::service::employee_service::EmployeeService;
use crate::service::milestone_service::MilestoneService;
use crate::service::project_service::ProjectService;
use crate::service::resource_service::ResourceService;
use crate::service::risk_service::RiskService;
use crate::service::role_service::RoleService;
use crate::service::task_service::TaskService;
use crate::service::work_log_service::WorkLogService;
use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod dto;
pub mod handlers;

/// 統一されたアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub department_service: Arc<DepartmentService>,
    pub employee_service: Arc<EmployeeService>,
    pub role_service: Arc<RoleService>,
    pub resource_service: Arc<ResourceService>,
    pub project_service: Arc<ProjectService>,
    pub task_service: Arc<TaskService>,
    pub milestone_service: Arc<MilestoneService>,
    pub risk_service: Arc<RiskService>,
    pub dependency_service: Arc<DependencyService>,
    pub assignment_service: Arc<AssignmentService>,
    pub comment_service: Arc<CommentService>,
    pub work_log_service: Arc<WorkLogService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let departments: Arc<dyn DepartmentRepository> =
            Arc::new(SeaOrmDepartmentRepository::new(db.clone()));
        let employees: Arc<dyn EmployeeRepository> =
            Arc::new(SeaOrmEmployeeRepository::new(db.clone()));
        let roles: Arc<dyn RoleRepository> = Arc::new(SeaOrmRoleRepository::new(db.clone()));
        let resources: Arc<dyn ResourceRepository> =
            Arc::new(SeaOrmResourceRepository::new(db.clone()));
        let projects: Arc<dyn ProjectRepository> =
            Arc::new(SeaOrmProjectRepository::new(db.clone()));
        let tasks: Arc<dyn TaskRepository> = Arc::new(SeaOrmTaskRepository::new(db.clone()));
        let milestones: Arc<dyn MilestoneRepository> =
            Arc::new(SeaOrmMilestoneRepository::new(db.clone()));
        let risks: Arc<dyn RiskRepository> = Arc::new(SeaOrmRiskRepository::new(db.clone()));
        let dependencies: Arc<dyn DependencyRepository> =
            Arc::new(SeaOrmDependencyRepository::new(db.clone()));
        let assignments: Arc<dyn AssignmentRepository> =
            Arc::new(SeaOrmAssignmentRepository::new(db.clone()));
        let comments: Arc<dyn CommentRepository> =
            Arc::new(SeaOrmCommentRepository::new(db.clone()));
        let work_logs: Arc<dyn WorkLogRepository> =
            Arc::new(SeaOrmWorkLogRepository::new(db.clone()));
        let project_departments: Arc<dyn ProjectDepartmentRepository> =
            Arc::new(SeaOrmProjectDepartmentRepository::new(db.clone()));

        Self {
            department_service: Arc::new(DepartmentService::new(departments.clone())),
            employee_service: Arc::new(EmployeeService::new(
                employees.clone(),
                departments.clone(),
            )),
            role_service: Arc::new(RoleService::new(roles.clone())),
            resource_service: Arc::new(ResourceService::new(
                resources.clone(),
                Arc::new(SeaOrmAllocationRepository::new(db.clone())) as Arc<dyn AllocationRepository>,
                tasks.clone(),
            )),
            project_service: Arc::new(ProjectService::new(
                projects.clone(),
                employees.clone(),
                departments,
                project_departments,
            )),
            task_service: Arc::new(TaskService::new(tasks.clone(), projects.clone())),
            milestone_service: Arc::new(MilestoneService::new(milestones, projects.clone())),
            risk_service: Arc::new(RiskService::new(risks, projects.clone(), employees.clone())),
            dependency_service: Arc::new(DependencyService::new(
                dependencies,
                tasks.clone(),
                projects,
            )),
            assignment_service: Arc::new(AssignmentService::new(
                assignments,
                tasks.clone(),
                employees.clone(),
                roles,
            )),
            comment_service: Arc::new(CommentService::new(comments, tasks.clone(), employees.clone())),
            work_log_service: Arc::new(WorkLogService::new(work_logs, tasks, employees)),
        }
    }
}

/// 全ルーターを合成してアプリケーションのルーターを構築する
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::department_handler::department_router())
        .merge(handlers::employee_handler::employee_router())
        .merge(handlers::role_handler::role_router())
        .merge(handlers::resource_handler::resource_router())
        .merge(handlers::project_handler::project_router())
        .merge(handlers::task_handler::task_router())
        .merge(handlers::milestone_handler::milestone_router())
        .merge(handlers::risk_handler::risk_router())
        .merge(handlers::dependency_handler::dependency_router())
        .merge(handlers::assignment_handler::assignment_router())
        .merge(handlers::comment_handler::comment_router())
        .merge(handlers::work_log_handler::work_log_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
