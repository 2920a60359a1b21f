// pmis-backend/src/domain/mod.rs
pub mod department_model;
pub mod employee_model;
pub mod priority_level;
pub mod project_department_model;
pub mod project_milestone_model;
pub mod project_model;
pub mod project_risk_model;
pub mod resource_allocation_model;
pub mod resource_model;
pub mod role_model;
pub mod task_assignment_model;
pub mod task_comment_model;
pub mod task_dependency_model;
pub mod task_model;
pub mod task_status;
pub mod task_work_log_model;
