// pmis-backend/src/service/assignment_service.rs

use crate::api::dto::assignment_dto::{
    AssignmentByEmployeeDto, AssignmentByTaskDto, AssignmentDto, CreateAssignmentDto,
};
use crate::domain::task_assignment_model::Model as TaskAssignment;
use crate::error::{AppError, AppResult};
use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::role_repository::RoleRepository;
use crate::repository::task_repository::TaskRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct AssignmentService {
    assignments: Arc<dyn AssignmentRepository>,
    tasks: Arc<dyn TaskRepository>,
    employees: Arc<dyn EmployeeRepository>,
    roles: Arc<dyn RoleRepository>,
}

impl AssignmentService {
    pub fn new(
        assignments: Arc<dyn AssignmentRepository>,
        tasks: Arc<dyn TaskRepository>,
        employees: Arc<dyn EmployeeRepository>,
        roles: Arc<dyn RoleRepository>,
    ) -> Self {
        Self {
            assignments,
            tasks,
            employees,
            roles,
        }
    }

    /// 社員をロール付きでタスクにアサインする。3つの参照全てが解決できる必要がある
    pub async fn assign(
        &self,
        task_id: Uuid,
        payload: CreateAssignmentDto,
    ) -> AppResult<AssignmentDto> {
        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
        let employee = self
            .employees
            .find_by_id(payload.employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
        let role = self
            .roles
            .find_by_id(payload.role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;

        let created = self
            .assignments
            .insert(TaskAssignment {
                task_id: task.id,
                employee_id: employee.id,
                role_id: role.id,
            })
            .await?;
        Ok(created.into())
    }

    pub async fn get_by_task(&self, task_id: Uuid) -> AppResult<Vec<AssignmentByTaskDto>> {
        let assignments = self.assignments.find_by_task_id(task_id).await?;

        let mut result = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let employee = self
                .employees
                .find_by_id(assignment.employee_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
            result.push(AssignmentByTaskDto {
                employee_id: employee.id,
                employee_name: employee.name,
                role_id: assignment.role_id,
            });
        }
        Ok(result)
    }

    pub async fn get_by_employee(
        &self,
        employee_id: Uuid,
    ) -> AppResult<Vec<AssignmentByEmployeeDto>> {
        let assignments = self.assignments.find_by_employee_id(employee_id).await?;

        let mut result = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let task = self
                .tasks
                .find_by_id(assignment.task_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;
            result.push(AssignmentByEmployeeDto {
                task_id: task.id,
                task_name: task.name,
            });
        }
        Ok(result)
    }

    /// アサインをキータプル指定で解除する
    pub async fn remove(&self, task_id: Uuid, employee_id: Uuid, role_id: Uuid) -> AppResult<()> {
        self.assignments
            .delete_by_key(task_id, employee_id, role_id)
            .await
    }
}
