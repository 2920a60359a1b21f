// pmis-backend/src/service/employee_service.rs

use crate::api::dto::employee_dto::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto};
use crate::domain::employee_model::Model as Employee;
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct EmployeeService {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
}

impl EmployeeService {
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            employees,
            departments,
        }
    }

    /// 社員を作成。所属部署が解決できる必要がある
    pub async fn create(&self, payload: CreateEmployeeDto) -> AppResult<EmployeeDto> {
        let department = self
            .departments
            .find_by_id(payload.department_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;

        let employee = Employee {
            id: Uuid::new_v4(),
            name: payload.name,
            department_id: department.id,
        };

        let created = self.employees.insert(employee).await?;
        Ok(created.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<EmployeeDto>> {
        let employees = self.employees.find_all().await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<EmployeeDto> {
        let employee = self.find_employee(id).await?;
        Ok(employee.into())
    }

    pub async fn get_by_department(&self, department_id: Uuid) -> AppResult<Vec<EmployeeDto>> {
        let employees = self.employees.find_by_department_id(department_id).await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn update(&self, id: Uuid, payload: UpdateEmployeeDto) -> AppResult<EmployeeDto> {
        let mut employee = self.find_employee(id).await?;

        if let Some(department_id) = payload.department_id {
            let department = self
                .departments
                .find_by_id(department_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Department not found".to_string()))?;
            employee.department_id = department.id;
        }
        employee.name = payload.name;

        let updated = self.employees.update(employee).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find_employee(id).await?;
        self.employees.delete(id).await
    }

    async fn find_employee(&self, id: Uuid) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee with id {} not found", id)))
    }
}
