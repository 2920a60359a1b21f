// pmis-backend/src/service/department_service.rs

use crate::api::dto::department_dto::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto};
use crate::domain::department_model::Model as Department;
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(departments: Arc<dyn DepartmentRepository>) -> Self {
        Self { departments }
    }

    /// 部署を作成。名前の一意性は永続化層の制約に委ねる
    pub async fn create(&self, payload: CreateDepartmentDto) -> AppResult<DepartmentDto> {
        let department = Department {
            id: Uuid::new_v4(),
            name: payload.name,
        };

        let created = self.departments.insert(department).await?;
        Ok(created.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<DepartmentDto>> {
        let departments = self.departments.find_all().await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<DepartmentDto> {
        let department = self.find_department(id).await?;
        Ok(department.into())
    }

    pub async fn update(&self, id: Uuid, payload: UpdateDepartmentDto) -> AppResult<DepartmentDto> {
        let mut department = self.find_department(id).await?;
        department.name = payload.name;

        let updated = self.departments.update(department).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find_department(id).await?;
        self.departments.delete(id).await
    }

    async fn find_department(&self, id: Uuid) -> AppResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Department with id {} not found", id)))
    }
}
