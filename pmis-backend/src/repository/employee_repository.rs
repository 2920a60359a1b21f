// pmis-backend/src/repository/employee_repository.rs

use crate::domain::employee_model::{
    ActiveModel as EmployeeActiveModel, Column as EmployeeColumn, Entity as EmployeeEntity,
    Model as Employee,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// 社員の永続化境界
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>>;
    async fn find_all(&self) -> AppResult<Vec<Employee>>;
    async fn find_by_department_id(&self, department_id: Uuid) -> AppResult<Vec<Employee>>;
    async fn insert(&self, employee: Employee) -> AppResult<Employee>;
    async fn update(&self, employee: Employee) -> AppResult<Employee>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct SeaOrmEmployeeRepository {
    db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(employee: &Employee) -> EmployeeActiveModel {
        EmployeeActiveModel {
            id: Set(employee.id),
            name: Set(employee.name.clone()),
            department_id: Set(employee.department_id),
        }
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        let model = EmployeeEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(EmployeeColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    /// 部署に所属する社員一覧を取得
    async fn find_by_department_id(&self, department_id: Uuid) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .filter(EmployeeColumn::DepartmentId.eq(department_id))
            .order_by_asc(EmployeeColumn::Name)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, employee: Employee) -> AppResult<Employee> {
        let model = Self::to_active_model(&employee).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, employee: Employee) -> AppResult<Employee> {
        let model = Self::to_active_model(&employee).update(&self.db).await?;
        Ok(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        EmployeeEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
