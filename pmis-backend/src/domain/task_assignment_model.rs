// pmis-backend/src/domain/task_assignment_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// タスクアサインの結合エンティティ
///
/// 識別子は (task_id, employee_id, role_id) の複合キーそのもの。サロゲートIDは持たない
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task_assignments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub task_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task_model::Entity",
        from = "Column::TaskId",
        to = "super::task_model::Column::Id"
    )]
    Task,
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmployeeId",
        to = "super::employee_model::Column::Id"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::role_model::Entity",
        from = "Column::RoleId",
        to = "super::role_model::Column::Id"
    )]
    Role,
}

impl ActiveModelBehavior for ActiveModel {}
