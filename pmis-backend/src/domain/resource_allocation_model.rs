// pmis-backend/src/domain/resource_allocation_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 資源割当の結合エンティティ。識別子は (task_id, resource_id) の複合キー
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resource_allocations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub task_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub resource_id: Uuid,

    pub amount_used: i32,
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
        belongs_to = "super::resource_model::Entity",
        from = "Column::ResourceId",
        to = "super::resource_model::Column::Id"
    )]
    Resource,
}

impl ActiveModelBehavior for ActiveModel {}
