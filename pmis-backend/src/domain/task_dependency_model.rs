// pmis-backend/src/domain/task_dependency_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// タスク依存関係の結合エンティティ
///
/// 識別子は (predecessor_task_id, successor_task_id) の複合キー。
/// 両タスクは必ず同一プロジェクトに属する
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "task_dependencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub predecessor_task_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub successor_task_id: Uuid,

    #[sea_orm(column_name = "type")]
    pub dependency_type: String,

    #[sea_orm(nullable)]
    pub lag_days: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task_model::Entity",
        from = "Column::PredecessorTaskId",
        to = "super::task_model::Column::Id"
    )]
    Predecessor,
    #[sea_orm(
        belongs_to = "super::task_model::Entity",
        from = "Column::SuccessorTaskId",
        to = "super::task_model::Column::Id"
    )]
    Successor,
}

impl ActiveModelBehavior for ActiveModel {}

/// 依存タイプを表すenum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    /// Finish to Start
    FS,
    /// Start to Start
    SS,
    /// Finish to Finish
    FF,
    /// Start to Finish
    SF,
}

impl DependencyType {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "FS" => Some(Self::FS),
            "SS" => Some(Self::SS),
            "FF" => Some(Self::FF),
            "SF" => Some(Self::SF),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FS => "FS",
            Self::SS => "SS",
            Self::FF => "FF",
            Self::SF => "SF",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DependencyType> for String {
    fn from(kind: DependencyType) -> Self {
        kind.as_str().to_string()
    }
}
