// pmis-backend/src/domain/role_model.rs
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ロールエンティティ。name は常に正規化済みの正準名で保存される
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(unique)]
    pub name: String,

    pub can_read: bool,

    pub can_write: bool,

    pub can_delete: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// ロール種別を表すenum。閉じた語彙のみ許可する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleKind {
    Admin,
    Manager,
    Member,
    Viewer,
}

/// ロール種別ごとのデフォルト権限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePermissions {
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
}

impl RoleKind {
    /// 正準名を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Admin => "ADMIN",
            RoleKind::Manager => "MANAGER",
            RoleKind::Member => "MEMBER",
            RoleKind::Viewer => "VIEWER",
        }
    }

    /// 文字列をロール種別に正規化。大文字小文字は区別しない
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Some(RoleKind::Admin),
            "MANAGER" => Some(RoleKind::Manager),
            "MEMBER" => Some(RoleKind::Member),
            "VIEWER" => Some(RoleKind::Viewer),
            _ => None,
        }
    }

    /// ロール種別ごとの既定の権限マトリクス
    pub fn default_permissions(&self) -> RolePermissions {
        match self {
            RoleKind::Admin => RolePermissions {
                can_read: true,
                can_write: true,
                can_delete: true,
            },
            RoleKind::Manager | RoleKind::Member => RolePermissions {
                can_read: true,
                can_write: true,
                can_delete: false,
            },
            RoleKind::Viewer => RolePermissions {
                can_read: true,
                can_write: false,
                can_delete: false,
            },
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, RoleKind::Admin)
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid role name: {}", s))
    }
}
