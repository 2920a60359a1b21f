// pmis-backend/src/api/dto/role_dto.rs
use crate::domain::role_model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleDto {
    pub name: String,

    // 省略されたフラグはロール種別の既定マトリクスで補完する
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    pub name: Option<String>,

    // 明示されたフラグのみ上書きする。省略されたフラグは変更しない
    pub can_read: Option<bool>,
    pub can_write: Option<bool>,
    pub can_delete: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: Uuid,
    pub name: String,
    pub can_read: bool,
    pub can_write: bool,
    pub can_delete: bool,
}

impl From<role_model::Model> for RoleDto {
    fn from(model: role_model::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            can_read: model.can_read,
            can_write: model.can_write,
            can_delete: model.can_delete,
        }
    }
}
