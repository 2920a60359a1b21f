// pmis-backend/src/service/role_service.rs

use crate::api::dto::role_dto::{CreateRoleDto, RoleDto, UpdateRoleDto};
use crate::domain::role_model::{Model as Role, RoleKind};
use crate::error::{AppError, AppResult};
use crate::repository::role_repository::RoleRepository;
use std::sync::Arc;
use uuid::Uuid;

pub struct RoleService {
    roles: Arc<dyn RoleRepository>,
}

impl RoleService {
    pub fn new(roles: Arc<dyn RoleRepository>) -> Self {
        Self { roles }
    }

    /// ロールを作成。名前は正準形に正規化し、
    /// 省略された権限フラグはロール種別の既定マトリクスで補完する
    pub async fn create(&self, payload: CreateRoleDto) -> AppResult<RoleDto> {
        let kind = normalize(&payload.name)?;
        let defaults = kind.default_permissions();

        let role = Role {
            id: Uuid::new_v4(),
            name: kind.as_str().to_string(),
            can_read: payload.can_read.unwrap_or(defaults.can_read),
            can_write: payload.can_write.unwrap_or(defaults.can_write),
            can_delete: payload.can_delete.unwrap_or(defaults.can_delete),
        };

        let created = self.roles.insert(role).await?;
        Ok(created.into())
    }

    pub async fn get_all(&self) -> AppResult<Vec<RoleDto>> {
        let roles = self.roles.find_all().await?;
        Ok(roles.into_iter().map(Into::into).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<RoleDto> {
        let role = self.find_role(id).await?;
        Ok(role.into())
    }

    /// ロールを更新。明示されたフラグのみ上書きし、省略されたフラグは変更しない
    pub async fn update(&self, id: Uuid, payload: UpdateRoleDto) -> AppResult<RoleDto> {
        let mut role = self.find_role(id).await?;

        if let Some(name) = payload.name.as_deref() {
            let kind = normalize(name)?;
            role.name = kind.as_str().to_string();
        }
        if let Some(can_read) = payload.can_read {
            role.can_read = can_read;
        }
        if let Some(can_write) = payload.can_write {
            role.can_write = can_write;
        }
        if let Some(can_delete) = payload.can_delete {
            role.can_delete = can_delete;
        }

        let updated = self.roles.update(role).await?;
        Ok(updated.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.find_role(id).await?;
        self.roles.delete(id).await
    }

    async fn find_role(&self, id: Uuid) -> AppResult<Role> {
        self.roles
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role with id {} not found", id)))
    }
}

fn normalize(name: &str) -> AppResult<RoleKind> {
    RoleKind::from_str(name)
        .ok_or_else(|| AppError::Validation(format!("Invalid role name: '{}'", name)))
}
