// pmis-backend/src/repository/risk_repository.rs

use crate::domain::project_risk_model::{
    ActiveModel as RiskActiveModel, Column as RiskColumn, Entity as RiskEntity,
    Model as ProjectRisk,
};
use crate::error::AppResult;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// プロジェクトリスクの永続化境界
#[async_trait]
pub trait RiskRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectRisk>>;
    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectRisk>>;
    async fn insert(&self, risk: ProjectRisk) -> AppResult<ProjectRisk>;
    async fn update(&self, risk: ProjectRisk) -> AppResult<ProjectRisk>;
}

pub struct SeaOrmRiskRepository {
    db: DatabaseConnection,
}

impl SeaOrmRiskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(risk: &ProjectRisk) -> RiskActiveModel {
        RiskActiveModel {
            id: Set(risk.id),
            project_id: Set(risk.project_id),
            title: Set(risk.title.clone()),
            description: Set(risk.description.clone()),
            level: Set(risk.level.clone()),
            status: Set(risk.status.clone()),
            owner_id: Set(risk.owner_id),
            created_at: Set(risk.created_at),
            updated_at: Set(risk.updated_at),
        }
    }
}

#[async_trait]
impl RiskRepository for SeaOrmRiskRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ProjectRisk>> {
        let model = RiskEntity::find_by_id(id).one(&self.db).await?;
        Ok(model)
    }

    async fn find_by_project_id(&self, project_id: Uuid) -> AppResult<Vec<ProjectRisk>> {
        let models = RiskEntity::find()
            .filter(RiskColumn::ProjectId.eq(project_id))
            .order_by_asc(RiskColumn::CreatedAt)
            .all(&self.db)
            .await?;
        Ok(models)
    }

    async fn insert(&self, risk: ProjectRisk) -> AppResult<ProjectRisk> {
        let model = Self::to_active_model(&risk).insert(&self.db).await?;
        Ok(model)
    }

    async fn update(&self, risk: ProjectRisk) -> AppResult<ProjectRisk> {
        let model = Self::to_active_model(&risk).update(&self.db).await?;
        Ok(model)
    }
}
