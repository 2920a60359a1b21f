// pmis-backend/src/service/authorization.rs

use crate::domain::project_model::Model as Project;
use crate::error::{AppError, AppResult};
use crate::repository::project_repository::ProjectRepository;
use uuid::Uuid;

/// プロジェクト責任者のみが配下の変更操作を実行できることを検証する
///
/// プロジェクト本体・タスク・マイルストーン・リスク・依存関係の全ての
/// 変更系操作がこのガードを最初に通る。読み取り系はガードしない。
/// 検証に成功した場合は解決済みのプロジェクトを返し、呼び出し側の再取得を省く。
pub async fn assert_manager(
    projects: &dyn ProjectRepository,
    project_id: Uuid,
    acting_employee_id: Option<Uuid>,
) -> AppResult<Project> {
    let employee_id = acting_employee_id
        .ok_or_else(|| AppError::Validation("employee id is required".to_string()))?;

    let project = projects
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project with id {} not found", project_id)))?;

    if project.manager_id != employee_id {
        return Err(AppError::Authorization(
            "only the project manager can perform this operation".to_string(),
        ));
    }

    Ok(project)
}
