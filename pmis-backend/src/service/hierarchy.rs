// pmis-backend/src/service/hierarchy.rs

use crate::domain::task_model::Model as Task;
use crate::error::{AppError, AppResult};
use uuid::Uuid;

/// 子エンティティがパスで指定されたプロジェクトに属することを検証する
///
/// マイルストーン完了・リスクステータス更新・タスクの変更系操作で、
/// 認可判定より先に実行される。
pub fn assert_belongs_to_project(
    child_project_id: Uuid,
    expected_project_id: Uuid,
    entity: &str,
) -> AppResult<()> {
    if child_project_id != expected_project_id {
        return Err(AppError::Consistency(format!(
            "{} does not belong to the specified project",
            entity
        )));
    }
    Ok(())
}

/// 2つのタスクが同一プロジェクトに属することを検証し、共通のプロジェクトIDを返す
///
/// 依存関係の作成・削除で使用する。返されたIDをそのまま認可ガードに渡す。
pub fn assert_same_project(predecessor: &Task, successor: &Task) -> AppResult<Uuid> {
    if predecessor.project_id != successor.project_id {
        return Err(AppError::Consistency(
            "tasks must belong to the same project".to_string(),
        ));
    }
    Ok(predecessor.project_id)
}
