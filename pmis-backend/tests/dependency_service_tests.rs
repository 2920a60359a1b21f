// tests/dependency_service_tests.rs
mod common;

use common::TestContext;
use pmis_backend::api::dto::dependency_dto::CreateDependencyDto;
use pmis_backend::error::AppError;
use uuid::Uuid;

fn dependency_dto(predecessor_task_id: Uuid) -> CreateDependencyDto {
    CreateDependencyDto {
        predecessor_task_id,
        dependency_type: "FS".to_string(),
        lag_days: Some(0),
    }
}

#[tokio::test]
async fn test_cross_project_dependency_is_rejected_for_any_actor() {
    let ctx = TestContext::new();
    let manager_a = ctx.seed_employee("Manager A").await;
    let manager_b = ctx.seed_employee("Manager B").await;
    let project_a = ctx.seed_project("Project A", manager_a.id).await;
    let project_b = ctx.seed_project("Project B", manager_b.id).await;
    let task_a = ctx.seed_task("Task A", project_a.id).await;
    let task_b = ctx.seed_task("Task B", project_b.id).await;
    let service = ctx.dependency_service();

    // 供給される社員IDにかかわらず整合性エラーになる
    for actor in [Some(manager_a.id), Some(manager_b.id), None] {
        let result = service
            .add(task_a.id, actor, dependency_dto(task_b.id))
            .await;
        assert!(matches!(result, Err(AppError::Consistency(_))));
    }

    // 依存関係は一切永続化されない
    assert_eq!(ctx.dependencies.len(), 0);
}

#[tokio::test]
async fn test_add_dependency_same_project() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let predecessor = ctx.seed_task("Predecessor", project.id).await;
    let successor = ctx.seed_task("Successor", project.id).await;
    let service = ctx.dependency_service();

    let dependency = service
        .add(
            successor.id,
            Some(manager.id),
            CreateDependencyDto {
                predecessor_task_id: predecessor.id,
                dependency_type: "SS".to_string(),
                lag_days: Some(-2), // 負のラグも許容される
            },
        )
        .await
        .unwrap();

    assert_eq!(dependency.predecessor_task_id, predecessor.id);
    assert_eq!(dependency.successor_task_id, successor.id);
    assert_eq!(dependency.dependency_type, "SS");
    assert_eq!(dependency.lag_days, Some(-2));
    assert!(ctx.dependencies.contains(predecessor.id, successor.id));
}

#[tokio::test]
async fn test_add_dependency_requires_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let other = ctx.seed_employee("Other").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let predecessor = ctx.seed_task("Predecessor", project.id).await;
    let successor = ctx.seed_task("Successor", project.id).await;
    let service = ctx.dependency_service();

    let result = service
        .add(successor.id, Some(other.id), dependency_dto(predecessor.id))
        .await;

    assert!(matches!(result, Err(AppError::Authorization(_))));
    assert_eq!(ctx.dependencies.len(), 0);
}

#[tokio::test]
async fn test_missing_endpoint_is_not_found() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let successor = ctx.seed_task("Successor", project.id).await;
    let service = ctx.dependency_service();

    let result = service
        .add(
            successor.id,
            Some(manager.id),
            dependency_dto(Uuid::new_v4()),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_invalid_dependency_type_is_validation_error() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let predecessor = ctx.seed_task("Predecessor", project.id).await;
    let successor = ctx.seed_task("Successor", project.id).await;
    let service = ctx.dependency_service();

    let result = service
        .add(
            successor.id,
            Some(manager.id),
            CreateDependencyDto {
                predecessor_task_id: predecessor.id,
                dependency_type: "XX".to_string(),
                lag_days: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_delete_dependency_shares_the_creation_guard() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let other = ctx.seed_employee("Other").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let predecessor = ctx.seed_task("Predecessor", project.id).await;
    let successor = ctx.seed_task("Successor", project.id).await;
    let service = ctx.dependency_service();

    service
        .add(
            successor.id,
            Some(manager.id),
            dependency_dto(predecessor.id),
        )
        .await
        .unwrap();

    // 責任者以外は削除できない
    let result = service
        .delete(successor.id, predecessor.id, Some(other.id))
        .await;
    assert!(matches!(result, Err(AppError::Authorization(_))));
    assert!(ctx.dependencies.contains(predecessor.id, successor.id));

    service
        .delete(successor.id, predecessor.id, Some(manager.id))
        .await
        .unwrap();
    assert!(!ctx.dependencies.contains(predecessor.id, successor.id));
}

#[tokio::test]
async fn test_list_dependencies_is_scoped_by_successor() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let a = ctx.seed_task("A", project.id).await;
    let b = ctx.seed_task("B", project.id).await;
    let c = ctx.seed_task("C", project.id).await;
    let service = ctx.dependency_service();

    service
        .add(c.id, Some(manager.id), dependency_dto(a.id))
        .await
        .unwrap();
    service
        .add(c.id, Some(manager.id), dependency_dto(b.id))
        .await
        .unwrap();

    let dependencies = service.get_by_successor(c.id).await.unwrap();
    assert_eq!(dependencies.len(), 2);

    let dependencies = service.get_by_successor(a.id).await.unwrap();
    assert!(dependencies.is_empty());
}
