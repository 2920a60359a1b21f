// tests/project_service_tests.rs
mod common;

use common::TestContext;
use pmis_backend::api::dto::project_dto::{CreateProjectDto, UpdateProjectDto};
use pmis_backend::error::AppError;
use uuid::Uuid;

#[tokio::test]
async fn test_create_project_defaults_to_planned() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let service = ctx.project_service();

    let project = service
        .create(CreateProjectDto {
            name: "New System".to_string(),
            start_date: Some(common::test_date(1)),
            end_date: None,
            status: None,
            manager_id: manager.id,
        })
        .await
        .unwrap();

    assert_eq!(project.status, "PLANNED");
    assert_eq!(project.manager_id, manager.id);
}

#[tokio::test]
async fn test_create_project_with_unknown_manager_fails() {
    let ctx = TestContext::new();
    let service = ctx.project_service();

    let result = service
        .create(CreateProjectDto {
            name: "Orphan".to_string(),
            start_date: None,
            end_date: None,
            status: None,
            manager_id: Uuid::new_v4(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_non_manager_cannot_update_status() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let other = ctx.seed_employee("Employee B").await;
    let project = ctx.seed_project("Guarded", manager.id).await;
    let service = ctx.project_service();

    let result = service
        .update_status(project.id, Some(other.id), "ACTIVE")
        .await;

    assert!(matches!(result, Err(AppError::Authorization(_))));
    // 保存済みの状態は変化しない
    assert_eq!(ctx.projects.get(project.id).unwrap().status, "PLANNED");
}

#[tokio::test]
async fn test_manager_updates_status() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let project = ctx.seed_project("Guarded", manager.id).await;
    let service = ctx.project_service();

    let updated = service
        .update_status(project.id, Some(manager.id), "ACTIVE")
        .await
        .unwrap();

    assert_eq!(updated.status, "ACTIVE");
    assert_eq!(ctx.projects.get(project.id).unwrap().status, "ACTIVE");
}

#[tokio::test]
async fn test_missing_actor_is_validation_error() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let project = ctx.seed_project("Guarded", manager.id).await;
    let service = ctx.project_service();

    let result = service.update_status(project.id, None, "ACTIVE").await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_unknown_project_is_not_found() {
    let ctx = TestContext::new();
    let employee = ctx.seed_employee("Employee").await;
    let service = ctx.project_service();

    let result = service
        .update_status(Uuid::new_v4(), Some(employee.id), "ACTIVE")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_invalid_status_is_validation_error() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let project = ctx.seed_project("Guarded", manager.id).await;
    let service = ctx.project_service();

    let result = service
        .update_status(project.id, Some(manager.id), "PAUSED")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_update_can_reassign_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let successor = ctx.seed_employee("Manager B").await;
    let project = ctx.seed_project("Handover", manager.id).await;
    let service = ctx.project_service();

    let updated = service
        .update(
            project.id,
            Some(manager.id),
            UpdateProjectDto {
                name: "Handover".to_string(),
                start_date: None,
                end_date: None,
                status: "ACTIVE".to_string(),
                manager_id: Some(successor.id),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.manager_id, successor.id);

    // 旧責任者はもう変更できない
    let result = service
        .update_status(project.id, Some(manager.id), "ON_HOLD")
        .await;
    assert!(matches!(result, Err(AppError::Authorization(_))));
}

#[tokio::test]
async fn test_add_department_requires_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let other = ctx.seed_employee("Employee B").await;
    let department = ctx.seed_department("QA").await;
    let project = ctx.seed_project("Guarded", manager.id).await;
    let service = ctx.project_service();

    let result = service
        .add_department(project.id, department.id, Some(other.id))
        .await;
    assert!(matches!(result, Err(AppError::Authorization(_))));
    assert!(!ctx.project_departments.contains(project.id, department.id));

    service
        .add_department(project.id, department.id, Some(manager.id))
        .await
        .unwrap();
    assert!(ctx.project_departments.contains(project.id, department.id));
}

#[tokio::test]
async fn test_delete_requires_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager A").await;
    let other = ctx.seed_employee("Employee B").await;
    let project = ctx.seed_project("Doomed", manager.id).await;
    let service = ctx.project_service();

    let result = service.delete(project.id, Some(other.id)).await;
    assert!(matches!(result, Err(AppError::Authorization(_))));
    assert!(ctx.projects.get(project.id).is_some());

    service.delete(project.id, Some(manager.id)).await.unwrap();
    assert!(ctx.projects.get(project.id).is_none());
}
