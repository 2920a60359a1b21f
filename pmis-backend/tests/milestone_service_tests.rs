// tests/milestone_service_tests.rs
mod common;

use common::TestContext;
use pmis_backend::api::dto::milestone_dto::CreateMilestoneDto;
use pmis_backend::error::AppError;

#[tokio::test]
async fn test_create_milestone_starts_incomplete() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.milestone_service();

    let milestone = service
        .create(
            project.id,
            Some(manager.id),
            CreateMilestoneDto {
                name: "Beta release".to_string(),
                due_date: common::test_date(20),
            },
        )
        .await
        .unwrap();

    assert!(!milestone.is_completed);
    assert_eq!(milestone.project_id, project.id);
}

#[tokio::test]
async fn test_create_milestone_requires_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let other = ctx.seed_employee("Other").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.milestone_service();

    let result = service
        .create(
            project.id,
            Some(other.id),
            CreateMilestoneDto {
                name: "Beta release".to_string(),
                due_date: common::test_date(20),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Authorization(_))));
}

#[tokio::test]
async fn test_complete_milestone_by_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let milestone = ctx.seed_milestone("Beta", project.id).await;
    let service = ctx.milestone_service();

    let completed = service
        .complete(project.id, milestone.id, Some(manager.id))
        .await
        .unwrap();

    assert!(completed.is_completed);
    assert!(ctx.milestones.get(milestone.id).unwrap().is_completed);
}

#[tokio::test]
async fn test_complete_milestone_of_other_project_is_consistency_error() {
    let ctx = TestContext::new();
    let manager_a = ctx.seed_employee("Manager A").await;
    let manager_b = ctx.seed_employee("Manager B").await;
    let project_a = ctx.seed_project("Project A", manager_a.id).await;
    let project_b = ctx.seed_project("Project B", manager_b.id).await;
    let milestone = ctx.seed_milestone("Of A", project_a.id).await;
    let service = ctx.milestone_service();

    // パスのプロジェクトとマイルストーンの所属が食い違う。認可判定より前に検出される
    let result = service
        .complete(project_b.id, milestone.id, Some(manager_b.id))
        .await;

    assert!(matches!(result, Err(AppError::Consistency(_))));
    assert!(!ctx.milestones.get(milestone.id).unwrap().is_completed);
}

#[tokio::test]
async fn test_complete_milestone_by_non_manager_fails() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let other = ctx.seed_employee("Other").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let milestone = ctx.seed_milestone("Beta", project.id).await;
    let service = ctx.milestone_service();

    let result = service
        .complete(project.id, milestone.id, Some(other.id))
        .await;

    assert!(matches!(result, Err(AppError::Authorization(_))));
    assert!(!ctx.milestones.get(milestone.id).unwrap().is_completed);
}

#[tokio::test]
async fn test_list_milestones_is_unguarded() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    ctx.seed_milestone("M1", project.id).await;
    ctx.seed_milestone("M2", project.id).await;
    let service = ctx.milestone_service();

    // 読み取りは操作者なしで可能
    let milestones = service.get_by_project(project.id).await.unwrap();
    assert_eq!(milestones.len(), 2);
}
