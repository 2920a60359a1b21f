// tests/risk_service_tests.rs
mod common;

use common::TestContext;
use pmis_backend::api::dto::risk_dto::CreateRiskDto;
use pmis_backend::error::AppError;
use uuid::Uuid;

fn risk_dto(title: &str) -> CreateRiskDto {
    CreateRiskDto {
        title: title.to_string(),
        description: Some("Vendor schedule slip".to_string()),
        level: "HIGH".to_string(),
        owner_id: None,
    }
}

#[tokio::test]
async fn test_create_risk_forces_open_status_and_created_at() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.risk_service();

    let risk = service
        .create(project.id, Some(manager.id), risk_dto("Supply delay"))
        .await
        .unwrap();

    assert_eq!(risk.status, "OPEN");
    assert!(risk.updated_at.is_none());
    assert_eq!(risk.level, "HIGH");
    assert_eq!(risk.project_id, project.id);
}

#[tokio::test]
async fn test_update_status_sets_updated_at() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let risk = ctx.seed_risk("Supply delay", project.id).await;
    let service = ctx.risk_service();

    let updated = service
        .update_status(
            project.id,
            risk.id,
            Some(manager.id),
            "MITIGATED".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "MITIGATED");
    assert!(updated.updated_at.is_some());

    let stored = ctx.risks.get(risk.id).unwrap();
    assert_eq!(stored.status, "MITIGATED");
    assert!(stored.updated_at.is_some());
}

#[tokio::test]
async fn test_update_status_of_foreign_risk_is_consistency_error() {
    let ctx = TestContext::new();
    let manager_a = ctx.seed_employee("Manager A").await;
    let manager_b = ctx.seed_employee("Manager B").await;
    let project_a = ctx.seed_project("Project A", manager_a.id).await;
    let project_b = ctx.seed_project("Project B", manager_b.id).await;
    let risk = ctx.seed_risk("Of A", project_a.id).await;
    let service = ctx.risk_service();

    let result = service
        .update_status(
            project_b.id,
            risk.id,
            Some(manager_b.id),
            "CLOSED".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Consistency(_))));
    assert_eq!(ctx.risks.get(risk.id).unwrap().status, "OPEN");
}

#[tokio::test]
async fn test_create_risk_requires_manager() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let other = ctx.seed_employee("Other").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.risk_service();

    let result = service
        .create(project.id, Some(other.id), risk_dto("Supply delay"))
        .await;

    assert!(matches!(result, Err(AppError::Authorization(_))));
}

#[tokio::test]
async fn test_create_risk_with_unknown_owner_fails() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.risk_service();

    let mut payload = risk_dto("Supply delay");
    payload.owner_id = Some(Uuid::new_v4());

    let result = service.create(project.id, Some(manager.id), payload).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_create_risk_with_owner() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let owner = ctx.seed_employee("Risk owner").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.risk_service();

    let mut payload = risk_dto("Supply delay");
    payload.owner_id = Some(owner.id);

    let risk = service
        .create(project.id, Some(manager.id), payload)
        .await
        .unwrap();

    assert_eq!(risk.owner_id, Some(owner.id));
}

#[tokio::test]
async fn test_invalid_level_is_validation_error() {
    let ctx = TestContext::new();
    let manager = ctx.seed_employee("Manager").await;
    let project = ctx.seed_project("Project", manager.id).await;
    let service = ctx.risk_service();

    let mut payload = risk_dto("Supply delay");
    payload.level = "SEVERE".to_string();

    let result = service.create(project.id, Some(manager.id), payload).await;

    assert!(matches!(result, Err(AppError::Validation(_))));
}
