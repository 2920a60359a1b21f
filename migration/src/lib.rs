// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 基本テーブル（依存関係なし）
mod m20250801_000001_create_departments_table;
mod m20250801_000002_create_employees_table;
mod m20250801_000003_create_roles_table;
mod m20250801_000004_create_resources_table;

// プロジェクト関連テーブル
mod m20250802_000001_create_projects_table;
mod m20250802_000002_create_tasks_table;
mod m20250802_000003_create_project_milestones_table;
mod m20250802_000004_create_project_risks_table;

// タスク活動記録テーブル
mod m20250803_000001_create_task_comments_table;
mod m20250803_000002_create_task_work_logs_table;

// 複合キーの結合テーブル
mod m20250804_000001_create_task_assignments_table;
mod m20250804_000002_create_task_dependencies_table;
mod m20250804_000003_create_resource_allocations_table;
mod m20250804_000004_create_project_departments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 基本テーブル作成
            Box::new(m20250801_000001_create_departments_table::Migration),
            Box::new(m20250801_000002_create_employees_table::Migration),
            Box::new(m20250801_000003_create_roles_table::Migration),
            Box::new(m20250801_000004_create_resources_table::Migration),
            // 2. プロジェクト階層（employees / departments に依存）
            Box::new(m20250802_000001_create_projects_table::Migration),
            Box::new(m20250802_000002_create_tasks_table::Migration),
            Box::new(m20250802_000003_create_project_milestones_table::Migration),
            Box::new(m20250802_000004_create_project_risks_table::Migration),
            // 3. タスク活動記録
            Box::new(m20250803_000001_create_task_comments_table::Migration),
            Box::new(m20250803_000002_create_task_work_logs_table::Migration),
            // 4. 結合テーブル
            Box::new(m20250804_000001_create_task_assignments_table::Migration),
            Box::new(m20250804_000002_create_task_dependencies_table::Migration),
            Box::new(m20250804_000003_create_resource_allocations_table::Migration),
            Box::new(m20250804_000004_create_project_departments_table::Migration),
        ]
    }
}
