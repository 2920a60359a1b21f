use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // サロゲートIDなし。キータプルがそのまま主キーになる
        manager
            .create_table(
                Table::create()
                    .table(TaskAssignments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskAssignments::TaskId).uuid().not_null())
                    .col(ColumnDef::new(TaskAssignments::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(TaskAssignments::RoleId).uuid().not_null())
                    .primary_key(
                        Index::create()
                            .col(TaskAssignments::TaskId)
                            .col(TaskAssignments::EmployeeId)
                            .col(TaskAssignments::RoleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignments_task_id")
                            .from(TaskAssignments::Table, TaskAssignments::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignments_employee_id")
                            .from(TaskAssignments::Table, TaskAssignments::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assignments_role_id")
                            .from(TaskAssignments::Table, TaskAssignments::RoleId)
                            .to(Roles::Table, Roles::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 社員スコープの一覧取得用インデックス
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_assignments_employee_id")
                    .table(TaskAssignments::Table)
                    .col(TaskAssignments::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_task_assignments_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskAssignments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TaskAssignments {
    Table,
    TaskId,
    EmployeeId,
    RoleId,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
}
