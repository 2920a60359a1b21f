use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskWorkLogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskWorkLogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TaskWorkLogs::TaskId).uuid().not_null())
                    .col(ColumnDef::new(TaskWorkLogs::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(TaskWorkLogs::WorkDate).date().not_null())
                    .col(
                        ColumnDef::new(TaskWorkLogs::Hours)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TaskWorkLogs::Note).string_len(1000).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_work_logs_task_id")
                            .from(TaskWorkLogs::Table, TaskWorkLogs::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_work_logs_employee_id")
                            .from(TaskWorkLogs::Table, TaskWorkLogs::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_work_logs_task_id")
                    .table(TaskWorkLogs::Table)
                    .col(TaskWorkLogs::TaskId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_task_work_logs_task_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskWorkLogs::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TaskWorkLogs {
    Table,
    Id,
    TaskId,
    EmployeeId,
    WorkDate,
    Hours,
    Note,
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
