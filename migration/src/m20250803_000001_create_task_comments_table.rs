use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskComments::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TaskComments::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(TaskComments::TaskId).uuid().not_null())
                    .col(ColumnDef::new(TaskComments::EmployeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(TaskComments::CommentedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TaskComments::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_comments_task_id")
                            .from(TaskComments::Table, TaskComments::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_comments_employee_id")
                            .from(TaskComments::Table, TaskComments::EmployeeId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_comments_task_id")
                    .table(TaskComments::Table)
                    .col(TaskComments::TaskId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_task_comments_task_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskComments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TaskComments {
    Table,
    Id,
    TaskId,
    EmployeeId,
    CommentedAt,
    Content,
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
