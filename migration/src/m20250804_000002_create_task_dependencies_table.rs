use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskDependencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TaskDependencies::PredecessorTaskId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TaskDependencies::SuccessorTaskId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(TaskDependencies::Type).string_len(5).not_null())
                    .col(ColumnDef::new(TaskDependencies::LagDays).integer().null())
                    .primary_key(
                        Index::create()
                            .col(TaskDependencies::PredecessorTaskId)
                            .col(TaskDependencies::SuccessorTaskId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_dependencies_predecessor_task_id")
                            .from(TaskDependencies::Table, TaskDependencies::PredecessorTaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_dependencies_successor_task_id")
                            .from(TaskDependencies::Table, TaskDependencies::SuccessorTaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 後続タスクスコープの一覧取得用インデックス
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_task_dependencies_successor_task_id")
                    .table(TaskDependencies::Table)
                    .col(TaskDependencies::SuccessorTaskId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_task_dependencies_successor_task_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TaskDependencies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TaskDependencies {
    Table,
    PredecessorTaskId,
    SuccessorTaskId,
    Type,
    LagDays,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
}
