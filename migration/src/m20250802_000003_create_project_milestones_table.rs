use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMilestones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMilestones::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectMilestones::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(ProjectMilestones::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectMilestones::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(ProjectMilestones::IsCompleted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_milestones_project_id")
                            .from(ProjectMilestones::Table, ProjectMilestones::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_milestones_project_id")
                    .table(ProjectMilestones::Table)
                    .col(ProjectMilestones::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_project_milestones_project_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectMilestones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProjectMilestones {
    Table,
    Id,
    ProjectId,
    Name,
    DueDate,
    IsCompleted,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}
