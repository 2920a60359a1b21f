use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectRisks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ProjectRisks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(ProjectRisks::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectRisks::Title).string_len(200).not_null())
                    .col(ColumnDef::new(ProjectRisks::Description).text().null())
                    .col(ColumnDef::new(ProjectRisks::Level).string_len(20).not_null())
                    .col(ColumnDef::new(ProjectRisks::Status).string_len(20).not_null())
                    .col(ColumnDef::new(ProjectRisks::OwnerId).uuid().null())
                    .col(
                        ColumnDef::new(ProjectRisks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectRisks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_risks_project_id")
                            .from(ProjectRisks::Table, ProjectRisks::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_risks_owner_id")
                            .from(ProjectRisks::Table, ProjectRisks::OwnerId)
                            .to(Employees::Table, Employees::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_risks_project_id")
                    .table(ProjectRisks::Table)
                    .col(ProjectRisks::ProjectId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .name("idx_project_risks_project_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectRisks::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProjectRisks {
    Table,
    Id,
    ProjectId,
    Title,
    Description,
    Level,
    Status,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}

#[derive(Iden)]
enum Employees {
    Table,
    Id,
}
