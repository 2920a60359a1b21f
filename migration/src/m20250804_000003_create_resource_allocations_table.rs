use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResourceAllocations::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(ResourceAllocations::TaskId).uuid().not_null())
                    .col(
                        ColumnDef::new(ResourceAllocations::ResourceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ResourceAllocations::AmountUsed)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ResourceAllocations::TaskId)
                            .col(ResourceAllocations::ResourceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_allocations_task_id")
                            .from(ResourceAllocations::Table, ResourceAllocations::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resource_allocations_resource_id")
                            .from(ResourceAllocations::Table, ResourceAllocations::ResourceId)
                            .to(Resources::Table, Resources::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ResourceAllocations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ResourceAllocations {
    Table,
    TaskId,
    ResourceId,
    AmountUsed,
}

#[derive(Iden)]
enum Tasks {
    Table,
    Id,
}

#[derive(Iden)]
enum Resources {
    Table,
    Id,
}
