use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Roles::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Roles::CanRead).boolean().not_null())
                    .col(ColumnDef::new(Roles::CanWrite).boolean().not_null())
                    .col(ColumnDef::new(Roles::CanDelete).boolean().not_null())
                    .to_owned(),
            )
            .await?;

        // 正準ロールの初期データ投入（既定の権限マトリクス）
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Roles::Table)
                    .columns([Roles::Name, Roles::CanRead, Roles::CanWrite, Roles::CanDelete])
                    .values_panic(["ADMIN".into(), true.into(), true.into(), true.into()])
                    .values_panic(["MANAGER".into(), true.into(), true.into(), false.into()])
                    .values_panic(["MEMBER".into(), true.into(), true.into(), false.into()])
                    .values_panic(["VIEWER".into(), true.into(), false.into(), false.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Name,
    CanRead,
    CanWrite,
    CanDelete,
}
