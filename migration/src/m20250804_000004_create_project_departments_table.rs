use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectDepartments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectDepartments::ProjectId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectDepartments::DepartmentId)
                            .uuid()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ProjectDepartments::ProjectId)
                            .col(ProjectDepartments::DepartmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_departments_project_id")
                            .from(ProjectDepartments::Table, ProjectDepartments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_departments_department_id")
                            .from(ProjectDepartments::Table, ProjectDepartments::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectDepartments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProjectDepartments {
    Table,
    ProjectId,
    DepartmentId,
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
}

#[derive(Iden)]
enum Departments {
    Table,
    Id,
}
