use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::FirstName).string_len(100).not_null())
                    .col(ColumnDef::new(Authors::LastName).string_len(100).not_null())
                    .col(ColumnDef::new(Authors::DateOfBirth).date().null())
                    .col(ColumnDef::new(Authors::DateOfDeath).date().null())
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Authors::Table)
                    .col(Authors::LastName)
                    .col(Authors::FirstName)
                    .name("idx_authors_last_name_first_name")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    FirstName,
    LastName,
    DateOfBirth,
    DateOfDeath,
}
