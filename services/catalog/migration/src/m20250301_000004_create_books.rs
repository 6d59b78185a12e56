use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Books::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Books::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Books::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Books::AuthorId).integer().null())
                    .col(ColumnDef::new(Books::Summary).string_len(1000).not_null())
                    .col(ColumnDef::new(Books::Isbn).string_len(13).not_null())
                    .col(ColumnDef::new(Books::LanguageId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Books::Table, Books::AuthorId)
                            .to(Authors::Table, Authors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Books::Table, Books::LanguageId)
                            .to(Languages::Table, Languages::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Books::Table)
                    .col(Books::Title)
                    .col(Books::AuthorId)
                    .name("idx_books_title_author_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Books::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
    Title,
    AuthorId,
    Summary,
    Isbn,
    LanguageId,
}

#[derive(Iden)]
enum Authors {
    Table,
    Id,
}

#[derive(Iden)]
enum Languages {
    Table,
    Id,
}
