use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookGenres::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(BookGenres::BookId).integer().not_null())
                    .col(ColumnDef::new(BookGenres::GenreId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(BookGenres::BookId)
                            .col(BookGenres::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookGenres::Table, BookGenres::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookGenres::Table, BookGenres::GenreId)
                            .to(Genres::Table, Genres::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookGenres::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookGenres {
    Table,
    BookId,
    GenreId,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}

#[derive(Iden)]
enum Genres {
    Table,
    Id,
}
