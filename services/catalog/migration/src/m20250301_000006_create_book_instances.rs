use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookInstances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BookInstances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BookInstances::BookId).integer().not_null())
                    .col(
                        ColumnDef::new(BookInstances::Imprint)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BookInstances::DueBack).date().null())
                    .col(ColumnDef::new(BookInstances::BorrowerId).uuid().null())
                    .col(
                        ColumnDef::new(BookInstances::Status)
                            .char_len(1)
                            .not_null()
                            .default("d"),
                    )
                    // Copies pin their book: a book with copies cannot be deleted.
                    .foreign_key(
                        ForeignKey::create()
                            .from(BookInstances::Table, BookInstances::BookId)
                            .to(Books::Table, Books::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookInstances::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum BookInstances {
    Table,
    Id,
    BookId,
    Imprint,
    DueBack,
    BorrowerId,
    Status,
}

#[derive(Iden)]
enum Books {
    Table,
    Id,
}
