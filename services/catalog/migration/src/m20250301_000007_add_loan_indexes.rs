use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(BookInstances::Table)
                    .col(BookInstances::Status)
                    .col(BookInstances::DueBack)
                    .name("idx_book_instances_status_due_back")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(BookInstances::Table)
                    .col(BookInstances::BorrowerId)
                    .name("idx_book_instances_borrower_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(BookInstances::Table)
                    .col(BookInstances::BookId)
                    .name("idx_book_instances_book_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_book_instances_book_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_book_instances_borrower_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_book_instances_status_due_back")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum BookInstances {
    Table,
    BookId,
    DueBack,
    BorrowerId,
    Status,
}
