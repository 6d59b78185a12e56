use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Choices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Choices::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Choices::QuestionId).integer().not_null())
                    .col(
                        ColumnDef::new(Choices::ChoiceText)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Choices::Votes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Choices::Table, Choices::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Choices::Table)
                    .col(Choices::QuestionId)
                    .name("idx_choices_question_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Choices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Choices {
    Table,
    Id,
    QuestionId,
    ChoiceText,
    Votes,
}

#[derive(Iden)]
enum Questions {
    Table,
    Id,
}
