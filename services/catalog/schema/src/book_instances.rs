use sea_orm::entity::prelude::*;

/// One physical, loanable copy of a book.
///
/// `status` holds a one-character loan status code; see
/// `locallib_domain::loan::LoanStatus`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "book_instances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub book_id: i32,
    pub imprint: String,
    pub due_back: Option<chrono::NaiveDate>,
    pub borrower_id: Option<Uuid>,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::books::Entity",
        from = "Column::BookId",
        to = "super::books::Column::Id",
        on_delete = "Restrict"
    )]
    Book,
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Book.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
