use sea_orm::entity::prelude::*;

/// Book genre, e.g. "Science Fiction".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "genres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_genres::Entity")]
    BookGenres,
}

impl Related<super::book_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookGenres.def()
    }
}

impl Related<super::books::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_genres::Relation::Book.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_genres::Relation::Genre.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
