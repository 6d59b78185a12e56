use sea_orm::entity::prelude::*;

/// Catalog entry for a title (not a physical copy).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub language_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authors::Entity",
        from = "Column::AuthorId",
        to = "super::authors::Column::Id",
        on_delete = "SetNull"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::languages::Entity",
        from = "Column::LanguageId",
        to = "super::languages::Column::Id",
        on_delete = "SetNull"
    )]
    Language,
    #[sea_orm(has_many = "super::book_instances::Entity")]
    BookInstances,
    #[sea_orm(has_many = "super::book_genres::Entity")]
    BookGenres,
}

impl Related<super::authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::languages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::book_instances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookInstances.def()
    }
}

impl Related<super::book_genres::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookGenres.def()
    }
}

impl Related<super::genres::Entity> for Entity {
    fn to() -> RelationDef {
        super::book_genres::Relation::Genre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::book_genres::Relation::Book.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
