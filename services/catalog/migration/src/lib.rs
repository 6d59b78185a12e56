use sea_orm_migration::prelude::*;

mod m20250301_000001_create_genres;
mod m20250301_000002_create_languages;
mod m20250301_000003_create_authors;
mod m20250301_000004_create_books;
mod m20250301_000005_create_book_genres;
mod m20250301_000006_create_book_instances;
mod m20250301_000007_add_loan_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_genres::Migration),
            Box::new(m20250301_000002_create_languages::Migration),
            Box::new(m20250301_000003_create_authors::Migration),
            Box::new(m20250301_000004_create_books::Migration),
            Box::new(m20250301_000005_create_book_genres::Migration),
            Box::new(m20250301_000006_create_book_instances::Migration),
            Box::new(m20250301_000007_add_loan_indexes::Migration),
        ]
    }
}
