//! sea-orm entities for the catalog service.

pub mod authors;
pub mod book_genres;
pub mod book_instances;
pub mod books;
pub mod genres;
pub mod languages;
