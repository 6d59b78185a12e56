pub mod author;
pub mod book;
pub mod book_instance;
pub mod renewal;
pub mod summary;
