pub mod question;
pub mod vote;
