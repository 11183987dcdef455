pub mod comment;
pub mod entry;
pub mod user;
