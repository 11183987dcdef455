pub mod entry;
pub mod home;
