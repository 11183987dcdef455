pub mod authoring;
pub mod entry;
