pub mod catalog;
pub mod field_set;
pub mod student;
pub mod submission;
pub mod token;
