pub mod catalog;
pub mod dashboard;
pub mod list;
pub mod shell;
