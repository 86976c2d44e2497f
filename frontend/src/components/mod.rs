pub mod common;
pub mod dashboard;
pub mod dialogs;
pub mod reports;
