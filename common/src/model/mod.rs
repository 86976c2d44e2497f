pub mod column_type;
pub mod database;
pub mod query;
pub mod report;
pub mod role;
