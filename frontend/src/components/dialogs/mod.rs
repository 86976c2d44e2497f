pub mod add_column;
