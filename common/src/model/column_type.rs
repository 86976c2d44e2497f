//! Data types offered when a column is added by hand.
//!
//! Columns discovered by query validation keep whatever type string the
//! backend reported; this catalog only feeds the "Add column" dialog.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnDataType {
    Integer,
    Real,
    Numeric,
    Decimal,
    Array,
    Varchar,
    Text,
    Date,
    Timestamp,
    Boolean,
    Json,
    Uuid,
}

impl ColumnDataType {
    pub const ALL: [ColumnDataType; 12] = [
        ColumnDataType::Integer,
        ColumnDataType::Real,
        ColumnDataType::Numeric,
        ColumnDataType::Decimal,
        ColumnDataType::Array,
        ColumnDataType::Varchar,
        ColumnDataType::Text,
        ColumnDataType::Date,
        ColumnDataType::Timestamp,
        ColumnDataType::Boolean,
        ColumnDataType::Json,
        ColumnDataType::Uuid,
    ];

    /// Wire value sent as the column `type`.
    pub fn value(self) -> &'static str {
        match self {
            ColumnDataType::Integer => "INTEGER",
            ColumnDataType::Real => "REAL",
            ColumnDataType::Numeric => "NUMERIC",
            ColumnDataType::Decimal => "DECIMAL",
            ColumnDataType::Array => "ARRAY",
            ColumnDataType::Varchar => "VARCHAR",
            ColumnDataType::Text => "TEXT",
            ColumnDataType::Date => "DATE",
            ColumnDataType::Timestamp => "TIMESTAMP",
            ColumnDataType::Boolean => "BOOLEAN",
            ColumnDataType::Json => "JSON",
            ColumnDataType::Uuid => "UUID",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnDataType::Integer => "Integer",
            ColumnDataType::Real => "Real",
            ColumnDataType::Numeric => "Numeric",
            ColumnDataType::Decimal => "Decimal",
            ColumnDataType::Array => "Array",
            ColumnDataType::Varchar => "Varchar",
            ColumnDataType::Text => "Text",
            ColumnDataType::Date => "Date",
            ColumnDataType::Timestamp => "Timestamp",
            ColumnDataType::Boolean => "Boolean",
            ColumnDataType::Json => "JSON",
            ColumnDataType::Uuid => "UUID",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_parses_back() {
        for data_type in ColumnDataType::ALL {
            assert_eq!(ColumnDataType::from_value(data_type.value()), Some(data_type));
        }
        assert_eq!(ColumnDataType::from_value("integer"), None);
    }
}
