//! Error types for the table store

use thiserror::Error;

use crate::data_type::DataType;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Schema errors
    #[error("Column {column:?} is not part of the schema of table {table:?}")]
    SchemaViolation { table: String, column: String },

    #[error("Duplicate column name in schema: {0}")]
    DuplicateColumnName(String),

    #[error("Type mismatch on column {column:?}: expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: DataType,
        found: DataType,
    },

    // Registry errors
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::SchemaViolation {
            table: "users".into(),
            column: "#7".into(),
        };
        assert_eq!(
            err.to_string(),
            "Column \"#7\" is not part of the schema of table \"users\""
        );

        let err = Error::TypeMismatch {
            column: "age".into(),
            expected: DataType::Int,
            found: DataType::Text,
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch on column \"age\": expected INT, found TEXT"
        );

        assert_eq!(
            Error::TableNotFound("ghost".into()).to_string(),
            "Table not found: ghost"
        );
    }
}
