use std::fmt;

use crate::data_type::DataType;

/// Stable identifier of a column slot: its position in the table's schema.
///
/// Ids are handed out once when the schema is built and are then used by value
/// as binding keys and filter targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(pub(crate) usize);

impl ColumnId {
    /// Position of the column in its schema (0-indexed).
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Immutable descriptor of a table attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_new() {
        let col = Column::new("age", DataType::Int);
        assert_eq!(col.name(), "age");
        assert_eq!(col.data_type(), DataType::Int);
        assert_eq!(col.to_string(), "age INT");
    }

    #[test]
    fn test_column_id() {
        let id = ColumnId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "#3");
        assert!(ColumnId(1) < ColumnId(2));
    }
}
