use std::collections::HashSet;

use crate::column::{Column, ColumnId};
use crate::error::{Error, Result};

/// Ordered list of the columns of a table.
///
/// Definition order is kept: it is the iteration and display order of every
/// row, and the position of a column is its [ColumnId].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Builds a schema from columns in definition order.
    ///
    /// # Errors
    /// Returns [Error::DuplicateColumnName] if two columns share a name.
    ///
    /// # Example
    /// ```
    /// use memtab::{Column, DataType, Schema};
    ///
    /// let schema = Schema::new(vec![
    ///     Column::new("name", DataType::Text),
    ///     Column::new("age", DataType::Int),
    /// ])
    /// .unwrap();
    ///
    /// let age = schema.column_id("age").unwrap();
    /// assert_eq!(schema.column(age).unwrap().name(), "age");
    /// assert!(Schema::new(vec![
    ///     Column::new("a", DataType::Int),
    ///     Column::new("a", DataType::Text),
    /// ])
    /// .is_err());
    /// ```
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut names = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !names.insert(column.name()) {
                return Err(Error::DuplicateColumnName(column.name().to_string()));
            }
        }
        Ok(Self { columns })
    }

    /// Resolves a column name to its id.
    pub fn column_id(&self, name: &str) -> Option<ColumnId> {
        self.columns
            .iter()
            .position(|col| col.name() == name)
            .map(ColumnId)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.get(id.0)
    }

    pub fn contains(&self, id: ColumnId) -> bool {
        id.0 < self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column ids paired with their descriptors, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (ColumnId, &Column)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| (ColumnId(i), col))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;

    fn users() -> Schema {
        Schema::new(vec![
            Column::new("id", DataType::Int),
            Column::new("name", DataType::Text),
        ])
        .unwrap()
    }

    #[test]
    fn test_schema_lookup() {
        let schema = users();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.column_id("id"), Some(ColumnId(0)));
        assert_eq!(schema.column_id("name"), Some(ColumnId(1)));
        assert_eq!(schema.column_id("age"), None);
        assert!(schema.contains(ColumnId(1)));
        assert!(!schema.contains(ColumnId(2)));
        assert_eq!(schema.column(ColumnId(2)), None);
    }

    #[test]
    fn test_duplicate_column_name() {
        let result = Schema::new(vec![
            Column::new("id", DataType::Int),
            Column::new("id", DataType::Int),
        ]);

        assert_eq!(result, Err(Error::DuplicateColumnName("id".into())));
    }

    #[test]
    fn test_empty_schema() {
        let schema = Schema::new(vec![]).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.iter().count(), 0);
    }

    #[test]
    fn test_iter_keeps_definition_order() {
        let schema = users();
        let names: Vec<_> = schema.iter().map(|(id, c)| (id.index(), c.name())).collect();
        assert_eq!(names, vec![(0, "id"), (1, "name")]);
    }
}
