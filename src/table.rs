use std::iter::FusedIterator;

use crate::column::ColumnId;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::schema::Schema;
use crate::storage::ColumnStorage;
use crate::value::Value;

/// A named table: a fixed schema plus its rows, stored column by column.
pub struct Table {
    name: String,
    schema: Schema,
    columns: Vec<ColumnStorage>,
    row_count: usize,
}

impl Table {
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        let columns = schema
            .columns()
            .iter()
            .map(|column| ColumnStorage::new(column.data_type()))
            .collect();
        Self {
            name: name.into(),
            schema,
            columns,
            row_count: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Resolves a column name through the schema.
    pub fn column_id(&self, name: &str) -> Option<ColumnId> {
        self.schema.column_id(name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Appends a row at the end of the table.
    ///
    /// `bindings` may cover any subset of the schema, including none of it;
    /// columns left out are absent in the new row. Binding the same column twice
    /// keeps the last value.
    ///
    /// # Errors
    /// - [Error::SchemaViolation] if a binding names a column outside the schema.
    /// - [Error::TypeMismatch] if a value does not carry its column's type.
    ///
    /// The table is left untouched when an error is returned.
    ///
    /// # Example
    /// ```
    /// use memtab::{Column, DataType, Schema, Table, Value};
    ///
    /// let schema = Schema::new(vec![
    ///     Column::new("name", DataType::Text),
    ///     Column::new("age", DataType::Int),
    /// ])
    /// .unwrap();
    /// let mut table = Table::new("people", schema);
    /// let name = table.column_id("name").unwrap();
    /// let age = table.column_id("age").unwrap();
    ///
    /// table.insert([(name, Value::from("Ada")), (age, Value::Int(36))]).unwrap();
    /// table.insert([(name, Value::from("Bob"))]).unwrap();
    ///
    /// assert_eq!(table.row_count(), 2);
    /// assert!(table.insert([(age, Value::from("old"))]).is_err());
    /// assert_eq!(table.row_count(), 2);
    /// ```
    pub fn insert<I>(&mut self, bindings: I) -> Result<()>
    where
        I: IntoIterator<Item = (ColumnId, Value)>,
    {
        let mut slots: Vec<Option<Value>> = vec![None; self.schema.len()];

        for (id, value) in bindings {
            let Some(column) = self.schema.column(id) else {
                return Err(self.schema_violation(id));
            };
            if !self.columns[id.0].accepts(&value) {
                return Err(Error::TypeMismatch {
                    column: column.name().to_string(),
                    expected: column.data_type(),
                    found: value.data_type(),
                });
            }
            slots[id.0] = Some(value);
        }

        for (i, value) in slots.into_iter().enumerate() {
            let name = self.schema.columns()[i].name();
            if let Err(err) = self.columns[i].push(name, value) {
                // undo the columns already extended for this row
                for column in &mut self.columns[..i] {
                    column.pop();
                }
                return Err(err);
            }
        }
        self.row_count += 1;
        Ok(())
    }

    /// Removes every row. The schema is kept, so inserting again works as
    /// on a freshly created table.
    pub fn truncate(&mut self) {
        for column in &mut self.columns {
            column.clear();
        }
        self.row_count = 0;
    }

    /// Materializes the row at `row_idx`, in insertion order.
    pub fn get_row(&self, row_idx: usize) -> Option<Row> {
        if self.row_count <= row_idx {
            return None;
        }
        Some(self.row_at(row_idx))
    }

    /// Lazily walks all rows in insertion order.
    ///
    /// The iterator borrows the table; call `rows()` again (or clone the
    /// iterator) to restart from the first row.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
            end: self.row_count,
        }
    }

    /// Returns the rows whose binding for `column` equals `value`, in
    /// insertion order.
    ///
    /// Rows without a binding for `column` never match, and values of another
    /// type than the column's are never equal to anything stored in it.
    ///
    /// # Errors
    /// Returns [Error::SchemaViolation] if `column` is not part of the schema.
    ///
    /// # Example
    /// ```
    /// use memtab::{Column, DataType, Schema, Table, Value};
    ///
    /// let schema = Schema::new(vec![
    ///     Column::new("name", DataType::Text),
    ///     Column::new("age", DataType::Int),
    /// ])
    /// .unwrap();
    /// let mut table = Table::new("people", schema);
    /// let name = table.column_id("name").unwrap();
    /// let age = table.column_id("age").unwrap();
    ///
    /// for (n, a) in [("A", 30), ("B", 25), ("C", 30)] {
    ///     table.insert([(name, Value::from(n)), (age, Value::Int(a))]).unwrap();
    /// }
    ///
    /// let thirty = table.filter(age, &Value::Int(30)).unwrap();
    /// let names: Vec<_> = thirty.iter().map(|r| r.get(name).unwrap().to_string()).collect();
    /// assert_eq!(names, vec!["A", "C"]);
    /// ```
    pub fn filter(&self, column: ColumnId, value: &Value) -> Result<Vec<Row>> {
        let Some(storage) = self.columns.get(column.0) else {
            return Err(self.schema_violation(column));
        };

        Ok((0..self.row_count)
            .filter(|&i| storage.matches(i, value))
            .map(|i| self.row_at(i))
            .collect())
    }

    fn row_at(&self, row_idx: usize) -> Row {
        Row::new(self.columns.iter().map(|col| col.get(row_idx)).collect())
    }

    fn schema_violation(&self, column: ColumnId) -> Error {
        Error::SchemaViolation {
            table: self.name.clone(),
            column: column.to_string(),
        }
    }
}

/// Iterator over the rows of a [Table], see [Table::rows].
#[derive(Clone)]
pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
    end: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.end {
            return None;
        }
        let row = self.table.row_at(self.next);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}
