use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::{
    Column, Value,
    column::ColumnId,
    error::{Error, Result},
    render,
    row::Row,
    schema::Schema,
    table::Table,
};

/// A table shared between the registry and its callers.
pub type SharedTable = Arc<RwLock<Table>>;

/// Registry of named tables.
///
/// The name map and each table sit behind separate locks: creating or dropping
/// a table only takes the map lock, row operations only take the lock of the
/// table they touch.
#[derive(Default)]
pub struct Database {
    name: String,
    /// A map of table names to their respective [Table] structures.
    tables: RwLock<HashMap<String, SharedTable>>,
}

impl Database {
    /// Creates a new, empty database instance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates a new table in the database.
    ///
    /// # Errors
    /// - [Error::TableAlreadyExists] if the name is taken.
    /// - [Error::DuplicateColumnName] if two columns share a name.
    ///
    /// # Example
    /// ```
    /// use memtab::{Column, Database, DataType, Value};
    ///
    /// let db = Database::new("shop");
    /// db.create_table("products", vec![
    ///     Column::new("name", DataType::Text),
    ///     Column::new("price", DataType::Int),
    /// ])
    /// .unwrap();
    ///
    /// db.insert("products", [("name", Value::from("Laptop")), ("price", Value::Int(1200))]).unwrap();
    /// db.insert("products", [("name", Value::from("Mouse")), ("price", Value::Int(25))]).unwrap();
    ///
    /// let cheap = db.filter("products", "price", &Value::Int(25)).unwrap();
    /// assert_eq!(cheap.len(), 1);
    /// assert!(db.create_table("products", vec![]).is_err());
    /// ```
    pub fn create_table(&self, name: impl Into<String>, columns: Vec<Column>) -> Result<()> {
        let name = name.into();
        let schema = Schema::new(columns)?;

        let mut tables = self.tables.write();
        if tables.contains_key(&name) {
            warn!(database = %self.name, table = %name, "table already exists");
            return Err(Error::TableAlreadyExists(name));
        }
        info!(database = %self.name, table = %name, columns = schema.len(), "table created");
        let table = Table::new(name.clone(), schema);
        tables.insert(name, Arc::new(RwLock::new(table)));
        Ok(())
    }

    /// Removes a table and all of its rows.
    ///
    /// # Errors
    /// Returns [Error::TableNotFound] if the table does not exist.
    pub fn drop_table(&self, name: &str) -> Result<()> {
        match self.tables.write().remove(name) {
            Some(_) => {
                info!(database = %self.name, table = %name, "table dropped");
                Ok(())
            }
            None => Err(self.not_found(name)),
        }
    }

    /// Retrieves a handle on a table by name.
    ///
    /// The map lock is released before the handle is returned, so holding the
    /// table lock never blocks other tables.
    pub fn table(&self, name: &str) -> Result<SharedTable> {
        self.tables
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| self.not_found(name))
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.read().contains_key(name)
    }

    /// Returns the names of all tables, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Returns a copy of a table's schema.
    pub fn schema(&self, name: &str) -> Result<Schema> {
        Ok(self.table(name)?.read().schema().clone())
    }

    /// Clears the rows of a table, keeping its schema.
    pub fn truncate(&self, name: &str) -> Result<()> {
        let table = self.table(name)?;
        table.write().truncate();
        info!(database = %self.name, table = %name, "table truncated");
        Ok(())
    }

    /// Inserts a row whose bindings are keyed by column name.
    ///
    /// # Errors
    /// - [Error::TableNotFound] if the table does not exist.
    /// - [Error::SchemaViolation] if a column name is not in the schema.
    /// - [Error::TypeMismatch] if a value does not carry its column's type.
    pub fn insert<'a, I>(&self, name: &str, bindings: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let table = self.table(name)?;
        let mut table = table.write();

        let bindings = bindings
            .into_iter()
            .map(|(column, value)| Ok((resolve(&table, column)?, value)))
            .collect::<Result<Vec<(ColumnId, Value)>>>()?;

        table.insert(bindings)?;
        debug!(database = %self.name, table = %name, rows = table.row_count(), "row inserted");
        Ok(())
    }

    /// Returns every row of a table in insertion order.
    pub fn rows(&self, name: &str) -> Result<Vec<Row>> {
        let table = self.table(name)?;
        let table = table.read();
        Ok(table.rows().collect())
    }

    /// Returns the rows of a table whose `column` binding equals `value`.
    ///
    /// # Errors
    /// - [Error::TableNotFound] if the table does not exist.
    /// - [Error::SchemaViolation] if `column` is not in the schema.
    pub fn filter(&self, name: &str, column: &str, value: &Value) -> Result<Vec<Row>> {
        let table = self.table(name)?;
        let table = table.read();
        let id = resolve(&table, column)?;

        let rows = table.filter(id, value)?;
        debug!(
            database = %self.name,
            table = %name,
            column,
            matches = rows.len(),
            "filter evaluated"
        );
        Ok(rows)
    }

    /// Renders every row of a table as a text grid.
    pub fn render_rows(&self, name: &str) -> Result<String> {
        let table = self.table(name)?;
        let table = table.read();
        let rows: Vec<Row> = table.rows().collect();
        Ok(render::render_rows(table.schema(), &rows))
    }

    fn not_found(&self, name: &str) -> Error {
        warn!(database = %self.name, table = %name, "table does not exist");
        Error::TableNotFound(name.to_string())
    }
}

fn resolve(table: &Table, column: &str) -> Result<ColumnId> {
    table.column_id(column).ok_or_else(|| Error::SchemaViolation {
        table: table.name().to_string(),
        column: column.to_string(),
    })
}
