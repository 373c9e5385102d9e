use std::sync::Arc;

use crate::data_type::DataType;
use crate::error::{Error, Result};
use crate::value::Value;
use bitvec::prelude::*;

/// Physical storage for column data.
/// Each variant wraps a collection of a specific type to ensure contiguous memory
/// allocation (columnar storage).
#[derive(Debug, Clone)]
pub(crate) enum ColumnData {
    /// Vector of 64-bit integers.
    Int(Vec<i64>),
    /// Vector of 64-bit floats.
    Float(Vec<f64>),
    /// Vector of thread-safe atomic reference-counted strings.
    Text(Vec<Arc<str>>),
    /// Compact bit-vector for boolean values.
    Bool(BitVec),
}

/// Values of one schema column across all rows of a table.
///
/// A row that carries no binding for the column still occupies a slot so that
/// every column of a table stays index-aligned with the row sequence.
#[derive(Debug, Clone)]
pub(crate) struct ColumnStorage {
    /// The actual values stored in the column.
    data: ColumnData,
    /// A bitmap where a `true` bit indicates that the row at that index has no
    /// binding for this column.
    absent: BitVec,
}

impl ColumnStorage {
    /// Creates an empty storage laid out for `data_type`.
    pub(crate) fn new(data_type: DataType) -> Self {
        let data = match data_type {
            DataType::Int => ColumnData::Int(vec![]),
            DataType::Float => ColumnData::Float(vec![]),
            DataType::Bool => ColumnData::Bool(bitvec!()),
            DataType::Text => ColumnData::Text(vec![]),
        };
        Self {
            data,
            absent: bitvec!(),
        }
    }

    pub(crate) fn data_type(&self) -> DataType {
        match &self.data {
            ColumnData::Int(_) => DataType::Int,
            ColumnData::Float(_) => DataType::Float,
            ColumnData::Text(_) => DataType::Text,
            ColumnData::Bool(_) => DataType::Bool,
        }
    }

    /// Checks that `value` can be stored here without mutating anything.
    pub(crate) fn accepts(&self, value: &Value) -> bool {
        value.data_type() == self.data_type()
    }

    /// Appends a slot for a new row.
    ///
    /// `None` records an absent binding; a placeholder is pushed to the data
    /// vector to keep it aligned with the `absent` bitmap.
    pub(crate) fn push(&mut self, column: &str, value: Option<Value>) -> Result<()> {
        let Some(value) = value else {
            self.absent.push(true);
            match &mut self.data {
                ColumnData::Int(v) => v.push(0),
                ColumnData::Float(v) => v.push(0.0),
                ColumnData::Text(v) => v.push(Arc::from("")),
                ColumnData::Bool(v) => v.push(false),
            }
            return Ok(());
        };

        let expected = self.data_type();
        match (&mut self.data, value) {
            (ColumnData::Int(col), Value::Int(v)) => col.push(v),
            (ColumnData::Float(col), Value::Float(v)) => col.push(v),
            (ColumnData::Text(col), Value::Text(v)) => col.push(v),
            (ColumnData::Bool(col), Value::Bool(v)) => col.push(v),
            (_, value) => {
                return Err(Error::TypeMismatch {
                    column: column.to_string(),
                    expected,
                    found: value.data_type(),
                });
            }
        }
        self.absent.push(false);
        Ok(())
    }

    /// Returns the number of rows currently stored in the column.
    pub(crate) fn len(&self) -> usize {
        self.absent.len()
    }

    /// Retrieves the value at the specified row index.
    ///
    /// Returns `None` when the row has no binding for this column or when the
    /// index is out of bounds.
    pub(crate) fn get(&self, row_idx: usize) -> Option<Value> {
        if row_idx >= self.len() || self.absent[row_idx] {
            return None;
        }
        match &self.data {
            ColumnData::Int(col) => Some(Value::Int(col[row_idx])),
            ColumnData::Text(col) => Some(Value::Text(Arc::clone(&col[row_idx]))),
            ColumnData::Float(col) => Some(Value::Float(col[row_idx])),
            ColumnData::Bool(col) => Some(Value::Bool(col[row_idx])),
        }
    }

    /// Compares the bound value at `row_idx` with `value` in place, without
    /// materializing it. Absent bindings and values of another type never match.
    pub(crate) fn matches(&self, row_idx: usize, value: &Value) -> bool {
        if row_idx >= self.len() || self.absent[row_idx] {
            return false;
        }
        match (&self.data, value) {
            (ColumnData::Int(col), Value::Int(v)) => col[row_idx] == *v,
            (ColumnData::Float(col), Value::Float(v)) => col[row_idx] == *v,
            (ColumnData::Text(col), Value::Text(v)) => *col[row_idx] == **v,
            (ColumnData::Bool(col), Value::Bool(v)) => col[row_idx] == *v,
            _ => false,
        }
    }

    /// Drops every stored slot, keeping the column's type.
    pub(crate) fn clear(&mut self) {
        match &mut self.data {
            ColumnData::Int(col) => col.clear(),
            ColumnData::Float(col) => col.clear(),
            ColumnData::Text(col) => col.clear(),
            ColumnData::Bool(col) => col.clear(),
        }
        self.absent.clear();
    }

    /// Removes the last slot. Used to roll back a partially applied row.
    pub(crate) fn pop(&mut self) {
        if self.absent.pop().is_none() {
            return;
        }
        match &mut self.data {
            ColumnData::Int(col) => {
                col.pop();
            }
            ColumnData::Float(col) => {
                col.pop();
            }
            ColumnData::Text(col) => {
                col.pop();
            }
            ColumnData::Bool(col) => {
                col.pop();
            }
        }
    }
}
