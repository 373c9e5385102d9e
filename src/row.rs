use crate::column::ColumnId;
use crate::value::Value;

/// One record of a table, materialized out of the column storage.
///
/// Slots follow the schema order; a `None` slot means the row has no binding
/// for that column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: Vec<Option<Value>>,
}

impl Row {
    pub(crate) fn new(values: Vec<Option<Value>>) -> Self {
        Self { values }
    }

    /// Value bound to `column`, if any.
    pub fn get(&self, column: ColumnId) -> Option<&Value> {
        self.values.get(column.0).and_then(Option::as_ref)
    }

    /// Present bindings in schema order.
    pub fn bindings(&self) -> impl Iterator<Item = (ColumnId, &Value)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (ColumnId(i), v)))
    }

    /// All slots in schema order, including absent ones.
    pub fn slots(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Number of columns this row has a binding for.
    pub fn bound_len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bindings() {
        let row = Row::new(vec![Some(Value::Int(1)), None, Some(Value::Bool(true))]);

        assert_eq!(row.get(ColumnId(0)), Some(&Value::Int(1)));
        assert_eq!(row.get(ColumnId(1)), None);
        assert_eq!(row.get(ColumnId(9)), None);
        assert_eq!(row.bound_len(), 2);
        assert_eq!(row.slots().len(), 3);

        let bound: Vec<_> = row.bindings().map(|(id, v)| (id.index(), v.clone())).collect();
        assert_eq!(bound, vec![(0, Value::Int(1)), (2, Value::Bool(true))]);
    }
}
