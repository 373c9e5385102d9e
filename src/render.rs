//! Text rendering of rows, for CLIs and demos.

use std::fmt::Write;

use crate::row::Row;
use crate::schema::Schema;

const NULL: &str = "NULL";

/// Renders rows as an aligned grid: a header with the column names, a
/// separator line and one line per row. Absent bindings print as `NULL`.
///
/// # Example
/// ```
/// use memtab::{render, Column, DataType, Schema, Table, Value};
///
/// let schema = Schema::new(vec![
///     Column::new("id", DataType::Int),
///     Column::new("name", DataType::Text),
/// ])
/// .unwrap();
/// let mut table = Table::new("users", schema);
/// let id = table.column_id("id").unwrap();
/// let name = table.column_id("name").unwrap();
/// table.insert([(id, Value::Int(1)), (name, Value::from("Alice"))]).unwrap();
/// table.insert([(id, Value::Int(2))]).unwrap();
///
/// let rows: Vec<_> = table.rows().collect();
/// let text = render::render_rows(table.schema(), &rows);
/// assert_eq!(text, "id | name\n---+------\n1  | Alice\n2  | NULL\n");
/// ```
pub fn render_rows(schema: &Schema, rows: &[Row]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            (0..schema.len())
                .map(|i| match row.slots().get(i) {
                    Some(Some(value)) => value.to_string(),
                    _ => NULL.to_string(),
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = schema
        .columns()
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|line| line[i].chars().count())
                .chain(std::iter::once(col.name().chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = schema.columns().iter().map(|c| c.name()).collect();
    push_line(&mut out, &header, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');

    for line in &cells {
        let line: Vec<&str> = line.iter().map(String::as_str).collect();
        push_line(&mut out, &line, &widths);
    }
    out
}

/// Renders one row as `name: value` pairs in schema order, skipping absent
/// bindings, e.g. `{name: A, age: 30}`.
pub fn format_row(schema: &Schema, row: &Row) -> String {
    let mut out = String::from("{");
    for (i, (id, value)) in row.bindings().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let name = schema.column(id).map(|c| c.name()).unwrap_or("?");
        let _ = write!(out, "{name}: {value}");
    }
    out.push('}');
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
