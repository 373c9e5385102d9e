pub mod column;
pub mod data_type;
pub mod database;
pub mod error;
pub mod render;
pub mod row;
pub mod schema;
mod storage;
pub mod table;
pub mod value;

pub use column::{Column, ColumnId};
pub use data_type::DataType;
pub use database::{Database, SharedTable};
pub use error::{Error, Result};
pub use row::Row;
pub use schema::Schema;
pub use table::{Rows, Table};
pub use value::Value;
