//! Table introspection through `PRAGMA table_info`.

use altercheck_core::capture::Value;
use altercheck_core::errors::StorageError;
use rusqlite::types::ValueRef;
use rusqlite::Connection;

/// Name and declared type of one column, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub type_tag: String,
}

/// Columns of `table` in the database's column-declaration order.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<ColumnInfo>, StorageError> {
    let sql = format!("PRAGMA table_info({})", quote_identifier(table));
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                type_tag: row.get(2)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut columns = Vec::new();
    for row in rows {
        columns.push(row.map_err(|e| StorageError::SqliteError { message: e.to_string() })?);
    }
    if columns.is_empty() {
        return Err(StorageError::SqliteError {
            message: format!("no such table: {table}"),
        });
    }
    Ok(columns)
}

/// Quote an identifier for embedding in SQL text.
pub fn quote_identifier(identifier: &str) -> String {
    format!("\"{}\"", identifier.replace('"', "\"\""))
}

/// Convert a rusqlite cell into a typed capture value.
pub fn value_from_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}
