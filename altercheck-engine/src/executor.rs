//! Migration statement execution and table dumping.

use std::fmt;

use altercheck_core::capture::Capture;
use altercheck_core::errors::StorageError;
use rusqlite::Connection;

use crate::introspect::{quote_identifier, table_columns, value_from_ref};

/// Execute `statement` as a non-query against `conn`, then dump
/// `target_table` into a capture.
///
/// Database failures never propagate past this boundary: a failing
/// statement (or an unknown target table) comes back as an error
/// capture whose message carries the statement text and the cause.
/// Against a fresh copy of the same seed state this is deterministic,
/// so repeated runs produce identical captures.
pub fn execute_alter(conn: &Connection, statement: &str, target_table: &str) -> Capture {
    if let Err(e) = conn.execute_batch(statement) {
        tracing::debug!(target_table, error = %e, "statement execution failed");
        return Capture::from_error(compose_execution_error(statement, &e));
    }
    match dump_table(conn, target_table) {
        Ok(capture) => capture,
        Err(e) => {
            tracing::debug!(target_table, error = %e, "table dump failed");
            Capture::from_error(compose_execution_error(statement, &e))
        }
    }
}

/// Dump all of `table`: column names and declared types in declaration
/// order, and every row in the database's natural rowid scan order.
/// Callers must not assume any other row ordering.
pub fn dump_table(conn: &Connection, table: &str) -> Result<Capture, StorageError> {
    let columns = table_columns(conn, table)?;
    let schema: Vec<String> = columns.iter().map(|c| c.name.clone()).collect();
    let types: Vec<String> = columns.iter().map(|c| c.type_tag.clone()).collect();

    let sql = format!("SELECT * FROM {}", quote_identifier(table));
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    let mut rows = stmt
        .query([])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let mut data = Vec::new();
    while let Some(row) = rows
        .next()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?
    {
        let mut cells = Vec::with_capacity(schema.len());
        for index in 0..schema.len() {
            let cell = row
                .get_ref(index)
                .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
            cells.push(value_from_ref(cell));
        }
        data.push(cells);
    }

    Ok(Capture {
        schema,
        types,
        data,
        error_message: None,
    })
}

/// One descriptive message for a failed execution: what ran and why it
/// failed, surfaced verbatim in failure reports.
fn compose_execution_error(statement: &str, cause: &dyn fmt::Display) -> String {
    format!("Query execution caused an error.\nQuery: {statement}\nError: {cause}")
}
