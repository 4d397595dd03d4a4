use rusqlite::types::Value;

use crate::error::SqlLobError;
use crate::lob::BlobHandle;
use crate::types::RowValues;

/// Convert a single `RowValue` to a rusqlite `Value`.
#[must_use]
pub fn row_value_to_sqlite_value(value: &RowValues) -> Value {
    match value {
        RowValues::Int(i) => Value::Integer(*i),
        RowValues::Float(f) => Value::Real(*f),
        RowValues::Text(s) => Value::Text(s.clone()),
        RowValues::Bool(b) => Value::Integer(i64::from(*b)),
        RowValues::Null => Value::Null,
        RowValues::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Materialize a large object as a rusqlite `Value`. `SQLite` has no locators, so the bytes
/// travel inline.
///
/// # Errors
///
/// Returns `SqlLobError` if the blob cannot be read (for example, it was already freed).
pub fn blob_to_sqlite_value(blob: Option<&BlobHandle>) -> Result<Value, SqlLobError> {
    match blob {
        Some(handle) => Ok(Value::Blob(handle.read_all()?)),
        None => Ok(Value::Null),
    }
}
