use rusqlite::{Connection, Rows, Statement};

use crate::driver::PreparedStatement;
use crate::error::SqlLobError;
use crate::lob::BlobHandle;
use crate::types::RowValues;

use super::params::{blob_to_sqlite_value, row_value_to_sqlite_value};

/// A prepared `rusqlite` statement that accepts large-object binds.
pub struct SqliteStatement<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> SqliteStatement<'conn> {
    /// # Errors
    /// Returns `SqlLobError::SqliteError` if `SQLite` cannot prepare `sql`.
    pub fn prepare(conn: &'conn Connection, sql: &str) -> Result<Self, SqlLobError> {
        Ok(Self {
            stmt: conn.prepare(sql)?,
        })
    }

    #[must_use]
    pub fn parameter_count(&self) -> usize {
        self.stmt.parameter_count()
    }

    fn check_index(&self, index: usize) -> Result<(), SqlLobError> {
        let count = self.parameter_count();
        if index == 0 || index > count {
            return Err(SqlLobError::ParameterError(format!(
                "parameter index {index} out of range 1..={count}"
            )));
        }
        Ok(())
    }

    /// Bind an ordinary value to parameter `index` (1-based).
    ///
    /// # Errors
    /// Returns `SqlLobError` if the index is out of range or `SQLite` rejects the bind.
    pub fn bind_value(&mut self, index: usize, value: &RowValues) -> Result<(), SqlLobError> {
        self.check_index(index)?;
        self.stmt
            .raw_bind_parameter(index, row_value_to_sqlite_value(value))?;
        Ok(())
    }

    /// Run the statement with its current binds; returns the affected row count.
    ///
    /// # Errors
    /// Returns `SqlLobError::SqliteError` if execution fails.
    pub fn execute(&mut self) -> Result<usize, SqlLobError> {
        Ok(self.stmt.raw_execute()?)
    }

    /// Run the statement with its current binds and iterate the rows.
    pub fn query(&mut self) -> Rows<'_> {
        self.stmt.raw_query()
    }

    pub fn clear_bindings(&mut self) {
        self.stmt.clear_bindings();
    }
}

impl PreparedStatement for SqliteStatement<'_> {
    fn set_blob(&mut self, index: usize, blob: Option<&BlobHandle>) -> Result<(), SqlLobError> {
        self.check_index(index)?;
        let value = blob_to_sqlite_value(blob)?;
        self.stmt.raw_bind_parameter(index, value)?;
        Ok(())
    }
}
