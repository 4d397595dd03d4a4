use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Values that can be bound as ordinary (non-LOB) statement parameters or carried as
/// structured-type attributes.
///
/// ```rust
/// use sql_lob_binding::prelude::*;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Blob(vec![0xCA, 0xFE]),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// NULL value
    Null,
    /// Binary data bound inline (not as a large object)
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// The database family a [`Configuration`](crate::config::Configuration) targets.
///
/// Large-object allocation is dispatched on this value; families without a dedicated
/// allocator use the connection's generic factory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    /// No particular family; generic behavior everywhere
    #[default]
    Default,
    /// `PostgreSQL` database
    Postgres,
    /// `SQLite` database
    Sqlite,
    /// SQL Server database
    Mssql,
    /// `LibSQL` database
    Libsql,
    /// Turso (SQLite-compatible, in-process) database
    Turso,
    /// Oracle database
    Oracle,
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatabaseType::Default => "default",
            DatabaseType::Postgres => "postgres",
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::Mssql => "mssql",
            DatabaseType::Libsql => "libsql",
            DatabaseType::Turso => "turso",
            DatabaseType::Oracle => "oracle",
        };
        f.write_str(name)
    }
}

/// Declared SQL type of an output parameter on a callable statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    Binary,
    VarBinary,
    LongVarBinary,
    Blob,
    Clob,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn database_type_parses_like_a_cli_value() {
        let parsed = DatabaseType::from_str("postgres", true).unwrap();
        assert_eq!(parsed, DatabaseType::Postgres);
        assert!(DatabaseType::from_str("db2", true).is_err());
    }

    #[test]
    fn database_type_display_matches_serde_name() {
        for family in DatabaseType::value_variants() {
            let json = serde_json::to_string(family).unwrap();
            assert_eq!(json, format!("\"{family}\""));
        }
    }

    #[test]
    fn row_values_accessors() {
        assert!(RowValues::Null.is_null());
        assert_eq!(RowValues::Int(7).as_int(), Some(&7));
        assert_eq!(RowValues::Text("x".into()).as_text(), Some("x"));
        assert_eq!(RowValues::Blob(vec![1]).as_blob(), Some(&[1u8][..]));
        assert_eq!(RowValues::Bool(true).as_blob(), None);
    }
}
