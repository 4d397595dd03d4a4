//! `SQLite` backend built on `rusqlite`.

pub mod config;
pub mod params;
pub mod provider;
pub mod row;
pub mod statement;

pub use config::{SqliteOptions, SqliteOptionsBuilder};
pub use params::{blob_to_sqlite_value, row_value_to_sqlite_value};
pub use provider::{SqliteConnectionProvider, SqliteLobConnection};
pub use row::SqliteRow;
pub use statement::SqliteStatement;

pub use rusqlite;
