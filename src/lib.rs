//! Bind byte sequences as database large objects (BLOBs) and read them back.
//!
//! [`BlobBinding`] keeps the value type a plain `Vec<u8>` and changes only how it reaches the
//! driver: writes allocate a blob on a connection leased from the configured
//! [`ConnectionProvider`], fill it, and bind it; reads fetch the blob, copy its bytes out and free
//! it.
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # fn demo() -> Result<(), sql_lob_binding::SqlLobError> {
//! use sql_lob_binding::prelude::*;
//! use sql_lob_binding::sqlite::{SqliteConnectionProvider, SqliteRow, SqliteStatement};
//!
//! let (provider, config) = SqliteConnectionProvider::builder(":memory:".into()).build()?;
//! provider.with_connection(|conn| {
//!     conn.execute_batch("CREATE TABLE files (id INTEGER PRIMARY KEY, body BLOB);")?;
//!
//!     let body = vec![0x01, 0x02, 0x03];
//!     let mut insert = SqliteStatement::prepare(conn, "INSERT INTO files (body) VALUES (?1)")?;
//!     BlobBinding.set_statement(&mut BindingSetStatementContext::new(&config, &mut insert, 1, Some(&body)))?;
//!     insert.execute()?;
//!
//!     let mut select = SqliteStatement::prepare(conn, "SELECT body FROM files")?;
//!     let mut rows = select.query();
//!     while let Some(row) = rows.next()? {
//!         let mut cursor = SqliteRow::new(row);
//!         let read = BlobBinding.get_result_set(&mut BindingGetResultSetContext::new(&config, &mut cursor, 1))?;
//!         assert_eq!(read, Some(body.clone()));
//!     }
//!     Ok(())
//! })
//! # }
//! # #[cfg(feature = "sqlite")]
//! # demo().unwrap();
//! ```

pub mod allocator;
pub mod attributes;
pub mod binding;
pub mod config;
pub mod driver;
pub mod error;
pub mod lob;
pub mod prelude;
pub mod provider;
pub mod render;
pub mod scope;
pub mod types;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use binding::{Binding, BlobBinding};
pub use config::Configuration;
pub use error::SqlLobError;
pub use provider::ConnectionProvider;
pub use types::DatabaseType;
