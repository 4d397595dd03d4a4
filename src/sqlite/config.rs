use std::sync::Arc;

use crate::config::{Configuration, ConfigurationBuilder};
use crate::error::SqlLobError;
use crate::types::DatabaseType;

use super::provider::SqliteConnectionProvider;

/// Options for opening a `SQLite` connection.
#[derive(Debug, Clone)]
pub struct SqliteOptions {
    pub db_path: String,
    pub wal: bool,
    pub busy_timeout_ms: Option<u32>,
}

impl SqliteOptions {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            db_path,
            wal: false,
            busy_timeout_ms: None,
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(":memory:".into())
    }

    #[must_use]
    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    /// Pragmas to run right after the connection opens.
    #[must_use]
    pub fn pragmas(&self) -> String {
        let mut batch = String::new();
        if self.wal {
            batch.push_str("PRAGMA journal_mode = WAL;\n");
        }
        if let Some(ms) = self.busy_timeout_ms {
            batch.push_str(&format!("PRAGMA busy_timeout = {ms};\n"));
        }
        batch
    }
}

/// Fluent builder for `SQLite` options.
#[derive(Debug, Clone)]
pub struct SqliteOptionsBuilder {
    opts: SqliteOptions,
}

impl SqliteOptionsBuilder {
    #[must_use]
    pub fn new(db_path: String) -> Self {
        Self {
            opts: SqliteOptions::new(db_path),
        }
    }

    #[must_use]
    pub fn wal(mut self, wal: bool) -> Self {
        self.opts.wal = wal;
        self
    }

    #[must_use]
    pub fn busy_timeout_ms(mut self, ms: u32) -> Self {
        self.opts.busy_timeout_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn finish(self) -> SqliteOptions {
        self.opts
    }

    /// Open the connection and build a [`Configuration`] for the `SQLite` family around it.
    ///
    /// # Errors
    ///
    /// Returns `SqlLobError` if the database cannot be opened or a pragma fails.
    pub fn build(self) -> Result<(Arc<SqliteConnectionProvider>, Configuration), SqlLobError> {
        let provider = Arc::new(SqliteConnectionProvider::open(&self.finish())?);
        let config = ConfigurationBuilder::new(provider.clone())
            .family(DatabaseType::Sqlite)
            .finish();
        Ok((provider, config))
    }
}

impl SqliteConnectionProvider {
    #[must_use]
    pub fn builder(db_path: String) -> SqliteOptionsBuilder {
        SqliteOptionsBuilder::new(db_path)
    }
}
