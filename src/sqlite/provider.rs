use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tracing::{debug, trace};

use crate::driver::LobConnection;
use crate::error::SqlLobError;
use crate::lob::{BlobHandle, MemoryBlob};
use crate::provider::ConnectionProvider;

use super::config::SqliteOptions;

/// Provider around one shared `SQLite` connection.
///
/// `SQLite` returns BLOB values whole rather than as server-side locators, so a leased
/// [`SqliteLobConnection`] allocates blobs in memory and never needs the connection lock. That
/// lets bindings run inside [`SqliteConnectionProvider::with_connection`].
#[derive(Debug, Clone)]
pub struct SqliteConnectionProvider {
    conn: Arc<Mutex<Connection>>,
    leased: Arc<AtomicUsize>,
}

impl SqliteConnectionProvider {
    /// # Errors
    /// Returns `SqlLobError::SqliteError` if the database cannot be opened or a pragma fails.
    pub fn open(opts: &SqliteOptions) -> Result<Self, SqlLobError> {
        let conn = Connection::open(&opts.db_path)?;
        let pragmas = opts.pragmas();
        if !pragmas.is_empty() {
            conn.execute_batch(&pragmas)?;
        }
        debug!(path = %opts.db_path, "opened sqlite connection");
        Ok(Self::from_connection(conn))
    }

    #[must_use]
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            leased: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Run synchronous `rusqlite` logic against the shared connection.
    ///
    /// # Errors
    /// Returns `SqlLobError::ConnectionError` if the connection mutex is poisoned, or whatever
    /// `func` returns.
    pub fn with_connection<F, R>(&self, func: F) -> Result<R, SqlLobError>
    where
        F: FnOnce(&mut Connection) -> Result<R, SqlLobError>,
    {
        let mut guard = self.conn.lock().map_err(|err| {
            SqlLobError::ConnectionError(format!("SQLite connection mutex poisoned: {err}"))
        })?;
        func(&mut guard)
    }

    /// Leases handed out and not yet released.
    #[must_use]
    pub fn outstanding_leases(&self) -> usize {
        self.leased.load(Ordering::SeqCst)
    }
}

impl ConnectionProvider for SqliteConnectionProvider {
    fn acquire(&self) -> Result<Box<dyn LobConnection>, SqlLobError> {
        let leases = self.leased.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(leases, "leased sqlite connection");
        Ok(Box::new(SqliteLobConnection { lease: leases }))
    }

    fn release(&self, _connection: Box<dyn LobConnection>) -> Result<(), SqlLobError> {
        self.leased
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .map(|_| ())
            .map_err(|_| {
                SqlLobError::ConnectionError("released a connection that was never leased".into())
            })
    }
}

/// A lease on the shared `SQLite` connection.
#[derive(Debug)]
pub struct SqliteLobConnection {
    lease: usize,
}

impl SqliteLobConnection {
    #[must_use]
    pub fn lease(&self) -> usize {
        self.lease
    }
}

impl LobConnection for SqliteLobConnection {
    fn create_blob(&mut self) -> Result<BlobHandle, SqlLobError> {
        trace!(lease = self.lease, "allocating in-memory blob");
        Ok(BlobHandle::new(MemoryBlob::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leases_are_counted() {
        let provider = SqliteConnectionProvider::open(&SqliteOptions::in_memory()).unwrap();
        let mut conn = provider.acquire().unwrap();
        assert_eq!(provider.outstanding_leases(), 1);
        assert_eq!(conn.create_blob().unwrap().length().unwrap(), 0);
        provider.release(conn).unwrap();
        assert_eq!(provider.outstanding_leases(), 0);
    }

    #[test]
    fn release_without_lease_is_an_error() {
        let provider = SqliteConnectionProvider::open(&SqliteOptions::in_memory()).unwrap();
        let stray = Box::new(SqliteLobConnection { lease: 0 });
        assert!(matches!(
            provider.release(stray),
            Err(SqlLobError::ConnectionError(_))
        ));
    }

    #[test]
    fn with_connection_runs_sql() {
        let provider = SqliteConnectionProvider::open(&SqliteOptions::in_memory()).unwrap();
        let answer = provider
            .with_connection(|conn| {
                Ok(conn.query_row("SELECT 40 + 2", [], |row| row.get::<_, i64>(0))?)
            })
            .unwrap();
        assert_eq!(answer, 42);
    }
}
