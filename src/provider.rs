use std::fmt;

use tracing::warn;

use crate::driver::LobConnection;
use crate::error::SqlLobError;

/// Hands out connections and takes them back. Usually backed by the caller's pool.
pub trait ConnectionProvider: fmt::Debug + Send + Sync {
    /// # Errors
    /// Returns [`SqlLobError::ConnectionError`] (or a driver error) if no connection is available.
    fn acquire(&self) -> Result<Box<dyn LobConnection>, SqlLobError>;

    /// # Errors
    /// Returns [`SqlLobError`] if the provider cannot take the connection back.
    fn release(&self, connection: Box<dyn LobConnection>) -> Result<(), SqlLobError>;
}

/// A connection leased from a [`ConnectionProvider`] for the duration of a scope.
///
/// [`ConnectionGuard::release`] hands it back and reports the provider's error. A guard dropped
/// without an explicit release (early return, `?`) still hands the connection back and logs any
/// failure.
pub struct ConnectionGuard<'p> {
    provider: &'p dyn ConnectionProvider,
    connection: Option<Box<dyn LobConnection>>,
}

impl<'p> ConnectionGuard<'p> {
    /// # Errors
    /// Propagates the provider's acquisition error.
    pub fn acquire(provider: &'p dyn ConnectionProvider) -> Result<Self, SqlLobError> {
        let connection = provider.acquire()?;
        Ok(Self {
            provider,
            connection: Some(connection),
        })
    }

    /// # Errors
    /// Returns [`SqlLobError::ConnectionError`] if the connection was already handed back.
    pub fn connection(&mut self) -> Result<&mut (dyn LobConnection + 'static), SqlLobError> {
        self.connection
            .as_deref_mut()
            .ok_or_else(|| SqlLobError::ConnectionError("connection already released".into()))
    }

    /// Hand the connection back to its provider now.
    ///
    /// # Errors
    /// Propagates the provider's release error.
    pub fn release(mut self) -> Result<(), SqlLobError> {
        match self.connection.take() {
            Some(connection) => self.provider.release(connection),
            None => Ok(()),
        }
    }
}

impl Drop for ConnectionGuard<'_> {
    fn drop(&mut self) {
        if let Some(connection) = self.connection.take() {
            if let Err(err) = self.provider.release(connection) {
                warn!(error = %err, "failed to release connection to provider");
            }
        }
    }
}

impl fmt::Debug for ConnectionGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("provider", &self.provider)
            .field("held", &self.connection.is_some())
            .finish()
    }
}
