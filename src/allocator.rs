//! Per-family large-object allocation.
//!
//! Most drivers allocate blobs through [`LobConnection::create_blob`]. A family whose driver
//! needs a different path registers its own [`LobAllocator`]; every family without one falls
//! back to [`GenericAllocator`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::driver::LobConnection;
use crate::error::SqlLobError;
use crate::lob::BlobHandle;
use crate::types::DatabaseType;

/// Creates an empty blob on a connection.
pub trait LobAllocator: Send + Sync {
    /// # Errors
    /// Returns [`SqlLobError`] if the blob cannot be allocated.
    fn allocate(&self, connection: &mut dyn LobConnection) -> Result<BlobHandle, SqlLobError>;
}

impl<F> LobAllocator for F
where
    F: Fn(&mut dyn LobConnection) -> Result<BlobHandle, SqlLobError> + Send + Sync,
{
    fn allocate(&self, connection: &mut dyn LobConnection) -> Result<BlobHandle, SqlLobError> {
        self(connection)
    }
}

/// Allocation through the connection's own blob factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericAllocator;

impl LobAllocator for GenericAllocator {
    fn allocate(&self, connection: &mut dyn LobConnection) -> Result<BlobHandle, SqlLobError> {
        connection.create_blob()
    }
}

/// Allocators keyed by database family.
#[derive(Clone, Default)]
pub struct LobAllocators {
    by_family: HashMap<DatabaseType, Arc<dyn LobAllocator>>,
}

impl LobAllocators {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `allocator` for `family`, replacing any earlier registration.
    pub fn register(&mut self, family: DatabaseType, allocator: Arc<dyn LobAllocator>) {
        self.by_family.insert(family, allocator);
    }

    #[must_use]
    pub fn with(mut self, family: DatabaseType, allocator: Arc<dyn LobAllocator>) -> Self {
        self.register(family, allocator);
        self
    }

    #[must_use]
    pub fn has_override(&self, family: DatabaseType) -> bool {
        self.by_family.contains_key(&family)
    }

    /// The allocator for `family`, or [`GenericAllocator`] if none is registered.
    #[must_use]
    pub fn for_family(&self, family: DatabaseType) -> &dyn LobAllocator {
        match self.by_family.get(&family) {
            Some(allocator) => allocator.as_ref(),
            None => &GenericAllocator,
        }
    }
}

impl fmt::Debug for LobAllocators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut families: Vec<_> = self.by_family.keys().collect();
        families.sort_by_key(|family| family.to_string());
        f.debug_struct("LobAllocators")
            .field("overrides", &families)
            .finish()
    }
}
