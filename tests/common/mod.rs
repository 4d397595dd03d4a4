#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use sql_lob_binding::prelude::*;

/// Which driver calls should fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Faults {
    pub acquire: bool,
    pub release: bool,
    pub create: bool,
    pub write: bool,
    pub read: bool,
    pub free: bool,
    pub bind: bool,
    pub register: bool,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub acquired: AtomicUsize,
    pub released: AtomicUsize,
    pub created: AtomicUsize,
    pub length_calls: AtomicUsize,
    pub frees: AtomicUsize,
}

pub fn count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

fn injected(what: &str) -> SqlLobError {
    SqlLobError::Other(format!("injected {what} failure"))
}

/// A blob that records how it is used.
#[derive(Debug)]
pub struct RecordingBlob {
    inner: MemoryBlob,
    stats: Arc<Stats>,
    faults: Faults,
}

impl RecordingBlob {
    pub fn new(bytes: Vec<u8>, stats: Arc<Stats>, faults: Faults) -> Self {
        Self {
            inner: MemoryBlob::from_bytes(bytes),
            stats,
            faults,
        }
    }
}

impl Blob for RecordingBlob {
    fn length(&self) -> Result<u64, SqlLobError> {
        bump(&self.stats.length_calls);
        self.inner.length()
    }

    fn get_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>, SqlLobError> {
        if self.faults.read {
            return Err(SqlLobError::ReadError("injected read failure".into()));
        }
        self.inner.get_bytes(pos, len)
    }

    fn set_bytes(&mut self, pos: u64, bytes: &[u8]) -> Result<usize, SqlLobError> {
        if self.faults.write {
            return Err(SqlLobError::WriteError("injected write failure".into()));
        }
        self.inner.set_bytes(pos, bytes)
    }

    fn truncate(&mut self, len: u64) -> Result<(), SqlLobError> {
        self.inner.truncate(len)
    }

    fn free(&mut self) -> Result<(), SqlLobError> {
        bump(&self.stats.frees);
        if self.faults.free {
            return Err(injected("free"));
        }
        self.inner.free()
    }
}

pub struct RecordingConnection {
    stats: Arc<Stats>,
    faults: Faults,
}

impl LobConnection for RecordingConnection {
    fn create_blob(&mut self) -> Result<BlobHandle, SqlLobError> {
        if self.faults.create {
            return Err(SqlLobError::AllocationError("injected create failure".into()));
        }
        bump(&self.stats.created);
        Ok(BlobHandle::new(RecordingBlob::new(
            Vec::new(),
            Arc::clone(&self.stats),
            self.faults,
        )))
    }
}

#[derive(Debug)]
pub struct RecordingProvider {
    pub stats: Arc<Stats>,
    pub faults: Faults,
}

impl RecordingProvider {
    pub fn new(faults: Faults) -> Arc<Self> {
        Arc::new(Self {
            stats: Arc::new(Stats::default()),
            faults,
        })
    }
}

impl ConnectionProvider for RecordingProvider {
    fn acquire(&self) -> Result<Box<dyn LobConnection>, SqlLobError> {
        if self.faults.acquire {
            return Err(SqlLobError::ConnectionError("injected acquire failure".into()));
        }
        bump(&self.stats.acquired);
        Ok(Box::new(RecordingConnection {
            stats: Arc::clone(&self.stats),
            faults: self.faults,
        }))
    }

    fn release(&self, _connection: Box<dyn LobConnection>) -> Result<(), SqlLobError> {
        bump(&self.stats.released);
        if self.faults.release {
            return Err(injected("release"));
        }
        Ok(())
    }
}

/// Statement, callable statement and cursor in one: whatever is bound at an index is what
/// reads at that index return.
#[derive(Debug, Default)]
pub struct MockStatement {
    pub bound: HashMap<usize, Option<BlobHandle>>,
    pub registered: Vec<(usize, SqlType)>,
    pub faults: Faults,
}

impl MockStatement {
    pub fn new(faults: Faults) -> Self {
        Self {
            faults,
            ..Self::default()
        }
    }

    /// Place a result value directly, as a driver would after execution.
    pub fn put(&mut self, index: usize, blob: Option<BlobHandle>) {
        self.bound.insert(index, blob);
    }

    fn fetch(&self, index: usize) -> Result<Option<BlobHandle>, SqlLobError> {
        self.bound
            .get(&index)
            .cloned()
            .ok_or_else(|| SqlLobError::ParameterError(format!("nothing at index {index}")))
    }
}

impl PreparedStatement for MockStatement {
    fn set_blob(&mut self, index: usize, blob: Option<&BlobHandle>) -> Result<(), SqlLobError> {
        if self.faults.bind {
            return Err(injected("bind"));
        }
        self.bound.insert(index, blob.cloned());
        Ok(())
    }
}

impl CallableStatement for MockStatement {
    fn register_out_parameter(
        &mut self,
        index: usize,
        sql_type: SqlType,
    ) -> Result<(), SqlLobError> {
        if self.faults.register {
            return Err(SqlLobError::UnsupportedType(format!("{sql_type:?}")));
        }
        self.registered.push((index, sql_type));
        Ok(())
    }

    fn get_blob(&mut self, index: usize) -> Result<Option<BlobHandle>, SqlLobError> {
        self.fetch(index)
    }
}

impl ResultCursor for MockStatement {
    fn get_blob(&mut self, index: usize) -> Result<Option<BlobHandle>, SqlLobError> {
        self.fetch(index)
    }
}

pub fn config_for(provider: &Arc<RecordingProvider>) -> Configuration {
    Configuration::new(Arc::clone(provider) as Arc<dyn ConnectionProvider>)
}
