use tracing::{trace, warn};

use super::BlobHandle;

/// Frees a blob fetched for reading when it goes out of scope.
///
/// Failures while freeing are logged and dropped so they never replace the result (or error)
/// of the read they guard.
#[derive(Debug)]
pub struct LobGuard {
    handle: Option<BlobHandle>,
}

impl LobGuard {
    #[must_use]
    pub fn new(handle: Option<BlobHandle>) -> Self {
        Self { handle }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&BlobHandle> {
        self.handle.as_ref()
    }
}

impl Drop for LobGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            match handle.free() {
                Ok(()) => trace!("freed large object after read"),
                Err(err) => warn!(error = %err, "ignoring failure to free large object"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlLobError;
    use crate::lob::{Blob, MemoryBlob};

    #[derive(Debug)]
    struct FailingFree;

    impl Blob for FailingFree {
        fn length(&self) -> Result<u64, SqlLobError> {
            Ok(0)
        }
        fn get_bytes(&self, _pos: u64, _len: usize) -> Result<Vec<u8>, SqlLobError> {
            Ok(Vec::new())
        }
        fn set_bytes(&mut self, _pos: u64, _bytes: &[u8]) -> Result<usize, SqlLobError> {
            Ok(0)
        }
        fn truncate(&mut self, _len: u64) -> Result<(), SqlLobError> {
            Ok(())
        }
        fn free(&mut self) -> Result<(), SqlLobError> {
            Err(SqlLobError::Other("free rejected".into()))
        }
    }

    #[test]
    fn frees_on_drop() {
        let handle = BlobHandle::new(MemoryBlob::from_bytes(vec![1]));
        {
            let guard = LobGuard::new(Some(handle.clone()));
            assert!(guard.handle().is_some());
        }
        assert!(matches!(handle.length(), Err(SqlLobError::Freed)));
    }

    #[test]
    fn free_failure_does_not_panic() {
        drop(LobGuard::new(Some(BlobHandle::new(FailingFree))));
        drop(LobGuard::new(None));
    }
}
