//! Execution scopes and the blobs bound within them.
//!
//! A blob bound to a statement must outlive the statement's execution, so bindings don't free
//! what they write. They register it here instead, and the innermost open [`ExecuteScope`] on
//! the current thread frees everything it collected when it ends.

use std::cell::RefCell;
use std::marker::PhantomData;

use tracing::{debug, trace, warn};

use crate::lob::BlobHandle;

thread_local! {
    static SCOPES: RefCell<Vec<Vec<BlobHandle>>> = const { RefCell::new(Vec::new()) };
}

/// Track `blob` for disposal by the innermost open scope on this thread.
///
/// Returns `false` when no scope is open; the blob is then left to its owner.
pub fn register_blob(blob: &BlobHandle) -> bool {
    SCOPES.with(|scopes| match scopes.borrow_mut().last_mut() {
        Some(tracked) => {
            tracked.push(blob.clone());
            true
        }
        None => {
            trace!("no execute scope open; blob not tracked");
            false
        }
    })
}

/// Number of scopes currently open on this thread.
#[must_use]
pub fn open_scopes() -> usize {
    SCOPES.with(|scopes| scopes.borrow().len())
}

/// One statement execution. Frees the blobs registered during it when dropped.
///
/// Scopes nest; each blob belongs to the innermost scope open when it was registered. Drop
/// scopes in reverse order of entry.
#[derive(Debug)]
pub struct ExecuteScope {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl ExecuteScope {
    #[must_use]
    pub fn enter() -> Self {
        let depth = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(Vec::new());
            scopes.len()
        });
        trace!(depth, "entered execute scope");
        Self {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Blobs registered with this scope so far.
    #[must_use]
    pub fn tracked(&self) -> usize {
        SCOPES.with(|scopes| {
            scopes
                .borrow()
                .get(self.depth - 1)
                .map_or(0, Vec::len)
        })
    }
}

impl Drop for ExecuteScope {
    fn drop(&mut self) {
        let tracked = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            if scopes.len() != self.depth {
                warn!(
                    expected = self.depth,
                    actual = scopes.len(),
                    "execute scopes dropped out of order"
                );
            }
            if scopes.len() >= self.depth {
                scopes
                    .split_off(self.depth - 1)
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
            } else {
                Vec::new()
            }
        });

        let count = tracked.len();
        for blob in tracked {
            if let Err(err) = blob.free() {
                warn!(error = %err, "failed to free blob at end of execute scope");
            }
        }
        if count > 0 {
            debug!(count, "freed blobs at end of execute scope");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SqlLobError;
    use crate::lob::MemoryBlob;

    fn blob() -> BlobHandle {
        BlobHandle::new(MemoryBlob::from_bytes(vec![1, 2]))
    }

    #[test]
    fn without_scope_nothing_is_tracked() {
        let handle = blob();
        assert!(!register_blob(&handle));
        assert_eq!(handle.length().unwrap(), 2);
    }

    #[test]
    fn scope_frees_registered_blobs_on_drop() {
        let handle = blob();
        {
            let scope = ExecuteScope::enter();
            assert!(register_blob(&handle));
            assert_eq!(scope.tracked(), 1);
            assert_eq!(handle.length().unwrap(), 2);
        }
        assert!(matches!(handle.length(), Err(SqlLobError::Freed)));
        assert_eq!(open_scopes(), 0);
    }

    #[test]
    fn nested_scopes_free_their_own_blobs() {
        let outer_blob = blob();
        let inner_blob = blob();
        let outer = ExecuteScope::enter();
        register_blob(&outer_blob);
        {
            let inner = ExecuteScope::enter();
            register_blob(&inner_blob);
            assert_eq!(inner.tracked(), 1);
            assert_eq!(outer.tracked(), 1);
        }
        assert!(inner_blob.length().is_err());
        assert!(outer_blob.length().is_ok());
        drop(outer);
        assert!(outer_blob.length().is_err());
    }
}
