//! Large-object handles.
//!
//! A [`Blob`] is the driver's view of a binary large object. Positions are 1-based, the way
//! database LOB APIs address them. [`BlobHandle`] shares one blob between the statement it is
//! bound to and the execution scope that disposes of it.

mod guard;
mod memory;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::SqlLobError;

pub use guard::LobGuard;
pub use memory::MemoryBlob;

/// Driver-owned binary large object.
pub trait Blob: fmt::Debug {
    /// Number of bytes in the value.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the driver cannot report the length or the blob was freed.
    fn length(&self) -> Result<u64, SqlLobError>;

    /// Read up to `len` bytes starting at the 1-based position `pos`.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if `pos` is out of range, the blob was freed, or the driver read
    /// fails.
    fn get_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>, SqlLobError>;

    /// Write `bytes` starting at the 1-based position `pos`, extending the value if needed.
    /// Returns the number of bytes written.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if `pos` is out of range, the blob was freed, or the driver write
    /// fails.
    fn set_bytes(&mut self, pos: u64, bytes: &[u8]) -> Result<usize, SqlLobError>;

    /// Shorten the value to `len` bytes.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if `len` exceeds the current length or the blob was freed.
    fn truncate(&mut self, len: u64) -> Result<(), SqlLobError>;

    /// Release the resources held by this blob. Calling `free` again is a no-op.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the driver fails to release the object.
    fn free(&mut self) -> Result<(), SqlLobError>;
}

/// Shared handle to a [`Blob`].
///
/// Cloning the handle does not copy the value. Handles are thread-bound, like the call stack
/// that binds them.
#[derive(Clone)]
pub struct BlobHandle {
    inner: Rc<RefCell<Box<dyn Blob>>>,
}

impl BlobHandle {
    #[must_use]
    pub fn new<B: Blob + 'static>(blob: B) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Box::new(blob))),
        }
    }

    /// # Errors
    /// See [`Blob::length`].
    pub fn length(&self) -> Result<u64, SqlLobError> {
        self.inner.borrow().length()
    }

    /// # Errors
    /// See [`Blob::get_bytes`].
    pub fn get_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>, SqlLobError> {
        self.inner.borrow().get_bytes(pos, len)
    }

    /// # Errors
    /// See [`Blob::set_bytes`].
    pub fn set_bytes(&self, pos: u64, bytes: &[u8]) -> Result<usize, SqlLobError> {
        self.inner.borrow_mut().set_bytes(pos, bytes)
    }

    /// # Errors
    /// See [`Blob::truncate`].
    pub fn truncate(&self, len: u64) -> Result<(), SqlLobError> {
        self.inner.borrow_mut().truncate(len)
    }

    /// # Errors
    /// See [`Blob::free`].
    pub fn free(&self) -> Result<(), SqlLobError> {
        self.inner.borrow_mut().free()
    }

    /// Read the whole value, positions `1..=length`.
    ///
    /// # Errors
    /// Returns [`SqlLobError::ReadError`] if the reported length does not fit in memory, or any
    /// error from [`Blob::length`] / [`Blob::get_bytes`].
    pub fn read_all(&self) -> Result<Vec<u8>, SqlLobError> {
        let length = self.length()?;
        let length = usize::try_from(length).map_err(|_| {
            SqlLobError::ReadError(format!("large object of {length} bytes exceeds address space"))
        })?;
        self.get_bytes(1, length)
    }

    /// Whether both handles refer to the same blob.
    #[must_use]
    pub fn same_as(&self, other: &BlobHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for BlobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(blob) => f.debug_tuple("BlobHandle").field(&blob).finish(),
            Err(_) => f.write_str("BlobHandle(<borrowed>)"),
        }
    }
}
