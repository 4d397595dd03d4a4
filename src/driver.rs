//! The slice of a database driver a binding talks to.
//!
//! Indexes are 1-based parameter or column positions throughout.

use crate::error::SqlLobError;
use crate::lob::BlobHandle;
use crate::types::SqlType;

/// A live connection able to create large objects.
pub trait LobConnection {
    /// Allocate a new, empty blob owned by this connection's session.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the driver cannot allocate the object.
    fn create_blob(&mut self) -> Result<BlobHandle, SqlLobError>;
}

/// A statement whose parameters can be bound to large objects.
pub trait PreparedStatement {
    /// Bind `blob` (or SQL NULL) to parameter `index`.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the index is invalid or the driver rejects the value.
    fn set_blob(&mut self, index: usize, blob: Option<&BlobHandle>) -> Result<(), SqlLobError>;
}

/// A statement calling a stored procedure, with output parameters.
pub trait CallableStatement: PreparedStatement {
    /// Declare parameter `index` as an output parameter of type `sql_type`.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the driver rejects the declared type.
    fn register_out_parameter(&mut self, index: usize, sql_type: SqlType)
    -> Result<(), SqlLobError>;

    /// Fetch output parameter `index` as a blob; `None` for SQL NULL.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the parameter is not available or not a blob.
    fn get_blob(&mut self, index: usize) -> Result<Option<BlobHandle>, SqlLobError>;
}

/// The current row of a result set.
pub trait ResultCursor {
    /// Fetch column `index` as a blob; `None` for SQL NULL.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the column does not exist or cannot be read as a blob.
    fn get_blob(&mut self, index: usize) -> Result<Option<BlobHandle>, SqlLobError>;
}

/// Output stream for the attributes of a structured (user-defined) type.
pub trait SqlOutput {
    /// Append a blob attribute, or NULL.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the stream rejects the attribute.
    fn write_blob(&mut self, blob: Option<&BlobHandle>) -> Result<(), SqlLobError>;
}

/// Input stream over the attributes of a structured (user-defined) type.
pub trait SqlInput {
    /// Read the next attribute as a blob; `None` for SQL NULL.
    ///
    /// # Errors
    /// Returns [`SqlLobError`] if the stream is exhausted or the attribute is not a blob.
    fn read_blob(&mut self) -> Result<Option<BlobHandle>, SqlLobError>;
}
