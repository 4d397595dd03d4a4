use rusqlite::Row;
use rusqlite::types::ValueRef;

use crate::driver::ResultCursor;
use crate::error::SqlLobError;
use crate::lob::{BlobHandle, MemoryBlob};

/// The current row of a `rusqlite` query, addressed by 1-based column position.
pub struct SqliteRow<'row, 'stmt> {
    row: &'row Row<'stmt>,
}

impl<'row, 'stmt> SqliteRow<'row, 'stmt> {
    #[must_use]
    pub fn new(row: &'row Row<'stmt>) -> Self {
        Self { row }
    }
}

impl ResultCursor for SqliteRow<'_, '_> {
    fn get_blob(&mut self, index: usize) -> Result<Option<BlobHandle>, SqlLobError> {
        if index == 0 {
            return Err(SqlLobError::ParameterError(
                "column positions start at 1".into(),
            ));
        }
        match self.row.get_ref(index - 1)? {
            ValueRef::Null => Ok(None),
            // TEXT written by other clients is read as its UTF-8 bytes.
            ValueRef::Blob(bytes) | ValueRef::Text(bytes) => {
                Ok(Some(BlobHandle::new(MemoryBlob::from_bytes(bytes.to_vec()))))
            }
            other => Err(SqlLobError::UnsupportedType(format!(
                "column {index} holds {} and cannot be read as a blob",
                other.data_type()
            ))),
        }
    }
}
