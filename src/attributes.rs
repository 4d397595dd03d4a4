//! In-memory attribute streams for structured (user-defined) types.
//!
//! [`AttributeWriter`] collects the attributes a binding writes when a composite value is sent
//! to the database; [`AttributeReader`] replays attributes in order when one is read back.

use std::collections::VecDeque;

use crate::driver::{SqlInput, SqlOutput};
use crate::error::SqlLobError;
use crate::lob::{BlobHandle, MemoryBlob};
use crate::types::RowValues;

/// One attribute of a structured value.
#[derive(Debug, Clone)]
pub enum Attribute {
    Null,
    Value(RowValues),
    Blob(BlobHandle),
}

#[derive(Debug, Default)]
pub struct AttributeWriter {
    attributes: Vec<Attribute>,
}

impl AttributeWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_value(&mut self, value: RowValues) {
        self.attributes.push(match value {
            RowValues::Null => Attribute::Null,
            other => Attribute::Value(other),
        });
    }

    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[must_use]
    pub fn into_reader(self) -> AttributeReader {
        AttributeReader::new(self.attributes)
    }
}

impl SqlOutput for AttributeWriter {
    fn write_blob(&mut self, blob: Option<&BlobHandle>) -> Result<(), SqlLobError> {
        self.attributes.push(match blob {
            Some(handle) => Attribute::Blob(handle.clone()),
            None => Attribute::Null,
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct AttributeReader {
    attributes: VecDeque<Attribute>,
}

impl AttributeReader {
    #[must_use]
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes: attributes.into(),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.attributes.len()
    }

    fn next(&mut self) -> Result<Attribute, SqlLobError> {
        self.attributes
            .pop_front()
            .ok_or_else(|| SqlLobError::ReadError("no attributes left to read".into()))
    }

    /// Read the next attribute as an ordinary value.
    ///
    /// # Errors
    /// Returns `SqlLobError::ReadError` when the stream is exhausted and
    /// `SqlLobError::UnsupportedType` when the attribute is a blob.
    pub fn read_value(&mut self) -> Result<RowValues, SqlLobError> {
        match self.next()? {
            Attribute::Null => Ok(RowValues::Null),
            Attribute::Value(value) => Ok(value),
            Attribute::Blob(_) => Err(SqlLobError::UnsupportedType(
                "blob attribute read as a plain value".into(),
            )),
        }
    }
}

impl SqlInput for AttributeReader {
    fn read_blob(&mut self) -> Result<Option<BlobHandle>, SqlLobError> {
        match self.next()? {
            Attribute::Null | Attribute::Value(RowValues::Null) => Ok(None),
            Attribute::Blob(handle) => Ok(Some(handle)),
            Attribute::Value(RowValues::Blob(bytes)) => {
                Ok(Some(BlobHandle::new(MemoryBlob::from_bytes(bytes))))
            }
            Attribute::Value(other) => Err(SqlLobError::UnsupportedType(format!(
                "attribute {other:?} cannot be read as a blob"
            ))),
        }
    }
}
