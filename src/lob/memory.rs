use crate::error::SqlLobError;

use super::Blob;

/// A blob whose value lives in process memory.
///
/// Drivers that materialize LOB values instead of handing out server-side locators (`SQLite`
/// among them) return these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBlob {
    data: Vec<u8>,
    freed: bool,
}

impl MemoryBlob {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, freed: false }
    }

    #[must_use]
    pub fn is_freed(&self) -> bool {
        self.freed
    }

    fn ensure_live(&self) -> Result<(), SqlLobError> {
        if self.freed {
            Err(SqlLobError::Freed)
        } else {
            Ok(())
        }
    }

    /// Zero-based offset for a 1-based position. Valid positions are `1..=len + 1`.
    fn offset(&self, pos: u64) -> Result<usize, SqlLobError> {
        let max = self.data.len() as u64 + 1;
        if pos == 0 || pos > max {
            return Err(SqlLobError::ParameterError(format!(
                "blob position {pos} out of range 1..={max}"
            )));
        }
        usize::try_from(pos - 1)
            .map_err(|_| SqlLobError::ParameterError(format!("blob position {pos} too large")))
    }
}

impl Blob for MemoryBlob {
    fn length(&self) -> Result<u64, SqlLobError> {
        self.ensure_live()?;
        Ok(self.data.len() as u64)
    }

    fn get_bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>, SqlLobError> {
        self.ensure_live()?;
        let start = self.offset(pos)?;
        let end = start.saturating_add(len).min(self.data.len());
        Ok(self.data[start..end].to_vec())
    }

    fn set_bytes(&mut self, pos: u64, bytes: &[u8]) -> Result<usize, SqlLobError> {
        self.ensure_live()?;
        let start = self.offset(pos)?;
        let end = start + bytes.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(bytes);
        Ok(bytes.len())
    }

    fn truncate(&mut self, len: u64) -> Result<(), SqlLobError> {
        self.ensure_live()?;
        let current = self.data.len() as u64;
        if len > current {
            return Err(SqlLobError::ParameterError(format!(
                "cannot truncate blob of {current} bytes to {len}"
            )));
        }
        // len <= current, which already fits in usize
        self.data.truncate(len as usize);
        Ok(())
    }

    fn free(&mut self) -> Result<(), SqlLobError> {
        self.data = Vec::new();
        self.freed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bytes_at_one_fills_empty_blob() {
        let mut blob = MemoryBlob::new();
        assert_eq!(blob.set_bytes(1, &[1, 2, 3]).unwrap(), 3);
        assert_eq!(blob.length().unwrap(), 3);
        assert_eq!(blob.get_bytes(1, 3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn set_bytes_overwrites_and_extends() {
        let mut blob = MemoryBlob::from_bytes(b"hello".to_vec());
        blob.set_bytes(4, b"p me").unwrap();
        assert_eq!(blob.get_bytes(1, 100).unwrap(), b"help me");
    }

    #[test]
    fn append_position_is_valid_but_beyond_is_not() {
        let mut blob = MemoryBlob::from_bytes(vec![0; 2]);
        assert!(blob.set_bytes(3, &[7]).is_ok());
        assert!(matches!(
            blob.set_bytes(5, &[7]),
            Err(SqlLobError::ParameterError(_))
        ));
        assert!(matches!(
            blob.get_bytes(0, 1),
            Err(SqlLobError::ParameterError(_))
        ));
    }

    #[test]
    fn get_bytes_clamps_to_available() {
        let blob = MemoryBlob::from_bytes(vec![1, 2, 3, 4]);
        assert_eq!(blob.get_bytes(3, 10).unwrap(), vec![3, 4]);
        assert!(blob.get_bytes(5, 10).unwrap().is_empty());
    }

    #[test]
    fn truncate_shortens_only() {
        let mut blob = MemoryBlob::from_bytes(vec![1, 2, 3]);
        blob.truncate(1).unwrap();
        assert_eq!(blob.get_bytes(1, 3).unwrap(), vec![1]);
        assert!(blob.truncate(2).is_err());
    }

    #[test]
    fn free_is_idempotent_and_blocks_access() {
        let mut blob = MemoryBlob::from_bytes(vec![1]);
        blob.free().unwrap();
        blob.free().unwrap();
        assert!(blob.is_freed());
        assert!(matches!(blob.length(), Err(SqlLobError::Freed)));
        assert!(matches!(blob.set_bytes(1, &[2]), Err(SqlLobError::Freed)));
    }
}
