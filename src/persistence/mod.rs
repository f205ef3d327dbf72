//! Single-word persistence
//!
//! The only thing that survives between sessions is one unsigned 32-bit value
//! (the best score), stored little-endian. Backends:
//! - [`FileStorage`]: a 4-byte file on disk
//! - [`MemoryStorage`]: in-process, for tests and headless runs

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Size of the stored word in bytes
pub const WORD_LEN: usize = 4;

#[derive(thiserror::Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored record is not exactly one word long
    #[error("Corrupt record: expected 4 bytes, found {found}")]
    Corrupt { found: usize },

    /// Backend refused the write
    #[error("Storage is read-only")]
    ReadOnly,
}

/// Backend holding a single persisted word
pub trait WordStorage {
    /// Read the stored word, `None` if nothing was ever written
    fn read(&self) -> Result<Option<u32>, PersistenceError>;

    /// Replace the stored word
    fn write(&mut self, value: u32) -> Result<(), PersistenceError>;
}

/// Word stored in a small binary file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStorage for FileStorage {
    fn read(&self) -> Result<Option<u32>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let word: [u8; WORD_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| PersistenceError::Corrupt { found: bytes.len() })?;
        Ok(Some(u32::from_le_bytes(word)))
    }

    fn write(&mut self, value: u32) -> Result<(), PersistenceError> {
        // Write to a sibling temp file first so a crash never leaves a torn word
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, value.to_le_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory word; can be made read-only to exercise failure paths
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    value: Option<u32>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: u32) -> Self {
        Self {
            value: Some(value),
            read_only: false,
        }
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn value(&self) -> Option<u32> {
        self.value
    }
}

impl WordStorage for MemoryStorage {
    fn read(&self) -> Result<Option<u32>, PersistenceError> {
        Ok(self.value)
    }

    fn write(&mut self, value: u32) -> Result<(), PersistenceError> {
        if self.read_only {
            return Err(PersistenceError::ReadOnly);
        }
        self.value = Some(value);
        Ok(())
    }
}
