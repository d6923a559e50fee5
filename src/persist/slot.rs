use crate::error::PersistError;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A durable slot holding at most one serialized flow record under a single
/// fixed key.
///
/// The store writes through this after every mutation and reads from it once
/// at construction. Implementations only move raw strings; the JSON boundary
/// lives in [`save_snapshot`](super::save_snapshot) /
/// [`load_snapshot`](super::load_snapshot).
pub trait StateSlot {
    /// Returns the stored record, or `None` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, PersistError>;

    /// Replaces the stored record.
    fn write(&mut self, payload: &str) -> Result<(), PersistError>;

    /// Deletes the record outright; the next load falls back to the empty
    /// graph. Clearing an already-empty slot succeeds.
    fn clear(&mut self) -> Result<(), PersistError>;
}

/// In-process slot. Used headless and in tests; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySlot {
    record: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, PersistError> {
        Ok(self.record.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), PersistError> {
        self.record = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        self.record = None;
        Ok(())
    }
}

/// Slot backed by a single JSON file on disk.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StateSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), PersistError> {
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
