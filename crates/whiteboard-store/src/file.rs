//! JSON file backed store

use crate::lock::{self, FileLockGuard, LockOptions};
use crate::{record, StoreError};
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;
use tracing::debug;
use whiteboard_domain::{Board, BoardStore};

/// Board persisted as a single JSON file
///
/// Saves go to a temp file in the same directory which is then renamed over
/// the target, so a crash mid-save leaves the previous file intact.
/// Mutating callers hold [`BoardStore::lock`] across the whole cycle.
///
/// # Examples
///
/// ```no_run
/// use whiteboard_domain::BoardStore;
/// use whiteboard_store::JsonFileStore;
///
/// let store = JsonFileStore::new("whiteboard_data.json");
/// let board = store.load().unwrap();
/// assert!(board.next_id() >= 1);
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock_path: PathBuf,
    lock_options: LockOptions,
    local: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store for the given data file
    ///
    /// Nothing is touched on disk until the first load or save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let lock_path = lock_path_for(&path);
        Self {
            path,
            lock_path,
            lock_options: LockOptions::default(),
            local: Mutex::new(()),
        }
    }

    /// Override lock timing
    pub fn with_lock_options(mut self, options: LockOptions) -> Self {
        self.lock_options = options;
        self
    }

    /// Data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock file path (`<data file>.lock`)
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn lock_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("whiteboard"));
    name.push(".lock");
    path.with_file_name(name)
}

impl BoardStore for JsonFileStore {
    type Error = StoreError;
    type Guard<'a> = FileLockGuard<'a>;

    fn load(&self) -> Result<Board, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No board at {}, starting fresh", self.path.display());
                return Ok(Board::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let board = record::decode(&text).map_err(|reason| StoreError::CorruptState {
            location: self.path.display().to_string(),
            reason,
        })?;
        debug!("Loaded {} items from {}", board.len(), self.path.display());
        Ok(board)
    }

    fn save(&self, board: &Board) -> Result<(), StoreError> {
        let text = record::encode(board)?;
        let dir = self.directory();
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
        tmp.write_all(text.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| StoreError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::io(&self.path, e.error))?;

        debug!("Saved {} items to {}", board.len(), self.path.display());
        Ok(())
    }

    fn lock(&self) -> Result<FileLockGuard<'_>, StoreError> {
        lock::acquire(&self.local, &self.lock_path, &self.lock_options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_path_sits_next_to_data_file() {
        let store = JsonFileStore::new("/tmp/boards/whiteboard_data.json");
        assert_eq!(store.lock_path(), Path::new("/tmp/boards/whiteboard_data.json.lock"));
    }

    #[test]
    fn test_bare_file_name_uses_current_directory() {
        let store = JsonFileStore::new("whiteboard_data.json");
        assert_eq!(store.directory(), Path::new("."));
    }
}
