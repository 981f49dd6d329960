//! Exclusive lock around a load-modify-save cycle
//!
//! Two layers: an in-process mutex serializes threads sharing one store, and
//! a lock file created with `create_new` serializes separate processes (the
//! MCP server and the CLI pointed at the same data file).
//!
//! Only the process holding the `<lock>.reclaim` marker may remove a stale
//! lock file, and it re-checks staleness while holding the marker.

use crate::StoreError;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Timing for lock acquisition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOptions {
    /// Give up after this long
    pub timeout: Duration,
    /// A lock file older than this is assumed abandoned by a crashed process
    pub stale_after: Duration,
    /// Delay between attempts
    pub poll_interval: Duration,
}

impl Default for LockOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(5000),
            stale_after: Duration::from_secs(30),
            poll_interval: Duration::from_millis(20),
        }
    }
}

/// Held for the duration of one mutating operation
///
/// Dropping the guard removes the lock file and releases the mutex.
#[derive(Debug)]
pub struct FileLockGuard<'a> {
    path: PathBuf,
    _local: MutexGuard<'a, ()>,
}

impl Drop for FileLockGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Failed to remove lock file {}: {}", self.path.display(), e);
        }
    }
}

pub(crate) fn acquire<'a>(
    local: &'a Mutex<()>,
    path: &Path,
    options: &LockOptions,
) -> Result<FileLockGuard<'a>, StoreError> {
    let local = local.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let start = Instant::now();
    loop {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                // Owner pid, for whoever has to clean up by hand
                let _ = writeln!(file, "{}", std::process::id());
                debug!("Acquired lock {}", path.display());
                return Ok(FileLockGuard {
                    path: path.to_path_buf(),
                    _local: local,
                });
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                if is_stale(path, options.stale_after) && reclaim_stale(path, options.stale_after)? {
                    continue;
                }

                let waited = start.elapsed();
                if waited >= options.timeout {
                    return Err(StoreError::LockTimeout {
                        path: path.to_path_buf(),
                        waited_ms: waited.as_millis() as u64,
                    });
                }
                std::thread::sleep(options.poll_interval);
            }
            Err(e) => return Err(StoreError::io(path, e)),
        }
    }
}

/// Remove `path` if it is still stale, as the only reclaimer
///
/// Returns whether the caller should retry acquisition right away.
fn reclaim_stale(path: &Path, stale_after: Duration) -> Result<bool, StoreError> {
    let marker = reclaim_path_for(path);
    match OpenOptions::new().write(true).create_new(true).open(&marker) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            // Left behind by a process that died mid-reclaim
            if is_stale(&marker, stale_after) {
                warn!("Removing abandoned reclaim marker {}", marker.display());
                remove_if_present(&marker)?;
                return Ok(true);
            }
            return Ok(false);
        }
        Err(e) => return Err(StoreError::io(&marker, e)),
    }

    let result = if is_stale(path, stale_after) {
        warn!(
            "Removing stale lock file {} (older than {}s)",
            path.display(),
            stale_after.as_secs()
        );
        remove_if_present(path)
    } else {
        Ok(())
    };

    if let Err(e) = fs::remove_file(&marker) {
        warn!("Failed to remove reclaim marker {}: {}", marker.display(), e);
    }
    result.map(|()| true)
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

fn reclaim_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".reclaim");
    PathBuf::from(name)
}

fn is_stale(path: &Path, stale_after: Duration) -> bool {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| modified.elapsed().ok())
        .is_some_and(|age| age > stale_after)
}
