//! Snapshot persistence - the storage sink for the board store
//!
//! The whole store is serialized as one JSON snapshot under a fixed
//! namespace key. Saving happens after a mutation has already been
//! published in memory; a failed save never rolls the store back.

use crate::error::{Result, StoreError};
use crate::store::BoardStore;
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed namespace identifier the snapshot is stored under
pub const STORAGE_NAMESPACE: &str = "trello-clone-storage";

/// File-backed persistence sink for store snapshots
pub struct Storage {
    /// Directory the snapshot lives in
    root: PathBuf,
}

impl Storage {
    /// Create a sink rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the snapshot file
    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORAGE_NAMESPACE))
    }

    /// Path to the lock file
    pub fn lock_path(&self) -> PathBuf {
        self.root.join(format!("{}.lock", STORAGE_NAMESPACE))
    }

    /// Check whether a prior snapshot exists
    pub fn exists(&self) -> bool {
        self.snapshot_path().exists()
    }

    /// Read the persisted snapshot, if any
    pub fn load(&self) -> Result<Option<BoardStore>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        let store: BoardStore = serde_json::from_str(&content)?;
        tracing::debug!(
            "loaded snapshot from {} ({} boards)",
            path.display(),
            store.boards().len()
        );
        Ok(Some(store))
    }

    /// Write the full store snapshot (atomic write via temp file)
    pub fn save(&self, store: &BoardStore) -> Result<()> {
        let path = self.snapshot_path();
        let content = serde_json::to_string_pretty(store)?;
        atomic_write(&path, content.as_bytes())
    }

    /// Fire-and-forget save. Failures are logged and swallowed: the
    /// in-memory state stays published either way.
    pub fn persist(&self, store: &BoardStore) {
        if let Err(e) = self.save(store) {
            tracing::warn!("failed to persist store snapshot: {}", e);
        }
    }

    /// Try to acquire an exclusive lock (non-blocking)
    pub fn lock(&self) -> Result<StorageLock> {
        let lock_path = self.lock_path();

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&lock_path)?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StorageLock { file }),
            Err(_) => Err(StoreError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
pub struct StorageLock {
    file: fs::File,
}

impl Drop for StorageLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

/// Atomic write via temp file and rename
fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;

    // Rename is atomic on the same filesystem
    fs::rename(&temp_path, path)?;

    Ok(())
}
