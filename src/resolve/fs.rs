//! Filesystem existence probing.

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// The single filesystem capability resolution needs.
pub trait FileSystem: Send + Sync + fmt::Debug {
    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem.
///
/// Directories count as existing, same as any other entry.
#[derive(Copy, Clone, Debug, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory filesystem for tests and dry runs.
///
/// Records every probed path, in order, so callers can check which
/// candidates were (and were not) looked at.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: RwLock<FxHashSet<PathBuf>>,
    probes: Mutex<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem containing `files`.
    pub fn with_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let fs = Self::new();
        fs.files.write().extend(files.into_iter().map(Into::into));
        fs
    }

    pub fn add_file(&self, path: impl Into<PathBuf>) {
        self.files.write().insert(path.into());
    }

    pub fn remove_file(&self, path: &Path) -> bool {
        self.files.write().remove(path)
    }

    /// Every path passed to [`FileSystem::exists`] so far.
    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes.lock().clone()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.lock().len()
    }

    pub fn was_probed(&self, path: &Path) -> bool {
        self.probes.lock().iter().any(|p| p == path)
    }

    pub fn clear_probes(&self) {
        self.probes.lock().clear();
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.probes.lock().push(path.to_path_buf());
        self.files.read().contains(path)
    }
}

impl fmt::Debug for MemoryFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryFileSystem")
            .field("files", &self.files.read().len())
            .field("probes", &self.probes.lock().len())
            .finish()
    }
}
