//! Filesystem capability interface.
//!
//! All directory and file access performed by the bundler goes through the
//! narrow [`FileSystem`] trait: ensure a directory exists, enumerate a
//! directory, read a file, write a file. Production code uses [`DiskFs`];
//! tests substitute [`MemoryFs`] to assert exact byte-level outputs and to
//! inject I/O failures without touching a real disk.

use crate::{BundleError, BundleResult};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use walkdir::WalkDir;

/// Narrow capability interface for the bundler's filesystem access.
pub trait FileSystem {
    /// Create `path` and any missing intermediate directories.
    ///
    /// A no-op when the directory already exists; repeated calls are
    /// harmless.
    fn ensure_dir(&self, path: &Path) -> BundleResult<()>;

    /// Enumerate the files directly under `path` (non-recursive).
    ///
    /// A missing directory yields an empty listing, matching glob
    /// semantics. No ordering is guaranteed; callers sort.
    fn list_dir(&self, path: &Path) -> BundleResult<Vec<PathBuf>>;

    /// Read the full content of a source file.
    fn read(&self, path: &Path) -> BundleResult<Vec<u8>>;

    /// Write `contents` to `path`, replacing any existing file.
    fn write(&self, path: &Path, contents: &[u8]) -> BundleResult<()>;
}

/// Disk-backed [`FileSystem`] using blocking `std::fs` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFs;

impl DiskFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for DiskFs {
    fn ensure_dir(&self, path: &Path) -> BundleResult<()> {
        fs::create_dir_all(path).map_err(|source| BundleError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
    }

    fn list_dir(&self, path: &Path) -> BundleResult<Vec<PathBuf>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| BundleError::ListDir {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            if entry.file_type().is_file() {
                entries.push(entry.into_path());
            }
        }
        Ok(entries)
    }

    fn read(&self, path: &Path) -> BundleResult<Vec<u8>> {
        fs::read(path).map_err(|source| BundleError::ReadSource {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> BundleResult<()> {
        fs::write(path, contents).map_err(|source| BundleError::WriteAsset {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// In-memory [`FileSystem`] for tests.
///
/// Stores files and directories in a map and supports injecting failures
/// for specific paths, so tests can exercise the bundler's error paths
/// deterministically.
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    denied_dirs: BTreeSet<PathBuf>,
    failing_reads: BTreeSet<PathBuf>,
    failing_writes: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given content, creating its parent directory.
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        let path = path.into();
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path, contents.into());
    }

    /// Seed an empty directory.
    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.lock().dirs.insert(path.into());
    }

    /// Make `ensure_dir` fail for this path with a permission error.
    pub fn deny_dir(&self, path: impl Into<PathBuf>) {
        self.lock().denied_dirs.insert(path.into());
    }

    /// Make `read` fail for this path.
    pub fn fail_read_on(&self, path: impl Into<PathBuf>) {
        self.lock().failing_reads.insert(path.into());
    }

    /// Make `write` fail for this path.
    pub fn fail_write_on(&self, path: impl Into<PathBuf>) {
        self.lock().failing_writes.insert(path.into());
    }

    /// Content of a stored file, if present.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.lock().files.get(path.as_ref()).cloned()
    }

    /// Whether a directory has been created.
    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.lock().dirs.contains(path.as_ref())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn ensure_dir(&self, path: &Path) -> BundleResult<()> {
        let mut state = self.lock();
        if state.denied_dirs.contains(path) {
            return Err(BundleError::CreateDir {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> BundleResult<Vec<PathBuf>> {
        let state = self.lock();
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> BundleResult<Vec<u8>> {
        let state = self.lock();
        if state.failing_reads.contains(path) {
            return Err(BundleError::ReadSource {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read denied"),
            });
        }
        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| BundleError::ReadSource {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> BundleResult<()> {
        let mut state = self.lock();
        if state.failing_writes.contains(path) {
            return Err(BundleError::WriteAsset {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::StorageFull, "write denied"),
            });
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
