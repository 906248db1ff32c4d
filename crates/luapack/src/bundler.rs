//! The bundling pass.
//!
//! [`Bundler`] copies each discovered script into the destination
//! directory, prefixed with the disclaimer header, and returns the ordered
//! [`Manifest`] of written paths.

use crate::discover::{ScriptFile, discover_scripts};
use crate::fsio::{DiskFs, FileSystem};
use crate::manifest::{GeneratedAsset, Manifest};
use crate::{BundleResult, DISCLAIMER_HEADER};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Bundles Lua scripts from a source directory into a package data
/// directory.
///
/// Both directories are explicit parameters; nothing is resolved against
/// the process working directory. The pass is a single linear scan with
/// fail-fast error handling: the first failure aborts, and assets written
/// before it remain on disk.
///
/// # Example
///
/// ```no_run
/// use luapack::Bundler;
///
/// let manifest = Bundler::new("../redis", "ciqueue/redis").collect()?;
/// assert!(manifest.paths().all(|p| p.starts_with("ciqueue/redis")));
/// # Ok::<(), luapack::BundleError>(())
/// ```
pub struct Bundler<F: FileSystem> {
    fs: F,
    source_dir: PathBuf,
    dest_dir: PathBuf,
}

impl Bundler<DiskFs> {
    /// Create a disk-backed bundler.
    pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(DiskFs::new(), source_dir, dest_dir)
    }
}

impl<F: FileSystem> Bundler<F> {
    /// Create a bundler over an explicit filesystem implementation.
    pub fn with_fs(fs: F, source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
        }
    }

    /// The destination directory assets are written into.
    #[must_use]
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Run the bundling pass.
    ///
    /// Ensures the destination directory exists, discovers the source
    /// scripts, bundles each in filename order, and returns the manifest
    /// of written paths. Zero discovered scripts yield an empty manifest;
    /// the destination directory is still created.
    pub fn collect(&self) -> BundleResult<Manifest> {
        self.fs.ensure_dir(&self.dest_dir)?;

        let scripts = discover_scripts(&self.fs, &self.source_dir)?;

        let mut manifest = Manifest::new();
        for script in &scripts {
            manifest.push(self.bundle(script)?);
        }

        info!(
            source = %self.source_dir.display(),
            dest = %self.dest_dir.display(),
            assets = manifest.len(),
            "bundling pass complete"
        );
        Ok(manifest)
    }

    /// Bundle one script: disclaimer header + verbatim source bytes,
    /// written to `dest_dir/<filename>`, replacing any existing file.
    pub fn bundle(&self, script: &ScriptFile) -> BundleResult<GeneratedAsset> {
        let source = self.fs.read(&script.path)?;

        let mut contents = Vec::with_capacity(DISCLAIMER_HEADER.len() + source.len());
        contents.extend_from_slice(DISCLAIMER_HEADER.as_bytes());
        contents.extend_from_slice(&source);

        let dest = self.dest_dir.join(&script.file_name);
        self.fs.write(&dest, &contents)?;

        debug!(script = %script.file_name, dest = %dest.display(), "bundled script");
        Ok(GeneratedAsset {
            file_name: script.file_name.clone(),
            path: dest,
        })
    }
}
