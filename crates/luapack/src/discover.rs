//! Script discovery.
//!
//! Finds the `*.lua` files sitting directly under the source directory.
//! Results are sorted lexicographically by filename so that repeated runs
//! produce the same manifest regardless of filesystem enumeration order.

use crate::fsio::FileSystem;
use crate::{BundleError, BundleResult, SCRIPT_EXTENSION};
use std::path::{Path, PathBuf};

/// A discovered source script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptFile {
    /// Full path of the source file.
    pub path: PathBuf,
    /// Filename component, reused for the destination path.
    pub file_name: String,
}

/// Discover the Lua scripts directly under `source_dir`, sorted by filename.
///
/// A missing source directory yields an empty listing. Non-script files are
/// ignored; a script whose filename is not valid UTF-8 is rejected with
/// [`BundleError::InvalidScriptPath`].
pub fn discover_scripts(fs: &dyn FileSystem, source_dir: &Path) -> BundleResult<Vec<ScriptFile>> {
    let mut scripts = Vec::new();

    for path in fs.list_dir(source_dir)? {
        if !is_script(&path) {
            continue;
        }
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| BundleError::InvalidScriptPath(path.clone()))?
            .to_string();
        scripts.push(ScriptFile { path, file_name });
    }

    scripts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(scripts)
}

/// Whether a path matches the `*.lua` naming pattern.
fn is_script(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION)
}

#[cfg(test)]
#[path = "discover/discover_tests.rs"]
mod discover_tests;

#[cfg(test)]
#[path = "discover/discover_parameterized_tests.rs"]
mod discover_parameterized_tests;
