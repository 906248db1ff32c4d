//! Error types for bundling operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a bundling pass.
///
/// Every variant carries the path the operation failed on. Failures are
/// fatal for the pass: the bundler aborts on the first error and leaves
/// already-written assets on disk.
#[derive(Debug, Error)]
pub enum BundleError {
    /// Destination directory could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source directory could not be enumerated.
    #[error("failed to list scripts in {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source script could not be read.
    #[error("failed to read script {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generated asset could not be written.
    #[error("failed to write asset {}: {source}", path.display())]
    WriteAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A discovered script path has no usable filename component.
    #[error("invalid script path: {}", .0.display())]
    InvalidScriptPath(PathBuf),

    /// Manifest serialization or deserialization error.
    #[error("manifest JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
