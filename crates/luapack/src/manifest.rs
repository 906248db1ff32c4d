//! Manifest of generated assets.
//!
//! The manifest is the ordered list of destination paths a bundling pass
//! produced. The host packaging system consumes it as the set of
//! package-data entries to include in the distributed package.

use crate::BundleResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A bundled output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAsset {
    /// Filename shared with the source script.
    pub file_name: String,

    /// Destination path the annotated copy was written to.
    pub path: PathBuf,
}

/// Ordered sequence of generated assets from one bundling pass.
///
/// Assets appear in the order they were bundled, which the bundler keeps
/// lexicographic by filename so manifests are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub assets: Vec<GeneratedAsset>,
}

impl Manifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an asset, preserving bundling order.
    pub fn push(&mut self, asset: GeneratedAsset) {
        self.assets.push(asset);
    }

    /// The ordered destination paths, as handed to the packaging system.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.assets.iter().map(|a| a.path.as_path())
    }

    /// Number of generated assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the pass produced no assets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> BundleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a manifest from JSON.
    pub fn from_json(json: &str) -> BundleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
