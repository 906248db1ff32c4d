//! Package config parsing and validation.
//!
//! `luapack.toml` declares the package metadata and the dependency
//! constraints the host packaging system consumes. The bundler itself
//! never interprets the dependency tables; they are validated for shape
//! and passed through opaquely.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// luapack.toml package config structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    pub package: PackageSection,

    /// Install-time dependencies: package name -> version constraint
    /// (e.g. `redis = ">=2.10.5"`).
    #[serde(default)]
    pub dependencies: HashMap<String, String>,

    /// Test/build-only dependencies.
    #[serde(default, rename = "test-dependencies")]
    pub test_dependencies: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSection {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Directory the generated scripts are bundled into, relative to the
    /// package root.
    #[serde(default)]
    pub scripts_dir: Option<String>,
}

impl PackageConfig {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        if self.package.name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if self.package.version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        // Basic semver shape check
        if !self.package.version.contains('.') {
            anyhow::bail!("Package version should be in semver format (e.g., 0.1.0)");
        }

        for (name, constraint) in self.dependencies.iter().chain(&self.test_dependencies) {
            if name.is_empty() {
                anyhow::bail!("Dependency name cannot be empty");
            }
            if constraint.is_empty() {
                anyhow::bail!("Dependency '{}' has an empty version constraint", name);
            }
        }

        Ok(())
    }
}

/// Check command implementation
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| "luapack.toml".to_string());

    println!("Checking config: {}", path);

    let config = PackageConfig::from_file(&path)?;
    config.validate()?;

    println!(
        "✓ Package: {} v{}",
        config.package.name, config.package.version
    );
    println!("✓ Dependencies: {}", config.dependencies.len());
    println!("✓ Test dependencies: {}", config.test_dependencies.len());
    println!("\nConfig is valid!");

    Ok(())
}
