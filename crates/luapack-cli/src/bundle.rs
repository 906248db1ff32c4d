//! Bundle command.
//!
//! Runs one bundling pass and reports the generated paths.

use anyhow::{Context, Result};
use luapack::Bundler;
use std::fs;

/// Run the bundle command.
pub fn run(source: &str, dest: &str, manifest_out: Option<String>) -> Result<()> {
    println!("Bundling scripts: {source} -> {dest}");

    let bundler = Bundler::new(source, dest);
    let manifest = bundler
        .collect()
        .with_context(|| format!("Failed to bundle scripts from {source}"))?;

    for path in manifest.paths() {
        println!("  {}", path.display());
    }

    if let Some(out_path) = manifest_out {
        let json = manifest.to_json()?;
        fs::write(&out_path, json)
            .with_context(|| format!("Failed to write manifest: {out_path}"))?;
        println!("Manifest written: {out_path}");
    }

    println!("Bundled {} script(s)", manifest.len());

    Ok(())
}
