//! luapack - Lua script bundler for package data
//!
//! This crate copies auxiliary Lua script files from a source tree into a
//! package-local data directory, prefixing each copy with a disclaimer
//! header that marks it as generated. The ordered list of written paths
//! (the [`Manifest`]) is handed to the host packaging system as the set of
//! package-data entries.
//!
//! # Bundling pass
//!
//! ```text
//! redis/              crates-io-pkg/luapack/redis/
//! ├── lock.lua   ->   ├── lock.lua      (header + verbatim bytes)
//! └── push.lua   ->   └── push.lua      (header + verbatim bytes)
//! ```
//!
//! The pass is a single linear scan: ensure the destination directory
//! exists, discover `*.lua` files in the source directory, write each
//! annotated copy, and collect the destination paths in filename order.
//! Generated files are unconditionally overwritten; there is no rollback
//! on partial failure.
//!
//! # Example
//!
//! ```no_run
//! use luapack::Bundler;
//!
//! let bundler = Bundler::new("../redis", "ciqueue/redis");
//! let manifest = bundler.collect()?;
//!
//! for path in manifest.paths() {
//!     println!("bundled {}", path.display());
//! }
//! # Ok::<(), luapack::BundleError>(())
//! ```

mod discover;
mod error;
mod manifest;

pub mod bundler;
pub mod fsio;

pub use bundler::Bundler;
pub use discover::{ScriptFile, discover_scripts};
pub use error::BundleError;
pub use fsio::{DiskFs, FileSystem, MemoryFs};
pub use manifest::{GeneratedAsset, Manifest};

/// Result type for bundling operations.
pub type BundleResult<T> = Result<T, BundleError>;

/// Header line prepended to every generated asset.
pub const DISCLAIMER_HEADER: &str = "-- AUTOGENERATED FILE DO NOT EDIT DIRECTLY\n";

/// File extension of bundled source scripts.
pub const SCRIPT_EXTENSION: &str = "lua";
