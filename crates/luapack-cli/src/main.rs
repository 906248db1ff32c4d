//! luapack CLI - Lua script bundler for package data
//!
//! Commands:
//! - `luapack bundle` - Copy annotated Lua scripts into the package data directory
//! - `luapack check` - Validate a luapack.toml package config

use clap::{Parser, Subcommand};

mod bundle;
mod config;

#[derive(Parser)]
#[command(name = "luapack")]
#[command(author, version, about = "Bundler for Lua script package data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bundle Lua scripts into the package data directory
    Bundle {
        /// Directory containing the source .lua scripts
        #[arg(short, long)]
        source: String,

        /// Destination directory for the generated copies
        #[arg(short, long)]
        dest: String,

        /// Write the manifest JSON to this path
        #[arg(short, long)]
        manifest: Option<String>,
    },

    /// Validate a luapack.toml package config
    Check {
        /// Path to luapack.toml (default: ./luapack.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bundle {
            source,
            dest,
            manifest,
        } => {
            bundle::run(&source, &dest, manifest)?;
        }
        Commands::Check { config } => {
            config::check(config)?;
        }
    }

    Ok(())
}
