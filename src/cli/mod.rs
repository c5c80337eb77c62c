//! Command-line interface

pub mod build;
pub mod iconset;
pub mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_FAILURE: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const RENDER_FAILURE: i32 = 3;
}

/// Render the IVS-NDI Bridge app icon and pack it into AppIcon.icns
#[derive(Debug, Parser)]
#[command(name = "bridge-icon", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long = "json-output", global = true)]
    pub json_output: bool,

    /// Settings file (TOML)
    #[arg(long, global = true, env = "BRIDGE_ICON_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render, pack and install the icon, then refresh icon caches (default)
    Build(build::BuildArgs),
    /// Only render the image-set directory
    Iconset(iconset::IconsetArgs),
    /// Render a single PNG
    Render(render::RenderArgs),
}
