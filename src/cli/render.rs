//! `render` command

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::iconset::icon_file_name;
use crate::render::{self, MAX_CANVAS};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Edge length in pixels
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_CANVAS as i64))]
    pub size: u32,

    /// Output file (defaults to icon_<size>x<size>.png in the current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(icon_file_name(args.size, 1)));

    render::render_to_file(args.size, &out)
        .with_context(|| format!("failed to render {}px icon", args.size))?;

    println!("Wrote {}", out.display());
    Ok(())
}
