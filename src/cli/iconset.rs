//! `iconset` command

use std::path::PathBuf;

use clap::Args;

use crate::iconset;
use crate::settings::Settings;

#[derive(Debug, Default, Args)]
pub struct IconsetArgs {
    /// Output directory (defaults to the bundle's Resources/AppIcon.iconset)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: IconsetArgs, settings: Settings) -> anyhow::Result<()> {
    let dir = args.out.unwrap_or_else(|| settings.iconset_dir());

    let written = iconset::assemble(&dir, &settings.sizes, settings.retina_threshold, |entry| {
        println!("  Creating {}...", entry)
    })?;

    println!("Wrote {} images to {}", written.len(), dir.display());
    Ok(())
}
