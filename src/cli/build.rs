//! `build` command

use std::path::PathBuf;

use clap::Args;

use crate::host::CommandRunner;
use crate::packager::{IconPacker, IconutilPacker, NativePacker};
use crate::pipeline::{self, PackOutcome};
use crate::settings::{PackerKind, Settings};

#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// Application bundle to install the icon into
    #[arg(long)]
    pub bundle: Option<PathBuf>,

    /// How to pack the image set
    #[arg(long, value_enum)]
    pub packer: Option<PackerKind>,

    /// Skip the Launch Services refresh and touch
    #[arg(long)]
    pub no_refresh: bool,
}

impl BuildArgs {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(bundle) = &self.bundle {
            settings.bundle = bundle.clone();
        }
        if let Some(packer) = self.packer {
            settings.packer = packer;
        }
        if self.no_refresh {
            settings.refresh = false;
        }
    }
}

pub fn run(args: BuildArgs, mut settings: Settings) -> anyhow::Result<()> {
    args.apply(&mut settings);
    settings.validate()?;

    tracing::debug!("Building with {:?}", settings);

    let runner = CommandRunner::new();
    let iconutil = IconutilPacker::new(&runner, &settings.tools.iconutil);
    let native = NativePacker::new();
    let packer: &dyn IconPacker = match settings.packer {
        PackerKind::Iconutil => &iconutil,
        PackerKind::Native => &native,
    };

    let report = pipeline::run_build(&settings, packer, &runner)?;

    tracing::debug!(
        images = report.rendered.len(),
        packed = report.packed(),
        "Build finished"
    );

    match &report.outcome {
        PackOutcome::Packed { icns, sha256 } => {
            println!("SHA-256 of {}: {}", icns.display(), sha256)
        }
        PackOutcome::Failed { .. } => println!(
            "Image set left for inspection in {}",
            report.iconset_dir.display()
        ),
    }
    if !report.refreshed {
        println!("Icon cache refresh skipped");
    }
    for warning in &report.refresh_warnings {
        println!("Warning: {}", warning);
    }

    Ok(())
}
