//! Build pipeline: render the image set, pack it, clean up, refresh caches.
//!
//! Strictly sequential. A packer failure is reported and leaves the image
//! set in place for inspection; the run still continues to the refresh step.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use sha2::{Digest, Sha256};

use crate::host::ToolRunner;
use crate::iconset;
use crate::packager::IconPacker;
use crate::refresh;
use crate::settings::Settings;

/// What happened to the image set
#[derive(Debug, Clone, PartialEq)]
pub enum PackOutcome {
    Packed {
        icns: PathBuf,
        /// Hex SHA-256 of the container
        sha256: String,
    },
    Failed {
        diagnostic: String,
    },
}

/// Summary of one build
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub rendered: Vec<PathBuf>,
    pub iconset_dir: PathBuf,
    pub outcome: PackOutcome,
    /// Whether the cache refresh step ran
    pub refreshed: bool,
    pub refresh_warnings: Vec<String>,
}

impl BuildReport {
    pub fn packed(&self) -> bool {
        matches!(self.outcome, PackOutcome::Packed { .. })
    }
}

/// Run the full pipeline described by `settings`
pub fn run_build<R: ToolRunner + ?Sized>(
    settings: &Settings,
    packer: &dyn IconPacker,
    runner: &R,
) -> anyhow::Result<BuildReport> {
    let iconset_dir = settings.iconset_dir();
    let icns_path = settings.icns_path();

    println!("Generating the IVS-NDI Bridge icon...");
    let rendered = iconset::assemble(
        &iconset_dir,
        &settings.sizes,
        settings.retina_threshold,
        |entry| println!("  Creating {}...", entry),
    )?;

    println!();
    println!(
        "Packing {} with {}...",
        icns_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        packer.name()
    );

    let outcome = match packer.pack(&iconset_dir, &icns_path) {
        Ok(()) => {
            let bytes = fs::read(&icns_path)
                .with_context(|| format!("packer produced no file at {}", icns_path.display()))?;
            let sha256 = format!("{:x}", Sha256::digest(&bytes));
            println!("Icon created: {}", icns_path.display());

            fs::remove_dir_all(&iconset_dir)
                .with_context(|| format!("failed to remove {}", iconset_dir.display()))?;
            println!("Temporary iconset removed");

            tracing::info!(sha256 = %sha256, bytes = bytes.len(), "Packed {}", icns_path.display());
            PackOutcome::Packed {
                icns: icns_path,
                sha256,
            }
        }
        Err(e) => {
            tracing::error!("Packing failed: {}", e);
            let diagnostic = e.diagnostic();
            println!("{} error: {}", packer.name(), diagnostic);
            println!("Failed to create the icns");
            PackOutcome::Failed { diagnostic }
        }
    };

    let refresh_warnings = if settings.refresh {
        refresh::refresh_bundle(runner, &settings.tools, &settings.bundle)
    } else {
        tracing::debug!("Skipping icon cache refresh");
        Vec::new()
    };

    println!();
    println!("Done!");

    Ok(BuildReport {
        rendered,
        iconset_dir,
        outcome,
        refreshed: settings.refresh,
        refresh_warnings,
    })
}
