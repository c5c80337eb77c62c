//! bridge-icon - renders the IVS-NDI Bridge application icon
//!
//! - Draws the logo at every configured size (plus `@2x` companions)
//! - Packs the image set into `AppIcon.icns` inside the app bundle
//! - Re-registers the bundle so Finder and the Dock show the new icon

mod cli;
mod host;
mod iconset;
mod logging;
mod packager;
mod pipeline;
mod refresh;
mod render;
mod settings;

use clap::Parser;
use cli::{exit_codes, Cli, Commands};
use settings::{Settings, SettingsError};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.json_output) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let config = cli.config.as_deref();
    let result = match cli.command {
        // `render` draws a single file and needs no settings
        Some(Commands::Render(args)) => cli::render::run(args),
        Some(Commands::Iconset(args)) => {
            load_settings(config).and_then(|settings| cli::iconset::run(args, settings))
        }
        Some(Commands::Build(args)) => {
            load_settings(config).and_then(|settings| cli::build::run(args, settings))
        }
        None => load_settings(config)
            .and_then(|settings| cli::build::run(Default::default(), settings)),
    };

    match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            categorize_error(&e)
        }
    }
}

fn load_settings(config: Option<&std::path::Path>) -> anyhow::Result<Settings> {
    Ok(Settings::load(config)?)
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &anyhow::Error) -> i32 {
    if e.downcast_ref::<SettingsError>().is_some() {
        exit_codes::CONFIG_ERROR
    } else if e.chain().any(|cause| cause.is::<render::RenderError>()) {
        exit_codes::RENDER_FAILURE
    } else {
        exit_codes::UNEXPECTED_FAILURE
    }
}
