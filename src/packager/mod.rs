//! Icon-container packing
//!
//! Turns an image-set directory into a single `.icns` file, either through
//! Apple's `iconutil` or with the built-in encoder.

mod iconutil;
mod native;

use std::path::{Path, PathBuf};

pub use iconutil::IconutilPacker;
pub use native::NativePacker;

use crate::host::CommandError;

/// Packing errors
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The external packer ran but reported failure
    #[error("{tool} failed ({}): {diagnostic}", describe_exit(*exit_code))]
    ToolFailed {
        tool: String,
        exit_code: Option<i32>,
        diagnostic: String,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no image in {0} fits an ICNS slot")]
    Empty(PathBuf),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// Text to show the operator, preferring what the tool itself printed
    pub fn diagnostic(&self) -> String {
        match self {
            PackError::ToolFailed { diagnostic, .. } if !diagnostic.is_empty() => {
                diagnostic.clone()
            }
            other => other.to_string(),
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Something that can pack an image-set directory into an icon container
pub trait IconPacker {
    /// Short name for status lines
    fn name(&self) -> &'static str;

    fn pack(&self, iconset: &Path, output: &Path) -> Result<(), PackError>;
}
