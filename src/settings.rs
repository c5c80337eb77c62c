//! Settings
//!
//! Built-in defaults reproduce the stock IVS-NDI Bridge layout. A TOML file
//! can override any of them; command-line flags are applied on top by the
//! CLI layer.
//!
//! ```toml
//! sizes = [16, 32, 64, 128, 256, 512, 1024]
//! retina_threshold = 512
//! bundle = "/Applications/IVS-NDI Bridge.app"
//! packer = "native"
//!
//! [tools]
//! iconutil = "/usr/bin/iconutil"
//! ```

use std::fs;
use std::path::{Component, Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::render::MAX_CANVAS;

pub const DEFAULT_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];
/// Sizes at or below this get an `@2x` companion
pub const DEFAULT_RETINA_THRESHOLD: u32 = 512;
pub const DEFAULT_BUNDLE: &str = "IVS-NDI Bridge.app";
pub const DEFAULT_ICONSET_NAME: &str = "AppIcon.iconset";
pub const DEFAULT_ICNS_NAME: &str = "AppIcon.icns";
pub const LSREGISTER: &str = "/System/Library/Frameworks/CoreServices.framework/Frameworks/LaunchServices.framework/Support/lsregister";

const CONFIG_FILE: &str = "config.toml";

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Which packer turns the image set into an `.icns`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackerKind {
    /// macOS `iconutil -c icns`
    #[default]
    Iconutil,
    /// Built-in ICNS encoder
    Native,
}

/// External tool locations
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolPaths {
    pub iconutil: PathBuf,
    pub lsregister: PathBuf,
    pub touch: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            iconutil: PathBuf::from("iconutil"),
            lsregister: PathBuf::from(LSREGISTER),
            touch: PathBuf::from("touch"),
        }
    }
}

/// Everything a build needs to know
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Nominal icon sizes, rendered in order
    pub sizes: Vec<u32>,
    /// Sizes at or below this get an `@2x` companion
    pub retina_threshold: u32,
    /// Application bundle whose icon is replaced
    pub bundle: PathBuf,
    /// Image-set directory name inside `Contents/Resources`
    pub iconset_name: String,
    /// Container file name inside `Contents/Resources`
    pub icns_name: String,
    pub packer: PackerKind,
    /// Re-register the bundle with Launch Services after packing
    pub refresh: bool,
    pub tools: ToolPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            retina_threshold: DEFAULT_RETINA_THRESHOLD,
            bundle: PathBuf::from(DEFAULT_BUNDLE),
            iconset_name: DEFAULT_ICONSET_NAME.to_string(),
            icns_name: DEFAULT_ICNS_NAME.to_string(),
            packer: PackerKind::default(),
            refresh: true,
            tools: ToolPaths::default(),
        }
    }
}

impl Settings {
    /// Load from an explicit file, else the per-user config file if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|p| p.is_file()),
        };

        let settings = match path {
            Some(path) => {
                tracing::debug!("Loading settings from {}", path.display());
                let text = fs::read_to_string(&path).map_err(|source| SettingsError::Read {
                    path: path.clone(),
                    source,
                })?;
                toml::from_str(&text).map_err(|source| SettingsError::Parse { path, source })?
            }
            None => Self::default(),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.sizes.is_empty() {
            return Err(SettingsError::Invalid("no icon sizes configured".into()));
        }

        let mut seen = Vec::with_capacity(self.sizes.len());
        for &size in &self.sizes {
            if size == 0 {
                return Err(SettingsError::Invalid("icon sizes must be positive".into()));
            }
            let largest = if size <= self.retina_threshold { size.saturating_mul(2) } else { size };
            if largest > MAX_CANVAS {
                return Err(SettingsError::Invalid(format!(
                    "size {size} needs a {largest}px canvas, limit is {MAX_CANVAS}"
                )));
            }
            if seen.contains(&size) {
                return Err(SettingsError::Invalid(format!("size {size} listed twice")));
            }
            seen.push(size);
        }

        for (what, name) in [("iconset_name", &self.iconset_name), ("icns_name", &self.icns_name)] {
            if !is_plain_file_name(name) {
                return Err(SettingsError::Invalid(format!(
                    "{what} must be a plain file name, got {name:?}"
                )));
            }
        }

        if self.bundle.as_os_str().is_empty() {
            return Err(SettingsError::Invalid("bundle path is empty".into()));
        }

        Ok(())
    }

    /// `<bundle>/Contents/Resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.bundle.join("Contents").join("Resources")
    }

    pub fn iconset_dir(&self) -> PathBuf {
        self.resources_dir().join(&self.iconset_name)
    }

    pub fn icns_path(&self) -> PathBuf {
        self.resources_dir().join(&self.icns_name)
    }
}

/// `<config dir>/bridge-icon/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "IVS", "bridge-icon").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sizes, vec![16, 32, 64, 128, 256, 512, 1024]);
        assert_eq!(settings.retina_threshold, 512);
        assert_eq!(settings.packer, PackerKind::Iconutil);
        assert!(settings.refresh);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bundle_paths() {
        let settings = Settings {
            bundle: PathBuf::from("/Apps/Demo.app"),
            ..Default::default()
        };
        assert_eq!(
            settings.iconset_dir(),
            PathBuf::from("/Apps/Demo.app/Contents/Resources/AppIcon.iconset")
        );
        assert_eq!(
            settings.icns_path(),
            PathBuf::from("/Apps/Demo.app/Contents/Resources/AppIcon.icns")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            sizes = [32, 128]
            packer = "native"

            [tools]
            iconutil = "/opt/bin/iconutil"
            "#,
        )
        .unwrap();

        assert_eq!(settings.sizes, vec![32, 128]);
        assert_eq!(settings.packer, PackerKind::Native);
        assert_eq!(settings.retina_threshold, 512);
        assert_eq!(settings.tools.iconutil, PathBuf::from("/opt/bin/iconutil"));
        assert_eq!(settings.tools.touch, PathBuf::from("touch"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result: Result<Settings, _> = toml::from_str("colour = \"red\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.toml");
        fs::write(&path, "retina_threshold = 64\nrefresh = false\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.retina_threshold, 64);
        assert!(!settings.refresh);
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "sizes = [16,").unwrap();

        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Settings::load(Some(Path::new("/nonexistent/bridge-icon.toml"))).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn test_validation() {
        let bad = |f: fn(&mut Settings)| {
            let mut s = Settings::default();
            f(&mut s);
            s.validate().unwrap_err().to_string()
        };

        assert!(bad(|s| s.sizes.clear()).contains("no icon sizes"));
        assert!(bad(|s| s.sizes = vec![16, 0]).contains("positive"));
        assert!(bad(|s| s.sizes = vec![16, 16]).contains("twice"));
        assert!(bad(|s| s.sizes = vec![20_000]).contains("canvas"));
        assert!(bad(|s| s.iconset_name = "../escape.iconset".into()).contains("iconset_name"));
        assert!(bad(|s| s.icns_name = "sub/AppIcon.icns".into()).contains("icns_name"));
        assert!(bad(|s| s.bundle = PathBuf::new()).contains("bundle"));
    }

    #[test]
    fn test_large_size_without_companion_is_allowed() {
        let settings = Settings {
            sizes: vec![10_000],
            retina_threshold: 512,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }
}
