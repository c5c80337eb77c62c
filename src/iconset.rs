//! Image-set assembly
//!
//! Lays out the `AppIcon.iconset` directory: one PNG per configured size,
//! plus an `@2x` companion rendered at double resolution for sizes at or
//! below the retina threshold.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::render;

/// One file in the image set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconEntry {
    /// Nominal size in points
    pub size: u32,
    /// 1 for the base file, 2 for the `@2x` companion
    pub scale: u32,
}

impl IconEntry {
    pub fn base(size: u32) -> Self {
        Self { size, scale: 1 }
    }

    pub fn retina(size: u32) -> Self {
        Self { size, scale: 2 }
    }

    /// Edge length of the rendered canvas
    pub fn pixels(&self) -> u32 {
        self.size * self.scale
    }

    pub fn file_name(&self) -> String {
        icon_file_name(self.size, self.scale)
    }

    /// Parse an `icon_<s>x<s>[@2x].png` file name back into an entry
    pub fn from_file_name(name: &str) -> Option<Self> {
        let stem = name.strip_prefix("icon_")?.strip_suffix(".png")?;
        let (dims, scale) = match stem.strip_suffix("@2x") {
            Some(dims) => (dims, 2),
            None => (stem, 1),
        };
        let (w, h) = dims.split_once('x')?;
        let size: u32 = w.parse().ok()?;
        if size == 0 || h.parse::<u32>().ok()? != size {
            return None;
        }
        Some(Self { size, scale })
    }
}

impl fmt::Display for IconEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// `icon_<size>x<size>.png`, or `icon_<size>x<size>@2x.png` when `scale` is 2
pub fn icon_file_name(size: u32, scale: u32) -> String {
    if scale == 2 {
        format!("icon_{size}x{size}@2x.png")
    } else {
        format!("icon_{size}x{size}.png")
    }
}

/// Every file the image set should contain, in render order
pub fn plan(sizes: &[u32], retina_threshold: u32) -> Vec<IconEntry> {
    let mut entries = Vec::with_capacity(sizes.len() * 2);
    for &size in sizes {
        entries.push(IconEntry::base(size));
        if size <= retina_threshold {
            entries.push(IconEntry::retina(size));
        }
    }
    entries
}

/// Render every planned entry into `dir`, creating it if needed.
///
/// `progress` is called before each file is rendered.
pub fn assemble(
    dir: &Path,
    sizes: &[u32],
    retina_threshold: u32,
    mut progress: impl FnMut(&IconEntry),
) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let entries = plan(sizes, retina_threshold);
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        progress(&entry);
        let path = dir.join(entry.file_name());
        render::render_to_file(entry.pixels(), &path)?;
        written.push(path);
    }

    tracing::info!("Wrote {} images to {}", written.len(), dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DEFAULT_RETINA_THRESHOLD, DEFAULT_SIZES};

    #[test]
    fn test_file_names() {
        assert_eq!(icon_file_name(16, 1), "icon_16x16.png");
        assert_eq!(icon_file_name(512, 2), "icon_512x512@2x.png");
        assert_eq!(IconEntry::retina(256).to_string(), "icon_256x256@2x.png");
    }

    #[test]
    fn test_parse_file_names() {
        assert_eq!(
            IconEntry::from_file_name("icon_32x32@2x.png"),
            Some(IconEntry::retina(32))
        );
        assert_eq!(
            IconEntry::from_file_name("icon_1024x1024.png"),
            Some(IconEntry::base(1024))
        );
        assert_eq!(IconEntry::from_file_name("icon_32x64.png"), None);
        assert_eq!(IconEntry::from_file_name("icon_0x0.png"), None);
        assert_eq!(IconEntry::from_file_name(".DS_Store"), None);
        assert_eq!(IconEntry::from_file_name("icon_16x16@3x.png"), None);
    }

    #[test]
    fn test_default_plan() {
        let names: Vec<String> = plan(&DEFAULT_SIZES, DEFAULT_RETINA_THRESHOLD)
            .iter()
            .map(IconEntry::file_name)
            .collect();
        assert_eq!(
            names,
            vec![
                "icon_16x16.png",
                "icon_16x16@2x.png",
                "icon_32x32.png",
                "icon_32x32@2x.png",
                "icon_64x64.png",
                "icon_64x64@2x.png",
                "icon_128x128.png",
                "icon_128x128@2x.png",
                "icon_256x256.png",
                "icon_256x256@2x.png",
                "icon_512x512.png",
                "icon_512x512@2x.png",
                "icon_1024x1024.png",
            ]
        );
    }

    #[test]
    fn test_plan_threshold_is_inclusive() {
        let entries = plan(&[100, 200, 201], 200);
        assert_eq!(
            entries,
            vec![
                IconEntry::base(100),
                IconEntry::retina(100),
                IconEntry::base(200),
                IconEntry::retina(200),
                IconEntry::base(201),
            ]
        );
    }

    #[test]
    fn test_assemble_writes_one_file_per_entry() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Contents/Resources/AppIcon.iconset");

        let mut seen = Vec::new();
        let written = assemble(&dir, &[16, 32, 64], 32, |e| seen.push(*e)).unwrap();

        assert_eq!(written.len(), 5);
        assert_eq!(seen.len(), 5);

        let mut on_disk: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        on_disk.sort();
        assert_eq!(
            on_disk,
            vec![
                "icon_16x16.png",
                "icon_16x16@2x.png",
                "icon_32x32.png",
                "icon_32x32@2x.png",
                "icon_64x64.png",
            ]
        );

        for entry in seen {
            let img = image::open(dir.join(entry.file_name())).unwrap();
            assert_eq!(img.width(), entry.pixels());
            assert_eq!(img.height(), entry.pixels());
            assert!(img.color().has_alpha());
        }
    }

    #[test]
    fn test_256_companion_is_512() {
        let tmp = tempfile::tempdir().unwrap();
        assemble(tmp.path(), &[256], 512, |_| {}).unwrap();

        let base = image::open(tmp.path().join("icon_256x256.png")).unwrap();
        assert_eq!((base.width(), base.height()), (256, 256));
        let double = image::open(tmp.path().join("icon_256x256@2x.png")).unwrap();
        assert_eq!((double.width(), double.height()), (512, 512));
    }

    #[test]
    fn test_assemble_is_idempotent_on_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assemble(tmp.path(), &[16], 0, |_| {}).unwrap();
        let again = assemble(tmp.path(), &[16], 0, |_| {}).unwrap();
        assert_eq!(again.len(), 1);
    }
}
