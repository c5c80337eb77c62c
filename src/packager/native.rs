use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use icns::{IconFamily, IconType, Image};

use super::{IconPacker, PackError};
use crate::iconset::IconEntry;

/// ICNS slot for an image-set entry, if the format has one
pub fn icon_type_for(entry: IconEntry) -> Option<IconType> {
    let icon_type = match (entry.size, entry.scale) {
        (16, 1) => IconType::RGBA32_16x16,
        (16, 2) => IconType::RGBA32_16x16_2x,
        (32, 1) => IconType::RGBA32_32x32,
        (32, 2) => IconType::RGBA32_32x32_2x,
        (64, 1) => IconType::RGBA32_64x64,
        (128, 1) => IconType::RGBA32_128x128,
        (128, 2) => IconType::RGBA32_128x128_2x,
        (256, 1) => IconType::RGBA32_256x256,
        (256, 2) => IconType::RGBA32_256x256_2x,
        (512, 1) => IconType::RGBA32_512x512,
        (512, 2) => IconType::RGBA32_512x512_2x,
        _ => return None,
    };
    Some(icon_type)
}

/// Packs the image set in-process with the `icns` crate.
///
/// Files are added in sorted name order, so the same directory always
/// produces the same bytes.
#[derive(Debug, Default)]
pub struct NativePacker;

impl NativePacker {
    pub fn new() -> Self {
        Self
    }

    fn entries(iconset: &Path) -> Result<Vec<(PathBuf, IconEntry)>, PackError> {
        let io_err = |source| PackError::Io {
            path: iconset.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(iconset).map_err(io_err)? {
            let path = dir_entry.map_err(io_err)?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            match IconEntry::from_file_name(name) {
                Some(entry) => entries.push((path.clone(), entry)),
                None => tracing::debug!("Ignoring {}", path.display()),
            }
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(entries)
    }
}

impl IconPacker for NativePacker {
    fn name(&self) -> &'static str {
        "native"
    }

    fn pack(&self, iconset: &Path, output: &Path) -> Result<(), PackError> {
        let mut family = IconFamily::new();
        let mut added = 0usize;

        for (path, entry) in Self::entries(iconset)? {
            let Some(icon_type) = icon_type_for(entry) else {
                tracing::debug!("No ICNS slot for {}, skipping", entry);
                continue;
            };

            let encode_err = |source| PackError::Encode {
                path: path.clone(),
                source,
            };
            let file = File::open(&path).map_err(|source| PackError::Io {
                path: path.clone(),
                source,
            })?;
            let image = Image::read_png(BufReader::new(file)).map_err(encode_err)?;
            family
                .add_icon_with_type(&image, icon_type)
                .map_err(encode_err)?;
            added += 1;
        }

        if added == 0 {
            return Err(PackError::Empty(iconset.to_path_buf()));
        }

        let io_err = |source| PackError::Io {
            path: output.to_path_buf(),
            source,
        };
        let file = File::create(output).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        family.write(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        tracing::debug!("Packed {} images into {}", added, output.display());
        Ok(())
    }
}
