//! `icons.json`: a record of the files a run produced.
//!
//! Layout mirrors an asset catalog: an `images` array plus an `info` block
//! with format version and author.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "icons.json";
const AUTHOR: &str = "edudash-icons";

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Square,
    Round,
}

/// One generated PNG.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    /// File name relative to the output directory
    pub filename: String,

    /// Edge length in pixels; every asset is square
    pub size: u32,

    pub shape: Shape,
}

#[derive(Serialize, Debug, Clone)]
pub struct Info {
    pub version: u8,
    pub author: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: Info,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            info: Info {
                version: 1,
                author: AUTHOR.to_string(),
            },
        }
    }
}

impl Manifest {
    /// Record a file. A later entry for the same file name replaces the
    /// earlier one, since the file on disk was overwritten too.
    pub fn add(&mut self, filename: impl Into<String>, size: u32, shape: Shape) {
        let filename = filename.into();
        self.images.retain(|entry| entry.filename != filename);
        self.images.push(ManifestEntry {
            filename,
            size,
            shape,
        });
    }

    /// Serialize to `icons.json` in `out_dir`.
    pub fn write(&self, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).context("Failed to serialize icons.json")?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_shape_lowercase() {
        let mut manifest = Manifest::default();
        manifest.add("favicon-16x16.png", 16, Shape::Round);

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["images"][0]["filename"], "favicon-16x16.png");
        assert_eq!(value["images"][0]["size"], 16);
        assert_eq!(value["images"][0]["shape"], "round");
        assert_eq!(value["info"]["version"], 1);
        assert_eq!(value["info"]["author"], "edudash-icons");
    }

    #[test]
    fn duplicate_filename_keeps_latest() {
        let mut manifest = Manifest::default();
        manifest.add("favicon.png", 32, Shape::Square);
        manifest.add("icon.png", 1024, Shape::Round);
        manifest.add("favicon.png", 32, Shape::Round);

        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.images[1].filename, "favicon.png");
        assert_eq!(manifest.images[1].shape, Shape::Round);
    }
}
