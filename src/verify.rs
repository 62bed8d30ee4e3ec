//! Inspection of a generated resource directory.
//!
//! Reads each `mipmap-*/ic_launcher.png` back and checks the layout the
//! generator promises: a square of the density's size, a white centre and a
//! background-coloured corner.

use crate::density::Density;
use crate::icon_gen::{BACKGROUND, FOREGROUND, ICON_FILENAME};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What was found on disk for one density.
#[derive(Debug, Clone, Serialize)]
pub struct IconReport {
    pub density: Density,
    pub path: PathBuf,
    pub expected_size: u32,
    pub width: u32,
    pub height: u32,
    pub center: [u8; 3],
    pub corner: [u8; 3],
    pub valid: bool,
}

impl IconReport {
    /// Human readable reasons the icon does not match, empty when valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.width != self.expected_size || self.height != self.expected_size {
            problems.push(format!(
                "size is {}x{}, expected {}x{}",
                self.width, self.height, self.expected_size, self.expected_size
            ));
        }
        if self.center != FOREGROUND.0 {
            problems.push(format!("centre pixel is {:?}, expected white", self.center));
        }
        if self.corner != BACKGROUND.0 {
            problems.push(format!(
                "corner pixel is {:?}, expected {:?}",
                self.corner, BACKGROUND.0
            ));
        }

        problems
    }
}

/// Inspect the icon for `density` under `root`. Fails if the file is missing or unreadable.
pub fn inspect_icon(root: &Path, density: Density) -> Result<IconReport> {
    let path = root.join(density.dir_name()).join(ICON_FILENAME);
    let img = image::open(&path)
        .with_context(|| format!("Failed to load icon {}", path.display()))?
        .to_rgb8();

    let (width, height) = img.dimensions();
    let center = if width > 0 && height > 0 {
        img.get_pixel(width / 2, height / 2).0
    } else {
        [0, 0, 0]
    };
    let corner = if width > 0 && height > 0 {
        img.get_pixel(0, 0).0
    } else {
        [0, 0, 0]
    };

    let mut report = IconReport {
        density,
        path,
        expected_size: density.size(),
        width,
        height,
        center,
        corner,
        valid: false,
    };
    report.valid = report.problems().is_empty();

    Ok(report)
}

/// Inspect every density, or only `only` when given.
pub fn inspect_icons(root: &Path, only: Option<Density>) -> Result<Vec<IconReport>> {
    let densities: Vec<Density> = match only {
        Some(density) => vec![density],
        None => Density::ALL.to_vec(),
    };

    densities
        .into_iter()
        .map(|density| inspect_icon(root, density))
        .collect()
}
