//! Android screen density buckets and the launcher icon size for each.

use anyhow::{anyhow, Error};
use serde::Serialize;
use std::{fmt, str::FromStr};

/// A mipmap density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every density, smallest first.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Launcher icon edge length in pixels (48dp scaled to this density).
    pub fn size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Resource directory holding this density's icon, e.g. `mipmap-hdpi`.
    pub fn dir_name(self) -> String {
        format!("mipmap-{}", self.label())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Density {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::ALL
            .into_iter()
            .find(|density| density.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                anyhow!(
                    "Unknown density: {}. Available densities: mdpi, hdpi, xhdpi, xxhdpi, xxxhdpi",
                    s
                )
            })
    }
}
