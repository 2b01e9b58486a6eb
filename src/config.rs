use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Canvas edge length of both icons, in pixels.
pub const SIZE: u32 = 1024;
/// Fraction of the canvas edge the logo may occupy in the maskable icon.
pub const MASKABLE_SCALE: f64 = 0.72;

pub const SOURCE_LOGO: &str = "src/images/garrett-integrations-logo.png";
pub const STANDARD_ICON: &str = "src/images/icon.png";
pub const MASKABLE_ICON: &str = "src/images/icon-maskable.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Standard,
    Maskable,
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconKind::Standard => write!(f, "standard"),
            IconKind::Maskable => write!(f, "maskable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IconSpec {
    pub size: u32,
    pub maskable_scale: f64,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: SIZE,
            maskable_scale: MASKABLE_SCALE,
        }
    }
}

impl IconSpec {
    /// Edge of the safe-area box the maskable logo is fitted into.
    ///
    /// `round(size * maskable_scale)`, halves rounding away from zero,
    /// clamped to `1..=size`.
    pub fn maskable_edge(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        let edge = (self.size as f64 * self.maskable_scale).round();
        if !edge.is_finite() || edge < 1.0 {
            return 1;
        }
        (edge as u32).min(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconPaths {
    pub source: PathBuf,
    pub standard: PathBuf,
    pub maskable: PathBuf,
}

impl Default for IconPaths {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_LOGO),
            standard: PathBuf::from(STANDARD_ICON),
            maskable: PathBuf::from(MASKABLE_ICON),
        }
    }
}

impl IconPaths {
    pub fn output(&self, kind: IconKind) -> &Path {
        match kind {
            IconKind::Standard => &self.standard,
            IconKind::Maskable => &self.maskable,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IconConfig {
    pub spec: IconSpec,
    pub paths: IconPaths,
}

impl IconConfig {
    /// Resolves every relative path against `root`. Absolute paths are kept.
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            spec: self.spec,
            paths: IconPaths {
                source: root.join(self.paths.source),
                standard: root.join(self.paths.standard),
                maskable: root.join(self.paths.maskable),
            },
        }
    }
}
