//! Generator configuration
//!
//! Output locations, font candidates and the palette. Every field has a
//! built-in default, so running with no settings file reproduces the stock
//! asset set under `assets/`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};
use crate::palette::Palette;

/// Local settings file (optional, gitignored)
pub const SETTINGS_FILE: &str = "config/asset_settings.toml";

/// Font files tried in order; the first one that loads wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontPaths {
    pub bold: Vec<PathBuf>,
    pub regular: Vec<PathBuf>,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: vec![PathBuf::from(
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            )],
            regular: vec![PathBuf::from(
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            )],
        }
    }
}

/// Where assets are written and what they are drawn with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root directory all output paths are relative to
    pub output_root: PathBuf,
    /// App icon, relative to `output_root`
    pub icon_file: PathBuf,
    /// Adaptive-icon foreground (same pixels as the icon)
    pub icon_foreground_file: PathBuf,
    /// Feature graphic, relative to `output_root`
    pub feature_graphic_file: PathBuf,
    /// Directory for screenshot mockups, relative to `output_root`
    pub screenshot_dir: PathBuf,
    pub fonts: FontPaths,
    pub palette: Palette,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("assets"),
            icon_file: PathBuf::from("icon/app_icon.png"),
            icon_foreground_file: PathBuf::from("icon/app_icon_foreground.png"),
            feature_graphic_file: PathBuf::from("feature_graphic.png"),
            screenshot_dir: PathBuf::from("screenshots"),
            fonts: FontPaths::default(),
            palette: Palette::default(),
        }
    }
}

impl AssetConfig {
    /// Load configuration from a TOML settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents).map_err(|message| AssetError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Local settings file if present and valid, otherwise built-in defaults
    pub fn from_config_files() -> Self {
        if !Path::new(SETTINGS_FILE).exists() {
            log::debug!("No {} found, using defaults", SETTINGS_FILE);
            return Self::default();
        }
        match Self::from_file(SETTINGS_FILE) {
            Ok(config) => {
                log::info!("Loaded settings from {}", SETTINGS_FILE);
                config
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Same configuration rooted at a different output directory
    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn icon_path(&self) -> PathBuf {
        self.output_root.join(&self.icon_file)
    }

    pub fn icon_foreground_path(&self) -> PathBuf {
        self.output_root.join(&self.icon_foreground_file)
    }

    pub fn feature_graphic_path(&self) -> PathBuf {
        self.output_root.join(&self.feature_graphic_file)
    }

    pub fn screenshot_path(&self, filename: &str) -> PathBuf {
        self.output_root.join(&self.screenshot_dir).join(filename)
    }
}
