//! Menu configuration (`debug_menu.toml`)
//!
//! Layout, colors and input bindings for the overlay. The core only reads the
//! bindings; layout and colors are handed to the presenter as-is. Every field
//! has a default so partial files work.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::input::MenuBindings;

/// File name inside the config directory
pub const CONFIG_FILE: &str = "debug_menu.toml";

/// Debug menu configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Overlay geometry
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Overlay colors (0xRRGGBBAA)
    #[serde(default)]
    pub colors: ColorConfig,
    /// Keyboard and gamepad bindings
    #[serde(default)]
    pub bindings: MenuBindings,
}

/// Overlay geometry, in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Distance from the top-left corner of the window (default: 64)
    #[serde(default = "default_origin")]
    pub origin: u32,
    /// Menu width (default: 400)
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height of the header and of each row (default: 24)
    #[serde(default = "default_line_height")]
    pub line_height: u32,
    /// Font size (default: 12)
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

/// Overlay colors in 0xRRGGBBAA format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_header_color")]
    pub header: u32,
    #[serde(default = "default_background_color")]
    pub background: u32,
    #[serde(default = "default_selected_color")]
    pub selected: u32,
    #[serde(default = "default_text_color")]
    pub text: u32,
    #[serde(default = "default_white")]
    pub header_text: u32,
    #[serde(default = "default_white")]
    pub selected_text: u32,
}

fn default_origin() -> u32 {
    64
}
fn default_width() -> u32 {
    400
}
fn default_line_height() -> u32 {
    24
}
fn default_font_size() -> u32 {
    12
}

fn default_header_color() -> u32 {
    0x330000E6
}
fn default_background_color() -> u32 {
    0x1A1A1AE6
}
fn default_selected_color() -> u32 {
    0xFFFFFF1A
}
fn default_text_color() -> u32 {
    0xCCCCCCFF
}
fn default_white() -> u32 {
    0xFFFFFFFF
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            width: default_width(),
            line_height: default_line_height(),
            font_size: default_font_size(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            header: default_header_color(),
            background: default_background_color(),
            selected: default_selected_color(),
            text: default_text_color(),
            header_text: default_white(),
            selected_text: default_white(),
        }
    }
}

impl LayoutConfig {
    /// Total height of the overlay for `rows` rows plus the header
    ///
    /// Saturates at `u32::MAX` instead of wrapping.
    pub fn menu_height(&self, rows: usize) -> u32 {
        let lines = u32::try_from(rows).unwrap_or(u32::MAX).saturating_add(1);
        self.line_height.saturating_mul(lines)
    }
}

/// Returns the platform-specific configuration directory.
///
/// Shares the console's directory so all settings live together.
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.nethercore", "", "Nethercore")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Load the configuration from a specific file
pub fn load_from(path: &Path) -> Result<MenuConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: MenuConfig = toml::from_str(&content)?;

    for warning in config.bindings.validate() {
        tracing::warn!("debug menu: config {}", warning);
    }
    Ok(config)
}

/// Load the configuration from the platform config directory.
///
/// Returns defaults if the file doesn't exist or cannot be parsed; parse
/// problems are logged.
pub fn load() -> MenuConfig {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return MenuConfig::default();
    };
    if !path.exists() {
        return MenuConfig::default();
    }
    match load_from(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("debug menu: {}, using default config", e);
            MenuConfig::default()
        }
    }
}

/// Write the configuration to a specific file, creating parent directories
pub fn save_to(path: &Path, config: &MenuConfig) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    // Serialize before touching the filesystem
    let content = toml::to_string_pretty(config)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, content).map_err(io_error)?;
    Ok(())
}

/// Write the configuration to the platform config directory
pub fn save(config: &MenuConfig) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    save_to(&dir.join(CONFIG_FILE), config)
}
