//! Error types for the debug menu
//!
//! Nothing here is fatal to the host. Item construction failures are recorded
//! and skipped; configuration failures fall back to defaults at the call site.

use std::path::PathBuf;

/// An item factory could not produce its item
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ItemInitError(pub String);

impl ItemInitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A listed item that failed to instantiate during registry build
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to create menu item {item} at '{path}': {reason}")]
pub struct DiscoveryFailure {
    /// Type name of the item
    pub item: &'static str,
    /// Folder path it was declared under
    pub path: String,
    /// Underlying factory error
    pub reason: ItemInitError,
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid menu config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize menu config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}
