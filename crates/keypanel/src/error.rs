//! Error types for keypanel.

use keypanel_core::CanvasError;
use thiserror::Error;

/// Errors surfaced by the key panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A style replacement was missing or a config value was unusable. The
    /// previous style stays active.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The drawing surface failed mid-pass; remaining keys were not painted.
    #[error("surface error: {0}")]
    Surface(#[from] CanvasError),

    /// A TOML panel config could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A config file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
