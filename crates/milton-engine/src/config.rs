//! Variant configuration for the display.
//!
//! The observed widget variants differ only in which strategy fills each
//! slot, so the configuration is one enum per pluggable stage rather than
//! a fixed pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::sizing::SizePolicy;
use crate::weight::WeightPolicy;
use crate::wrap::WrapPolicy;

/// Which theme chrome a variant exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeSet {
    /// Album swatches only; reset clears everything.
    #[default]
    Album,
    /// Album swatches plus the basic pair wired to the reset toggle.
    Dual,
}

/// Error type for config load/save.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(serde_json::Error),

    #[error("serialize error: {0}")]
    Serialize(serde_json::Error),
}

/// Strategy selection for one display variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VariantConfig {
    /// Font-size-from-length table.
    #[serde(default)]
    pub size_policy: SizePolicy,

    /// Weight-from-thickness mapping.
    #[serde(default)]
    pub weight_policy: WeightPolicy,

    /// Long-text layout transform.
    #[serde(default)]
    pub wrap_policy: WrapPolicy,

    /// Theme chrome and reset behavior.
    #[serde(default)]
    pub theme_set: ThemeSet,

    /// Expose the manual font-size slider (early variant only).
    #[serde(default)]
    pub legacy_font_size_slider: bool,
}

impl VariantConfig {
    /// Load configuration from a file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}
