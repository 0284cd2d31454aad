//! milton-engine: Headless formatting engine for the milton text display
//!
//! This crate provides the core rendering logic for milton, including:
//! - Auto-sizing from text length and weight from the thickness control
//! - The multi-line wrap transforms behind the "generator" look
//! - Theme catalogs and selection
//! - Settings persistence and variant configuration

pub mod color;
pub mod config;
pub mod settings;
pub mod sizing;
pub mod style;
pub mod theme;
pub mod weight;
pub mod wrap;

// Re-export commonly used types
pub use color::{ColorError, Rgb};
pub use config::{ConfigError, ThemeSet, VariantConfig};
pub use settings::{SettingsError, SettingsStore};
pub use sizing::SizePolicy;
pub use style::{
    render, RenderedText, StyleState, DEFAULT_BACKGROUND_COLOR, DEFAULT_TEXT_COLOR,
    DEFAULT_THICKNESS, PLACEHOLDER_TEXT,
};
pub use theme::{
    Theme, ThemeKind, ThemeSelection, ALBUM_THEMES, BASIC_BLACK_ON_WHITE, BASIC_THEMES,
    BASIC_WHITE_ON_BLACK,
};
pub use weight::{clamp_thickness, Glow, TextWeight, WeightPolicy, THICKNESS_MAX, THICKNESS_MIN};
pub use wrap::{WrapAlign, WrapFragment, WrapLayout, WrapPolicy};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
