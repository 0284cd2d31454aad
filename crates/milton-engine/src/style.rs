//! Style state and the pure text renderer.
//!
//! [`StyleState`] is the single mutable settings object, owned by the
//! top-level controller and passed explicitly to render calls. [`render`]
//! composes the sizing, weight, and wrap strategies into one computed
//! [`RenderedText`] with no side effects.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Rgb;
use crate::config::VariantConfig;
use crate::settings::{
    SettingsStore, KEY_BACKGROUND_COLOR, KEY_FONT_SIZE, KEY_TEXT, KEY_TEXT_COLOR,
    KEY_THEME_INDEX, KEY_THEME_KIND, KEY_THICKNESS,
};
use crate::theme::{ThemeKind, ThemeSelection};
use crate::weight::{clamp_thickness, Glow};
use crate::wrap::WrapLayout;

/// Placeholder shown (and measured) when the input is empty.
pub const PLACEHOLDER_TEXT: &str = "Start typing to see your text here";

/// Default thickness of the control.
pub const DEFAULT_THICKNESS: f32 = 0.5;
/// Default text color (#1f2937).
pub const DEFAULT_TEXT_COLOR: Rgb = Rgb::new(0x1f, 0x29, 0x37);
/// Default page background (#ffffff).
pub const DEFAULT_BACKGROUND_COLOR: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// The current display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    /// Raw input text; the display falls back to [`PLACEHOLDER_TEXT`] when
    /// this is empty.
    pub text: String,

    /// Thickness scalar, kept within [0, 5].
    pub thickness: f32,

    pub text_color: Rgb,

    pub background_color: Rgb,

    /// The active theme, if one was picked.
    pub theme: Option<ThemeSelection>,

    /// Manual size override from the legacy font-size slider.
    pub font_size_override: Option<u16>,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            text: String::new(),
            thickness: DEFAULT_THICKNESS,
            text_color: DEFAULT_TEXT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            theme: None,
            font_size_override: None,
        }
    }
}

impl StyleState {
    /// Text the display should show: the input, or the placeholder when
    /// the input is empty.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            PLACEHOLDER_TEXT
        } else {
            &self.text
        }
    }

    /// Apply a theme: set both colors and record the selection.
    pub fn apply_theme(&mut self, selection: ThemeSelection) {
        let theme = selection.theme();
        self.text_color = theme.text;
        self.background_color = theme.background;
        self.theme = Some(selection);
    }

    /// Rebuild the state from the settings store, coalescing absent or
    /// malformed entries to the built-in defaults.
    pub fn load(store: &SettingsStore, config: &VariantConfig) -> Self {
        let mut state = Self {
            text: store.get(KEY_TEXT).unwrap_or_default().to_string(),
            thickness: clamp_thickness(store.get_f32_or(KEY_THICKNESS, DEFAULT_THICKNESS)),
            text_color: store.get_color_or(KEY_TEXT_COLOR, DEFAULT_TEXT_COLOR),
            background_color: store.get_color_or(KEY_BACKGROUND_COLOR, DEFAULT_BACKGROUND_COLOR),
            theme: load_theme(store),
            font_size_override: None,
        };
        if config.legacy_font_size_slider {
            state.font_size_override = store.get_parsed(KEY_FONT_SIZE);
        }
        state
    }

    /// Write every field through to the store. Interactive edits persist
    /// entry-by-entry instead; this is for one-shot callers.
    pub fn save(&self, store: &mut SettingsStore) -> Result<(), crate::settings::SettingsError> {
        store.set(KEY_TEXT, self.text.clone())?;
        store.set(KEY_THICKNESS, self.thickness.to_string())?;
        store.set(KEY_TEXT_COLOR, self.text_color.hex())?;
        store.set(KEY_BACKGROUND_COLOR, self.background_color.hex())?;
        match self.theme {
            Some(selection) => {
                store.set(KEY_THEME_INDEX, selection.index.to_string())?;
                store.set(KEY_THEME_KIND, selection.kind.as_str())?;
            }
            None => {
                store.remove(KEY_THEME_INDEX)?;
                store.remove(KEY_THEME_KIND)?;
            }
        }
        match self.font_size_override {
            Some(px) => store.set(KEY_FONT_SIZE, px.to_string())?,
            None => store.remove(KEY_FONT_SIZE)?,
        }
        Ok(())
    }
}

/// Load the persisted theme selection, dropping anything out of range.
fn load_theme(store: &SettingsStore) -> Option<ThemeSelection> {
    let index: usize = store.get_parsed(KEY_THEME_INDEX)?;
    let kind = match store.get(KEY_THEME_KIND) {
        // Early variants persisted only the index, always into the album set.
        None => ThemeKind::Album,
        Some(raw) => match ThemeKind::parse(raw) {
            Some(kind) => kind,
            None => {
                warn!(value = %raw, "unknown stored theme kind, ignoring theme");
                return None;
            }
        },
    };

    let selection = ThemeSelection { kind, index };
    if selection.in_range() {
        Some(selection)
    } else {
        warn!(index, "stored theme index out of range, ignoring theme");
        None
    }
}

/// Fully computed style for one render of the display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedText {
    pub font_size_px: u16,
    /// CSS-style weight within [100, 900].
    pub weight: u16,
    pub glow: Option<Glow>,
    pub text_color: Rgb,
    pub background_color: Rgb,
    pub layout: WrapLayout,
}

/// Compute the full display style for the current state.
pub fn render(state: &StyleState, config: &VariantConfig) -> RenderedText {
    let text = state.display_text();
    let len = text.chars().count();

    let font_size_px = match state.font_size_override {
        Some(px) if config.legacy_font_size_slider => px,
        _ => config.size_policy.size_for_len(len),
    };

    let text_weight = config.weight_policy.weight_for(state.thickness);

    RenderedText {
        font_size_px,
        weight: text_weight.weight,
        glow: text_weight.glow,
        text_color: state.text_color,
        background_color: state.background_color,
        layout: config.wrap_policy.wrap(text),
    }
}
