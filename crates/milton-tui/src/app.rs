//! Application state and update logic for the milton TUI.
//!
//! [`App`] owns the style state, the settings store, and the variant
//! configuration; every handler mutates state through it and writes the
//! touched setting through to the store, so a reload reproduces the same
//! rendered style.

use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use milton_engine::{
    render, settings, RenderedText, Rgb, SettingsStore, StyleState, ThemeKind, ThemeSelection,
    ThemeSet, VariantConfig, BASIC_BLACK_ON_WHITE, BASIC_WHITE_ON_BLACK, THICKNESS_MAX,
    THICKNESS_MIN,
};

use crate::event::Action;
use crate::widgets::{swatch_list, InputState};

/// Ticks a notification stays visible (4 Hz tick rate).
const NOTIFICATION_TICKS: usize = 12;

/// Thickness slider step.
const THICKNESS_STEP: f32 = 0.1;

/// Legacy font-size slider step, in px.
const FONT_SIZE_STEP: u16 = 5;

/// Colors the picker cycles through.
const COLOR_CHOICES: &[Rgb] = &[
    Rgb::new(0x1f, 0x29, 0x37), // default slate
    Rgb::new(0x00, 0x00, 0x00),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0xdc, 0x26, 0x26),
    Rgb::new(0x16, 0xa3, 0x4a),
    Rgb::new(0x25, 0x63, 0xeb),
    Rgb::new(0xd9, 0x46, 0xef),
    Rgb::new(0xea, 0x58, 0x0c),
];

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// The current display settings.
    pub style: StyleState,

    /// Active variant configuration.
    pub config: VariantConfig,

    /// Input bar state; its content is the display text.
    pub input: InputState,

    /// Notification message (displayed temporarily).
    pub notification: Option<String>,

    /// Ticks remaining until the notification is cleared.
    notification_ttl: usize,

    /// Tick counter.
    pub tick: usize,

    /// Position in [`COLOR_CHOICES`] for the color picker.
    color_cursor: usize,

    store: SettingsStore,
}

impl App {
    /// Load the app from `base_dir` (settings store plus `config.json`).
    pub fn new(base_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let config = VariantConfig::load(&base_dir.join("config.json"))?;
        let store = SettingsStore::open(base_dir)?;
        let style = StyleState::load(&store, &config);
        let input = InputState::with_content(style.text.clone());

        Ok(Self {
            should_quit: false,
            show_help: false,
            style,
            config,
            input,
            notification: None,
            notification_ttl: 0,
            tick: 0,
            color_cursor: 0,
            store,
        })
    }

    /// Compute the current display style.
    pub fn rendered(&self) -> RenderedText {
        render(&self.style, &self.config)
    }

    /// Handle a key as text input. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            // Single-line input: Enter is swallowed, never submitted.
            KeyCode::Enter => return true,
            _ => return false,
        }

        self.sync_text();
        true
    }

    /// Handle a control action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                // Close help first, like any overlay.
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::Help => self.show_help = !self.show_help,
            Action::Reset => match self.config.theme_set {
                ThemeSet::Album => self.reset_all(),
                ThemeSet::Dual => self.reset_toggle(),
            },
            Action::ThicknessUp => self.step_thickness(THICKNESS_STEP),
            Action::ThicknessDown => self.step_thickness(-THICKNESS_STEP),
            Action::FontSizeUp => self.step_font_size(true),
            Action::FontSizeDown => self.step_font_size(false),
            Action::CycleColor => self.cycle_color(),
            Action::SelectSwatch(index) => self.select_swatch(index),
            Action::None => {}
        }
    }

    /// Advance the tick counter and expire notifications.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    fn sync_text(&mut self) {
        self.style.text = self.input.content().to_string();
        self.persist(settings::KEY_TEXT, self.style.text.clone());
    }

    fn step_thickness(&mut self, delta: f32) {
        // Snap to one decimal so repeated steps never drift.
        let stepped = ((self.style.thickness + delta) * 10.0).round() / 10.0;
        self.style.thickness = stepped.clamp(THICKNESS_MIN, THICKNESS_MAX);
        self.persist(settings::KEY_THICKNESS, self.style.thickness.to_string());
    }

    fn step_font_size(&mut self, up: bool) {
        if !self.config.legacy_font_size_slider {
            return;
        }
        let current = self
            .style
            .font_size_override
            .unwrap_or_else(|| self.rendered().font_size_px);
        let next = if up {
            current.saturating_add(FONT_SIZE_STEP)
        } else {
            current.saturating_sub(FONT_SIZE_STEP)
        };
        self.style.font_size_override = Some(next);
        self.persist(settings::KEY_FONT_SIZE, next.to_string());
    }

    fn cycle_color(&mut self) {
        self.color_cursor = (self.color_cursor + 1) % COLOR_CHOICES.len();
        let color = COLOR_CHOICES[self.color_cursor];
        // Picking a color recolors the text but leaves the recorded theme
        // selection in place.
        self.style.text_color = color;
        self.persist(settings::KEY_TEXT_COLOR, color.hex());
    }

    fn select_swatch(&mut self, index: usize) {
        let Some(selection) = swatch_list(self.config.theme_set).get(index).copied() else {
            return;
        };
        self.select_theme(selection);
    }

    /// Apply a theme and persist colors plus the selection.
    fn select_theme(&mut self, selection: ThemeSelection) {
        self.style.apply_theme(selection);
        self.persist(settings::KEY_TEXT_COLOR, self.style.text_color.hex());
        self.persist(
            settings::KEY_BACKGROUND_COLOR,
            self.style.background_color.hex(),
        );
        self.persist(settings::KEY_THEME_INDEX, selection.index.to_string());
        self.persist(settings::KEY_THEME_KIND, selection.kind.as_str().to_string());
    }

    /// Album-variant reset: clear every persisted key and restore defaults.
    fn reset_all(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear settings");
            self.notify("Failed to clear settings");
            return;
        }
        self.style = StyleState::default();
        self.input.clear();
        self.color_cursor = 0;
        self.notify("Settings reset");
    }

    /// Dual-variant reset: toggle the basic pair instead of clearing. Text
    /// is cleared only when the toggle lands on black-on-white; from an
    /// album theme the first press switches to white-on-black untouched.
    fn reset_toggle(&mut self) {
        let next = match self.style.theme {
            Some(selection) if selection.kind == ThemeKind::Basic => {
                if selection.index == BASIC_WHITE_ON_BLACK {
                    BASIC_BLACK_ON_WHITE
                } else {
                    BASIC_WHITE_ON_BLACK
                }
            }
            _ => BASIC_WHITE_ON_BLACK,
        };

        self.select_theme(ThemeSelection::basic(next));

        if next == BASIC_BLACK_ON_WHITE {
            self.input.clear();
            self.style.text.clear();
            self.persist(settings::KEY_TEXT, String::new());
        }
    }

    fn persist(&mut self, key: &str, value: String) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "failed to persist setting");
            self.notify("Failed to save settings");
        }
    }

    fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
        self.notification_ttl = NOTIFICATION_TICKS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milton_engine::ALBUM_THEMES;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        let app = App::new(temp.path()).unwrap();
        (temp, app)
    }

    fn test_app_with_config(config: VariantConfig) -> (TempDir, App) {
        let temp = TempDir::new().unwrap();
        config.save(&temp.path().join("config.json")).unwrap();
        let app = App::new(temp.path()).unwrap();
        (temp, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_updates_style_and_persists() {
        let (temp, mut app) = test_app();
        for c in "milton".chars() {
            assert!(app.handle_key(key(KeyCode::Char(c))));
        }
        assert_eq!(app.style.text, "milton");

        // A fresh app from the same directory sees the same text.
        let reloaded = App::new(temp.path()).unwrap();
        assert_eq!(reloaded.style.text, "milton");
    }

    #[test]
    fn test_enter_is_swallowed() {
        let (_temp, mut app) = test_app();
        assert!(app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.style.text, "");
    }

    #[test]
    fn test_thickness_steps_and_clamps() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::ThicknessUp);
        assert!((app.style.thickness - 0.6).abs() < 1e-6);

        for _ in 0..100 {
            app.handle_action(Action::ThicknessUp);
        }
        assert!((app.style.thickness - 5.0).abs() < 1e-6);

        for _ in 0..100 {
            app.handle_action(Action::ThicknessDown);
        }
        assert!(app.style.thickness.abs() < 1e-6);
    }

    #[test]
    fn test_select_swatch_applies_theme() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::SelectSwatch(1));
        assert_eq!(app.style.theme, Some(ThemeSelection::album(1)));
        assert_eq!(app.style.text_color, ALBUM_THEMES[1].text);
        assert_eq!(app.style.background_color, ALBUM_THEMES[1].background);
    }

    #[test]
    fn test_select_swatch_out_of_range_ignored() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::SelectSwatch(99));
        assert_eq!(app.style.theme, None);
    }

    #[test]
    fn test_theme_roundtrip_through_store() {
        let (temp, mut app) = test_app();
        app.handle_action(Action::SelectSwatch(2));

        let reloaded = App::new(temp.path()).unwrap();
        assert_eq!(reloaded.style.theme, Some(ThemeSelection::album(2)));
        assert_eq!(reloaded.rendered(), app.rendered());
    }

    #[test]
    fn test_cycle_color_keeps_theme_selection() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::SelectSwatch(0));
        app.handle_action(Action::CycleColor);
        assert_eq!(app.style.theme, Some(ThemeSelection::album(0)));
        assert_ne!(app.style.text_color, ALBUM_THEMES[0].text);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (temp, mut app) = test_app();
        for c in "abc".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_action(Action::ThicknessUp);
        app.handle_action(Action::SelectSwatch(3));

        app.handle_action(Action::Reset);
        assert_eq!(app.style, StyleState::default());
        assert!(app.input.is_empty());

        let reloaded = App::new(temp.path()).unwrap();
        assert_eq!(reloaded.style, StyleState::default());
    }

    #[test]
    fn test_reset_from_defaults_matches_fresh_load() {
        let (temp, mut app) = test_app();
        app.handle_action(Action::Reset);

        let fresh = App::new(temp.path()).unwrap();
        assert_eq!(app.rendered(), fresh.rendered());
        assert_eq!(app.style, fresh.style);
    }

    #[test]
    fn test_dual_reset_from_album_goes_white_on_black() {
        let config = VariantConfig {
            theme_set: ThemeSet::Dual,
            ..VariantConfig::default()
        };
        let (_temp, mut app) = test_app_with_config(config);
        for c in "keep me".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_action(Action::SelectSwatch(1));

        app.handle_action(Action::Reset);
        assert_eq!(
            app.style.theme,
            Some(ThemeSelection::basic(BASIC_WHITE_ON_BLACK))
        );
        // First toggle never clears the text.
        assert_eq!(app.style.text, "keep me");
    }

    #[test]
    fn test_dual_reset_toggle_clears_on_black_on_white() {
        let config = VariantConfig {
            theme_set: ThemeSet::Dual,
            ..VariantConfig::default()
        };
        let (_temp, mut app) = test_app_with_config(config);
        for c in "gone".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        app.handle_action(Action::Reset); // -> white-on-black, text kept
        assert_eq!(app.style.text, "gone");

        app.handle_action(Action::Reset); // -> black-on-white, text cleared
        assert_eq!(
            app.style.theme,
            Some(ThemeSelection::basic(BASIC_BLACK_ON_WHITE))
        );
        assert_eq!(app.style.text, "");

        app.handle_action(Action::Reset); // -> white-on-black again
        assert_eq!(
            app.style.theme,
            Some(ThemeSelection::basic(BASIC_WHITE_ON_BLACK))
        );
    }

    #[test]
    fn test_font_size_slider_only_in_legacy_variant() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::FontSizeUp);
        assert_eq!(app.style.font_size_override, None);

        let config = VariantConfig {
            legacy_font_size_slider: true,
            ..VariantConfig::default()
        };
        let (_temp2, mut legacy) = test_app_with_config(config);
        let auto = legacy.rendered().font_size_px;
        legacy.handle_action(Action::FontSizeUp);
        assert_eq!(legacy.style.font_size_override, Some(auto + 5));
        assert_eq!(legacy.rendered().font_size_px, auto + 5);
    }

    #[test]
    fn test_help_closes_before_quit() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_notification_expires() {
        let (_temp, mut app) = test_app();
        app.handle_action(Action::Reset);
        assert!(app.notification.is_some());

        for _ in 0..NOTIFICATION_TICKS {
            app.tick();
        }
        assert!(app.notification.is_none());
    }
}
