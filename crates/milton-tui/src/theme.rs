//! Chrome palette for the TUI frame.
//!
//! These colors style the surrounding chrome (borders, status bar, hints);
//! the display pane itself uses the content [`milton_engine::Theme`] colors.

use ratatui::style::Color;

/// Fixed chrome palette (Catppuccin Mocha derived).
#[derive(Debug, Clone)]
pub struct Chrome {
    pub base: Color,
    pub surface: Color,

    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    pub primary: Color,
    pub warning: Color,

    pub border: Color,
    pub border_focused: Color,
}

impl Default for Chrome {
    fn default() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)
            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)

            border: Color::Rgb(69, 71, 90),     // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe (lavender)
        }
    }
}

/// Convert an engine color to a terminal color.
pub fn to_term(color: milton_engine::Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_default() {
        let chrome = Chrome::default();
        assert!(matches!(chrome.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_to_term() {
        let color = to_term(milton_engine::Rgb::new(0x8a, 0xce, 0x00));
        assert!(matches!(color, Color::Rgb(0x8a, 0xce, 0x00)));
    }
}
