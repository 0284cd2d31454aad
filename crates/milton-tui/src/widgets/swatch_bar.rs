//! Theme swatch strip.
//!
//! One clickable-by-keyboard swatch per catalog entry, selected with the
//! function keys. The dual variant appends the basic pair after the album
//! swatches.

use milton_engine::{ThemeSelection, ThemeSet, ALBUM_THEMES, BASIC_THEMES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{to_term, Chrome};

/// The selectable swatches for a theme set, in function-key order.
pub fn swatch_list(theme_set: ThemeSet) -> Vec<ThemeSelection> {
    let mut swatches: Vec<ThemeSelection> = (0..ALBUM_THEMES.len())
        .map(ThemeSelection::album)
        .collect();
    if theme_set == ThemeSet::Dual {
        swatches.extend((0..BASIC_THEMES.len()).map(ThemeSelection::basic));
    }
    swatches
}

/// The swatch strip widget.
pub struct SwatchBar<'a> {
    theme_set: ThemeSet,
    active: Option<ThemeSelection>,
    chrome: &'a Chrome,
}

impl<'a> SwatchBar<'a> {
    /// Create a new swatch bar.
    pub fn new(theme_set: ThemeSet, active: Option<ThemeSelection>, chrome: &'a Chrome) -> Self {
        Self {
            theme_set,
            active,
            chrome,
        }
    }
}

impl Widget for SwatchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, selection) in swatch_list(self.theme_set).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }

            let theme = selection.theme();
            let is_active = self.active == Some(selection);

            spans.push(Span::styled(
                format!("[F{}] ", i + 1),
                Style::default().fg(self.chrome.muted),
            ));
            spans.push(Span::styled(
                "██",
                Style::default().fg(to_term(theme.background)),
            ));
            let name_style = if is_active {
                Style::default().fg(self.chrome.primary)
            } else {
                Style::default().fg(self.chrome.subtext)
            };
            let marker = if is_active { "●" } else { " " };
            spans.push(Span::styled(format!(" {}{marker}", theme.name), name_style));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.chrome.surface))
            .render(area, buf);
    }
}
