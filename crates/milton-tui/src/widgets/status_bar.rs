//! Status bar readout for the computed style.
//!
//! Format: `● 40px │ w450 │ thickness 0.5 │ #1f2937 on #ffffff │ lime`
//!
//! The terminal cannot scale glyphs or draw glows, so the exact pixel
//! values live here instead of in the preview pane.

use milton_engine::{RenderedText, StyleState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Chrome;

/// The status bar widget.
pub struct StatusBar<'a> {
    rendered: &'a RenderedText,
    state: &'a StyleState,
    chrome: &'a Chrome,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar.
    pub fn new(rendered: &'a RenderedText, state: &'a StyleState, chrome: &'a Chrome) -> Self {
        Self {
            rendered,
            state,
            chrome,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sep = || Span::styled(" │ ", Style::default().fg(self.chrome.muted));

        let mut spans = vec![
            Span::styled("● ", Style::default().fg(self.chrome.primary)),
            Span::styled(
                format!("{}px", self.rendered.font_size_px),
                Style::default().fg(self.chrome.text),
            ),
            sep(),
            Span::styled(
                format!("w{}", self.rendered.weight),
                Style::default().fg(self.chrome.text),
            ),
            sep(),
            Span::styled(
                format!("thickness {:.1}", self.state.thickness),
                Style::default().fg(self.chrome.subtext),
            ),
        ];

        if let Some(glow) = self.rendered.glow {
            spans.push(sep());
            spans.push(Span::styled(
                format!("glow {:.2}/{:.2}px", glow.blur_px, glow.spread_px),
                Style::default().fg(self.chrome.warning),
            ));
        }

        spans.push(sep());
        spans.push(Span::styled(
            format!(
                "{} on {}",
                self.rendered.text_color.hex(),
                self.rendered.background_color.hex()
            ),
            Style::default().fg(self.chrome.subtext),
        ));

        if let Some(selection) = self.state.theme {
            spans.push(sep());
            spans.push(Span::styled(
                selection.theme().name,
                Style::default().fg(self.chrome.primary),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.chrome.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milton_engine::{render, ThemeSelection, VariantConfig};

    fn bar_text(state: &StyleState) -> String {
        let rendered = render(state, &VariantConfig::default());
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        let chrome = Chrome::default();
        StatusBar::new(&rendered, state, &chrome).render(area, &mut buf);

        let mut text = String::new();
        for x in 0..area.width {
            text.push_str(buf.cell((x, 0)).unwrap().symbol());
        }
        text
    }

    #[test]
    fn test_status_readouts() {
        let state = StyleState {
            text: "hi".to_string(),
            ..StyleState::default()
        };
        let text = bar_text(&state);
        assert!(text.contains("60px"));
        assert!(text.contains("w450"));
        assert!(text.contains("thickness 0.5"));
        assert!(text.contains("#1f2937 on #ffffff"));
    }

    #[test]
    fn test_status_shows_glow_past_onset() {
        let state = StyleState {
            text: "hi".to_string(),
            thickness: 4.5,
            ..StyleState::default()
        };
        let text = bar_text(&state);
        assert!(text.contains("glow 0.40/1.00px"));
    }

    #[test]
    fn test_status_shows_theme_name() {
        let mut state = StyleState::default();
        state.apply_theme(ThemeSelection::album(2));
        assert!(bar_text(&state).contains("noir"));
    }
}
