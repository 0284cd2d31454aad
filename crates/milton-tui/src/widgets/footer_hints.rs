//! Footer hint bar.
//!
//! Left side names the active variant (`compact │ continuous │ wrap off`);
//! right side lists key hints as `[key] action`.

use milton_engine::{SizePolicy, VariantConfig, WeightPolicy, WrapPolicy};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Chrome;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Ctrl+R").
    pub key: String,
    /// The action description (e.g., "reset").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Hints for the current variant.
pub fn hints_for_variant(config: &VariantConfig) -> Vec<KeyHint> {
    let mut hints = vec![
        KeyHint::new("Ctrl+↑/↓", "thickness"),
        KeyHint::new("F1-F8", "theme"),
        KeyHint::new("Ctrl+O", "color"),
        KeyHint::new("Ctrl+R", "reset"),
    ];
    if config.legacy_font_size_slider {
        hints.insert(1, KeyHint::new("Ctrl+←/→", "size"));
    }
    hints.push(KeyHint::new("Ctrl+H", "help"));
    hints.push(KeyHint::new("Esc", "quit"));
    hints
}

/// Short label for the variant summary on the left.
fn variant_summary(config: &VariantConfig) -> String {
    let size = match config.size_policy {
        SizePolicy::Compact => "compact",
        SizePolicy::Expanded => "expanded",
    };
    let weight = match config.weight_policy {
        WeightPolicy::Continuous => "continuous",
        WeightPolicy::Discrete => "discrete",
    };
    let wrap = match config.wrap_policy {
        WrapPolicy::Off => "wrap off",
        WrapPolicy::Chars => "wrap chars",
        WrapPolicy::Words => "wrap words",
    };
    format!("{size} │ {weight} │ {wrap}")
}

/// Footer hint bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    config: &'a VariantConfig,
    chrome: &'a Chrome,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer.
    pub fn new(hints: &'a [KeyHint], config: &'a VariantConfig, chrome: &'a Chrome) -> Self {
        Self {
            hints,
            config,
            chrome,
        }
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = vec![Span::styled(
            variant_summary(self.config),
            Style::default().fg(self.chrome.subtext),
        )];

        let mut right_spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.chrome.muted)));
            }
            right_spans.push(Span::styled("[", Style::default().fg(self.chrome.muted)));
            right_spans.push(Span::styled(
                hint.key.clone(),
                Style::default().fg(self.chrome.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.chrome.muted)));
            right_spans.push(Span::styled(
                hint.action.clone(),
                Style::default().fg(self.chrome.subtext),
            ));
        }

        // Pad between the two halves so the hints sit right-aligned.
        let left_width: usize = left_spans.iter().map(|s| s.content.width()).sum();
        let right_width: usize = right_spans.iter().map(|s| s.content.width()).sum();
        let padding = usize::from(area.width).saturating_sub(left_width + right_width);
        if padding > 0 {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }
        left_spans.extend(right_spans);

        Paragraph::new(Line::from(left_spans))
            .style(Style::default().bg(self.chrome.surface))
            .render(area, buf);
    }
}
