//! Display pane for the rendered text.
//!
//! A terminal cannot scale glyphs, so pixel values map to cells at a fixed
//! scale for paddings while the exact size/weight/glow numbers are read out
//! by the status bar. Weight at or above 600 falls back to bold rendering.

use milton_engine::{RenderedText, WrapAlign, WrapFragment, WrapLayout};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::{to_term, Chrome};

/// Pixels per terminal cell when mapping paddings to columns.
const PX_PER_CELL: u16 = 10;

/// Weight at which the terminal falls back to bold rendering.
const BOLD_WEIGHT: u16 = 600;

/// The display pane widget.
pub struct Preview<'a> {
    rendered: &'a RenderedText,
    chrome: &'a Chrome,
}

impl<'a> Preview<'a> {
    /// Create a new preview for a computed render.
    pub fn new(rendered: &'a RenderedText, chrome: &'a Chrome) -> Self {
        Self { rendered, chrome }
    }

    fn text_style(&self) -> Style {
        let mut style = Style::default().fg(to_term(self.rendered.text_color));
        if self.rendered.weight >= BOLD_WEIGHT {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Build the display lines for a pane of `width` columns.
    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let style = self.text_style();

        match &self.rendered.layout {
            WrapLayout::Unwrapped(text) => {
                // Presentation-only wrapping so long unwrapped variants
                // still fit the pane; break positions here are not part of
                // the layout contract.
                textwrap::wrap(text, width.max(1))
                    .into_iter()
                    .map(|cow| {
                        Line::styled(cow.into_owned(), style).alignment(Alignment::Center)
                    })
                    .collect()
            }
            WrapLayout::Fragments(fragments) => {
                group_lines(fragments)
                    .into_iter()
                    .map(|(text, align, right_pad_px)| {
                        let pad_cells = usize::from(right_pad_px / PX_PER_CELL);
                        let padded = format!("{text}{}", " ".repeat(pad_cells));
                        Line::styled(padded, style).alignment(align)
                    })
                    .collect()
            }
        }
    }
}

/// Collapse fragments into display lines: joined text, alignment from the
/// line-opening fragment, and its right padding.
fn group_lines(fragments: &[WrapFragment]) -> Vec<(String, Alignment, u16)> {
    let mut lines = Vec::new();
    let mut current: Option<(String, Alignment, u16)> = None;

    for fragment in fragments {
        if fragment.starts_line || current.is_none() {
            if let Some(line) = current.take() {
                lines.push(line);
            }
            let align = match fragment.align {
                WrapAlign::Center => Alignment::Center,
                WrapAlign::Right => Alignment::Right,
                WrapAlign::Inline => Alignment::Left,
            };
            current = Some((fragment.text.clone(), align, fragment.right_pad_px));
        } else if let Some((text, _, _)) = current.as_mut() {
            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
            }
            text.push_str(&fragment.text);
        }
    }

    if let Some(line) = current {
        lines.push(line);
    }
    lines
}

impl Widget for Preview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let background = Style::default().bg(to_term(self.rendered.background_color));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.chrome.border))
            .style(background);

        let inner = block.inner(area);
        let mut lines = self.build_lines(usize::from(inner.width));

        // Center the content vertically in the pane.
        let content_height = lines.len();
        let pad_top = usize::from(inner.height).saturating_sub(content_height) / 2;
        let mut padded = vec![Line::raw(""); pad_top];
        padded.append(&mut lines);

        Paragraph::new(padded).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use milton_engine::{render, StyleState, VariantConfig, WrapPolicy};
    use ratatui::buffer::Buffer;

    fn render_to_buffer(rendered: &RenderedText, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let chrome = Chrome::default();
        Preview::new(rendered, &chrome).render(area, &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_preview_shows_text() {
        let state = StyleState {
            text: "hello".to_string(),
            ..StyleState::default()
        };
        let rendered = render(&state, &VariantConfig::default());
        let buf = render_to_buffer(&rendered, 40, 8);
        assert!(buffer_text(&buf).contains("hello"));
    }

    #[test]
    fn test_preview_shows_placeholder_when_empty() {
        let rendered = render(&StyleState::default(), &VariantConfig::default());
        let buf = render_to_buffer(&rendered, 60, 8);
        assert!(buffer_text(&buf).contains("Start typing"));
    }

    #[test]
    fn test_group_lines_char_variant() {
        let layout = WrapPolicy::Chars.wrap(&"a".repeat(45));
        let lines = group_lines(layout.fragments());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].1, Alignment::Center);
        assert_eq!(lines[1].1, Alignment::Right);
        assert_eq!(lines[1].2, 50);
        assert_eq!(lines[2].2, 40);
    }

    #[test]
    fn test_group_lines_word_variant_joins_runs() {
        let layout = WrapPolicy::Words.wrap("aaaaaaaaaaaaaaaaaa bbbbbbbbbb foo bar");
        let lines = group_lines(layout.fragments());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, Alignment::Left);
        assert_eq!(lines[1].1, Alignment::Right);
        assert!(lines[1].0.starts_with("bbbbbbbbbb"));
        assert!(lines[1].0.contains("foo bar"));
    }
}
