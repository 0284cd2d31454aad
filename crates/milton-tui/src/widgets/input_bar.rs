//! Single-line input bar.
//!
//! Always visible at the bottom of the screen. The bar's content *is* the
//! display text; every edit re-renders the preview above it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::Chrome;

/// Content and cursor for the input bar.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    content: String,
    /// Cursor position as a character index.
    cursor: usize,
}

impl InputState {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input pre-filled with persisted text, cursor at the end.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// The current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clear content and cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Byte offset of a character index.
    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

/// The input bar widget.
pub struct InputBar<'a> {
    input: &'a InputState,
    chrome: &'a Chrome,
    placeholder: Option<&'a str>,
}

impl<'a> InputBar<'a> {
    /// Create a new input bar.
    pub fn new(input: &'a InputState, chrome: &'a Chrome) -> Self {
        Self {
            input,
            chrome,
            placeholder: None,
        }
    }

    /// Set placeholder text shown while the input is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn build_line(&self) -> Line<'static> {
        let prompt = Span::styled("> ", Style::default().fg(self.chrome.primary));

        if self.input.is_empty() {
            let mut spans = vec![prompt, Span::raw("█")];
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(
                    format!(" {placeholder}"),
                    Style::default().fg(self.chrome.muted),
                ));
            }
            return Line::from(spans);
        }

        let chars: Vec<char> = self.input.content().chars().collect();
        let cursor = self.input.cursor();

        let mut spans = vec![prompt];
        if cursor < chars.len() {
            let before: String = chars[..cursor].iter().collect();
            let after: String = chars[cursor..].iter().collect();
            spans.push(Span::raw(before));
            spans.push(Span::raw("█"));
            spans.push(Span::raw(after));
        } else {
            spans.push(Span::raw(self.input.content().to_string()));
            spans.push(Span::raw("█"));
        }
        Line::from(spans)
    }
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.chrome.border_focused));

        Paragraph::new(self.build_line())
            .block(block)
            .style(Style::default().fg(self.chrome.text))
            .render(area, buf);
    }
}
