//! Test utilities for milton-tui rendering tests.
//!
//! Helpers for creating apps against temporary settings stores and
//! rendering the UI into plain strings for content assertions.

use ratatui::{buffer::Buffer, layout::Rect};
use tempfile::TempDir;

use crate::App;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test app backed by a temporary settings directory. The
/// directory guard must stay alive for the app's lifetime.
pub fn create_test_app() -> (TempDir, App) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let app = App::new(temp.path()).expect("Failed to create app");
    (temp, app)
}

/// Convert a buffer to a string representation for content assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render the full UI to a string at the default test size.
pub fn render_app_to_string(app: &App) -> String {
    render_app_to_string_sized(app, TEST_WIDTH, TEST_HEIGHT)
}

/// Render the full UI to a string with custom dimensions.
pub fn render_app_to_string_sized(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    crate::render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }

    #[test]
    fn test_create_test_app_defaults() {
        let (_temp, app) = create_test_app();
        assert!(!app.should_quit);
        assert!(app.input.is_empty());
    }
}
