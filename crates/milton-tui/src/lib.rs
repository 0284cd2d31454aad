//! milton-tui: Terminal UI for the milton text display
//!
//! This crate provides the interactive layer for milton:
//! - The live preview pane and input bar
//! - Theme swatches, status readouts, and key hints
//! - Event loop plumbing and terminal setup/teardown

mod app;
mod event;
#[cfg(test)]
pub mod test_utils;
mod theme;
mod widgets;

pub use app::App;
pub use event::{key_to_action, Action, Event, EventHandler};
pub use milton_engine;
pub use theme::Chrome;
pub use widgets::{
    hints_for_variant, swatch_list, FooterHints, InputBar, InputState, KeyHint, Preview,
    StatusBar, SwatchBar,
};

use crossterm::{
    cursor::Show as ShowCursor,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame, Terminal,
};
use std::io::{self, stdout};
use std::path::Path;

use milton_engine::PLACEHOLDER_TEXT;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop against the settings under
/// `base_dir`, and restores the terminal on exit.
pub async fn run_tui(base_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(base_dir)?;

    // Create event handler (4 Hz tick rate = 250ms)
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if !app.handle_key(key) {
                        app.handle_action(key_to_action(key));
                    }
                }
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Draw the full UI.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    render_app(app, area, buf);
}

/// Render the UI into a buffer (shared by the live loop and tests).
fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    let chrome = Chrome::default();
    let rendered = app.rendered();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(5),    // preview
            Constraint::Length(1), // swatches
            Constraint::Length(3), // input
            Constraint::Length(1), // footer
        ])
        .split(area);

    StatusBar::new(&rendered, &app.style, &chrome).render(chunks[0], buf);
    Preview::new(&rendered, &chrome).render(chunks[1], buf);
    SwatchBar::new(app.config.theme_set, app.style.theme, &chrome).render(chunks[2], buf);
    InputBar::new(&app.input, &chrome)
        .placeholder(PLACEHOLDER_TEXT)
        .render(chunks[3], buf);

    let hints = hints_for_variant(&app.config);
    FooterHints::new(&hints, &app.config, &chrome).render(chunks[4], buf);

    if let Some(message) = &app.notification {
        render_notification(message, &chrome, chunks[1], buf);
    }

    if app.show_help {
        render_help_overlay(&chrome, area, buf);
    }
}

/// Toast in the top-right corner of the preview pane.
fn render_notification(message: &str, chrome: &Chrome, area: Rect, buf: &mut Buffer) {
    let width = u16::try_from(message.chars().count() + 4)
        .unwrap_or(u16::MAX)
        .min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height: 1,
    };
    Paragraph::new(format!(" {message} "))
        .style(Style::default().fg(chrome.base).bg(chrome.warning))
        .render(rect, buf);
}

/// Centered help overlay listing the controls.
fn render_help_overlay(chrome: &Chrome, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from("milton controls"),
        Line::from(""),
        Line::from("type            edit the display text"),
        Line::from("Ctrl+Up/Down    thickness 0.0-5.0"),
        Line::from("Ctrl+Left/Right font size (legacy variant)"),
        Line::from("F1-F8           select theme swatch"),
        Line::from("Ctrl+O          cycle text color"),
        Line::from("Ctrl+R          reset"),
        Line::from("Ctrl+H          toggle this help"),
        Line::from("Esc / Ctrl+C    quit"),
    ];

    let width = 46u16.min(area.width);
    let height = u16::try_from(lines.len() + 2)
        .unwrap_or(u16::MAX)
        .min(area.height);
    let rect = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    Clear.render(rect, buf);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(chrome.border_focused))
        .style(Style::default().bg(chrome.surface));
    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .style(Style::default().fg(chrome.text))
        .render(rect, buf);
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}


#[cfg(test)]
mod render_tests {
    use super::test_utils::*;
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_fresh_app_shows_placeholder_everywhere() {
        let (_temp, app) = create_test_app();
        let screen = render_app_to_string(&app);

        // Preview and input bar both fall back to the placeholder.
        assert!(screen.matches("Start typing").count() >= 2);
        // Status readouts for the default style.
        assert!(screen.contains("40px"));
        assert!(screen.contains("w450"));
        assert!(screen.contains("thickness 0.5"));
    }

    #[test]
    fn test_typed_text_reaches_preview_and_status() {
        let (_temp, mut app) = create_test_app();
        for c in "hey".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let screen = render_app_to_string(&app);
        assert!(screen.contains("hey"));
        assert!(screen.contains("60px"));
    }

    #[test]
    fn test_swatch_names_listed() {
        let (_temp, app) = create_test_app();
        let screen = render_app_to_string(&app);
        assert!(screen.contains("slate"));
        assert!(screen.contains("lime"));
        assert!(screen.contains("[F1]"));
    }

    #[test]
    fn test_help_overlay_renders() {
        let (_temp, mut app) = create_test_app();
        app.handle_action(Action::Help);

        let screen = render_app_to_string(&app);
        assert!(screen.contains("milton controls"));
        assert!(screen.contains("Ctrl+R"));
    }

    #[test]
    fn test_footer_shows_variant_summary() {
        let (_temp, app) = create_test_app();
        let screen = render_app_to_string(&app);
        assert!(screen.contains("compact │ continuous │ wrap off"));
    }

    #[test]
    fn test_notification_renders() {
        let (_temp, mut app) = create_test_app();
        app.handle_action(Action::Reset);

        let screen = render_app_to_string(&app);
        assert!(screen.contains("Settings reset"));
    }
}
