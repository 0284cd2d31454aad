//! Event handling for the milton TUI.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A tick event for UI updates.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that runs in a background task.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                // Poll for events with timeout
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        let event = match evt {
                            CrosstermEvent::Key(key) => Some(Event::Key(key)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            _ => None,
                        };
                        if let Some(e) = event {
                            if tx_clone.send(e).is_err() {
                                break;
                            }
                        }
                    }
                } else {
                    // No event, send tick
                    if tx_clone.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, blocking until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Control action mapped from a key press.
///
/// Plain character keys never become actions; they belong to the text
/// input and are handled before this mapping runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// The reset button. Clears settings, or toggles the basic themes in
    /// the dual-theme variant.
    Reset,
    ThicknessUp,
    ThicknessDown,
    /// Legacy font-size slider (only honored when the variant enables it).
    FontSizeUp,
    FontSizeDown,
    /// Step the color picker to the next swatch color.
    CycleColor,
    /// Theme swatch button by position.
    SelectSwatch(usize),
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('h') => Action::Help,
            KeyCode::Char('r') => Action::Reset,
            KeyCode::Char('o') => Action::CycleColor,
            KeyCode::Up => Action::ThicknessUp,
            KeyCode::Down => Action::ThicknessDown,
            KeyCode::Right => Action::FontSizeUp,
            KeyCode::Left => Action::FontSizeDown,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::F(n) if n >= 1 => Action::SelectSwatch(usize::from(n) - 1),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits() {
        let action = key_to_action(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::Quit);
    }

    #[test]
    fn test_plain_chars_are_not_actions() {
        let action = key_to_action(key(KeyCode::Char('r'), KeyModifiers::NONE));
        assert_eq!(action, Action::None);
    }

    #[test]
    fn test_ctrl_arrows_step_thickness() {
        assert_eq!(
            key_to_action(key(KeyCode::Up, KeyModifiers::CONTROL)),
            Action::ThicknessUp
        );
        assert_eq!(
            key_to_action(key(KeyCode::Down, KeyModifiers::CONTROL)),
            Action::ThicknessDown
        );
    }

    #[test]
    fn test_function_keys_select_swatches() {
        assert_eq!(
            key_to_action(key(KeyCode::F(1), KeyModifiers::NONE)),
            Action::SelectSwatch(0)
        );
        assert_eq!(
            key_to_action(key(KeyCode::F(8), KeyModifiers::NONE)),
            Action::SelectSwatch(7)
        );
    }
}
