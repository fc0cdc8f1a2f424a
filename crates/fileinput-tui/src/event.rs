//! Event handling for the story TUI.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::InputMode;

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

/// Event handler that polls crossterm on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling is blocking I/O
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        _ => None,
                    }
                } else {
                    Some(Event::Tick)
                };

                if let Some(e) = event {
                    if tx_clone.send(e).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Help,
    /// Press the widget button.
    Press,
    /// Clear the selection.
    Clear,
    /// Leave path entry or close help.
    Back,
    /// Submit the typed path.
    Submit,
    Input(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    None,
}

/// Convert a key event to an action for the current input mode.
pub fn key_to_action(key: KeyEvent, mode: InputMode) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        InputMode::EnteringPath => match key.code {
            KeyCode::Esc => Action::Back,
            KeyCode::Enter => Action::Submit,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Delete => Action::Delete,
            KeyCode::Left => Action::Left,
            KeyCode::Right => Action::Right,
            KeyCode::Home => Action::Home,
            KeyCode::End => Action::End,
            KeyCode::Char(ch) => Action::Input(ch),
            _ => Action::None,
        },
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Char('c') | KeyCode::Delete => Action::Clear,
            KeyCode::Enter | KeyCode::Char(' ') => Action::Press,
            KeyCode::Esc => Action::Back,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        assert_eq!(key_to_action(key(KeyCode::Enter), InputMode::Normal), Action::Press);
        assert_eq!(key_to_action(key(KeyCode::Char(' ')), InputMode::Normal), Action::Press);
        assert_eq!(key_to_action(key(KeyCode::Char('c')), InputMode::Normal), Action::Clear);
        assert_eq!(key_to_action(key(KeyCode::Char('q')), InputMode::Normal), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Char('x')), InputMode::Normal), Action::None);
    }

    #[test]
    fn test_path_mode_captures_text() {
        let mode = InputMode::EnteringPath;
        assert_eq!(key_to_action(key(KeyCode::Char('q')), mode), Action::Input('q'));
        assert_eq!(key_to_action(key(KeyCode::Char('c')), mode), Action::Input('c'));
        assert_eq!(key_to_action(key(KeyCode::Enter), mode), Action::Submit);
        assert_eq!(key_to_action(key(KeyCode::Esc), mode), Action::Back);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c, InputMode::Normal), Action::Quit);
        assert_eq!(key_to_action(ctrl_c, InputMode::EnteringPath), Action::Quit);
    }
}
