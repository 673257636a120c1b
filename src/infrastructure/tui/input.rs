use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::primitive::Digit;
use crate::interface_adapter::controller::timer_controller::AppAction;

/// Represents the current mode of the input handler state machine.
///
/// - `Normal`: keys map to timer commands.
/// - `HelpView`: the help overlay is open; the next key closes it and is
///   otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    HelpView,
}

/// Converts crossterm `KeyEvent`s into `AppAction`s.
pub struct InputHandler {
    mode: InputMode,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Normal,
        }
    }

    /// Read-only accessor for the current input mode.
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Translate a `KeyEvent` into an optional `AppAction`.
    ///
    /// Returns `None` for keys with no binding.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<AppAction> {
        match self.mode {
            InputMode::Normal => self.handle_normal(key),
            InputMode::HelpView => {
                self.mode = InputMode::Normal;
                Some(AppAction::CloseHelp)
            }
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) -> Option<AppAction> {
        // Raw mode swallows SIGINT, so Ctrl+C has to quit explicitly.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(AppAction::Quit),
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Char(' ') => Some(AppAction::TogglePause),
            KeyCode::Enter => Some(AppAction::SetTime),
            KeyCode::Char(c @ '0'..='9') => Digit::from_char(c).map(AppAction::PushDigit),
            KeyCode::Char('s') => Some(AppAction::SecondsUnit),
            KeyCode::Char('+') | KeyCode::Up => Some(AppAction::AddTime),
            KeyCode::Char('-') | KeyCode::Down => Some(AppAction::SubtractTime),
            KeyCode::Esc => Some(AppAction::Quit),
            KeyCode::F(1) | KeyCode::Char('h') => {
                self.mode = InputMode::HelpView;
                Some(AppAction::ShowHelp)
            }
            _ => None,
        }
    }
}
