use crate::ui::traits::Action;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Esc, _) => Some(Action::Quit),
            (KeyCode::Char('r'), _) => Some(Action::Refresh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(InputHandler::handle_key(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(InputHandler::handle_key(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn refresh_key() {
        assert_eq!(
            InputHandler::handle_key(press(KeyCode::Char('r'))),
            Some(Action::Refresh)
        );
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(InputHandler::handle_key(press(KeyCode::Char('x'))), None);
    }
}
