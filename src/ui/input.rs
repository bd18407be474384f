use crate::ui::{message::AppMessage, state::Focus};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, focus: Focus) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        if focus == Focus::Search {
            return match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Down => Some(AppMessage::BlurSearch),
                KeyCode::Backspace => Some(AppMessage::SearchBackspace),
                KeyCode::Char(c) => Some(AppMessage::SearchInput(c)),
                _ => None,
            };
        }

        match (key.code, focus) {
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('m'), _) => Some(AppMessage::ToggleMenu),
            (KeyCode::Char('/'), _) => Some(AppMessage::FocusSearch),
            (KeyCode::Tab, _) => Some(AppMessage::NextLink),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousLink),
            (KeyCode::Left | KeyCode::Char('h'), _) => Some(AppMessage::FocusNav),
            (KeyCode::Right | KeyCode::Char('l'), _) => Some(AppMessage::FocusList),
            (KeyCode::Enter, Focus::Nav) => Some(AppMessage::ActivateLink),
            (KeyCode::Enter, _) => Some(AppMessage::OpenSelected),
            (KeyCode::Down | KeyCode::Char('j'), Focus::Nav) => Some(AppMessage::NextLink),
            (KeyCode::Up | KeyCode::Char('k'), Focus::Nav) => Some(AppMessage::PreviousLink),
            (KeyCode::Down | KeyCode::Char('j'), _) => Some(AppMessage::SelectNext),
            (KeyCode::Up | KeyCode::Char('k'), _) => Some(AppMessage::SelectPrevious),
            (KeyCode::Char('g'), _) => Some(AppMessage::SelectFirst),
            (KeyCode::Char('G'), _) => Some(AppMessage::SelectLast),
            _ => None,
        }
    }
}
