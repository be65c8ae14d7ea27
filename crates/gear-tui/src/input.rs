//! Input handling - convert key events to game events
//!
//! Arrow keys and the number pad move, vi keys work as well.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gear_core::action::Direction;
use gear_core::interface::InputEvent;

/// Convert a key event to a top-level game event
pub fn key_to_event(key: KeyEvent) -> InputEvent {
    if key.kind == KeyEventKind::Release {
        return InputEvent::None;
    }
    if key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::ALT) {
        return InputEvent::ToggleFullscreen;
    }
    if let Some(dir) = key_direction(key.code) {
        return InputEvent::Move(dir);
    }

    match key.code {
        KeyCode::Esc => InputEvent::Exit,
        KeyCode::Char('5') | KeyCode::Char('.') => InputEvent::Wait, // 5 : wait a turn
        KeyCode::Char('g') | KeyCode::Char(',') => InputEvent::PickUp,
        KeyCode::Char('i') => InputEvent::OpenInventoryUse,
        KeyCode::Char('d') => InputEvent::OpenInventoryDrop,
        KeyCode::Char('<') | KeyCode::Char('>') => InputEvent::DescendStairs,
        _ => InputEvent::None,
    }
}

/// Direction bound to a key, if any
pub fn key_direction(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('8') | KeyCode::Char('k') => Some(Direction::North),
        KeyCode::Down | KeyCode::Char('2') | KeyCode::Char('j') => Some(Direction::South),
        KeyCode::Left | KeyCode::Char('4') | KeyCode::Char('h') => Some(Direction::West),
        KeyCode::Right | KeyCode::Char('6') | KeyCode::Char('l') => Some(Direction::East),
        KeyCode::Home | KeyCode::Char('7') | KeyCode::Char('y') => Some(Direction::NorthWest),
        KeyCode::PageUp | KeyCode::Char('9') | KeyCode::Char('u') => Some(Direction::NorthEast),
        KeyCode::End | KeyCode::Char('1') | KeyCode::Char('b') => Some(Direction::SouthWest),
        KeyCode::PageDown | KeyCode::Char('3') | KeyCode::Char('n') => Some(Direction::SouthEast),
        _ => None,
    }
}

/// Inventory letter typed by the player
pub fn key_to_letter(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_lowercase() => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(key_to_event(press(KeyCode::Up)), InputEvent::Move(Direction::North));
        assert_eq!(
            key_to_event(press(KeyCode::Char('7'))),
            InputEvent::Move(Direction::NorthWest)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('1'))),
            InputEvent::Move(Direction::SouthWest)
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('n'))),
            InputEvent::Move(Direction::SouthEast)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_to_event(press(KeyCode::Char('5'))), InputEvent::Wait);
        assert_eq!(key_to_event(press(KeyCode::Char('g'))), InputEvent::PickUp);
        assert_eq!(
            key_to_event(press(KeyCode::Char('i'))),
            InputEvent::OpenInventoryUse
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('d'))),
            InputEvent::OpenInventoryDrop
        );
        assert_eq!(
            key_to_event(press(KeyCode::Char('<'))),
            InputEvent::DescendStairs
        );
        assert_eq!(key_to_event(press(KeyCode::Esc)), InputEvent::Exit);
        assert_eq!(key_to_event(press(KeyCode::Char('z'))), InputEvent::None);
    }

    #[test]
    fn test_alt_enter_toggles_fullscreen() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT);
        assert_eq!(key_to_event(key), InputEvent::ToggleFullscreen);
        assert_eq!(key_to_event(press(KeyCode::Enter)), InputEvent::None);
    }

    #[test]
    fn test_releases_are_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_event(key), InputEvent::None);
    }

    #[test]
    fn test_letters() {
        assert_eq!(key_to_letter(press(KeyCode::Char('c'))), Some('c'));
        assert_eq!(key_to_letter(press(KeyCode::Char('C'))), None);
        assert_eq!(key_to_letter(press(KeyCode::Esc)), None);
    }
}
