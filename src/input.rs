//! Key mapping for the runner screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use lane_runner::runner::Command;

/// Translate a key press into a game command. Unbound keys and key
/// releases map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Jump)
        }
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(Command::ToggleMusic),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(press(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map_key(press(KeyCode::Char('a'))), Some(Command::MoveLeft));
        assert_eq!(map_key(press(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(map_key(press(KeyCode::Char('D'))), Some(Command::MoveRight));
    }

    #[test]
    fn test_jump_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(Command::Jump));
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(Command::Jump));
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(Command::Jump));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(map_key(press(KeyCode::Enter)), Some(Command::Restart));
        assert_eq!(map_key(press(KeyCode::Char('m'))), Some(Command::ToggleMusic));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_unbound_and_release_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), None);
    }
}
